//! Configuration structures for controlling how much fake data is generated.

/// How many documents of each kind to insert.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub teachers: usize,
    pub classes: usize,
    pub students: usize,
    /// Invoices generated per seeded student
    pub invoices_per_student: usize,
    /// Academic year stamped on classes, admission and invoice numbers
    pub year: i32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            teachers: 5,
            classes: 4,
            students: 40,
            invoices_per_student: 1,
            year: 2025,
        }
    }
}

/// Counts of inserted documents per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub teachers: usize,
    pub classes: usize,
    pub students: usize,
    pub invoices: usize,
}

impl SeedSummary {
    pub fn total(&self) -> usize {
        self.teachers + self.classes + self.students + self.invoices
    }
}
