pub mod classes;
pub mod crud;
pub mod invoices;
pub mod schema;
pub mod students;
pub mod system;
pub mod teachers;
