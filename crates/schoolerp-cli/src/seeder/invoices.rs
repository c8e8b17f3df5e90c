use chrono::{Days, NaiveDate};
use fake::Fake;
use schoolerp_models::finance::{FeeInvoice, InvoiceStatus};

const TERM_DAYS: u64 = 120;
const PAYMENT_WINDOW_DAYS: u64 = 30;

/// `per_student` term invoices for every student, numbered sequentially.
pub fn generate_invoices(student_ids: &[String], per_student: usize, year: i32) -> Vec<FeeInvoice> {
    let first_term = NaiveDate::from_ymd_opt(year, 1, 10).unwrap_or(NaiveDate::MIN);

    student_ids
        .iter()
        .flat_map(|student_id| (0..per_student).map(move |term| (student_id, term)))
        .enumerate()
        .map(|(idx, (student_id, term))| {
            let issue_date = first_term + Days::new(TERM_DAYS * term as u64);
            let amount: f64 = (250.0f64..2500.0).fake();

            FeeInvoice {
                student_id: student_id.clone(),
                invoice_number: format!("INV-{}-{:05}", year, idx + 1),
                issue_date,
                due_date: issue_date + Days::new(PAYMENT_WINDOW_DAYS),
                description: Some(format!("Term {} tuition", term + 1)),
                amount: (amount * 100.0).round() / 100.0,
                status: InvoiceStatus::Unpaid,
            }
        })
        .collect()
}
