//! Fee invoices and payments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::schema::{DefaultValue, Entity, FieldKind, FieldSpec, Schema, patch_of};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Unpaid,
    Partial,
    Paid,
}

impl InvoiceStatus {
    pub const VALUES: &'static [&'static str] = &["unpaid", "partial", "paid"];
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct FeeInvoice {
    pub student_id: String,
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub status: InvoiceStatus,
}

impl Schema for FeeInvoice {
    const NAME: &'static str = "FeeInvoice";
    const COLLECTION: &'static str = "feeinvoice";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("student_id", FieldKind::String),
        FieldSpec::required("invoice_number", FieldKind::String),
        FieldSpec::required("issue_date", FieldKind::Date),
        FieldSpec::required("due_date", FieldKind::Date),
        FieldSpec::optional("description", FieldKind::String),
        FieldSpec::required("amount", FieldKind::Float),
        FieldSpec::defaulted(
            "status",
            FieldKind::Enum {
                values: InvoiceStatus::VALUES,
            },
            DefaultValue::Str("unpaid"),
        ),
    ];
}

impl Entity for FeeInvoice {
    const RESOURCE: &'static str = "invoices";
    const SEARCH_FIELDS: &'static [&'static str] = &["invoice_number", "student_id", "status"];
    type Patch = FeeInvoicePatch;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct FeeInvoicePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
}

patch_of!(FeeInvoicePatch => FeeInvoice);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Bank,
    Online,
}

impl PaymentMethod {
    pub const VALUES: &'static [&'static str] = &["cash", "card", "bank", "online"];
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Payment {
    pub student_id: String,
    pub invoice_id: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub method: PaymentMethod,
    /// Transaction reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Schema for Payment {
    const NAME: &'static str = "Payment";
    const COLLECTION: &'static str = "payment";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("student_id", FieldKind::String),
        FieldSpec::required("invoice_id", FieldKind::String),
        FieldSpec::required("amount", FieldKind::Float),
        FieldSpec::required("date", FieldKind::Date),
        FieldSpec::required(
            "method",
            FieldKind::Enum {
                values: PaymentMethod::VALUES,
            },
        ),
        FieldSpec::optional("reference", FieldKind::String).describe("Transaction reference"),
    ];
}
