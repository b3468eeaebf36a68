//! Invoicegen - turns company and billing data into rendered HTML invoices
//!
//! This crate provides:
//! - Company data with validation and placeholder derivation
//! - Skeleton storage behind a small collaborator trait, with an embedded
//!   default skeleton
//! - Preview rendering against fixed sample party data
//! - The [`InvoiceGenerator`] facade over the template engine
//!
//! # Example
//!
//! ```
//! use invoicegen::{BankDetails, CompanyData, InvoiceFlags, InvoiceGenerator, InvoiceRequest};
//!
//! let company = CompanyData {
//!     name: "Acme Services Pvt Ltd".into(),
//!     address: "Plot 12, MIDC Industrial Area, Pune".into(),
//!     udyam: "UDYAM-MH-01-0012345".into(),
//!     gst: "27aaaca1234a1z5".into(),
//!     contact: "+91 98765 43210".into(),
//!     pan: "aaaca1234a".into(),
//!     bank: BankDetails {
//!         account_holder: "Acme Services Pvt Ltd".into(),
//!         bank_name: "HDFC Bank".into(),
//!         account_number: "50200012345678".into(),
//!         ifsc: "HDFC0001234".into(),
//!     },
//! };
//!
//! let request = InvoiceRequest {
//!     company,
//!     flags: InvoiceFlags { gst: true, ..Default::default() },
//!     ..Default::default()
//! };
//!
//! let generator = InvoiceGenerator::embedded().unwrap();
//! let html = generator.preview(&request).unwrap();
//! assert!(html.contains("27AAACA1234A1Z5"));
//! assert!(!html.contains("{{"));
//! ```

mod company;
mod generator;
mod logo;
mod preview;
mod skeleton;
mod validation;

pub use company::{BankDetails, CompanyData, InvoiceFlags};
pub use generator::{InvoiceGenerator, InvoiceRequest};
pub use logo::logo_data_uri;
pub use preview::sample_billing;
pub use skeleton::{EmbeddedSkeleton, FileSkeleton, SkeletonStore, DEFAULT_SKELETON};
pub use validation::ValidationErrors;

use thiserror::Error;

/// Errors that can occur during invoice assembly
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// The skeleton store reported the document missing; nothing was
    /// rendered.
    #[error("Invoice skeleton not found")]
    SkeletonNotFound,

    #[error("Invalid company data: {0}")]
    Invalid(ValidationErrors),

    #[error(transparent)]
    Template(#[from] template::TemplateError),
}

/// Result type for invoice assembly
pub type Result<T> = std::result::Result<T, InvoiceError>;
