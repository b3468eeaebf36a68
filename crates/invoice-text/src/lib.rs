//! Invoice Text - display-text shaping for invoice rendering
//!
//! This crate provides:
//! - Address reflow into exactly three display lines
//! - Bank-details block formatting
//! - The shared `<br>` line-break marker
//!
//! # Example
//!
//! ```
//! use invoice_text::{bank_block, reflow, LINE_BREAK};
//!
//! // A delimited address maps one part per line
//! let address = reflow("221-B Baker Street, Marylebone, London");
//! assert_eq!(address, "221-B Baker Street<br>Marylebone<br>London");
//!
//! // The result always splits into exactly three lines
//! assert_eq!(address.split(LINE_BREAK).count(), 3);
//!
//! // Bank details become a labeled four-line block
//! let bank = bank_block("Acme Pvt Ltd", "HDFC Bank", "50200012345678", "HDFC0001234");
//! assert!(bank.starts_with("A/c Holder: Acme Pvt Ltd"));
//! ```

mod bank;
mod reflow;

pub use bank::bank_block;
pub use reflow::{reflow, reflow_lines};

/// Line-break marker separating display lines.
pub const LINE_BREAK: &str = "<br>";
