//! Company data and derived placeholder values

use invoice_text::{bank_block, reflow};
use serde::{Deserialize, Serialize};
use template::{ConditionSet, PlaceholderMap, GST, HAS_HSN, INTERNATIONAL_PARTY};

use crate::validation::{self, ValidationErrors};

/// Bank details printed in the payment block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankDetails {
    pub account_holder: String,
    pub bank_name: String,
    pub account_number: String,
    pub ifsc: String,
}

/// Seller details collected from the caller.
///
/// `address` is the raw free-form value; placeholder derivation reflows it
/// into three display lines. GST and PAN are upper-cased during derivation
/// so the document always shows registration numbers in their official
/// casing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyData {
    pub name: String,
    pub address: String,
    pub udyam: String,
    /// GST registration number; may stay empty for unregistered sellers.
    #[serde(default)]
    pub gst: String,
    pub contact: String,
    pub pan: String,
    pub bank: BankDetails,
}

impl CompanyData {
    /// Derive the company placeholder values.
    pub fn placeholders(&self) -> PlaceholderMap {
        let mut values = PlaceholderMap::new();
        values.insert("COMPANY_NAME", self.name.trim());
        values.insert("COMPANY_ADDRESS_HTML", reflow(&self.address));
        values.insert("COMPANY_UDYAM", self.udyam.trim());
        values.insert("COMPANY_GST", self.gst.trim().to_uppercase());
        values.insert("COMPANY_CONTACT", self.contact.trim());
        values.insert("COMPANY_PAN", self.pan.trim().to_uppercase());
        values.insert(
            "COMPANY_BANK_HTML",
            bank_block(
                self.bank.account_holder.trim(),
                self.bank.bank_name.trim(),
                self.bank.account_number.trim(),
                self.bank.ifsc.trim(),
            ),
        );
        values
    }

    /// Check required fields, collecting every failure.
    ///
    /// The GST number is required only when the GST flag is set; all other
    /// fields are always required.
    pub fn validate(&self, flags: &InvoiceFlags) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validation::require(&self.name, "company name", &mut errors);
        validation::require(&self.address, "company address", &mut errors);
        validation::require(&self.udyam, "UDYAM registration", &mut errors);
        if flags.gst {
            validation::require(&self.gst, "GST number", &mut errors);
        }
        validation::require(&self.contact, "contact number", &mut errors);
        validation::require(&self.pan, "PAN", &mut errors);
        validation::require(&self.bank.account_holder, "account holder", &mut errors);
        validation::require(&self.bank.bank_name, "bank name", &mut errors);
        validation::require(&self.bank.account_number, "account number", &mut errors);
        validation::require(&self.bank.ifsc, "IFSC code", &mut errors);
        errors.into_result()
    }
}

/// Boolean switches controlling conditional invoice content.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InvoiceFlags {
    /// Seller is GST-registered.
    #[serde(default)]
    pub gst: bool,
    /// Item rows carry HSN/SAC codes.
    #[serde(default)]
    pub hsn: bool,
    /// Billed party is outside the country.
    #[serde(default)]
    pub international: bool,
}

impl InvoiceFlags {
    /// Condition set consumed by the template engine.
    pub fn conditions(&self) -> ConditionSet {
        let mut set = ConditionSet::new();
        set.set(GST, self.gst);
        set.set(HAS_HSN, self.hsn);
        set.set(INTERNATIONAL_PARTY, self.international);
        set
    }
}
