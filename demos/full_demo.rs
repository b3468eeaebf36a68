//! Full Demo - Demonstrates the invoicegen rendering pipeline
//!
//! This example shows:
//! - Company data assembly with address reflow and bank block
//! - Conditional content via the GST, HSN and international flags
//! - Per-invoice billing values
//! - Accent theming
//!
//! Run with: cargo run --example full_demo -p invoicegen

use invoicegen::{BankDetails, CompanyData, InvoiceFlags, InvoiceGenerator, InvoiceRequest};
use template::PlaceholderMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Create output directory
    std::fs::create_dir_all("output")?;

    let company = CompanyData {
        name: "Acme Services Pvt Ltd".into(),
        address: "Plot 12, MIDC Industrial Area, Pune, Maharashtra - 411019".into(),
        udyam: "UDYAM-MH-01-0012345".into(),
        gst: "27aaaca1234a1z5".into(),
        contact: "+91 98765 43210".into(),
        pan: "aaaca1234a".into(),
        bank: BankDetails {
            account_holder: "Acme Services Pvt Ltd".into(),
            bank_name: "HDFC Bank".into(),
            account_number: "50200012345678".into(),
            ifsc: "HDFC0001234".into(),
        },
    };

    let billing = PlaceholderMap::from_iter([
        ("INVOICE_NUMBER", "2026/08/042"),
        ("DATE", "25-Aug-2026"),
        ("PARTY_NAME", "Globex Traders LLP"),
        (
            "PARTY_ADDRESS_HTML",
            "14 Residency Road<br>Bengaluru<br>Karnataka - 560025",
        ),
        ("PARTY_PAN", "AAACG5678B"),
        ("PARTY_GST", "29AAACG5678B1Z9"),
        (
            "ITEM_ROWS",
            "<tr><td>Platform maintenance</td><td class=\"amount\">₹ 2,50,000.00</td></tr>",
        ),
        ("TOTAL_BASE_DISPLAY", "2,50,000.00"),
        ("GST_DISPLAY", "45,000.00"),
        ("TOTAL_DISPLAY", "2,95,000.00"),
        ("AMOUNT_WORDS", "Two Lakh Ninety Five Thousand Rupees Only"),
    ]);

    let generator = InvoiceGenerator::embedded()?;

    // 1. Domestic GST invoice with the default purple accent
    let request = InvoiceRequest {
        company: company.clone(),
        flags: InvoiceFlags {
            gst: true,
            ..Default::default()
        },
        accent: None,
        billing: billing.clone(),
    };
    let html = generator.generate(&request)?;
    std::fs::write("output/invoice_gst.html", &html)?;
    println!("wrote output/invoice_gst.html ({} bytes)", html.len());

    // 2. Export invoice: GST identifiers stay, the 18% row goes
    let request = InvoiceRequest {
        company: company.clone(),
        flags: InvoiceFlags {
            gst: true,
            international: true,
            ..Default::default()
        },
        accent: Some("#1d4ed8".to_string()),
        billing: billing.clone(),
    };
    let html = generator.generate(&request)?;
    std::fs::write("output/invoice_export.html", &html)?;
    println!("wrote output/invoice_export.html ({} bytes)", html.len());

    // 3. GST-free invoice with an HSN column
    let mut base_billing = billing;
    base_billing
        .insert(
            "ITEM_ROWS",
            "<tr><td>Platform maintenance</td><td>998313</td><td class=\"amount\">₹ 2,50,000.00</td></tr>",
        )
        .insert("TOTAL_DISPLAY", "2,50,000.00")
        .insert("AMOUNT_WORDS", "Two Lakh Fifty Thousand Rupees Only");
    let request = InvoiceRequest {
        company,
        flags: InvoiceFlags {
            hsn: true,
            ..Default::default()
        },
        accent: Some("#0f766e".to_string()),
        billing: base_billing,
    };
    let html = generator.generate(&request)?;
    std::fs::write("output/invoice_basic.html", &html)?;
    println!("wrote output/invoice_basic.html ({} bytes)", html.len());

    Ok(())
}
