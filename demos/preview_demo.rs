//! Preview Demo - Renders the sample-party previews
//!
//! This example shows:
//! - Preview rendering with fixed sample billing data
//! - The GST and GST-free preview variants
//! - Optional accent theming from the command line
//!
//! Run with: cargo run --example preview_demo -p invoicegen [accent-color]

use invoicegen::{BankDetails, CompanyData, InvoiceFlags, InvoiceGenerator, InvoiceRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let accent = std::env::args().nth(1);
    if let Some(color) = &accent {
        println!("using accent color {color}");
    }

    std::fs::create_dir_all("output")?;

    let company = CompanyData {
        name: "Acme Services Pvt Ltd".into(),
        address: "Plot 12, MIDC Industrial Area, Pune".into(),
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

    let generator = InvoiceGenerator::embedded()?;

    for gst in [true, false] {
        let request = InvoiceRequest {
            company: company.clone(),
            flags: InvoiceFlags {
                gst,
                ..Default::default()
            },
            accent: accent.clone(),
            ..Default::default()
        };
        let html = generator.preview(&request)?;
        let name = if gst {
            "output/preview_gst.html"
        } else {
            "output/preview_basic.html"
        };
        std::fs::write(name, &html)?;
        println!("wrote {name} ({} bytes)", html.len());
    }

    Ok(())
}
