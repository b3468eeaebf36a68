//! Sample billing data for preview renders
//!
//! A preview answers "what will my invoice look like" before any real
//! billing exists, so the party, item and total values are fixed. Only the
//! date is live.

use chrono::Local;
use template::PlaceholderMap;

/// Item rows for a GST preview: the service line plus the tax line.
const GST_ITEM_ROWS: &str = "<tr>\n      <td><strong>Consulting Services</strong></td>\n      <td class=\"amount\">₹ 1,00,000.00</td>\n    </tr>\n    <tr>\n      <td><strong>GST @ 18%</strong></td>\n      <td class=\"amount\">₹ 18,000.00</td>\n    </tr>";

/// Item rows for a GST-free preview.
const BASE_ITEM_ROWS: &str = "<tr>\n      <td><strong>Consulting Services</strong></td>\n      <td class=\"amount\">₹ 1,00,000.00</td>\n    </tr>";

/// Billing placeholder values for a preview render.
///
/// Totals come in a GST and a GST-free variant; the invoice date is today
/// formatted `%d-%b-%Y`.
pub fn sample_billing(gst: bool) -> PlaceholderMap {
    let mut values = PlaceholderMap::new();
    values.insert("INVOICE_NUMBER", "2025/11/001");
    values.insert("DATE", Local::now().format("%d-%b-%Y").to_string());
    values.insert("PARTY_NAME", "Sample Client Pvt Ltd");
    values.insert(
        "PARTY_ADDRESS_HTML",
        "Building No. 123, Sample Street<br>Sample Area, Sample City<br>State - 400001",
    );
    values.insert("PARTY_PAN", "ABCDE1234F");
    values.insert("TOTAL_BASE_DISPLAY", "1,00,000.00");
    if gst {
        values.insert("PARTY_GST", "27ABCDE1234F1Z5");
        values.insert("ITEM_ROWS", GST_ITEM_ROWS);
        values.insert("GST_DISPLAY", "18,000.00");
        values.insert("TOTAL_DISPLAY", "1,18,000.00");
        values.insert("AMOUNT_WORDS", "One Lakh Eighteen Thousand Rupees Only");
    } else {
        values.insert("ITEM_ROWS", BASE_ITEM_ROWS);
        values.insert("GST_DISPLAY", "0.00");
        values.insert("TOTAL_DISPLAY", "1,00,000.00");
        values.insert("AMOUNT_WORDS", "One Lakh Rupees Only");
    }
    values
}
