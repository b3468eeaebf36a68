//! Bank-details block formatting

use crate::LINE_BREAK;

/// Format bank details into the labeled four-line footer block.
///
/// Lines appear in a fixed order: account holder, bank name, account number,
/// IFSC code.
///
/// ```
/// use invoice_text::bank_block;
///
/// let block = bank_block("Acme Pvt Ltd", "HDFC Bank", "50200012345678", "HDFC0001234");
/// assert_eq!(
///     block,
///     "A/c Holder: Acme Pvt Ltd<br>Bank: HDFC Bank<br>A/c No.: 50200012345678<br>IFSC: HDFC0001234"
/// );
/// ```
pub fn bank_block(account_holder: &str, bank_name: &str, account_number: &str, ifsc: &str) -> String {
    [
        format!("A/c Holder: {account_holder}"),
        format!("Bank: {bank_name}"),
        format!("A/c No.: {account_number}"),
        format!("IFSC: {ifsc}"),
    ]
    .join(LINE_BREAK)
}
