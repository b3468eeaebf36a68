//! Logo embedding helper

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode raw PNG bytes as a `data:` URI for inline embedding.
///
/// The default skeleton carries no logo placeholder; this feeds custom
/// skeletons that reference one, keeping the rendered document
/// self-contained.
pub fn logo_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}
