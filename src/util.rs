//! Text decoding helpers.

use std::borrow::Cow;

use encoding_rs::Encoding;

/// Decode bytes to a string, handling legacy encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. Falls back to Windows-1252, a superset of ISO-8859-1 that covers most
///    hand-edited text files
///
/// Returns the decoded text and the encoding that produced it. Uses `Cow<str>`
/// to avoid allocation when the input is valid UTF-8 without a BOM.
pub fn decode_text(bytes: &[u8]) -> (Cow<'_, str>, &'static Encoding) {
    let (result, encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return (result, encoding);
    }

    let (result, encoding, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    (result, encoding)
}
