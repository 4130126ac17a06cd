//! Reversible opaque-identifier codec for URL tokens.
//!
//! Identifiers are embedded in navigable paths as unpadded URL-safe base64.
//! The transform carries no semantic meaning; it only keeps raw identifier
//! content out of path segments. `decode_id(&encode_id(x)) == Ok(x)` holds
//! for every identifier; tokens from any other source may fail to decode
//! and that failure is propagated, never swallowed.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use staffdir_core::{Error, Result};

/// Encode an identifier as a URL-safe token. Total and deterministic.
pub fn encode_id(id: &str) -> String {
  URL_SAFE_NO_PAD.encode(id)
}

/// Decode a token produced by [`encode_id`] back into the identifier.
pub fn decode_id(token: &str) -> Result<String> {
  let bytes = URL_SAFE_NO_PAD
    .decode(token)
    .map_err(|e| Error::InvalidToken(e.to_string()))?;
  String::from_utf8(bytes).map_err(|e| Error::InvalidToken(e.to_string()))
}

#[cfg(test)]
mod tests {
  use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
  use staffdir_core::Error;

  use super::{decode_id, encode_id};

  #[test]
  fn round_trips_arbitrary_identifiers() {
    for id in ["1", "", "emp-0042", "Ærøskøbing/π", "with spaces & symbols?"] {
      assert_eq!(decode_id(&encode_id(id)).unwrap(), id);
    }
  }

  #[test]
  fn tokens_are_path_safe() {
    let token = encode_id("a+b/c=d?e&f");
    assert!(
      token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
  }

  #[test]
  fn garbage_token_fails_to_decode() {
    assert!(matches!(decode_id("%%%"), Err(Error::InvalidToken(_))));
  }

  #[test]
  fn non_utf8_payload_fails_to_decode() {
    // Valid base64, but the decoded bytes are not a UTF-8 string.
    let token = URL_SAFE_NO_PAD.encode([0xff, 0xfe]);
    assert!(matches!(decode_id(&token), Err(Error::InvalidToken(_))));
  }
}
