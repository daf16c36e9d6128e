//! Pagination cursor synthesis.
//!
//! The source's "opaque" cursor is base64 of `offset:N`, where N is the
//! zero-based index of the last item already seen. Encoding it in closed
//! form lets a worker jump straight to any page instead of walking the
//! cursor chain sequentially.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Encode the cursor that requests the page starting at `offset`.
///
/// `offset == 0` maps to the empty cursor (first page). Otherwise the
/// cursor names the last item of the previous page, i.e. `offset - 1`.
pub fn encode(offset: u64) -> String {
    if offset == 0 {
        return String::new();
    }
    BASE64.encode(format!("offset:{}", offset - 1))
}
