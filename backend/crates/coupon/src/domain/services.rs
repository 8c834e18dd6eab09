//! Domain Services
//!
//! z85 transport of the coupon layout: 8 bytes in, 10 characters out.

use platform::z85::{self, CHUNK_BYTES};

use crate::domain::entities::{Coupon, LAYOUT_LEN};

/// Length of an encoded coupon code
pub const CODE_LEN: usize = LAYOUT_LEN / CHUNK_BYTES * z85::CHUNK_CHARS;

/// Encode a coupon into its 10-character code
pub fn encode_coupon(coupon: &Coupon) -> String {
    let layout = coupon.layout();
    let mut code = String::with_capacity(CODE_LEN);
    for chunk in layout.chunks_exact(CHUNK_BYTES) {
        let group = z85::encode_chunk([chunk[0], chunk[1], chunk[2], chunk[3]]);
        code.extend(group.iter().map(|&b| b as char));
    }
    code
}

/// Decode a code back into a coupon, ignoring expiry
///
/// `None` for a wrong length, characters outside the z85 alphabet, groups
/// exceeding 32 bits, or a layout that does not parse.
pub fn decode_coupon(code: &str) -> Option<Coupon> {
    if code.len() != CODE_LEN {
        return None;
    }
    let bytes = z85::decode(code).ok()?;
    Coupon::parse_layout(&bytes)
}
