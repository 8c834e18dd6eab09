//! Domain Entities
//!
//! The coupon and its fixed 8-byte text layout `MONYY-DD`.

use crate::domain::value_objects::{Discount, Month, Validity};

/// Length of the plain coupon layout
pub const LAYOUT_LEN: usize = 8;

/// A discount valid through the end of one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coupon {
    pub validity: Validity,
    pub discount: Discount,
}

impl Coupon {
    pub fn new(validity: Validity, discount: Discount) -> Self {
        Self { validity, discount }
    }

    /// `MON` + two-digit year + `-` + two-digit discount, e.g. `JAN80-20`
    pub fn layout(&self) -> [u8; LAYOUT_LEN] {
        let month = self.validity.month().abbreviation().as_bytes();
        let year = two_digit(self.validity.year());
        let discount = two_digit(self.discount.percent());
        [
            month[0], month[1], month[2], year[0], year[1], b'-', discount[0], discount[1],
        ]
    }

    /// Inverse of [`Coupon::layout`]
    ///
    /// Rejects anything that is not exactly three upper-case letters naming a
    /// month, two digits, a dash and two digits forming a discount of 1 to 99.
    pub fn parse_layout(bytes: &[u8]) -> Option<Self> {
        let bytes: &[u8; LAYOUT_LEN] = bytes.try_into().ok()?;
        let [m0, m1, m2, y0, y1, dash, d0, d1] = *bytes;

        if dash != b'-' || ![m0, m1, m2].iter().all(u8::is_ascii_uppercase) {
            return None;
        }

        let month = std::str::from_utf8(&bytes[..3])
            .ok()
            .and_then(Month::from_abbreviation)?;
        let validity = Validity::new(month, parse_two_digit(y0, y1)?)?;
        let discount = Discount::new(parse_two_digit(d0, d1)?)?;

        Some(Self::new(validity, discount))
    }
}

fn two_digit(value: u8) -> [u8; 2] {
    [b'0' + value / 10 % 10, b'0' + value % 10]
}

fn parse_two_digit(tens: u8, ones: u8) -> Option<u8> {
    if tens.is_ascii_digit() && ones.is_ascii_digit() {
        Some((tens - b'0') * 10 + (ones - b'0'))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(month: Month, year: u8, discount: u8) -> Coupon {
        Coupon::new(
            Validity::new(month, year).unwrap(),
            Discount::new(discount).unwrap(),
        )
    }

    #[test]
    fn test_layout_pads_with_zeros() {
        assert_eq!(&coupon(Month::Jan, 80, 20).layout(), b"JAN80-20");
        assert_eq!(&coupon(Month::Oct, 26, 5).layout(), b"OCT26-05");
        assert_eq!(&coupon(Month::Jun, 0, 99).layout(), b"JUN00-99");
    }

    #[test]
    fn test_parse_layout() {
        assert_eq!(
            Coupon::parse_layout(b"SEP14-50"),
            Some(coupon(Month::Sep, 14, 50))
        );
        assert_eq!(
            Coupon::parse_layout(b"OCT26-05"),
            Some(coupon(Month::Oct, 26, 5))
        );
    }

    #[test]
    fn test_parse_layout_rejects_malformed() {
        for layout in [
            &b"XXX00-10"[..],
            b"Test",
            b"DEC18-999",
            b"DEC18-1",
            b"DEC2018-10",
            b"dec18-10",
            b"DEC18+10",
            b"DEC1a-10",
            b"DEC18-00",
            b"",
        ] {
            assert_eq!(Coupon::parse_layout(layout), None, "{layout:?}");
        }
    }
}
