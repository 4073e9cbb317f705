//! BCH codes for QR code format and version info
//!
//! Format info is 15 bits (5 data + 10 ECC), version info is 18 bits (6 data + 12 ECC).

/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const G15: u32 = 0x537;
/// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const G18: u32 = 0x1F25;
/// Applied to format info so it is never all zero
const G15_MASK: u32 = 0x5412;

fn bch_digit(mut data: u32) -> u32 {
    let mut digit = 0;
    while data != 0 {
        digit += 1;
        data >>= 1;
    }
    digit
}

/// Remainder of `data << (deg(generator))` divided by `generator`, appended to `data`
fn bch_encode(data: u32, generator: u32) -> u32 {
    let shift = bch_digit(generator) - 1;
    let mut d = data << shift;
    while bch_digit(d) >= bch_digit(generator) {
        d ^= generator << (bch_digit(d) - bch_digit(generator));
    }
    (data << shift) | d
}

/// BCH encoder for the two metadata fields
pub struct BchEncoder;

impl BchEncoder {
    /// 15-bit format info for 5 data bits (EC level << 3 | mask), masked with 0x5412
    pub fn type_info(data: u8) -> u16 {
        (bch_encode(data as u32 & 0x1F, G15) ^ G15_MASK) as u16
    }

    /// 18-bit version info for versions 7 and up
    pub fn type_number(version: u8) -> u32 {
        bch_encode(version as u32 & 0x3F, G18)
    }

    /// True when a received format word (after unmasking) is a valid codeword
    pub fn check_type_info(bits: u16) -> bool {
        Self::remainder(bits as u32 ^ G15_MASK, G15) == 0
    }

    /// True when an 18-bit version word is a valid codeword
    pub fn check_type_number(bits: u32) -> bool {
        Self::remainder(bits, G18) == 0
    }

    fn remainder(mut d: u32, generator: u32) -> u32 {
        while bch_digit(d) >= bch_digit(generator) {
            d ^= generator << (bch_digit(d) - bch_digit(generator));
        }
        d
    }
}
