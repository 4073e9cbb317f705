//! QR code data modes
//!
//! The standard defines four data modes with their own indicators and
//! character-count widths. Segments can currently only be built in byte mode:
//! - Byte: 8-bit data (Latin-1, UTF-8, binary, etc.)

/// Byte mode segment
pub mod byte;

pub use byte::ByteSegment;

use crate::encoder::bit_buffer::BitBuffer;
use crate::models::Version;

/// Data mode of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Mode 0001
    Numeric,
    /// Mode 0010
    Alphanumeric,
    /// Mode 0100
    Byte,
    /// Mode 1000
    Kanji,
}

impl Mode {
    /// 4-bit mode indicator
    pub fn indicator(&self) -> u32 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
            Mode::Kanji => 0b1000,
        }
    }

    /// Width of the character-count field for versions 1-9, 10-26 and 27-40
    pub fn char_count_bits(&self, version: Version) -> usize {
        let widths: [usize; 3] = match self {
            Mode::Numeric => [10, 12, 14],
            Mode::Alphanumeric => [9, 11, 13],
            Mode::Byte => [8, 16, 16],
            Mode::Kanji => [8, 10, 12],
        };
        match version.number() {
            1..=9 => widths[0],
            10..=26 => widths[1],
            _ => widths[2],
        }
    }
}

/// A typed payload that can be appended to a codeword stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Mode 0100, 8 bits per byte
    Byte(ByteSegment),
}

impl Segment {
    /// Data mode of the payload
    pub fn mode(&self) -> Mode {
        match self {
            Segment::Byte(_) => Mode::Byte,
        }
    }

    /// Value written into the character-count field
    pub fn length(&self) -> usize {
        match self {
            Segment::Byte(seg) => seg.len(),
        }
    }

    /// Width of the character-count field at `version`
    pub fn length_bits(&self, version: Version) -> usize {
        self.mode().char_count_bits(version)
    }

    /// Append the payload bits (without mode indicator or length)
    pub fn write(&self, buffer: &mut BitBuffer) {
        match self {
            Segment::Byte(seg) => seg.write(buffer),
        }
    }

    /// Mode indicator, length field and payload, in bits
    pub fn encoded_bits(&self, version: Version) -> usize {
        let payload = match self {
            Segment::Byte(seg) => seg.len() * 8,
        };
        4 + self.length_bits(version) + payload
    }

    /// Append mode indicator, length field and payload
    pub fn append_to(&self, buffer: &mut BitBuffer, version: Version) {
        buffer.put(self.mode().indicator(), 4);
        // Byte counts beyond the field width cannot fit any symbol; capacity checks reject them
        buffer.put(self.length() as u32, self.length_bits(version));
        self.write(buffer);
    }
}

impl From<ByteSegment> for Segment {
    fn from(seg: ByteSegment) -> Self {
        Segment::Byte(seg)
    }
}

impl From<&str> for Segment {
    fn from(text: &str) -> Self {
        Segment::Byte(ByteSegment::new(text))
    }
}

impl From<String> for Segment {
    fn from(text: String) -> Self {
        Segment::Byte(ByteSegment::new(&text))
    }
}
