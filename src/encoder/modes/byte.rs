/// Byte mode segment (Mode 0100) for 8-bit data
use crate::encoder::bit_buffer::BitBuffer;
use crate::encoder::text::{TextEncoding, Transcoder};

/// Byte-mode payload. Text is transcoded once, at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteSegment {
    text: Option<String>,
    bytes: Vec<u8>,
}

impl ByteSegment {
    /// Segment for `text` in the default encoding (Latin-1)
    pub fn new(text: &str) -> Self {
        Self::with_encoding(text, &TextEncoding::default())
    }

    /// Segment for `text` using any transcoder
    pub fn with_encoding(text: &str, transcoder: &dyn Transcoder) -> Self {
        Self {
            text: Some(text.to_owned()),
            bytes: transcoder.encode(text),
        }
    }

    /// Segment carrying raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { text: None, bytes }
    }

    /// Source text, if the segment was built from a string
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Byte count after transcoding (multi-byte characters count every byte)
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Append every byte as 8 bits, MSB first
    pub fn write(&self, buffer: &mut BitBuffer) {
        for &b in &self.bytes {
            buffer.put(b as u32, 8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_write() {
        let seg = ByteSegment::new("HI");
        let mut buffer = BitBuffer::new();
        seg.write(&mut buffer);
        assert_eq!(buffer.len_bits(), 16);
        assert_eq!(buffer.as_bytes(), b"HI");
        assert_eq!(seg.text(), Some("HI"));
    }

    #[test]
    fn test_length_counts_bytes() {
        assert_eq!(ByteSegment::with_encoding("日本", &TextEncoding::Utf8).len(), 6);
        assert_eq!(ByteSegment::new("日本").len(), 2);
        assert_eq!(ByteSegment::from_bytes(vec![0, 255, 7]).len(), 3);
        assert!(ByteSegment::from_bytes(Vec::new()).is_empty());
    }
}
