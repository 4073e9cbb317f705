//! String-to-byte transcoding for byte-mode segments.
//!
//! The codec only needs bytes; which encoding produced them is the caller's choice.

use tracing::warn;

/// Converts text into the byte sequence a byte-mode segment carries
pub trait Transcoder {
    /// Bytes for `text` under this encoding
    fn encode(&self, text: &str) -> Vec<u8>;
}

/// Built-in encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// ISO-8859-1, the byte-mode default of the QR standard.
    /// Characters above U+00FF become `?`.
    #[default]
    Latin1,
    /// UTF-8
    Utf8,
}

impl Transcoder for TextEncoding {
    fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Latin1 => {
                let mut replaced = 0usize;
                let bytes = text
                    .chars()
                    .map(|c| match u8::try_from(u32::from(c)) {
                        Ok(b) => b,
                        Err(_) => {
                            replaced += 1;
                            b'?'
                        }
                    })
                    .collect();
                if replaced > 0 {
                    warn!(replaced, "characters outside Latin-1 replaced with '?'");
                }
                bytes
            }
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
        }
    }
}

impl<F> Transcoder for F
where
    F: Fn(&str) -> Vec<u8>,
{
    fn encode(&self, text: &str) -> Vec<u8> {
        self(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin1() {
        assert_eq!(TextEncoding::Latin1.encode("HELLO"), b"HELLO".to_vec());
        assert_eq!(TextEncoding::Latin1.encode("café"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(TextEncoding::Latin1.encode("a€b"), b"a?b".to_vec());
    }

    #[test]
    fn test_utf8() {
        assert_eq!(TextEncoding::Utf8.encode("café"), "café".as_bytes().to_vec());
        assert_eq!(TextEncoding::Utf8.encode("€").len(), 3);
    }

    #[test]
    fn test_closure_transcoder() {
        let upper = |s: &str| s.to_uppercase().into_bytes();
        assert_eq!(upper.encode("abc"), b"ABC".to_vec());
    }
}
