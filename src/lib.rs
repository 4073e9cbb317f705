//! RustQRGen - QR code (Model 2) symbol encoder
//!
//! Turns byte-mode data segments into a finished module matrix: Reed-Solomon
//! error correction over GF(256), codeword interleaving, function-pattern
//! layout and penalty-driven mask selection for versions 1-40 at every error
//! correction level.
//!
//! ```
//! use rust_qrgen::{encode_text, EncodeOptions, ECLevel};
//!
//! let qr = encode_text("HELLO WORLD", &EncodeOptions::new().ec_level(ECLevel::Q)).unwrap();
//! assert_eq!(qr.module_count(), 21);
//! assert!(qr.is_dark(0, 0));
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding modules (segments, error correction, layout, masking)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (Version, ECLevel, MaskPattern, ModuleMatrix)
pub mod models;
/// Raster, SVG and terminal output
pub mod render;

pub use encoder::modes::{ByteSegment, Mode, Segment};
pub use encoder::qr_encoder::QrEncoder;
pub use encoder::text::{TextEncoding, Transcoder};
pub use error::{EncodeError, Result};
pub use models::{ECLevel, MaskPattern, Module, ModuleGrid, ModuleMatrix, Version};

/// Options for [`encode_text`] and [`encode_bytes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Error correction level (default M)
    pub ec_level: ECLevel,
    /// Fixed version, or the smallest that fits when `None`
    pub version: Option<Version>,
    /// Fixed mask, or penalty-driven selection when `None`
    pub mask: Option<MaskPattern>,
    /// Text encoding for [`encode_text`] (default Latin-1)
    pub encoding: TextEncoding,
}

impl EncodeOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error correction level
    pub fn ec_level(mut self, ec_level: ECLevel) -> Self {
        self.ec_level = ec_level;
        self
    }

    /// Pin the symbol version
    pub fn version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }

    /// Force a mask pattern
    pub fn mask(mut self, mask: MaskPattern) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Set the text encoding
    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            ec_level: ECLevel::M,
            version: None,
            mask: None,
            encoding: TextEncoding::default(),
        }
    }
}

/// Encode text as a single byte-mode segment and build the symbol
pub fn encode_text(text: &str, options: &EncodeOptions) -> Result<QrEncoder> {
    encode_segment(ByteSegment::with_encoding(text, &options.encoding).into(), options)
}

/// Encode raw bytes as a single byte-mode segment and build the symbol
pub fn encode_bytes(bytes: &[u8], options: &EncodeOptions) -> Result<QrEncoder> {
    encode_segment(ByteSegment::from_bytes(bytes.to_vec()).into(), options)
}

/// Build a symbol from pre-assembled segments
pub fn encode_segments(segments: Vec<Segment>, options: &EncodeOptions) -> Result<QrEncoder> {
    let version = match options.version {
        Some(version) => version,
        None => Version::smallest_fitting(options.ec_level, &segments)?,
    };

    let mut qr = QrEncoder::new(version, options.ec_level);
    for segment in segments {
        qr.add_segment(segment);
    }
    match options.mask {
        Some(mask) => qr.build_with_mask(mask)?,
        None => qr.build()?,
    }
    Ok(qr)
}

fn encode_segment(segment: Segment, options: &EncodeOptions) -> Result<QrEncoder> {
    encode_segments(vec![segment], options)
}
