use thiserror::Error;

/// Errors produced while building or exporting a QR symbol
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The assembled data stream does not fit the chosen version and error correction level.
    #[error("code length overflow ({needed_bits} > {available_bits} bits)")]
    CapacityOverflow {
        /// Bits needed by mode indicators, length fields and payloads
        needed_bits: usize,
        /// Data capacity of the symbol in bits
        available_bits: usize,
    },

    /// Symbol version outside 1..=40
    #[error("invalid QR version {0}, expected 1..=40")]
    InvalidVersion(u8),

    /// Mask pattern id outside 0..=7
    #[error("invalid mask pattern {0}, expected 0..=7")]
    InvalidMask(u8),

    /// Raster export failure
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// File system failure while exporting
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, EncodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message() {
        let err = EncodeError::CapacityOverflow {
            needed_bits: 160,
            available_bits: 152,
        };
        assert_eq!(err.to_string(), "code length overflow (160 > 152 bits)");
    }
}
