//! QR code encoding modules
//!
//! Everything between a list of data segments and a finished module matrix:
//! - Bit packing and segment encoding (byte mode)
//! - Error correction (Reed-Solomon over GF(256), BCH for metadata)
//! - Block tables, function-pattern layout and data placement
//! - Mask selection by penalty score

/// BCH codes for format and version info
pub mod bch;
/// MSB-first bit accumulator
pub mod bit_buffer;
mod config;
/// Function module mask and alignment pattern positions
pub mod function_mask;
/// Data modes and segments
pub mod modes;
/// Lost-point scoring rules
pub mod penalty;
/// Symbol encoder that orchestrates the pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction
pub mod reed_solomon;
/// QR specification tables (ECC codewords/blocks)
pub mod tables;
/// String to byte transcoding
pub mod text;
