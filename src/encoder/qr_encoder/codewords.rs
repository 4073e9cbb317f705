//! Codeword assembly: segments -> padded data codewords -> per-block EC -> interleaved stream

use tracing::trace;

use crate::encoder::bit_buffer::BitBuffer;
use crate::encoder::modes::Segment;
use crate::encoder::reed_solomon::ec_codewords;
use crate::encoder::tables::{RsBlock, rs_blocks};
use crate::error::{EncodeError, Result};
use crate::models::{ECLevel, Version};

/// First pad codeword
pub const PAD0: u8 = 0xEC;
/// Second pad codeword
pub const PAD1: u8 = 0x11;

/// Bits the segments occupy at `version` (mode indicators, length fields, payloads)
pub fn data_bits(version: Version, segments: &[Segment]) -> usize {
    segments.iter().map(|s| s.encoded_bits(version)).sum()
}

/// Final interleaved codeword sequence (data then EC) for the segments
pub fn create_data(version: Version, ec_level: ECLevel, segments: &[Segment]) -> Result<Vec<u8>> {
    let blocks = rs_blocks(version, ec_level);

    let mut buffer = BitBuffer::new();
    for segment in segments {
        segment.append_to(&mut buffer, version);
    }

    let total_data_count: usize = blocks.iter().map(|b| b.data_count).sum();
    trace!(
        bits = buffer.len_bits(),
        capacity_bits = total_data_count * 8,
        blocks = blocks.len(),
        "assembled data segments"
    );

    let data = pad_data(buffer, total_data_count)?;
    Ok(interleave(&data, &blocks))
}

/// Terminate and pad a bit stream to exactly `total_data_count` bytes
pub fn pad_data(mut buffer: BitBuffer, total_data_count: usize) -> Result<Vec<u8>> {
    let capacity = total_data_count * 8;
    if buffer.len_bits() > capacity {
        return Err(EncodeError::CapacityOverflow {
            needed_bits: buffer.len_bits(),
            available_bits: capacity,
        });
    }

    // terminator
    if buffer.len_bits() + 4 <= capacity {
        buffer.put(0, 4);
    }

    while buffer.len_bits() % 8 != 0 {
        buffer.put_bit(false);
    }

    let mut pads = [PAD0, PAD1].into_iter().cycle();
    while buffer.len_bits() < capacity {
        if let Some(pad) = pads.next() {
            buffer.put(pad as u32, 8);
        }
    }

    Ok(buffer.as_bytes().to_vec())
}

/// Split data across blocks, compute each block's EC codewords and interleave
/// column-wise: data bytes first, then EC bytes.
pub fn interleave(data: &[u8], blocks: &[RsBlock]) -> Vec<u8> {
    let mut offset = 0;
    let mut dc_data: Vec<&[u8]> = Vec::with_capacity(blocks.len());
    let mut ec_data: Vec<Vec<u8>> = Vec::with_capacity(blocks.len());

    for block in blocks {
        let end = (offset + block.data_count).min(data.len());
        let dc = &data[offset.min(end)..end];
        offset += block.data_count;
        ec_data.push(ec_codewords(dc, block.ec_count()));
        dc_data.push(dc);
    }

    let max_dc = dc_data.iter().map(|d| d.len()).max().unwrap_or(0);
    let max_ec = ec_data.iter().map(|e| e.len()).max().unwrap_or(0);
    let total: usize = blocks.iter().map(|b| b.total_count).sum();

    let mut out = Vec::with_capacity(total);
    for i in 0..max_dc {
        out.extend(dc_data.iter().filter_map(|dc| dc.get(i)));
    }
    for i in 0..max_ec {
        out.extend(ec_data.iter().filter_map(|ec| ec.get(i)));
    }
    out
}
