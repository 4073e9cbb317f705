/// Append-only bit sequence packed MSB-first into bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    buffer: Vec<u8>,
    length: usize,
}

impl BitBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `length` bits of `num`, most significant first.
    /// Bits of `num` above `length` are ignored.
    pub fn put(&mut self, num: u32, length: usize) {
        debug_assert!(length <= 32);
        for i in (0..length).rev() {
            self.put_bit((num >> i) & 1 == 1);
        }
    }

    /// Append a single bit
    pub fn put_bit(&mut self, bit: bool) {
        if self.length % 8 == 0 {
            self.buffer.push(0);
        }
        if bit {
            if let Some(last) = self.buffer.last_mut() {
                *last |= 0x80 >> (self.length % 8);
            }
        }
        self.length += 1;
    }

    /// Total bits appended (not rounded to a byte boundary)
    pub fn len_bits(&self) -> usize {
        self.length
    }

    /// True when nothing has been appended
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Read back bit `index` (0 = first appended)
    pub fn bit(&self, index: usize) -> bool {
        if index >= self.length {
            return false;
        }
        (self.buffer[index / 8] >> (7 - index % 8)) & 1 == 1
    }

    /// Byte at `index`; a trailing partial byte has its unused low bits cleared
    pub fn byte(&self, index: usize) -> u8 {
        self.buffer.get(index).copied().unwrap_or(0)
    }

    /// Backing bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}
