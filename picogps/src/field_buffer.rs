// SPDX-License-Identifier: Apache-2.0

/// Error type for FieldBuffer operations.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// The field already holds as many bytes as it can.
    Full,
}

/// Accumulates the bytes of the field currently being assembled, together
/// with the running XOR parity of the sentence.
///
/// One of the `C` slots stands for the terminator of the field, so at most
/// `C - 1` bytes are stored. Anything past that is refused and the stored
/// bytes stay untouched.
#[derive(Debug)]
pub struct FieldBuffer<const C: usize> {
    data: [u8; C],
    offset: usize,
    parity: u8,
}

impl<const C: usize> FieldBuffer<C> {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self {
            data: [0; C],
            offset: 0,
            parity: 0,
        }
    }

    /// Number of data bytes the field can hold.
    pub const fn capacity(&self) -> usize {
        C.saturating_sub(1)
    }

    /// Appends one byte to the field.
    pub fn push(&mut self, byte: u8) -> Result<(), Error> {
        if self.offset >= self.capacity() {
            return Err(Error::Full);
        }
        let slot = self.data.get_mut(self.offset).ok_or(Error::Full)?;
        *slot = byte;
        self.offset += 1;
        Ok(())
    }

    /// The bytes of the current field.
    pub fn as_bytes(&self) -> &[u8] {
        self.data.get(..self.offset).unwrap_or(&[])
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Empties the field, keeping the parity.
    pub fn clear_field(&mut self) {
        self.offset = 0;
    }

    /// Folds one byte into the sentence parity.
    pub fn fold_parity(&mut self, byte: u8) {
        self.parity ^= byte;
    }

    pub fn parity(&self) -> u8 {
        self.parity
    }

    /// Empties the field and zeroes the parity, ready for a new sentence.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.parity = 0;
    }
}

impl<const C: usize> Default for FieldBuffer<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut buffer = FieldBuffer::<4>::new();
        assert_eq!(buffer.capacity(), 3);
        assert_eq!(buffer.push(b'a'), Ok(()));
        assert_eq!(buffer.push(b'b'), Ok(()));
        assert_eq!(buffer.push(b'c'), Ok(()));
        assert_eq!(buffer.push(b'd'), Err(Error::Full));
        assert_eq!(buffer.as_bytes(), b"abc");
        assert_eq!(buffer.offset(), 3);
    }

    #[test]
    fn test_clear_field_keeps_parity() {
        let mut buffer = FieldBuffer::<16>::new();
        for &byte in b"GP" {
            buffer.push(byte).unwrap();
            buffer.fold_parity(byte);
        }
        buffer.clear_field();
        assert_eq!(buffer.as_bytes(), b"");
        assert_eq!(buffer.parity(), b'G' ^ b'P');

        buffer.reset();
        assert_eq!(buffer.parity(), 0);
    }
}
