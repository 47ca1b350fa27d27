/// Number of boolean slots packed into one storage unit.
pub const UNIT_BITS: usize = u8::BITS as usize;

/// One byte of packed booleans.
///
/// Treats the most significant bit as position 0, so the byte `0b1000_0000`
/// holds `true` at position 0 and `false` everywhere else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StorageUnit(pub u8);

impl StorageUnit {
    pub const BITS: usize = UNIT_BITS;

    /// Index of the storage unit holding logical `index`.
    pub fn unit_index(index: usize) -> usize {
        index / Self::BITS
    }

    /// Bit offset of logical `index` within its unit, counted from the low end
    /// of the byte. Index 0 maps to 7, index 7 maps to 0.
    pub fn bit_position(index: usize) -> usize {
        Self::BITS - index % Self::BITS - 1
    }

    pub fn mask(bit_position: usize) -> u8 {
        debug_assert!(bit_position < Self::BITS);
        1 << bit_position
    }

    pub fn get_bit(&self, bit_position: usize) -> bool {
        self.0 & Self::mask(bit_position) != 0
    }

    pub fn set_bit(&mut self, bit_position: usize, value: bool) {
        let mask = Self::mask(bit_position);
        if value {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }
}
