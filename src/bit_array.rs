/*!
 * A fixed-capacity array of booleans packed eight to a byte.
 *
 * Logical index `i` lives in storage unit `i / 8`, at bit `8 - i % 8 - 1`
 * counted from the low end of that byte. Index 0 is therefore the most
 * significant bit of the first byte.
 */

use std::fmt::{Debug, Display};
use std::ops::Index;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::utils::{StorageUnit, UNIT_BITS};

#[derive(Clone, PartialEq, Eq)]
pub struct BitArray {
    /// Maximum number of booleans, fixed for the lifetime of the array.
    capacity: usize,
    /// Always `ceil(capacity / 8)` units long. Padding bits past `capacity`
    /// stay zero.
    storage: Vec<StorageUnit>,
}

impl BitArray {
    /// Allocates zeroed storage for `capacity` booleans. A capacity of zero
    /// allocates no storage units and every access fails.
    pub fn new(capacity: usize) -> Self {
        let num_units = num::integer::div_ceil(capacity, UNIT_BITS);
        debug!(
            "allocating bit array of capacity {} in {} storage units",
            capacity, num_units
        );

        Self {
            capacity,
            storage: vec![StorageUnit::default(); num_units],
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Same as [`BitArray::capacity`].
    pub fn len(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Number of bytes backing the array.
    pub fn storage_len(&self) -> usize {
        self.storage.len()
    }

    pub fn storage_units(&self) -> &[StorageUnit] {
        &self.storage
    }

    /// Copies out the raw storage bytes, most significant bit first.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.storage.iter().map(|unit| unit.0).collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.capacity {
            return Err(Error::out_of_range(index, self.capacity));
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;

        let unit = &self.storage[StorageUnit::unit_index(index)];
        Ok(unit.get_bit(StorageUnit::bit_position(index)))
    }

    /// Writes `value` at `index`. Nothing is modified when `index` is out of
    /// range.
    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_index(index)?;

        let unit_index = StorageUnit::unit_index(index);
        let bit_position = StorageUnit::bit_position(index);
        let unit = &mut self.storage[unit_index];
        unit.set_bit(bit_position, value);
        trace!(
            "set index {} to {} (unit {} now {:#010b})",
            index,
            value,
            unit_index,
            unit.0
        );

        Ok(())
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            array: self,
            index: 0,
        }
    }

    fn bit_string(&self) -> String {
        self.iter().map(|bit| if bit { '1' } else { '0' }).collect()
    }
}

/// Panics when `index` is out of range, like slice indexing.
impl Index<usize> for BitArray {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        match self.get(index) {
            Ok(true) => &true,
            Ok(false) => &false,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Debug for BitArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitArray")
            .field("capacity", &self.capacity)
            .field("bits", &self.bit_string())
            .finish()
    }
}

impl Display for BitArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bit_string())
    }
}

pub struct Iter<'a> {
    array: &'a BitArray,
    index: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.array.get(self.index).ok()?;
        self.index += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.capacity.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a BitArray {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
