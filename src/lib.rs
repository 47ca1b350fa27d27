mod error;

pub mod bit_array;
pub mod utils;

pub use bit_array::BitArray;
pub use error::{Error, Result};
