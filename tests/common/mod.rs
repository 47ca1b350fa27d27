use bit_array::{BitArray, Error};
use quickcheck::{Arbitrary, Gen};
use rand::{rngs::StdRng, Rng, SeedableRng};

const MAX_CAPACITY: usize = 200;
// Writes may land this far past the end to exercise the range check
const OUT_OF_RANGE_SLACK: usize = 9;

/// A capacity and a sequence of writes, some of which may be out of range.
#[derive(Debug, Clone)]
pub struct WriteSequence {
    pub capacity: usize,
    pub writes: Vec<(usize, bool)>,
}

impl Arbitrary for WriteSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        let capacity = usize::arbitrary(g) % (MAX_CAPACITY + 1);
        let num_writes = usize::arbitrary(g) % (g.size() * 4 + 1);

        let writes = (0..num_writes)
            .map(|_| {
                let index = usize::arbitrary(g) % (capacity + OUT_OF_RANGE_SLACK);
                (index, bool::arbitrary(g))
            })
            .collect();

        WriteSequence { capacity, writes }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let capacity = self.capacity;
        Box::new(self.writes.shrink().map(move |writes| WriteSequence {
            capacity,
            writes,
        }))
    }
}

/// Replays `sequence` against both a bit array and a plain `Vec<bool>`.
/// After every write, each index must agree with the model, so a write to one
/// index can never be observed at another.
pub fn agrees_with_model(sequence: &WriteSequence) -> bool {
    let capacity = sequence.capacity;
    let mut array = BitArray::new(capacity);
    let mut model = vec![false; capacity];

    for &(index, value) in &sequence.writes {
        let result = array.set(index, value);
        if index < capacity {
            if result.is_err() {
                return false;
            }
            model[index] = value;
        } else if result != Err(Error::IndexOutOfRange { index, capacity }) {
            return false;
        }

        if !model
            .iter()
            .enumerate()
            .all(|(i, expected)| array.get(i) == Ok(*expected))
        {
            return false;
        }
    }

    array.iter().eq(model.iter().copied())
}

/// Applies `num_writes` writes drawn from a seeded rng to a bit array and a
/// `Vec<bool>`, then checks that every index agrees.
pub fn test_against_model(capacity: usize, num_writes: usize, seed: u64) {
    let mut array = BitArray::new(capacity);
    let mut model = vec![false; capacity];
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..num_writes {
        let index = rng.gen_range(0..capacity);
        let value: bool = rng.gen();
        array.set(index, value).unwrap();
        model[index] = value;
    }

    for (index, expected) in model.iter().enumerate() {
        let actual = array.get(index).unwrap();
        if actual != *expected {
            panic!(
                "mismatch at index {}. Expected {}, actual {}",
                index, expected, actual
            );
        }
    }
}
