#[macro_use]
extern crate quickcheck_macros;

mod balanced;
mod colored;
mod unbalanced;

use quickcheck::{Arbitrary, Gen};
use simplelog::{Config, LevelFilter, TestLogger};

/// A sequence of keys to insert into a tree in a quicktest. Sorted sequences are the worst case
/// for an unbalanced tree so they're generated as often as shuffled ones.
#[derive(Clone, Debug)]
pub(crate) enum Keys {
    /// Keys in whatever order they were generated
    Shuffled(Vec<i16>),
    /// Keys in non-decreasing order
    Ascending(Vec<i16>),
    /// Keys in non-increasing order
    Descending(Vec<i16>),
}

impl Keys {
    pub(crate) fn into_vec(self) -> Vec<i16> {
        match self {
            Keys::Shuffled(keys) => keys,
            Keys::Ascending(mut keys) => {
                keys.sort_unstable();
                keys
            }
            Keys::Descending(mut keys) => {
                keys.sort_unstable_by(|a, b| b.cmp(a));
                keys
            }
        }
    }
}

impl Arbitrary for Keys {
    /// Tells quickcheck how to randomly choose a key sequence
    fn arbitrary(g: &mut Gen) -> Self {
        let keys = Vec::arbitrary(g);
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Keys::Shuffled(keys),
            1 => Keys::Ascending(keys),
            2 => Keys::Descending(keys),
            _ => unreachable!(),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Keys::Shuffled(keys) => Box::new(keys.shrink().map(Keys::Shuffled)),
            Keys::Ascending(keys) => Box::new(keys.shrink().map(Keys::Ascending)),
            Keys::Descending(keys) => Box::new(keys.shrink().map(Keys::Descending)),
        }
    }
}

/// Routes the trees' rotation and fix-up logging into the test harness' captured output.
pub(crate) fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// Sorts a copy of the keys so traversal orders can be compared as multisets.
pub(crate) fn sorted<T: Ord + Clone>(keys: &[T]) -> Vec<T> {
    let mut keys = keys.to_vec();
    keys.sort_unstable();
    keys
}
