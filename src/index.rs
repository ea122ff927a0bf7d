use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::BuildHasherDefault;
use std::hash::Hash;

use rapidhash::RapidHasher;

use crate::Distribution;
use crate::Error;
use crate::Result;

/// Hashed lookup over a borrowed [`Distribution`].
///
/// Answers exactly like the linear scan: for duplicate keys the first entry in
/// distribution order wins.
#[derive(Clone, Debug)]
pub struct KeyIndex<'a, K> {
    probabilities: HashMap<&'a K, f64, BuildHasherDefault<RapidHasher>>,
}

impl<'a, K: Hash + Eq> KeyIndex<'a, K> {
    pub fn new(distribution: &'a Distribution<K>) -> Self {
        let mut probabilities =
            HashMap::with_capacity_and_hasher(distribution.len(), BuildHasherDefault::default());
        for (key, probability) in distribution.iter() {
            if let Entry::Vacant(slot) = probabilities.entry(key) {
                slot.insert(probability);
            }
        }
        Self { probabilities }
    }

    #[inline]
    pub fn probability_of(&self, key: &K) -> Result<f64> {
        self.probabilities
            .get(key)
            .copied()
            .ok_or(Error::KeyNotFound)
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.probabilities.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }
}
