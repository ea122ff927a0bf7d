use std::collections::BTreeMap;
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::hash::Hash;

/// Keys paired with non-negative weights, before normalization.
///
/// Weights may be probabilities or raw sample counts; only their ratios matter.
/// A mapping carries no ordering. A pair sequence is ordered, which only decides
/// how equally probable keys are ordered in the normalized distribution.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        untagged,
        bound(
            serialize = "K: serde::Serialize",
            deserialize = "K: serde::Deserialize<'de> + Eq + Hash"
        )
    )
)]
pub enum Weights<K> {
    Map(HashMap<K, f64>),
    Pairs(Vec<(K, f64)>),
}

impl<K> Weights<K> {
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Weights::Map(map) => map.len(),
            Weights::Pairs(pairs) => pairs.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn into_pairs(self) -> Vec<(K, f64)> {
        match self {
            Weights::Map(map) => map.into_iter().collect(),
            Weights::Pairs(pairs) => pairs,
        }
    }
}

impl<K, W> From<Vec<(K, W)>> for Weights<K>
where
    W: Into<f64>,
{
    fn from(pairs: Vec<(K, W)>) -> Self {
        Weights::Pairs(
            pairs
                .into_iter()
                .map(|(key, weight)| (key, weight.into()))
                .collect(),
        )
    }
}

impl<K, W, const N: usize> From<[(K, W); N]> for Weights<K>
where
    W: Into<f64>,
{
    fn from(pairs: [(K, W); N]) -> Self {
        Weights::Pairs(
            pairs
                .into_iter()
                .map(|(key, weight)| (key, weight.into()))
                .collect(),
        )
    }
}

impl<K, W, H> From<HashMap<K, W, H>> for Weights<K>
where
    K: Eq + Hash,
    W: Into<f64>,
    H: BuildHasher,
{
    fn from(map: HashMap<K, W, H>) -> Self {
        Weights::Map(
            map.into_iter()
                .map(|(key, weight)| (key, weight.into()))
                .collect(),
        )
    }
}

// Ordered by key, so it lands as a pair sequence.
impl<K, W> From<BTreeMap<K, W>> for Weights<K>
where
    W: Into<f64>,
{
    fn from(map: BTreeMap<K, W>) -> Self {
        Weights::Pairs(
            map.into_iter()
                .map(|(key, weight)| (key, weight.into()))
                .collect(),
        )
    }
}
