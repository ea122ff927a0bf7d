use crate::CumulativeTable;
use crate::Distribution;
use crate::KeyIndex;
use crate::Result;
use crate::Weights;
use crate::source::RandomSource;
use crate::source::ThreadRandom;

/// Draws keys with frequency proportional to their weights.
///
/// Immutable once built. Lookup and sampling are linear in the number of keys,
/// so this is meant for small tables.
pub struct WeightedChoice<K, S = ThreadRandom> {
    weights: Vec<f64>,
    order: Vec<usize>,
    distribution: Distribution<K>,
    cumulative: CumulativeTable,
    source: S,
}

impl<K> WeightedChoice<K> {
    #[inline]
    pub fn new<W: Into<Weights<K>>>(weights: W) -> Result<Self> {
        Self::with_source(weights, ThreadRandom)
    }
}

impl<K, S: RandomSource> WeightedChoice<K, S> {
    pub fn with_source<W: Into<Weights<K>>>(weights: W, source: S) -> Result<Self> {
        let pairs = weights.into().into_pairs();
        let weights = pairs.iter().map(|(_, weight)| *weight).collect();
        let (distribution, order) = Distribution::from_pairs(pairs)?;
        let cumulative = CumulativeTable::new(&distribution);
        Ok(Self {
            weights,
            order,
            distribution,
            cumulative,
            source,
        })
    }

    /// Consumes one draw from the source.
    #[inline]
    pub fn sample(&self) -> &K {
        self.sample_with(self.source.uniform())
    }
}

impl<K, S> WeightedChoice<K, S> {
    /// Maps `r` in `[0, 1)` to a key. Never fails: `r` above 1.0 or NaN yields the
    /// last key in the table, `r` below 0.0 the first.
    #[inline]
    pub fn sample_with(&self, r: f64) -> &K {
        let index = self.cumulative.select(r);
        &self.distribution.entries()[index].key
    }

    #[inline]
    pub fn distribution(&self) -> &Distribution<K> {
        &self.distribution
    }

    /// Keys paired with running sums, in sampling order.
    #[inline]
    pub fn cumulative(&self) -> impl ExactSizeIterator<Item = (&K, f64)> {
        self.distribution
            .entries()
            .iter()
            .zip(self.cumulative.sums())
            .map(|(entry, sum)| (&entry.key, *sum))
    }

    /// Weights as supplied, in input order, before normalization.
    pub fn nominal(&self) -> impl ExactSizeIterator<Item = (&K, f64)> {
        self.order
            .iter()
            .zip(&self.weights)
            .map(|(&position, &weight)| (&self.distribution.entries()[position].key, weight))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.distribution.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.distribution.is_empty()
    }

    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// O(n). Prefer [`WeightedChoice::index`] for repeated lookups on hashable keys.
    #[inline]
    pub fn probability_of<Q>(&self, key: &Q) -> Result<f64>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.distribution.probability_of(key)
    }

    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.distribution.contains(key)
    }

    pub fn index(&self) -> KeyIndex<'_, K>
    where
        K: std::hash::Hash + Eq,
    {
        KeyIndex::new(&self.distribution)
    }
}

impl<K: Clone, S> rand::distr::Distribution<K> for WeightedChoice<K, S> {
    #[inline]
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> K {
        self.sample_with(rng.random::<f64>()).clone()
    }
}

impl<K: Clone, S: Clone> Clone for WeightedChoice<K, S> {
    fn clone(&self) -> Self {
        Self {
            weights: self.weights.clone(),
            order: self.order.clone(),
            distribution: self.distribution.clone(),
            cumulative: self.cumulative.clone(),
            source: self.source.clone(),
        }
    }
}

impl<K: std::fmt::Debug, S> std::fmt::Debug for WeightedChoice<K, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("WeightedChoice")
            .field(&self.nominal().collect::<Vec<_>>())
            .finish()
    }
}
