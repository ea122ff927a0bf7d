use crate::Error;
use crate::Result;
use crate::Weights;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry<K> {
    pub key: K,
    pub probability: f64,
}

/// Keys with probabilities summing to 1.0, sorted ascending by probability.
///
/// Equal probabilities keep the order they had in the input.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Distribution<K> {
    entries: Vec<Entry<K>>,
}

impl<K> Distribution<K> {
    pub fn new(weights: Weights<K>) -> Result<Self> {
        Self::from_pairs(weights.into_pairs()).map(|(distribution, _)| distribution)
    }

    /// Also returns, for each input position, where that entry landed after sorting.
    pub(crate) fn from_pairs(pairs: Vec<(K, f64)>) -> Result<(Self, Vec<usize>)> {
        let mut total = 0.0;
        for (index, (_, weight)) in pairs.iter().enumerate() {
            let weight = *weight;
            if !weight.is_finite() {
                return Err(Error::NonFiniteWeight { index, weight });
            }
            if weight < 0.0 {
                return Err(Error::NegativeWeight { index, weight });
            }
            total += weight;
        }

        if !f64::is_finite(total) {
            return Err(Error::NonFiniteTotal);
        }

        if total == 0.0 {
            return Err(Error::ZeroTotal);
        }

        let mut sorted = pairs
            .into_iter()
            .map(|(key, weight)| Entry {
                key,
                probability: weight / total,
            })
            .enumerate()
            .collect::<Vec<_>>();

        // Stable: ties keep input order.
        sorted.sort_by(|(_, a), (_, b)| a.probability.total_cmp(&b.probability));

        let mut order = vec![0; sorted.len()];
        for (position, (index, _)) in sorted.iter().enumerate() {
            order[*index] = position;
        }

        let entries = sorted
            .into_iter()
            .map(|(_, entry)| entry)
            .collect::<Vec<_>>();

        tracing::debug!(keys = entries.len(), total, "normalized weights");
        Ok((Self { entries }, order))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed distribution.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[Entry<K>] {
        &self.entries
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, f64)> {
        self.entries
            .iter()
            .map(|entry| (&entry.key, entry.probability))
    }

    /// Linear scan, first equal key wins.
    pub fn probability_of<Q>(&self, key: &Q) -> Result<f64>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.entries
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| entry.probability)
            .ok_or(Error::KeyNotFound)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.entries.iter().any(|entry| entry.key == *key)
    }
}

impl<'a, K> IntoIterator for &'a Distribution<K> {
    type Item = &'a Entry<K>;
    type IntoIter = std::slice::Iter<'a, Entry<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<K: Copy>(distribution: &Distribution<K>) -> Vec<K> {
        distribution.iter().map(|(key, _)| *key).collect()
    }

    #[test]
    fn sorted_ascending_by_probability() {
        let distribution =
            Distribution::new(Weights::from(vec![("happy", 0.3), ("neutral", 0.6), ("sad", 0.1)]))
                .unwrap();
        assert_eq!(keys(&distribution), ["sad", "happy", "neutral"]);
    }

    #[test]
    fn sample_counts_normalize() {
        let distribution = Distribution::new(Weights::from(vec![
            ("geese", 0),
            ("ducks", 12),
            ("sparrows", 4),
            ("other", 39),
        ]))
        .unwrap();

        assert_eq!(keys(&distribution), ["geese", "sparrows", "ducks", "other"]);
        assert_eq!(distribution.probability_of(&"geese"), Ok(0.0));
        assert_eq!(distribution.probability_of(&"sparrows"), Ok(4.0 / 55.0));
        assert_eq!(distribution.probability_of(&"other"), Ok(39.0 / 55.0));
    }

    #[test]
    fn ties_keep_input_order() {
        let distribution =
            Distribution::new(Weights::from(vec![('c', 1), ('a', 1), ('b', 1)])).unwrap();
        assert_eq!(keys(&distribution), ['c', 'a', 'b']);
    }

    #[test]
    fn proportional_inputs_agree() {
        let weights = Distribution::new(Weights::from(vec![("a", 9), ("b", 1)])).unwrap();
        let probabilities = Distribution::new(Weights::from(vec![("a", 0.9), ("b", 0.1)])).unwrap();
        assert_eq!(weights, probabilities);
    }

    #[test]
    fn zero_total() {
        let error = Distribution::new(Weights::from(vec![("a", 0), ("b", 0)])).unwrap_err();
        assert_eq!(error, Error::ZeroTotal);
        assert!(error.is_invalid_input());
    }

    #[test]
    fn empty_input() {
        let error = Distribution::<&str>::new(Weights::Pairs(Vec::new())).unwrap_err();
        assert_eq!(error, Error::ZeroTotal);
    }

    #[test]
    fn rejects_bad_weights() {
        assert_eq!(
            Distribution::new(Weights::from(vec![("a", 1.0), ("b", -0.5)])),
            Err(Error::NegativeWeight {
                index: 1,
                weight: -0.5
            })
        );
        assert!(matches!(
            Distribution::new(Weights::from(vec![("a", f64::NAN)])),
            Err(Error::NonFiniteWeight { index: 0, .. })
        ));
        assert_eq!(
            Distribution::new(Weights::from(vec![("a", f64::MAX), ("b", f64::MAX)])),
            Err(Error::NonFiniteTotal)
        );
    }

    #[test]
    fn order_maps_input_to_sorted_position() {
        let (distribution, order) =
            Distribution::from_pairs(vec![("happy", 0.3), ("neutral", 0.6), ("sad", 0.1)])
                .unwrap();
        assert_eq!(order, [1, 2, 0]);
        for (index, key) in ["happy", "neutral", "sad"].iter().enumerate() {
            assert_eq!(distribution.entries()[order[index]].key, *key);
        }
    }

    #[test]
    fn lookup_miss() {
        let distribution = Distribution::new(Weights::from(vec![("a", 1)])).unwrap();
        assert_eq!(distribution.probability_of(&"z"), Err(Error::KeyNotFound));
        assert!(distribution.contains(&"a"));
        assert!(!distribution.contains(&"z"));
    }
}
