use crate::Distribution;

/// Running sums over a [`Distribution`], position for position.
///
/// Accumulates in the distribution's ascending order. The final sum is pinned to
/// exactly 1.0 so rounding drift cannot leave a gap below 1.
#[derive(Clone, Debug, PartialEq)]
pub struct CumulativeTable {
    sums: Vec<f64>,
}

impl CumulativeTable {
    pub fn new<K>(distribution: &Distribution<K>) -> Self {
        let mut so_far = 0.0;
        let mut sums = distribution
            .iter()
            .map(|(_, probability)| {
                so_far += probability;
                so_far
            })
            .collect::<Vec<f64>>();

        if let Some(last) = sums.last_mut() {
            *last = 1.0;
        }

        Self { sums }
    }

    #[inline]
    pub fn sums(&self) -> &[f64] {
        &self.sums
    }

    /// Position of the first entry whose running sum is at least `r`.
    ///
    /// Falls back to the last position when nothing qualifies, which covers
    /// `r > 1.0` and NaN.
    pub fn select(&self, r: f64) -> usize {
        if let Some(index) = self.sums.iter().position(|&sum| sum >= r) {
            return index;
        }

        tracing::trace!(r, "uniform draw past cumulative table, using last entry");
        self.sums.len().saturating_sub(1)
    }
}
