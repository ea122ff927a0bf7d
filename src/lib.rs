//! Making choices from a probability distribution.
//!
//! Give each key a weight and draw keys in proportion to it:
//!
//! ```
//! use choices::WeightedChoice;
//!
//! let mood = WeightedChoice::new(vec![("happy", 0.3), ("neutral", 0.6), ("sad", 0.1)])?;
//! let today = mood.sample();
//! assert!(mood.contains(today));
//! # Ok::<(), choices::Error>(())
//! ```
//!
//! Weights need not sum to 1. Raw sample counts work as well, and keys only need
//! `PartialEq`, so functions can be keys:
//!
//! ```
//! use choices::WeightedChoice;
//!
//! let spotted = WeightedChoice::new(vec![
//!     ("geese", 0),
//!     ("ducks", 12),
//!     ("sparrows", 4),
//!     ("other", 39),
//! ])?;
//!
//! let order = spotted.distribution().iter().map(|(key, _)| *key).collect::<Vec<_>>();
//! assert_eq!(order, ["geese", "sparrows", "ducks", "other"]);
//! assert_eq!(spotted.probability_of(&"geese")?, 0.0);
//! # Ok::<(), choices::Error>(())
//! ```
//!
//! Tests and simulations can inject the random source:
//!
//! ```
//! use choices::WeightedChoice;
//! use choices::source::Fixed;
//!
//! let coin = WeightedChoice::with_source(vec![("heads", 1), ("tails", 1)], Fixed(0.75))?;
//! assert_eq!(*coin.sample(), "tails");
//! # Ok::<(), choices::Error>(())
//! ```

mod choice;
mod cumulative;
mod distribution;
mod error;
mod index;
pub mod source;
mod weights;

pub use choice::WeightedChoice;
pub use cumulative::CumulativeTable;
pub use distribution::Distribution;
pub use distribution::Entry;
pub use error::Error;
pub use error::Result;
pub use index::KeyIndex;
pub use source::RandomSource;
pub use weights::Weights;
