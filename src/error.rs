use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum Error {
    #[error("total weight is zero")]
    ZeroTotal,

    #[error("total weight is not finite")]
    NonFiniteTotal,

    #[error("weight at position {index} is negative (got {weight})")]
    NegativeWeight { index: usize, weight: f64 },

    #[error("weight at position {index} is not finite (got {weight})")]
    NonFiniteWeight { index: usize, weight: f64 },

    #[error("key not found")]
    KeyNotFound,
}

impl Error {
    /// Rejected weights, as opposed to a failed lookup.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Error::KeyNotFound)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
