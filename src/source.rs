//! Uniform random sources in `[0, 1)`.
//!
//! A [`WeightedChoice`](crate::WeightedChoice) owns its source and draws exactly
//! one value per sample. Thread safety of the container follows from the source:
//! [`ThreadRandom`] and `Mutex<R>` are `Sync`, `RefCell<R>` and most closures over
//! `Cell` are not.

use std::cell::RefCell;
use std::sync::Mutex;
use std::sync::PoisonError;

use rand::Rng;

pub trait RandomSource {
    /// A value interpretable as uniform in `[0, 1)`.
    fn uniform(&self) -> f64;
}

/// The thread-local generator from `rand::rng()`.
#[derive(Copy, Clone, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    #[inline]
    fn uniform(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Always returns the same value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fixed(pub f64);

impl RandomSource for Fixed {
    #[inline]
    fn uniform(&self) -> f64 {
        self.0
    }
}

#[derive(Copy, Clone)]
pub struct FromFn<F>(F);

#[inline]
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn() -> f64,
{
    FromFn(f)
}

impl<F> RandomSource for FromFn<F>
where
    F: Fn() -> f64,
{
    #[inline]
    fn uniform(&self) -> f64 {
        (self.0)()
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FromFn")
    }
}

impl<R: Rng> RandomSource for Mutex<R> {
    #[inline]
    fn uniform(&self) -> f64 {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random::<f64>()
    }
}

impl<R: Rng> RandomSource for RefCell<R> {
    #[inline]
    fn uniform(&self) -> f64 {
        self.borrow_mut().random::<f64>()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &S {
    #[inline]
    fn uniform(&self) -> f64 {
        (**self).uniform()
    }
}
