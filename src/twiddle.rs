//! Coefficient generation for the direct DFT.
//!
//! Entry `i` of a table of length `N` is `(cos(2πi/N), -sin(2πi/N))`, the
//! `i`-th power of the principal `N`-th root of unity `exp(-2πj/N)`.
//! [`TwiddlePlanner`] caches tables by length so repeated transforms of the
//! same size skip the trigonometry.

use alloc::sync::Arc;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::KernelError;
use crate::num::{angular_step, Float};

/// Roots-of-unity table in split layout.
#[derive(Clone, Debug, PartialEq)]
pub struct CoefficientTable<T: Float> {
    re: Vec<T>,
    im: Vec<T>,
}

impl<T: Float> CoefficientTable<T> {
    pub fn len(&self) -> usize {
        self.re.len()
    }
    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }
    pub fn re(&self) -> &[T] {
        &self.re
    }
    pub fn im(&self) -> &[T] {
        &self.im
    }
    /// Coefficient `p` as `(re, im)`. Panics if `p >= len`.
    pub fn get(&self, p: usize) -> (T, T) {
        (self.re[p], self.im[p])
    }
}

/// Generate the `n`-entry coefficient table.
///
/// Each angle is computed directly as `arg * i` rather than by recurrence, so
/// entry `i` carries no error accumulated from earlier entries.
///
/// # Errors
/// - [`KernelError::EmptyInput`] if `n == 0`
/// - [`KernelError::PrecisionLoss`] if `n` is not exactly representable in `T`
pub fn roots_of_unity<T: Float>(n: usize) -> Result<CoefficientTable<T>, KernelError> {
    if n == 0 {
        return Err(KernelError::EmptyInput);
    }
    let len = T::from_usize(n).ok_or(KernelError::PrecisionLoss)?;
    let arg = angular_step(len);
    let mut re = Vec::with_capacity(n);
    let mut im = Vec::with_capacity(n);
    for i in 0..n {
        // i < n, and n itself converted exactly
        let theta = arg * T::from_usize(i).ok_or(KernelError::PrecisionLoss)?;
        re.push(theta.cos());
        im.push(-theta.sin());
    }
    Ok(CoefficientTable { re, im })
}

/// Caches coefficient tables by length.
pub struct TwiddlePlanner<T: Float> {
    cache: HashMap<usize, Arc<CoefficientTable<T>>>,
}

impl<T: Float> Default for TwiddlePlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> TwiddlePlanner<T> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Retrieve the table for length `n`, generating it on first use.
    pub fn get(&mut self, n: usize) -> Result<Arc<CoefficientTable<T>>, KernelError> {
        if let Some(table) = self.cache.get(&n) {
            debug_log!("twiddle cache hit: n={}", n);
            return Ok(Arc::clone(table));
        }
        debug_log!("twiddle cache miss: n={}", n);
        let table = Arc::new(roots_of_unity(n)?);
        self.cache.insert(n, Arc::clone(&table));
        Ok(table)
    }

    /// Number of distinct lengths currently cached.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
