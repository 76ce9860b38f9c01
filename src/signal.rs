use alloc::vec;
use alloc::vec::Vec;

use crate::error::KernelError;
use crate::num::Float;

/// `N` complex samples stored as two index-aligned sequences.
#[derive(Clone, Debug, PartialEq)]
pub struct Signal<T: Float> {
    re: Vec<T>,
    im: Vec<T>,
}

impl<T: Float> Signal<T> {
    pub fn new(re: Vec<T>, im: Vec<T>) -> Result<Self, KernelError> {
        if re.len() != im.len() {
            return Err(KernelError::MismatchedLengths {
                expected: re.len(),
                got: im.len(),
            });
        }
        Ok(Self { re, im })
    }

    pub fn zeros(len: usize) -> Self {
        Self {
            re: vec![T::zero(); len],
            im: vec![T::zero(); len],
        }
    }

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

    pub fn as_slices(&self) -> (&[T], &[T]) {
        (&self.re, &self.im)
    }

    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        (&mut self.re, &mut self.im)
    }

    /// BLAKE3 digest of the real then imaginary samples, each widened to
    /// `f64` and encoded little-endian. Equal digests mean bit-identical
    /// signals.
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        for &v in self.re.iter().chain(self.im.iter()) {
            hasher.update(&v.to_f64().to_le_bytes());
        }
        hasher.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unequal_halves() {
        let err = Signal::<f64>::new(vec![1.0, 2.0], vec![0.0]).unwrap_err();
        assert_eq!(
            err,
            KernelError::MismatchedLengths {
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn fingerprint_sees_sign_of_zero() {
        let a = Signal::<f64>::new(vec![0.0], vec![0.0]).unwrap();
        let b = Signal::<f64>::new(vec![-0.0], vec![0.0]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
