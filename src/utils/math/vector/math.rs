use std::cmp::Ordering;

use num::{Float, Num};

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Num + Copy + Into<f64>,
{
    /// Dot product of two sparse vectors
    /// d(a, b) = Σ(a_i * b_i)
    ///
    /// Walks both index lists once; only shared indices contribute.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.scaled_dot(other, 1.0, 1.0)
    }

    /// Σ((a_i / sa) * (b_i / sb)), scaling each factor before multiplying
    fn scaled_dot(&self, other: &Self, sa: f64, sb: f64) -> f64 {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let mut a_it = self.raw_iter().fuse();
        let mut b_it = other.raw_iter().fuse();
        let mut a_next = a_it.next();
        let mut b_next = b_it.next();
        let mut dot = 0_f64;
        while let (Some((ia, va)), Some((ib, vb))) = (a_next, b_next) {
            match ia.cmp(&ib) {
                Ordering::Equal => {
                    dot += ((*va).into() / sa) * ((*vb).into() / sb);
                    a_next = a_it.next();
                    b_next = b_it.next();
                }
                Ordering::Less => a_next = a_it.next(),
                Ordering::Greater => b_next = b_it.next(),
            }
        }
        dot
    }

    /// Σ(a_i^2)
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.raw_iter()
            .map(|(_, v)| {
                let v: f64 = (*v).into();
                v * v
            })
            .sum()
    }

    /// ||a|| = sqrt(Σ(a_i^2))
    ///
    /// Computed against the largest magnitude, so huge finite weights
    /// do not overflow to infinity.
    pub fn norm(&self) -> f64 {
        let scale = self
            .raw_iter()
            .map(|(_, v)| {
                let v: f64 = (*v).into();
                v.abs()
            })
            .fold(0.0, f64::max);
        if scale == 0.0 {
            return 0.0;
        }
        if !scale.is_finite() {
            return self.norm_sq().sqrt();
        }
        let sum: f64 = self
            .raw_iter()
            .map(|(_, v)| {
                let v: f64 = (*v).into();
                (v / scale) * (v / scale)
            })
            .sum();
        scale * sum.sqrt()
    }

    /// Cosine similarity
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    ///
    /// A zero-norm side (no shared vocabulary at all) yields 0.0 instead of NaN.
    #[inline]
    pub fn cosine_similarity(&self, other: &Self) -> f64 {
        let norm_a = self.norm();
        let norm_b = other.norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        self.scaled_dot(other, norm_a, norm_b)
    }
}

impl<N> ZeroSpVec<N>
where
    N: Float,
{
    /// Scale stored values to unit euclidean length.
    /// An all-zero vector is left untouched.
    pub fn normalize_l2(&mut self) {
        let norm = self
            .values
            .iter()
            .fold(N::zero(), |acc, v| acc + *v * *v)
            .sqrt();
        if norm == N::zero() {
            return;
        }
        for v in self.values.iter_mut() {
            *v = *v / norm;
        }
    }
}
