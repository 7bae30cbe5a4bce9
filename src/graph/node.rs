use num_traits::Zero;

use crate::math::{Numeric, Real};

/// Core trait for lazily-evaluated expressions.
///
/// An expression is an immutable description of a sequence of samples. Nothing
/// is computed until the evaluation driver ([`render`], [`collect`]) reads it.
/// Reads are pure: the value at an index depends only on that index, so any
/// range can be read in any order, at any vector width.
pub trait Expression {
    /// Sample type produced by this expression.
    type Item: Real;

    /// Number of samples, or `None` for an unbounded expression.
    fn size(&self) -> Option<usize>;

    /// Read `V::LANES` consecutive samples starting at `index`.
    fn read<V: Numeric<Scalar = Self::Item>>(&self, index: usize) -> V;
}

/// Borrowed expressions can be composed without giving up ownership.
impl<E: Expression> Expression for &E {
    type Item = E::Item;

    #[inline]
    fn size(&self) -> Option<usize> {
        (**self).size()
    }

    #[inline]
    fn read<V: Numeric<Scalar = Self::Item>>(&self, index: usize) -> V {
        (**self).read(index)
    }
}

/// Length of the shorter of two sizes, where `None` is unbounded.
pub(crate) fn min_size(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(n), None) | (None, Some(n)) => Some(n),
        (None, None) => None,
    }
}

/// Fill `out` from `expr`, `V::LANES` samples per read with a one-lane tail.
///
/// # Panics
/// Panics if `expr` is finite and shorter than `out`.
pub fn render_lanes<V, E>(expr: &E, out: &mut [E::Item])
where
    E: Expression,
    V: Numeric<Scalar = E::Item>,
{
    if let Some(size) = expr.size() {
        assert!(
            out.len() <= size,
            "expression holds {size} samples, {} requested",
            out.len()
        );
    }

    let mut chunks = out.chunks_exact_mut(V::LANES);
    let mut index = 0;
    for chunk in &mut chunks {
        expr.read::<V>(index).store(chunk);
        index += V::LANES;
    }
    for slot in chunks.into_remainder() {
        *slot = expr.read::<E::Item>(index);
        index += 1;
    }
}

/// Fill `out` from `expr` at the widest SIMD width for its sample type.
///
/// # Panics
/// Panics if `expr` is finite and shorter than `out`.
pub fn render<E: Expression>(expr: &E, out: &mut [E::Item]) {
    log::trace!(
        "rendering {} samples, {} lanes per read",
        out.len(),
        <<E::Item as Real>::Wide as Numeric>::LANES
    );
    render_lanes::<<E::Item as Real>::Wide, E>(expr, out);
}

/// Materialize the first `len` samples of `expr` into an owned buffer.
///
/// # Panics
/// Panics if `expr` is finite and shorter than `len`.
pub fn collect<E: Expression>(expr: &E, len: usize) -> Vec<E::Item> {
    let mut out = vec![E::Item::zero(); len];
    render(expr, &mut out);
    out
}
