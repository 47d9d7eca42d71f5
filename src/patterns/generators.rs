//! Lazy sequences.
//!
//! Nothing here computes a value until the returned iterator is polled, and
//! each iterator remembers where it stopped between calls to `next()`.
//! Results saturate at `u64::MAX` instead of overflowing.

fn pow2(x: u32) -> u64 {
    2_u64.saturating_pow(x)
}

fn square(x: u32) -> u64 {
    u64::from(x) * u64::from(x)
}

/// Yields `2^x` for each `x`.
pub fn powers_of_two<I>(xs: I) -> impl Iterator<Item = u64>
where
    I: IntoIterator<Item = u32>,
{
    xs.into_iter().map(pow2)
}

/// Yields `2^x` then `x^2` for each `x`.
pub fn interleaved<I>(xs: I) -> Interleaved<I::IntoIter>
where
    I: IntoIterator<Item = u32>,
{
    Interleaved {
        inner: xs.into_iter(),
        pending: None,
    }
}

/// Yields every `2^x`, then every `x^2`.
///
/// The source is walked twice, so it has to be cloneable (a `Vec`, a slice
/// iterator, a range).
pub fn sequential<I>(xs: I) -> impl Iterator<Item = u64>
where
    I: IntoIterator<Item = u32> + Clone,
{
    powers_of_two(xs.clone()).chain(xs.into_iter().map(square))
}

/// Yields `i^2` for `i` in `0..n`.
pub fn squares(n: u64) -> impl Iterator<Item = u64> {
    (0..n).map(|i| i.saturating_mul(i))
}

/// Iterator returned by [`interleaved`].
///
/// Written out by hand to show the state a generator keeps: the square of
/// the current item waits in `pending` until the next call.
#[derive(Debug, Clone)]
pub struct Interleaved<I> {
    inner: I,
    pending: Option<u64>,
}

impl<I> Iterator for Interleaved<I>
where
    I: Iterator<Item = u32>,
{
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if let Some(sq) = self.pending.take() {
            return Some(sq);
        }
        let x = self.inner.next()?;
        self.pending = Some(square(x));
        Some(pow2(x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let extra = usize::from(self.pending.is_some());
        let (lo, hi) = self.inner.size_hint();
        (
            lo.saturating_mul(2).saturating_add(extra),
            hi.and_then(|h| h.checked_mul(2)?.checked_add(extra)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XS: [u32; 4] = [2, 4, 3, 2];

    #[test]
    fn test_powers_of_two() {
        let out: Vec<u64> = powers_of_two(XS).collect();
        assert_eq!(out, vec![4, 16, 8, 4]);
    }

    #[test]
    fn test_interleaved() {
        let out: Vec<u64> = interleaved(XS).collect();
        assert_eq!(out, vec![4, 4, 16, 16, 8, 9, 4, 4]);
    }

    #[test]
    fn test_interleaved_size_hint() {
        let mut it = interleaved(vec![1, 2, 3]);
        assert_eq!(it.size_hint(), (6, Some(6)));
        it.next();
        assert_eq!(it.size_hint(), (5, Some(5)));
    }

    #[test]
    fn test_sequential() {
        let out: Vec<u64> = sequential(XS).collect();
        assert_eq!(out, vec![4, 16, 8, 4, 4, 16, 9, 4]);
    }

    #[test]
    fn test_sequential_from_range() {
        let out: Vec<u64> = sequential(0..3).collect();
        assert_eq!(out, vec![1, 2, 4, 0, 1, 4]);
    }

    #[test]
    fn test_squares() {
        assert_eq!(squares(3).collect::<Vec<_>>(), vec![0, 1, 4]);
        assert_eq!(squares(0).count(), 0);
    }

    #[test]
    fn test_saturates() {
        let out: Vec<u64> = powers_of_two([63, 64, 200]).collect();
        assert_eq!(out, vec![1 << 63, u64::MAX, u64::MAX]);
    }

    #[test]
    fn test_lazy_consumption() {
        // An endless source is fine as long as only a prefix is taken
        let out: Vec<u64> = interleaved(0..).take(5).collect();
        assert_eq!(out, vec![1, 0, 2, 1, 4]);
    }

    #[test]
    fn test_single_use() {
        let mut powers = powers_of_two(vec![1, 2]);
        assert_eq!(powers.by_ref().count(), 2);
        assert_eq!(powers.next(), None);
    }
}
