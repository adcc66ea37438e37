//! Sort strategy trait.
//!
//! `SortStrategy<T>` is object safe for a fixed element type, so the
//! registry can hand out `Arc<dyn SortStrategy<i64>>`. Every implementation
//! accepts any `T: PartialOrd`, but the values present must be totally
//! ordered: elements that do not even compare with themselves (NaN) are
//! rejected up front with [`BenchError::Incomparable`].

use crate::error::BenchError;

/// Public trait for sort strategies, consumed by orchestration.
pub trait SortStrategy<T>: Send + Sync {
    /// Sort `input`, returning a non-decreasing permutation of it.
    fn sort(&self, input: Vec<T>) -> Result<Vec<T>, BenchError>;

    /// Get the label of this strategy.
    fn name(&self) -> &str;

    /// Whether equal elements keep their relative order.
    fn is_stable(&self) -> bool;

    /// Whether the strategy needs only O(1) auxiliary space.
    fn is_in_place(&self) -> bool;
}

/// Fail fast on elements that cannot take part in a total order.
pub fn ensure_comparable<T: PartialOrd>(items: &[T]) -> Result<(), BenchError> {
    match items.iter().position(|item| item.partial_cmp(item).is_none()) {
        Some(index) => Err(BenchError::Incomparable { index }),
        None => Ok(()),
    }
}

/// Check that `items` is non-decreasing.
#[must_use]
pub fn is_sorted<T: PartialOrd>(items: &[T]) -> bool {
    items.windows(2).all(|pair| pair[0] <= pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparable_integers() {
        assert!(ensure_comparable(&[3, 1, 2]).is_ok());
        assert!(ensure_comparable::<i64>(&[]).is_ok());
    }

    #[test]
    fn nan_is_rejected_with_index() {
        let items = [1.0, 2.0, f64::NAN, 0.5];
        assert_eq!(
            ensure_comparable(&items),
            Err(BenchError::Incomparable { index: 2 })
        );
    }

    #[test]
    fn sorted_check() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2, 3]));
        assert!(!is_sorted(&[2, 1]));
    }
}
