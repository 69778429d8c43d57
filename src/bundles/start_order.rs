//! Start order keys
//!
//! Start order `0` means "unspecified". Unspecified bundles are started after
//! every bundle with an explicit start order, so `0` compares greater than
//! every other value, negative ones included.

use std::cmp::Ordering;

/// Compare two start orders: non-zero values ascending, `0` last
pub fn compare_start_order(left: i32, right: i32) -> Ordering {
    if left == right {
        Ordering::Equal
    } else if left == 0 {
        Ordering::Greater
    } else if right == 0 {
        Ordering::Less
    } else {
        left.cmp(&right)
    }
}

/// A start order used as a map key, ordered by [`compare_start_order`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StartOrder(i32);

impl StartOrder {
    pub fn value(self) -> i32 {
        self.0
    }

    /// Whether this is the unspecified start order `0`
    pub fn is_unspecified(self) -> bool {
        self.0 == 0
    }
}

impl From<i32> for StartOrder {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl Ord for StartOrder {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_start_order(self.0, other.0)
    }
}

impl PartialOrd for StartOrder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_values() {
        assert_eq!(compare_start_order(0, 0), Ordering::Equal);
        assert_eq!(compare_start_order(7, 7), Ordering::Equal);
        assert_eq!(compare_start_order(-2, -2), Ordering::Equal);
    }

    #[test]
    fn test_zero_sorts_after_everything() {
        assert_eq!(compare_start_order(0, 1), Ordering::Greater);
        assert_eq!(compare_start_order(0, -1), Ordering::Greater);
        assert_eq!(compare_start_order(0, i32::MAX), Ordering::Greater);
        assert_eq!(compare_start_order(i32::MIN, 0), Ordering::Less);
    }

    #[test]
    fn test_non_zero_values_are_numeric() {
        assert_eq!(compare_start_order(1, 2), Ordering::Less);
        assert_eq!(compare_start_order(-5, -1), Ordering::Less);
        assert_eq!(compare_start_order(3, -3), Ordering::Greater);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        assert_eq!(compare_start_order(i32::MIN, i32::MAX), Ordering::Less);
        assert_eq!(compare_start_order(i32::MAX, i32::MIN), Ordering::Greater);
    }

    #[test]
    fn test_only_zero_is_unspecified() {
        assert!(StartOrder::from(0).is_unspecified());
        assert!(!StartOrder::from(-1).is_unspecified());
        assert!(!StartOrder::from(i32::MAX).is_unspecified());
    }

    #[test]
    fn test_sorting_keys() {
        let mut keys: Vec<StartOrder> = [3, 0, -5, 1, 0, -1, 2]
            .into_iter()
            .map(StartOrder::from)
            .collect();
        keys.sort();
        let values: Vec<i32> = keys.into_iter().map(StartOrder::value).collect();
        assert_eq!(values, vec![-5, -1, 1, 2, 3, 0, 0]);
    }

    #[test]
    fn test_ordering_is_transitive_over_sample() {
        let sample = [i32::MIN, -10, -1, 0, 1, 10, i32::MAX];
        for &a in &sample {
            for &b in &sample {
                for &c in &sample {
                    if compare_start_order(a, b) == Ordering::Less
                        && compare_start_order(b, c) == Ordering::Less
                    {
                        assert_eq!(
                            compare_start_order(a, c),
                            Ordering::Less,
                            "{a} < {b} < {c} must imply {a} < {c}"
                        );
                    }
                }
            }
        }
    }
}
