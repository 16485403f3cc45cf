//! Shape helpers
//!
//! Free functions on lengths. The tensor-level shape operations are defined
//! in the [`ShapeOps`](super::ShapeOps) trait.

use crate::error::{Error, Result};

/// Smallest power of two greater than or equal to `n`
///
/// Computed with integer arithmetic, so the result is exact for every `n`
/// up to the largest power of two representable in `usize`.
///
/// # Errors
///
/// - `n == 0`: there is no exponent `k` with `2^k <= 0`
/// - `n` greater than the largest representable power of two
///
/// # Example
///
/// ```
/// use echolect::ops::next_power_of_two;
///
/// assert_eq!(next_power_of_two(5).unwrap(), 8);
/// assert_eq!(next_power_of_two(8).unwrap(), 8);
/// assert_eq!(next_power_of_two(1).unwrap(), 1);
/// ```
pub fn next_power_of_two(n: usize) -> Result<usize> {
    if n == 0 {
        return Err(Error::invalid_argument(
            "n",
            "length must be positive to have a power-of-two bound",
        ));
    }
    n.checked_next_power_of_two().ok_or_else(|| {
        Error::invalid_argument("n", format!("no power of two >= {n} fits in usize"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_power_of_two() {
        assert_eq!(next_power_of_two(1).unwrap(), 1);
        assert_eq!(next_power_of_two(2).unwrap(), 2);
        assert_eq!(next_power_of_two(3).unwrap(), 4);
        assert_eq!(next_power_of_two(5).unwrap(), 8);
        assert_eq!(next_power_of_two(1000).unwrap(), 1024);
        assert_eq!(next_power_of_two(1 << 40).unwrap(), 1 << 40);
        assert_eq!(next_power_of_two((1 << 40) + 1).unwrap(), 1 << 41);
    }

    #[test]
    fn test_next_power_of_two_limits() {
        assert!(matches!(
            next_power_of_two(0),
            Err(Error::InvalidArgument { arg: "n", .. })
        ));
        let top = 1usize << (usize::BITS - 1);
        assert_eq!(next_power_of_two(top).unwrap(), top);
        assert!(next_power_of_two(top + 1).is_err());
    }
}
