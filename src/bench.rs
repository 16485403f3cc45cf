//! Wall-clock timing of filter functions
//!
//! A small harness for comparing filter implementations on the same input:
//! each candidate is run `number` times per trial, and the fastest of
//! `repeat` trials is reported. Taking the minimum discards trials slowed by
//! unrelated load on the machine.
//!
//! For statistically rigorous measurements use the criterion benches in
//! `benches/`; this harness is for quick in-process comparisons.

use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{Error, Result};
use crate::tensor::Tensor;

/// Calls per trial used by [`Timer::default`]
pub const DEFAULT_NUMBER: usize = 100;

/// Trials used by [`Timer::default`] and [`time_filters`]
pub const DEFAULT_REPEAT: usize = 3;

/// Repeated-trial timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    number: usize,
    repeat: usize,
}

impl Default for Timer {
    fn default() -> Self {
        Self {
            number: DEFAULT_NUMBER,
            repeat: DEFAULT_REPEAT,
        }
    }
}

impl Timer {
    /// Create a timer running `number` calls per trial over `repeat` trials
    ///
    /// Both counts must be positive.
    pub fn new(number: usize, repeat: usize) -> Result<Self> {
        if number == 0 {
            return Err(Error::invalid_argument(
                "number",
                "at least one call per trial is required",
            ));
        }
        if repeat == 0 {
            return Err(Error::invalid_argument(
                "repeat",
                "at least one trial is required",
            ));
        }
        Ok(Self { number, repeat })
    }

    /// Calls per trial
    pub fn number(&self) -> usize {
        self.number
    }

    /// Number of trials
    pub fn repeat(&self) -> usize {
        self.repeat
    }

    /// Total time of the fastest trial
    ///
    /// Runs `f` exactly `number * repeat` times unless it fails; the first
    /// error aborts timing and is returned.
    pub fn measure<T, F>(&self, mut f: F) -> Result<Duration>
    where
        F: FnMut() -> Result<T>,
    {
        let mut best = Duration::MAX;
        for _ in 0..self.repeat {
            let start = Instant::now();
            for _ in 0..self.number {
                black_box(f()?);
            }
            best = best.min(start.elapsed());
        }
        Ok(best)
    }
}

/// Time each filter on `x`
///
/// Returns, in the order of `filters`, the fastest of three trials of
/// `number` calls each.
///
/// # Example
///
/// ```
/// use echolect::bench::time_filters;
/// use echolect::prelude::*;
///
/// let client = CpuClient::new();
/// let x = Tensor::zeros(&[64], DType::F32);
/// let pad = |t: &Tensor| client.fixed_length(t, 128);
/// let trim = |t: &Tensor| client.fixed_length(t, 32);
///
/// let times = time_filters(&[&pad, &trim], &x, 10)?;
/// assert_eq!(times.len(), 2);
/// # Ok::<(), echolect::error::Error>(())
/// ```
pub fn time_filters<T>(
    filters: &[&dyn Fn(&Tensor) -> Result<T>],
    x: &Tensor,
    number: usize,
) -> Result<Vec<Duration>> {
    let timer = Timer::new(number, DEFAULT_REPEAT)?;
    filters
        .iter()
        .enumerate()
        .map(|(index, filter)| {
            let best = timer.measure(|| filter(x))?;
            debug!(filter = index, number, best = ?best, "timed filter");
            Ok(best)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_default() {
        let timer = Timer::default();
        assert_eq!(timer.number(), 100);
        assert_eq!(timer.repeat(), 3);
    }

    #[test]
    fn test_new_rejects_zero() {
        assert!(matches!(
            Timer::new(0, 3),
            Err(Error::InvalidArgument { arg: "number", .. })
        ));
        assert!(matches!(
            Timer::new(5, 0),
            Err(Error::InvalidArgument { arg: "repeat", .. })
        ));
    }

    #[test]
    fn test_measure_call_count() {
        let calls = Cell::new(0usize);
        let timer = Timer::new(7, 2).unwrap();
        timer
            .measure(|| {
                calls.set(calls.get() + 1);
                Ok(())
            })
            .unwrap();
        assert_eq!(calls.get(), 14);
    }

    #[test]
    fn test_measure_propagates_error() {
        let calls = Cell::new(0usize);
        let timer = Timer::new(10, 3).unwrap();
        let result = timer.measure(|| {
            calls.set(calls.get() + 1);
            if calls.get() == 4 {
                Err(Error::invalid_argument("x", "boom"))
            } else {
                Ok(())
            }
        });
        assert!(result.is_err());
        assert_eq!(calls.get(), 4);
    }
}
