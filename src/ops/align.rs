//! Convolution output alignment
//!
//! A full linear convolution of a length-`L` filter with a length-`M` signal
//! has `L + M - 1` samples. [`ConvAlign`] selects which contiguous part of
//! that output a caller keeps.
//!
//! | Alignment | Range of the full output      | Length       |
//! |-----------|-------------------------------|--------------|
//! | `Valid`   | `L-1 .. M`                    | `M - L + 1`  |
//! | `Same`    | `(L-1)/2 .. (L-1)/2 + M`      | `M`          |
//! | `NoDelay` | `L-1 .. L+M-1`                | `M`          |
//! | `Full`    | `0 .. L+M-1`                  | `L + M - 1`  |

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::tensor::Tensor;

/// Alignment of a convolution output relative to its input signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConvAlign {
    /// Only samples computed from a fully overlapping filter.
    ///
    /// Empty (starting at `L-1`) when the signal is shorter than the filter.
    Valid,

    /// Output centered on the input, same length as the signal.
    Same,

    /// Output with the filter's delay removed, same length as the signal.
    ///
    /// Sample `j` of the output is the full convolution at `j + L - 1`.
    #[default]
    NoDelay,

    /// The complete, untrimmed convolution.
    Full,
}

impl ConvAlign {
    /// All alignments, in declaration order
    pub const ALL: [ConvAlign; 4] = [
        ConvAlign::Valid,
        ConvAlign::Same,
        ConvAlign::NoDelay,
        ConvAlign::Full,
    ];

    /// Lowercase name, as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            ConvAlign::Valid => "valid",
            ConvAlign::Same => "same",
            ConvAlign::NoDelay => "nodelay",
            ConvAlign::Full => "full",
        }
    }

    /// Index range of the full convolution kept by this alignment
    ///
    /// `filter_len` is `L`, `signal_len` is `M`. Fails when `filter_len == 0`.
    pub fn output_range(&self, filter_len: usize, signal_len: usize) -> Result<Range<usize>> {
        if filter_len == 0 {
            return Err(Error::invalid_argument(
                "filter_len",
                "filter must have at least one tap",
            ));
        }

        let delay = filter_len - 1;
        let full_len = filter_len + signal_len - 1;

        Ok(match self {
            // An empty range still starts at the filter delay.
            ConvAlign::Valid => delay..signal_len.max(delay),
            ConvAlign::Same => {
                let start = delay / 2;
                start..start + signal_len
            }
            ConvAlign::NoDelay => delay..full_len,
            ConvAlign::Full => 0..full_len,
        })
    }

    /// Number of samples kept by this alignment
    pub fn output_len(&self, filter_len: usize, signal_len: usize) -> Result<usize> {
        self.output_range(filter_len, signal_len).map(|r| r.len())
    }

    /// Trim a full convolution output along `dim` (zero-copy)
    ///
    /// `full` must have length `filter_len + signal_len - 1` along `dim`.
    /// The result is a narrowed view sharing storage with `full`.
    pub fn trim(
        &self,
        full: &Tensor,
        filter_len: usize,
        signal_len: usize,
        dim: isize,
    ) -> Result<Tensor> {
        let range = self.output_range(filter_len, signal_len)?;
        let full_len = filter_len + signal_len - 1;
        let got = full.size(dim).ok_or(Error::InvalidDimension {
            dim,
            ndim: full.ndim(),
        })?;
        if got != full_len {
            return Err(Error::shape_mismatch(&[full_len], &[got]));
        }
        full.narrow(dim, range.start, range.len())
    }
}

impl fmt::Display for ConvAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConvAlign {
    type Err = Error;

    /// Parse an alignment name (case-insensitive)
    ///
    /// Unknown names are rejected rather than treated as `Full`.
    fn from_str(s: &str) -> Result<Self> {
        ConvAlign::ALL
            .into_iter()
            .find(|align| align.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::invalid_argument(
                    "align",
                    format!("unknown alignment '{s}' (expected valid, same, nodelay or full)"),
                )
            })
    }
}

/// Index range of a full convolution to keep for the given alignment
///
/// `filter_len` (`L`) is the filter length, `signal_len` (`M`) the signal
/// length; the full convolution has `L + M - 1` samples.
///
/// # Example
///
/// ```
/// use echolect::ops::{ConvAlign, convslice};
///
/// assert_eq!(convslice(3, 5, ConvAlign::Valid).unwrap(), 2..5);
/// assert_eq!(convslice(3, 5, ConvAlign::Same).unwrap(), 1..6);
/// assert_eq!(convslice(3, 5, ConvAlign::NoDelay).unwrap(), 2..7);
/// assert_eq!(convslice(3, 5, ConvAlign::Full).unwrap(), 0..7);
/// ```
pub fn convslice(filter_len: usize, signal_len: usize, align: ConvAlign) -> Result<Range<usize>> {
    align.output_range(filter_len, signal_len)
}
