//! Complex sample types for baseband radar data
//!
//! Complex numbers are stored interleaved (re, im, re, im...), the layout
//! produced by digital receivers and expected by FFT libraries. Both types are
//! `Pod`, so tensors of complex samples move through shape and resampling
//! operations exactly like real ones. Arithmetic is left to the filtering
//! code that consumes them.

use bytemuck::{Pod, Zeroable};
use std::fmt;

macro_rules! impl_complex {
    ($name:ident, $float:ty, $doc_bits:literal, $doc_float:literal) => {
        #[doc = concat!($doc_bits, "-bit complex sample with ", $doc_float, " real and imaginary parts")]
        #[repr(C)]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
        pub struct $name {
            /// Real (in-phase) part
            pub re: $float,
            /// Imaginary (quadrature) part
            pub im: $float,
        }

        impl $name {
            /// Zero sample, also the fill value of zero-padded tensors
            pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

            /// Create a new complex sample
            #[inline]
            pub const fn new(re: $float, im: $float) -> Self {
                Self { re, im }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.im.is_sign_negative() {
                    write!(f, "{}{}i", self.re, self.im)
                } else {
                    write!(f, "{}+{}i", self.re, self.im)
                }
            }
        }

        impl From<($float, $float)> for $name {
            #[inline]
            fn from((re, im): ($float, $float)) -> Self {
                Self { re, im }
            }
        }
    };
}

impl_complex!(Complex64, f32, "64", "f32");
impl_complex!(Complex128, f64, "128", "f64");
