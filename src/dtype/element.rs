//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::Pod;
use std::fmt::Debug;

/// Trait for types that can be elements of a tensor
///
/// Connects Rust's type system to the runtime dtype carried by every tensor.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod` - Safe reinterpretation of tensor storage (bytemuck)
/// - `PartialEq + Debug` - Comparisons in tests and diagnostics
///
/// Every implementor's all-zero bit pattern is its zero value, which is what
/// zero-filled storage relies on.
pub trait Element: Copy + Send + Sync + Pod + PartialEq + Debug + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Zero value
    fn zero() -> Self {
        Self::zeroed()
    }
}

macro_rules! impl_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;
            }
        )*
    };
}

impl_element!(
    f64 => F64,
    f32 => F32,
    i64 => I64,
    i32 => I32,
    i16 => I16,
    i8 => I8,
    u64 => U64,
    u32 => U32,
    u16 => U16,
    u8 => U8,
    super::complex::Complex64 => Complex64,
    super::complex::Complex128 => Complex128,
);

// Note: bool doesn't implement Pod, so DType::Bool has no Element mapping.
// Boolean tensors are built through `Tensor::from_bytes`.

#[cfg(feature = "f16")]
impl_element!(half::f16 => F16, half::bf16 => BF16);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::Complex64;

    #[test]
    fn test_element_dtypes() {
        assert_eq!(<f32 as Element>::DTYPE, DType::F32);
        assert_eq!(<u16 as Element>::DTYPE, DType::U16);
        assert_eq!(<Complex64 as Element>::DTYPE, DType::Complex64);
    }

    #[test]
    fn test_zero_is_zeroed() {
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(i8::zero(), 0);
        assert_eq!(Complex64::zero(), Complex64::ZERO);
    }

    #[test]
    fn test_size_matches_dtype() {
        assert_eq!(std::mem::size_of::<f64>(), f64::DTYPE.size_in_bytes());
        assert_eq!(
            std::mem::size_of::<Complex64>(),
            Complex64::DTYPE.size_in_bytes()
        );
    }
}
