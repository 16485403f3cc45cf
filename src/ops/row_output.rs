//! Row results of a batch operation
//!
//! A function mapped over the rows of a 2-D batch returns either one tensor
//! or a fixed group of tensors. [`RowOutput`] describes both shapes of result
//! at the type level: the batch operation splits each row's result into an
//! ordered list of fields, stacks every field along a new leading dimension
//! and rebuilds a value of the same type from the stacked fields.
//!
//! Implemented for:
//! - [`Tensor`] (a single field)
//! - tuples of two to four tensors (positional fields)
//! - `Vec<Tensor>` (a group whose size is fixed by the first row)
//! - named structs declared with [`row_output!`](crate::row_output)

use crate::error::{Error, Result};
use crate::tensor::Tensor;

/// Whether a row result is a single tensor or a group of tensors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// One tensor per row
    Single,
    /// An ordered group of tensors per row
    Group,
}

/// A value a batch row function can return
pub trait RowOutput: Sized {
    /// Single tensor or group of tensors
    const KIND: OutputKind;

    /// Field names of a named group, in field order
    ///
    /// `None` for single tensors and positional groups.
    fn field_names() -> Option<&'static [&'static str]> {
        None
    }

    /// Split the value into its fields, in order
    fn into_fields(self) -> Vec<Tensor>;

    /// Rebuild a value from its fields, in order
    fn from_fields(fields: Vec<Tensor>) -> Result<Self>;
}

fn expect_fields(fields: &[Tensor], expected: usize) -> Result<()> {
    if fields.len() != expected {
        return Err(Error::FieldCountMismatch {
            expected,
            got: fields.len(),
        });
    }
    Ok(())
}

impl RowOutput for Tensor {
    const KIND: OutputKind = OutputKind::Single;

    fn into_fields(self) -> Vec<Tensor> {
        vec![self]
    }

    fn from_fields(fields: Vec<Tensor>) -> Result<Self> {
        expect_fields(&fields, 1)?;
        fields.into_iter().next().ok_or(Error::FieldCountMismatch {
            expected: 1,
            got: 0,
        })
    }
}

impl RowOutput for Vec<Tensor> {
    const KIND: OutputKind = OutputKind::Group;

    fn into_fields(self) -> Vec<Tensor> {
        self
    }

    fn from_fields(fields: Vec<Tensor>) -> Result<Self> {
        Ok(fields)
    }
}

macro_rules! impl_row_output_tuple {
    (@tensor $t:ident) => { Tensor };
    ($n:expr; $($t:ident),+) => {
        impl RowOutput for ($(impl_row_output_tuple!(@tensor $t),)+) {
            const KIND: OutputKind = OutputKind::Group;

            fn into_fields(self) -> Vec<Tensor> {
                let ($($t,)+) = self;
                vec![$($t),+]
            }

            fn from_fields(fields: Vec<Tensor>) -> Result<Self> {
                expect_fields(&fields, $n)?;
                let mut iter = fields.into_iter();
                $(
                    let $t = iter.next().ok_or(Error::FieldCountMismatch {
                        expected: $n,
                        got: 0,
                    })?;
                )+
                Ok(($($t,)+))
            }
        }
    };
}

impl_row_output_tuple!(2; a, b);
impl_row_output_tuple!(3; a, b, c);
impl_row_output_tuple!(4; a, b, c, d);

/// Declare a struct of named tensor fields usable as a batch row result
///
/// Every field has type [`Tensor`](crate::tensor::Tensor); the macro adds the
/// field types and implements [`RowOutput`](crate::ops::RowOutput) with the
/// fields in declaration order.
///
/// # Example
///
/// ```
/// use echolect::row_output;
///
/// row_output! {
///     /// Spectrum of one row
///     #[derive(Debug, Clone)]
///     pub struct Spectrum {
///         pub power,
///         pub phase,
///     }
/// }
///
/// use echolect::ops::RowOutput;
/// assert_eq!(Spectrum::field_names(), Some(&["power", "phase"][..]));
/// ```
#[macro_export]
macro_rules! row_output {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $crate::tensor::Tensor,
            )+
        }

        impl $crate::ops::RowOutput for $name {
            const KIND: $crate::ops::OutputKind = $crate::ops::OutputKind::Group;

            fn field_names() -> ::std::option::Option<&'static [&'static str]> {
                ::std::option::Option::Some(&[$(::std::stringify!($field)),+])
            }

            fn into_fields(self) -> ::std::vec::Vec<$crate::tensor::Tensor> {
                ::std::vec![$(self.$field),+]
            }

            fn from_fields(
                fields: ::std::vec::Vec<$crate::tensor::Tensor>,
            ) -> $crate::error::Result<Self> {
                const NAMES: &[&str] = &[$(::std::stringify!($field)),+];
                let mismatch = $crate::error::Error::FieldCountMismatch {
                    expected: NAMES.len(),
                    got: fields.len(),
                };
                if fields.len() != NAMES.len() {
                    return ::std::result::Result::Err(mismatch);
                }
                let mut iter = fields.into_iter();
                ::std::result::Result::Ok(Self {
                    $($field: iter.next().ok_or_else(|| mismatch.clone())?,)+
                })
            }
        }
    };
}
