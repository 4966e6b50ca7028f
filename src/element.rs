//! Element strategies.
//!
//! An [`ElementTraits`] implementation decides how a value crossing the boundary (the
//! `Abi` type) is turned into what the storage buffer keeps (the `Stored` type), how it
//! is handed back out, and how a stored element is compared with a boundary value.
//!
//! The set of strategies is closed:
//!
//! | Strategy | `Abi` | `Stored` | Equality |
//! |---|---|---|---|
//! | [`ValueElement<T>`] | `T` | `T` | `==` |
//! | [`HandleElement<T>`] | `Option<Arc<T>>` | `Option<Arc<T>>` | pointer identity |
//! | [`TextElement`] | [`TextHandle`](crate::TextHandle) | [`TextHandle`](crate::TextHandle) | ordinal |

use std::marker::PhantomData;

use zerocopy::FromZeros;

use crate::Result;

mod handle;
#[cfg(feature = "text")]
mod text;

pub use handle::*;
#[cfg(feature = "text")]
pub use text::*;

mod private {
    pub trait Sealed {}
}

pub(crate) use private::Sealed;

/// Conversion and comparison rules for one kind of element.
///
/// This trait is sealed; the three implementations in this module are the only ones.
pub trait ElementTraits: Sealed + 'static {
    /// The boundary-facing representation.
    type Abi;

    /// The representation kept in the storage buffer.
    type Stored;

    /// Takes ownership of a boundary value for storage.
    fn wrap(value: &Self::Abi) -> Result<Self::Stored>;

    /// Writes a boundary value for `stored` into `result` without giving up the stored
    /// ownership.
    fn unwrap(stored: &Self::Stored, result: &mut Self::Abi) -> Result<()>;

    /// Compares a stored element with a boundary value.
    fn equals(stored: &Self::Stored, value: &Self::Abi) -> Result<bool>;

    /// Resets an output slot to its zero state.
    fn clear(result: &mut Self::Abi);

    /// The element a pre-sized buffer is filled with.
    fn empty() -> Self::Stored;
}

/// Plain value elements, stored as-is.
///
/// `T` must be [`FromZeros`] so output slots can be zeroed before an operation runs.
pub struct ValueElement<T>(PhantomData<fn() -> T>);

impl<T> Sealed for ValueElement<T> {}

impl<T> ElementTraits for ValueElement<T>
where
    T: Copy + PartialEq + FromZeros + 'static,
{
    type Abi = T;
    type Stored = T;

    #[inline]
    fn wrap(value: &T) -> Result<T> {
        Ok(*value)
    }

    #[inline]
    fn unwrap(stored: &T, result: &mut T) -> Result<()> {
        *result = *stored;
        Ok(())
    }

    #[inline]
    fn equals(stored: &T, value: &T) -> Result<bool> {
        Ok(stored == value)
    }

    #[inline]
    fn clear(result: &mut T) {
        *result = T::new_zeroed();
    }

    #[inline]
    fn empty() -> T {
        T::new_zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_element() {
        type E = ValueElement<i64>;

        let stored = E::wrap(&-7).unwrap();
        let mut out = 99;
        E::unwrap(&stored, &mut out).unwrap();
        assert_eq!(out, -7);

        assert!(E::equals(&stored, &-7).unwrap());
        assert!(!E::equals(&stored, &7).unwrap());

        E::clear(&mut out);
        assert_eq!(out, 0);
        assert_eq!(E::empty(), 0);
    }

    #[test]
    fn test_value_element_float_equality() {
        type E = ValueElement<f64>;

        assert!(E::equals(&0.5, &0.5).unwrap());
        assert!(!E::equals(&f64::NAN, &f64::NAN).unwrap());
        assert!(E::equals(&0.0, &-0.0).unwrap());
    }
}
