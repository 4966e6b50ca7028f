use std::{marker::PhantomData, sync::Arc};

use crate::{ElementTraits, Result, element::Sealed};

/// Reference-counted handle elements.
///
/// A handle is an `Option<Arc<T>>`; `None` is the null handle. Storing a handle takes a
/// strong reference, reading one hands the caller a new strong reference, and dropping
/// the stored element releases it. Two handles are equal when they point at the same
/// object, regardless of the object's contents.
pub struct HandleElement<T: ?Sized>(PhantomData<fn() -> Arc<T>>);

impl<T: ?Sized> Sealed for HandleElement<T> {}

impl<T: ?Sized + 'static> ElementTraits for HandleElement<T> {
    type Abi = Option<Arc<T>>;
    type Stored = Option<Arc<T>>;

    #[inline]
    fn wrap(value: &Option<Arc<T>>) -> Result<Option<Arc<T>>> {
        Ok(value.clone())
    }

    #[inline]
    fn unwrap(stored: &Option<Arc<T>>, result: &mut Option<Arc<T>>) -> Result<()> {
        result.clone_from(stored);
        Ok(())
    }

    #[inline]
    fn equals(stored: &Option<Arc<T>>, value: &Option<Arc<T>>) -> Result<bool> {
        Ok(match (stored, value) {
            (Some(stored), Some(value)) => Arc::ptr_eq(stored, value),
            (None, None) => true,
            _ => false,
        })
    }

    #[inline]
    fn clear(result: &mut Option<Arc<T>>) {
        *result = None;
    }

    #[inline]
    fn empty() -> Option<Arc<T>> {
        None
    }
}
