//! Storage traits: bounds-checked operations on the buffer behind a vector.

use std::marker::PhantomData;

use crate::{ElementTraits, Result, Status, cold_path, ensure_capacity, len_u32};

/// The boundary-facing element type of a storage strategy.
pub type AbiOf<S> = <<S as StorageTraits>::Element as ElementTraits>::Abi;

/// The stored element type of a storage strategy.
pub type StoredOf<S> = <<S as StorageTraits>::Element as ElementTraits>::Stored;

/// Describes how a vector's buffer is implemented.
///
/// Every index is checked against the current size before it is used. Reads and writes
/// require `index < size`; insertion also accepts `index == size`, which appends.
/// Bounds failures raise [`Status::OutOfBounds`].
///
/// [`DefaultStorage`] keeps elements in a `Vec`. Owners that need a different buffer
/// can implement this trait and plug it into [`Vector`](crate::Vector).
pub trait StorageTraits: 'static {
    type Element: ElementTraits;
    type Buffer: Default;

    /// Builds a buffer holding `len` empty elements.
    fn with_size(len: u32) -> Result<Self::Buffer>;

    fn size(buffer: &Self::Buffer) -> u32;

    fn get_at(buffer: &Self::Buffer, index: u32) -> Result<&StoredOf<Self>>;

    /// Overwrites the element at `index`. The size does not change.
    fn set_at(buffer: &mut Self::Buffer, index: u32, item: &AbiOf<Self>) -> Result<()>;

    fn insert_at(buffer: &mut Self::Buffer, index: u32, item: &AbiOf<Self>) -> Result<()>;

    fn remove_at(buffer: &mut Self::Buffer, index: u32) -> Result<()>;

    fn append(buffer: &mut Self::Buffer, item: &AbiOf<Self>) -> Result<()>;

    /// Removes every element, releasing whatever each one owns.
    fn clear(buffer: &mut Self::Buffer) -> Result<()>;
}

/// `Vec`-backed storage for elements of strategy `E`.
pub struct DefaultStorage<E>(PhantomData<fn() -> E>);

#[inline]
fn check_index(index: u32, size: usize) -> Result<usize> {
    let index = index as usize;
    if index >= size {
        cold_path();
        return Err(Status::OutOfBounds.into());
    }
    Ok(index)
}

impl<E: ElementTraits> StorageTraits for DefaultStorage<E> {
    type Element = E;
    type Buffer = Vec<E::Stored>;

    fn with_size(len: u32) -> Result<Vec<E::Stored>> {
        let mut buffer = Vec::new();
        ensure_capacity(&mut buffer, len as usize)?;
        buffer.resize_with(len as usize, E::empty);
        Ok(buffer)
    }

    #[inline]
    fn size(buffer: &Vec<E::Stored>) -> u32 {
        len_u32(buffer.len())
    }

    #[inline]
    fn get_at(buffer: &Vec<E::Stored>, index: u32) -> Result<&E::Stored> {
        let index = check_index(index, buffer.len())?;
        Ok(&buffer[index])
    }

    #[inline]
    fn set_at(buffer: &mut Vec<E::Stored>, index: u32, item: &E::Abi) -> Result<()> {
        let index = check_index(index, buffer.len())?;
        buffer[index] = E::wrap(item)?;
        Ok(())
    }

    fn insert_at(buffer: &mut Vec<E::Stored>, index: u32, item: &E::Abi) -> Result<()> {
        let index = index as usize;
        if index > buffer.len() {
            cold_path();
            return Err(Status::OutOfBounds.into());
        }
        let stored = E::wrap(item)?;
        ensure_capacity(buffer, 1)?;
        buffer.insert(index, stored);
        Ok(())
    }

    fn remove_at(buffer: &mut Vec<E::Stored>, index: u32) -> Result<()> {
        let index = check_index(index, buffer.len())?;
        buffer.remove(index);
        Ok(())
    }

    #[inline]
    fn append(buffer: &mut Vec<E::Stored>, item: &E::Abi) -> Result<()> {
        let stored = E::wrap(item)?;
        ensure_capacity(buffer, 1)?;
        buffer.push(stored);
        Ok(())
    }

    #[inline]
    fn clear(buffer: &mut Vec<E::Stored>) -> Result<()> {
        buffer.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ValueElement};

    type S = DefaultStorage<ValueElement<u16>>;

    fn is_out_of_bounds<T>(result: Result<T>) -> bool {
        matches!(result, Err(Error::Status(Status::OutOfBounds)))
    }

    #[test]
    fn test_with_size_fills_empty_elements() {
        let buffer = S::with_size(4).unwrap();
        assert_eq!(S::size(&buffer), 4);
        assert_eq!(buffer, vec![0; 4]);
    }

    #[test]
    fn test_bounds() {
        let mut buffer = S::with_size(2).unwrap();

        assert!(S::get_at(&buffer, 1).is_ok());
        assert!(is_out_of_bounds(S::get_at(&buffer, 2)));
        assert!(is_out_of_bounds(S::set_at(&mut buffer, 2, &1)));
        assert!(is_out_of_bounds(S::remove_at(&mut buffer, 2)));
        assert!(is_out_of_bounds(S::remove_at(&mut buffer, u32::MAX)));
        assert!(is_out_of_bounds(S::insert_at(&mut buffer, 3, &1)));

        S::insert_at(&mut buffer, 2, &9).unwrap();
        assert_eq!(buffer, vec![0, 0, 9]);
    }

    #[test]
    fn test_mutations() {
        let mut buffer = S::with_size(0).unwrap();
        S::append(&mut buffer, &1).unwrap();
        S::append(&mut buffer, &3).unwrap();
        S::insert_at(&mut buffer, 1, &2).unwrap();
        S::insert_at(&mut buffer, 0, &0).unwrap();
        assert_eq!(buffer, vec![0, 1, 2, 3]);

        S::set_at(&mut buffer, 3, &30).unwrap();
        S::remove_at(&mut buffer, 0).unwrap();
        assert_eq!(buffer, vec![1, 2, 30]);
        assert_eq!(*S::get_at(&buffer, 2).unwrap(), 30);

        S::clear(&mut buffer).unwrap();
        assert_eq!(S::size(&buffer), 0);
    }
}
