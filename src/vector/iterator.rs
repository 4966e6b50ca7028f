use std::cell::Cell;

use crate::{
    AbiOf, LifespanTracker, Status, StorageTraits, Vector, check_in_pointer, cold_path,
    fault_boundary,
};

/// Forward-only cursor over a [`Vector`].
///
/// The position is checked against the vector's size on every call, so elements
/// inserted or removed while the iterator exists are observed immediately. There is no
/// invalidation: after a `clear()` the iterator simply reports no current element.
///
/// # Example
///
/// ```
/// use abi_vector::{Status, ValueVector};
///
/// let vector = ValueVector::<u8>::from_values(false, &[1, 2]).unwrap();
/// let mut first = None;
/// assert_eq!(vector.first(Some(&mut first)), Status::Ok);
/// let iterator = first.unwrap();
///
/// let mut values = Vec::new();
/// let mut has_current = false;
/// assert_eq!(iterator.get_has_current(Some(&mut has_current)), Status::Ok);
/// while has_current {
///     let mut value = 0;
///     assert_eq!(iterator.get_current(Some(&mut value)), Status::Ok);
///     values.push(value);
///     assert_eq!(iterator.move_next(Some(&mut has_current)), Status::Ok);
/// }
///
/// assert_eq!(values, [1, 2]);
/// assert_eq!(iterator.move_next(Some(&mut has_current)), Status::OutOfBounds);
/// ```
pub struct VectorIterator<S: StorageTraits> {
    vector: Vector<S>,
    position: Cell<u32>,
    _lifespan: LifespanTracker<VectorIterator<S>>,
}

impl<S: StorageTraits> VectorIterator<S> {
    #[inline]
    pub(crate) fn new(vector: Vector<S>) -> Self {
        Self {
            vector,
            position: Cell::new(0),
            _lifespan: LifespanTracker::new(),
        }
    }

    /// Writes the element under the cursor into `current`.
    ///
    /// Fails with [`Status::OutOfBounds`] once the iterator is exhausted.
    #[inline]
    pub fn get_current(&self, current: Option<&mut AbiOf<S>>) -> Status {
        self.vector.get_at(self.position.get(), current)
    }

    pub fn get_has_current(&self, has_current: Option<&mut bool>) -> Status {
        fault_boundary(|| {
            let has_current = check_in_pointer(has_current)?;
            *has_current = self.position.get() < self.vector.size()?;
            Ok(())
        })
    }

    /// Advances the cursor and reports whether it landed on an element.
    ///
    /// Fails with [`Status::OutOfBounds`] if the cursor is already at or past the end.
    pub fn move_next(&self, has_current: Option<&mut bool>) -> Status {
        fault_boundary(|| {
            let has_current = check_in_pointer(has_current)?;
            *has_current = false;

            let size = self.vector.size()?;
            let position = self.position.get();
            if position >= size {
                cold_path();
                return Err(Status::OutOfBounds.into());
            }

            self.position.set(position + 1);
            *has_current = position + 1 < size;
            Ok(())
        })
    }
}
