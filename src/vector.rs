//! The vector adapter and its views.
//!
//! A [`Vector`] is a cloneable, reference-counted handle to one storage buffer. Views
//! ([`VectorView`]) and iterators ([`VectorIterator`]) hold another reference to the same
//! vector, so they keep it alive and always observe its current contents.
//!
//! Every boundary entry point returns a [`Status`]. Outputs are passed as
//! `Option<&mut T>`, where `None` stands for a null pointer; they are cleared before any
//! work is done, so a failed call never leaves a partial result behind.
//!
//! # Example
//!
//! ```
//! use abi_vector::{Status, ValueVector};
//!
//! let vector = ValueVector::<u32>::new();
//! assert_eq!(vector.append(&10), Status::Ok);
//! assert_eq!(vector.append(&20), Status::Ok);
//!
//! let mut view = None;
//! assert_eq!(vector.get_view(Some(&mut view)), Status::Ok);
//! let view = view.unwrap();
//!
//! assert_eq!(vector.append(&30), Status::Ok);
//!
//! let mut size = 0;
//! assert_eq!(view.get_size(Some(&mut size)), Status::Ok);
//! assert_eq!(size, 3);
//! ```

use std::{
    cell::{Cell, Ref, RefCell, RefMut},
    fmt,
    rc::Rc,
};

use crate::{
    AbiOf, DefaultStorage, ElementTraits, Error, HandleElement, LifespanTracker, Result, Status,
    StorageTraits, ValueElement, check_and_clear_out_pointer, check_in_pointer, cold_path,
    fault_boundary,
};

mod iterator;
mod view;

pub use iterator::*;
pub use view::*;

/// Vector of plain values.
pub type ValueVector<T> = Vector<DefaultStorage<ValueElement<T>>>;
/// Vector of reference-counted handles.
pub type HandleVector<T> = Vector<DefaultStorage<HandleElement<T>>>;
/// Vector of text handles.
#[cfg(feature = "text")]
pub type TextVector = Vector<DefaultStorage<crate::TextElement>>;

pub type ValueVectorView<T> = VectorView<DefaultStorage<ValueElement<T>>>;
pub type HandleVectorView<T> = VectorView<DefaultStorage<HandleElement<T>>>;
#[cfg(feature = "text")]
pub type TextVectorView = VectorView<DefaultStorage<crate::TextElement>>;

pub type ValueVectorIterator<T> = VectorIterator<DefaultStorage<ValueElement<T>>>;
pub type HandleVectorIterator<T> = VectorIterator<DefaultStorage<HandleElement<T>>>;
#[cfg(feature = "text")]
pub type TextVectorIterator = VectorIterator<DefaultStorage<crate::TextElement>>;

struct VectorInner<S: StorageTraits> {
    buffer: RefCell<S::Buffer>,
    fixed_size: bool,
    changed: Cell<bool>,
    _lifespan: LifespanTracker<Vector<S>>,
}

/// A mutable, resizable or fixed-size indexed sequence.
///
/// Cloning a `Vector` takes another reference to the same storage; it never copies
/// elements.
pub struct Vector<S: StorageTraits> {
    inner: Rc<VectorInner<S>>,
}

impl<S: StorageTraits> Clone for Vector<S> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: StorageTraits> Default for Vector<S> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StorageTraits> fmt::Debug for Vector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Vector");
        match self.size() {
            Ok(size) => debug.field("size", &size),
            Err(_) => debug.field("size", &"<borrowed>"),
        };
        debug
            .field("fixed_size", &self.inner.fixed_size)
            .field("changed", &self.inner.changed.get())
            .finish()
    }
}

impl<S: StorageTraits> Vector<S> {
    fn from_buffer(buffer: S::Buffer, fixed_size: bool) -> Self {
        Self {
            inner: Rc::new(VectorInner {
                buffer: RefCell::new(buffer),
                fixed_size,
                changed: Cell::new(false),
                _lifespan: LifespanTracker::new(),
            }),
        }
    }

    /// Creates an empty, resizable vector.
    #[inline]
    pub fn new() -> Self {
        Self::from_buffer(S::Buffer::default(), false)
    }

    /// Creates a vector holding `size` empty elements (zeroes, null handles or empty
    /// strings).
    pub fn with_size(fixed_size: bool, size: u32) -> Result<Self> {
        Ok(Self::from_buffer(S::with_size(size)?, fixed_size))
    }

    /// Creates a vector holding a copy of `values`.
    pub fn from_values(fixed_size: bool, values: &[AbiOf<S>]) -> Result<Self> {
        let mut buffer = S::Buffer::default();
        for value in values {
            S::append(&mut buffer, value)?;
        }
        Ok(Self::from_buffer(buffer, fixed_size))
    }

    /// Returns `true` if the number of elements can never change.
    #[inline]
    pub fn is_fixed_size(&self) -> bool {
        self.inner.fixed_size
    }

    /// Returns `true` if the contents changed since the last `set_changed(false)`.
    #[inline]
    pub fn is_changed(&self) -> bool {
        self.inner.changed.get()
    }

    #[inline]
    pub fn set_changed(&self, changed: bool) {
        self.inner.changed.set(changed);
    }

    /// Borrows the storage buffer directly, bypassing the boundary.
    ///
    /// Changes made through the returned guard do not set the changed flag and ignore
    /// [`is_fixed_size`](Self::is_fixed_size). Fails if the buffer is already borrowed.
    ///
    /// Sizes are reported as `u32`. A buffer grown past `u32::MAX` elements through this
    /// guard reports a size of `u32::MAX`, and elements beyond that index are unreachable
    /// through the boundary.
    pub fn internal_vector(&self) -> Result<RefMut<'_, S::Buffer>> {
        Ok(self.inner.buffer.try_borrow_mut()?)
    }

    /// Returns the number of vectors, views and iterators sharing this storage.
    #[inline]
    pub fn strong_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    /// Returns `true` if both handles refer to the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    #[inline]
    fn buffer(&self) -> Result<Ref<'_, S::Buffer>> {
        Ok(self.inner.buffer.try_borrow()?)
    }

    #[inline]
    fn buffer_mut(&self) -> Result<RefMut<'_, S::Buffer>> {
        Ok(self.inner.buffer.try_borrow_mut()?)
    }

    #[inline]
    pub(crate) fn size(&self) -> Result<u32> {
        Ok(S::size(&*self.buffer()?))
    }

    #[inline]
    fn check_resizable(&self) -> Result<()> {
        if self.inner.fixed_size {
            cold_path();
            return Err(Status::NotImplemented.into());
        }
        Ok(())
    }

    #[inline]
    fn mark_changed(&self) {
        self.inner.changed.set(true);
    }

    // ============ Boundary entry points ============

    pub fn get_size(&self, size: Option<&mut u32>) -> Status {
        fault_boundary(|| {
            let size = check_in_pointer(size)?;
            *size = self.size()?;
            Ok(())
        })
    }

    /// Writes the element at `index` into `item`.
    ///
    /// Fails with [`Status::OutOfBounds`] if `index >= size`.
    pub fn get_at(&self, index: u32, item: Option<&mut AbiOf<S>>) -> Status {
        fault_boundary(|| {
            let item = check_in_pointer(item)?;
            S::Element::clear(item);

            let buffer = self.buffer()?;
            S::Element::unwrap(S::get_at(&buffer, index)?, item)
        })
    }

    /// Finds the first element equal to `value`.
    ///
    /// Reports `found = false` and `index = 0` if there is none.
    pub fn index_of(
        &self,
        value: &AbiOf<S>,
        index: Option<&mut u32>,
        found: Option<&mut bool>,
    ) -> Status {
        fault_boundary(|| {
            let index = check_in_pointer(index)?;
            let found = check_in_pointer(found)?;
            *index = 0;
            *found = false;

            let buffer = self.buffer()?;
            for i in 0..S::size(&buffer) {
                if S::Element::equals(S::get_at(&buffer, i)?, value)? {
                    *index = i;
                    *found = true;
                    break;
                }
            }
            Ok(())
        })
    }

    /// Overwrites the element at `index`. Allowed on fixed-size vectors.
    pub fn set_at(&self, index: u32, item: &AbiOf<S>) -> Status {
        fault_boundary(|| {
            S::set_at(&mut *self.buffer_mut()?, index, item)?;
            self.mark_changed();
            Ok(())
        })
    }

    /// Inserts `item` before `index`; `index == size` appends.
    pub fn insert_at(&self, index: u32, item: &AbiOf<S>) -> Status {
        fault_boundary(|| {
            self.check_resizable()?;
            S::insert_at(&mut *self.buffer_mut()?, index, item)?;
            self.mark_changed();
            Ok(())
        })
    }

    pub fn remove_at(&self, index: u32) -> Status {
        fault_boundary(|| {
            self.check_resizable()?;
            S::remove_at(&mut *self.buffer_mut()?, index)?;
            self.mark_changed();
            Ok(())
        })
    }

    pub fn append(&self, item: &AbiOf<S>) -> Status {
        fault_boundary(|| {
            self.check_resizable()?;
            S::append(&mut *self.buffer_mut()?, item)?;
            self.mark_changed();
            Ok(())
        })
    }

    /// Removes the last element.
    ///
    /// On an empty vector the last index `size - 1` wraps around to `u32::MAX`, so the
    /// call fails with [`Status::OutOfBounds`].
    pub fn remove_at_end(&self) -> Status {
        fault_boundary(|| {
            self.check_resizable()?;
            let mut buffer = self.buffer_mut()?;
            let last = S::size(&buffer).wrapping_sub(1);
            S::remove_at(&mut buffer, last)?;
            drop(buffer);
            self.mark_changed();
            Ok(())
        })
    }

    pub fn clear(&self) -> Status {
        fault_boundary(|| {
            self.check_resizable()?;
            S::clear(&mut *self.buffer_mut()?)?;
            self.mark_changed();
            Ok(())
        })
    }

    /// Replaces the contents with the first `count` entries of `values`.
    ///
    /// When `count` equals the current size the size is kept, which also works on
    /// fixed-size vectors. Any other `count` fails with [`Status::NotImplemented`] if the
    /// vector is fixed-size.
    ///
    /// The new contents are built in a separate buffer and swapped in once every value
    /// has been stored. On failure the vector and its changed flag are left as they were.
    ///
    /// `None` or fewer than `count` values fail with [`Status::InvalidArgument`].
    pub fn replace_all(&self, count: u32, values: Option<&[AbiOf<S>]>) -> Status {
        fault_boundary(|| {
            let values = check_in_pointer(values)?;
            let Some(values) = values.get(..count as usize) else {
                cold_path();
                return Err(Error::originate(
                    Status::InvalidArgument,
                    format!("replace_all needs {count} values, got {}", values.len()),
                ));
            };

            let mut buffer = self.buffer_mut()?;
            if count != S::size(&buffer) {
                self.check_resizable()?;
            }

            // Built aside so a failed append leaves the old contents in place.
            let mut replacement = S::Buffer::default();
            for value in values {
                S::append(&mut replacement, value)?;
            }
            let old = std::mem::replace(&mut *buffer, replacement);
            drop(buffer);
            drop(old);

            self.mark_changed();
            Ok(())
        })
    }

    /// Creates a read-only view of this vector.
    pub fn get_view(&self, view: Option<&mut Option<VectorView<S>>>) -> Status {
        fault_boundary(|| {
            let view = check_and_clear_out_pointer(view)?;
            *view = Some(VectorView::new(self.clone()));
            Ok(())
        })
    }

    /// Creates an iterator positioned at the first element.
    pub fn first(&self, first: Option<&mut Option<VectorIterator<S>>>) -> Status {
        fault_boundary(|| {
            let first = check_and_clear_out_pointer(first)?;
            *first = Some(VectorIterator::new(self.clone()));
            Ok(())
        })
    }
}
