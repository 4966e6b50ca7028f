use crate::{AbiOf, LifespanTracker, Status, StorageTraits, Vector, VectorIterator};

/// Read-only view of a [`Vector`].
///
/// Every call forwards to the vector, so a view always reflects its current contents.
/// Holding a view keeps the vector alive.
pub struct VectorView<S: StorageTraits> {
    vector: Vector<S>,
    _lifespan: LifespanTracker<VectorView<S>>,
}

impl<S: StorageTraits> VectorView<S> {
    #[inline]
    pub(crate) fn new(vector: Vector<S>) -> Self {
        Self {
            vector,
            _lifespan: LifespanTracker::new(),
        }
    }

    #[inline]
    pub fn get_size(&self, size: Option<&mut u32>) -> Status {
        self.vector.get_size(size)
    }

    #[inline]
    pub fn get_at(&self, index: u32, item: Option<&mut AbiOf<S>>) -> Status {
        self.vector.get_at(index, item)
    }

    #[inline]
    pub fn index_of(
        &self,
        value: &AbiOf<S>,
        index: Option<&mut u32>,
        found: Option<&mut bool>,
    ) -> Status {
        self.vector.index_of(value, index, found)
    }

    #[inline]
    pub fn first(&self, first: Option<&mut Option<VectorIterator<S>>>) -> Status {
        self.vector.first(first)
    }
}

impl<S: StorageTraits> Clone for VectorView<S> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.vector.clone())
    }
}
