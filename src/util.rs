#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

/// Converts a buffer length into the `u32` size the boundary contract reports.
///
/// Growth through the boundary goes through [`ensure_capacity`] and stops at `u32::MAX`.
/// An owner can still push further through `internal_vector()`; such a length
/// saturates instead of wrapping.
#[inline]
pub(crate) fn len_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Reserves room for `additional` more elements, reporting allocation failure (and
/// growth past the `u32` index space) as an error instead of aborting.
#[inline]
pub(crate) fn ensure_capacity<T>(buffer: &mut Vec<T>, additional: usize) -> crate::Result<()> {
    if buffer.len().saturating_add(additional) > u32::MAX as usize {
        cold_path();
        return Err(crate::Error::OutOfMemory);
    }
    buffer.try_reserve(additional)?;
    Ok(())
}
