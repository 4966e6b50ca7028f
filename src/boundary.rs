//! The fault boundary.
//!
//! Inside the crate every fault travels as an [`Error`](crate::Error) through `?`. Entry
//! points that face an external caller wrap their body in [`fault_boundary`], the single
//! place where a fault becomes a [`Status`]. Panics are caught there too, so nothing
//! unwinds across the boundary.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use crate::{Result, Status, cold_path};

/// Runs `body` and converts its outcome into a [`Status`].
///
/// - `Ok(())` becomes [`Status::Ok`];
/// - an [`Error`](crate::Error) becomes [`Error::status`](crate::Error::status);
/// - a panic becomes [`Status::Unexpected`].
///
/// # Example
///
/// ```
/// use abi_vector::{Error, Status, fault_boundary};
///
/// assert_eq!(fault_boundary(|| Ok(())), Status::Ok);
/// assert_eq!(
///     fault_boundary(|| Err(Error::Status(Status::OutOfBounds))),
///     Status::OutOfBounds
/// );
/// assert_eq!(fault_boundary(|| Err(Error::OutOfMemory)), Status::OutOfMemory);
/// ```
pub fn fault_boundary(body: impl FnOnce() -> Result<()>) -> Status {
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(Ok(())) => Status::Ok,
        Ok(Err(error)) => {
            cold_path();
            let status = error.status();
            log::debug!("boundary call failed with {status}: {error}");
            status
        }
        Err(payload) => {
            cold_path();
            log::error!(
                "panic caught at boundary: {}",
                panic_message(payload.as_ref())
            );
            Status::Unexpected
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "<non-string panic payload>"
    }
}

/// Checks that a required pointer argument is present.
///
/// `None` stands for a null pointer and raises [`Status::InvalidArgument`].
#[inline]
pub fn check_in_pointer<P>(ptr: Option<P>) -> Result<P> {
    match ptr {
        Some(ptr) => Ok(ptr),
        None => {
            cold_path();
            Err(Status::InvalidArgument.into())
        }
    }
}

/// Checks that an output handle slot is present and resets it to `None`, so a failure
/// later in the call never leaves a stale handle behind.
#[inline]
pub fn check_and_clear_out_pointer<T>(ptr: Option<&mut Option<T>>) -> Result<&mut Option<T>> {
    let ptr = check_in_pointer(ptr)?;
    *ptr = None;
    Ok(ptr)
}
