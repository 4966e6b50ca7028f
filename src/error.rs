//! Error types raised inside the adapter.
//!
//! This module contains the [`Error`] type which represents every fault an operation can
//! raise before it reaches the boundary. Boundary entry points never return an `Error`:
//! [`fault_boundary`](crate::fault_boundary) converts it into a [`Status`] with
//! [`Error::status`].
//!
//! # Example
//!
//! ```
//! use abi_vector::{Error, Result, Status, ValueVector};
//!
//! fn third(vector: &ValueVector<i32>) -> Result<i32> {
//!     let mut item = 0;
//!     vector.get_at(2, Some(&mut item)).into_result()?;
//!     Ok(item)
//! }
//!
//! let vector = ValueVector::<i32>::from_values(false, &[1, 2]).unwrap();
//! match third(&vector) {
//!     Err(Error::Status(Status::OutOfBounds)) => {}
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

use std::{
    cell::{BorrowError, BorrowMutError},
    collections::TryReserveError,
    fmt::{self, Display},
};

use crate::Status;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all faults that can occur inside a vector operation.
///
/// # Variants
///
/// - [`Status`](Error::Status) - A fault carrying an explicit status
/// - [`Originated`](Error::Originated) - A status with a diagnostic message attached
/// - [`OutOfMemory`](Error::OutOfMemory) - An allocation failed
/// - [`Message`](Error::Message) - Anything else; reported as [`Status::Unexpected`]
#[derive(Debug)]
pub enum Error {
    /// A fault carrying an explicit status.
    ///
    /// The status is reported verbatim at the boundary.
    Status(Status),

    /// A status with a diagnostic message.
    ///
    /// The message is logged when the fault is raised through [`Error::originate`];
    /// only the status crosses the boundary.
    Originated { status: Status, message: String },

    /// Growing the storage buffer failed.
    OutOfMemory,

    Message(String),
}

impl Error {
    /// Raises `status` with a diagnostic message, logging it at the point of origin.
    pub fn originate(status: Status, message: impl Into<String>) -> Self {
        let message = message.into();
        log::warn!("{status}: {message}");
        Error::Originated { status, message }
    }

    /// Returns the status this fault is reported as at the boundary.
    pub fn status(&self) -> Status {
        match self {
            Error::Status(status) | Error::Originated { status, .. } => *status,
            Error::OutOfMemory => Status::OutOfMemory,
            Error::Message(_) => Status::Unexpected,
        }
    }
}

impl From<Status> for Error {
    #[inline]
    fn from(status: Status) -> Self {
        Error::Status(status)
    }
}

impl From<TryReserveError> for Error {
    #[inline]
    fn from(_: TryReserveError) -> Self {
        Error::OutOfMemory
    }
}

impl From<BorrowError> for Error {
    fn from(error: BorrowError) -> Self {
        Error::Message(error.to_string())
    }
}

impl From<BorrowMutError> for Error {
    fn from(error: BorrowMutError) -> Self {
        Error::Message(error.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Status(status) => Display::fmt(status, formatter),
            Error::Originated { status, message } => write!(formatter, "{status}: {message}"),
            Error::OutOfMemory => formatter.write_str("storage allocation failed"),
            Error::Message(message) => formatter.write_str(message),
        }
    }
}

impl std::error::Error for Error {}
