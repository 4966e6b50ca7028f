use std::fmt::{self, Display};

use crate::{Error, Result};

/// Result code returned by every boundary entry point.
///
/// The discriminants are the HRESULT values external runtimes already understand, so a
/// `Status` can be handed across an ABI as a plain `i32` and decoded again with
/// [`Status::from_code`].
///
/// # Example
///
/// ```
/// use abi_vector::{Status, ValueVector};
///
/// let vector = ValueVector::<u32>::new();
/// let mut item = 0;
///
/// assert_eq!(vector.get_at(0, Some(&mut item)), Status::OutOfBounds);
/// assert_eq!(Status::OutOfBounds.code() as u32, 0x8000_000B);
/// ```
#[repr(i32)]
#[must_use = "a failed call is only reported through its Status"]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Status {
    /// The operation succeeded.
    #[default]
    Ok = 0,

    /// A mutating operation was attempted on a fixed-size vector.
    NotImplemented = 0x8000_4001_u32 as i32,

    /// An index was outside `[0, size)` (or `[0, size]` for insertion).
    OutOfBounds = 0x8000_000B_u32 as i32,

    /// Any fault that carries no more specific status.
    Unexpected = 0x8000_FFFF_u32 as i32,

    /// An allocation or copy failed.
    OutOfMemory = 0x8007_000E_u32 as i32,

    /// A required pointer was null or an argument was malformed.
    InvalidArgument = 0x8007_0057_u32 as i32,
}

impl Status {
    /// Returns the raw status code.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Decodes a raw status code. Unknown codes yield `None`.
    pub const fn from_code(code: i32) -> Option<Self> {
        Some(match code as u32 {
            0 => Self::Ok,
            0x8000_4001 => Self::NotImplemented,
            0x8000_000B => Self::OutOfBounds,
            0x8000_FFFF => Self::Unexpected,
            0x8007_000E => Self::OutOfMemory,
            0x8007_0057 => Self::InvalidArgument,
            _ => return None,
        })
    }

    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Returns `true` for every status except [`Status::Ok`].
    #[inline]
    pub const fn is_err(self) -> bool {
        !self.is_ok()
    }

    /// Converts the status back into a [`Result`], so callers on the Rust side of the
    /// boundary can keep using `?`.
    #[inline]
    pub fn into_result(self) -> Result<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(Error::Status(self))
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NotImplemented => "not implemented",
            Self::OutOfBounds => "index out of bounds",
            Self::Unexpected => "unexpected failure",
            Self::OutOfMemory => "out of memory",
            Self::InvalidArgument => "invalid argument",
        }
    }
}

impl Display for Status {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{} ({:#010x})", self.name(), self.code() as u32)
    }
}

impl From<Status> for i32 {
    #[inline]
    fn from(status: Status) -> Self {
        status.code()
    }
}
