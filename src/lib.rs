//! Reference-counted vector adapters behind a status-code boundary contract.
//!
//! A [`Vector`] exposes one storage buffer three ways: as a mutable collection, as a
//! read-only [`VectorView`] and as a forward [`VectorIterator`]. All three share the
//! buffer through reference counting and answer every call with a [`Status`] instead of
//! panicking or returning a Rust error across the boundary.
//!
//! The element kind is chosen statically through an [`ElementTraits`] strategy:
//!
//! - [`ValueVector<T>`]: plain values such as `u32` or `f64`
//! - [`HandleVector<T>`]: reference-counted `Arc<T>` handles, compared by identity
//! - [`TextVector`]: immutable [`TextHandle`] strings, compared ordinally
//!
//! ```
//! use std::sync::Arc;
//! use abi_vector::{HandleVector, Status};
//!
//! let brush = Arc::new(String::from("red"));
//! let vector = HandleVector::<String>::new();
//! assert_eq!(vector.append(&Some(brush.clone())), Status::Ok);
//!
//! let (mut index, mut found) = (0, false);
//! let status = vector.index_of(&Some(brush), Some(&mut index), Some(&mut found));
//! assert_eq!(status, Status::Ok);
//! assert!(found);
//!
//! let fixed = HandleVector::<String>::with_size(true, 1).unwrap();
//! assert_eq!(fixed.append(&None), Status::NotImplemented);
//! ```

mod boundary;
mod element;
mod error;
mod lifespan;
mod status;
mod storage;
#[cfg(feature = "text")]
mod text;
mod util;
mod vector;

pub use boundary::*;
pub use element::*;
pub use error::*;
pub use lifespan::*;
pub use status::*;
pub use storage::*;
#[cfg(feature = "text")]
pub use text::*;
pub(crate) use util::*;
pub use vector::*;
