use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    str::Utf8Error,
};

use bytes::Bytes;

/// An immutable, reference-counted string handle.
///
/// Cloning a handle never copies the string data; it only takes another reference to the
/// shared buffer. The empty handle plays the role of a null string.
///
/// # Example
///
/// ```
/// use abi_vector::TextHandle;
///
/// let name = TextHandle::from("Card");
/// let copy = name.clone();
///
/// assert!(copy.shares_data(&name));
/// assert_eq!(copy, "Card");
/// assert!(TextHandle::default().is_empty());
/// ```
#[derive(Clone, Default)]
pub struct TextHandle {
    // Always valid UTF-8.
    data: Bytes,
}

impl TextHandle {
    /// Creates a handle over a static string without allocating.
    #[inline]
    pub const fn from_static(text: &'static str) -> Self {
        Self {
            data: Bytes::from_static(text.as_bytes()),
        }
    }

    /// Creates a handle over an existing byte buffer, validating it as UTF-8.
    pub fn from_utf8(data: Bytes) -> Result<Self, Utf8Error> {
        std::str::from_utf8(&data)?;
        Ok(Self { data })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: every constructor either starts from a `str` or validates the bytes.
        unsafe { std::str::from_utf8_unchecked(&self.data) }
    }

    /// Returns the length of the string in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if both handles refer to the same string buffer.
    #[inline]
    pub fn shares_data(&self, other: &TextHandle) -> bool {
        self.data.as_ptr() == other.data.as_ptr() && self.data.len() == other.data.len()
    }

    /// Returns the underlying shared buffer.
    #[inline]
    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    /// Compares two strings ordinally: UTF-16 code unit by code unit, independent of any
    /// locale or culture.
    ///
    /// Ordering by UTF-16 code units differs from ordering by UTF-8 bytes for characters
    /// outside the Basic Multilingual Plane, e.g. `"\u{FF61}"` sorts after `"\u{1F600}"`.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use abi_vector::TextHandle;
    ///
    /// let a = TextHandle::from("\u{FF61}");
    /// let b = TextHandle::from("\u{1F600}");
    /// assert_eq!(a.compare_ordinal(&b), Ordering::Greater);
    /// assert_eq!(a.as_str().cmp(b.as_str()), Ordering::Less);
    /// ```
    pub fn compare_ordinal(&self, other: &TextHandle) -> Ordering {
        if self.shares_data(other) {
            return Ordering::Equal;
        }
        self.as_str().encode_utf16().cmp(other.as_str().encode_utf16())
    }
}

impl From<&str> for TextHandle {
    #[inline]
    fn from(text: &str) -> Self {
        Self {
            data: Bytes::copy_from_slice(text.as_bytes()),
        }
    }
}

impl From<String> for TextHandle {
    #[inline]
    fn from(text: String) -> Self {
        Self {
            data: Bytes::from(text),
        }
    }
}

impl Deref for TextHandle {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for TextHandle {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for TextHandle {
    #[inline]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for TextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for TextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl PartialEq for TextHandle {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.compare_ordinal(other) == Ordering::Equal
    }
}

impl Eq for TextHandle {}

impl PartialEq<str> for TextHandle {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TextHandle {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialOrd for TextHandle {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TextHandle {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_ordinal(other)
    }
}

impl Hash for TextHandle {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}
