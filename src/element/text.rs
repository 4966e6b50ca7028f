use std::cmp::Ordering;

use crate::{ElementTraits, Result, TextHandle, element::Sealed};

/// Text elements.
///
/// Storing a [`TextHandle`] keeps a copy of the handle (the string data itself is shared
/// and never copied). Equality is ordinal, see [`TextHandle::compare_ordinal`].
pub struct TextElement;

impl Sealed for TextElement {}

impl ElementTraits for TextElement {
    type Abi = TextHandle;
    type Stored = TextHandle;

    #[inline]
    fn wrap(value: &TextHandle) -> Result<TextHandle> {
        Ok(value.clone())
    }

    #[inline]
    fn unwrap(stored: &TextHandle, result: &mut TextHandle) -> Result<()> {
        result.clone_from(stored);
        Ok(())
    }

    #[inline]
    fn equals(stored: &TextHandle, value: &TextHandle) -> Result<bool> {
        Ok(stored.compare_ordinal(value) == Ordering::Equal)
    }

    #[inline]
    fn clear(result: &mut TextHandle) {
        *result = TextHandle::default();
    }

    #[inline]
    fn empty() -> TextHandle {
        TextHandle::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_equality_is_by_content() {
        let stored = TextElement::wrap(&TextHandle::from("Hello")).unwrap();

        assert!(TextElement::equals(&stored, &TextHandle::from(String::from("Hello"))).unwrap());
        assert!(!TextElement::equals(&stored, &TextHandle::from("hello")).unwrap());
        assert!(!TextElement::equals(&stored, &TextHandle::default()).unwrap());
    }

    #[test]
    fn test_unwrap_copies_handle() {
        let stored = TextHandle::from("shared");
        let mut out = TextHandle::from("old");
        TextElement::unwrap(&stored, &mut out).unwrap();
        assert_eq!(out, "shared");
        assert!(out.shares_data(&stored));

        TextElement::clear(&mut out);
        assert!(out.is_empty());
    }
}
