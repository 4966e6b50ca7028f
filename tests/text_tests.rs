#![cfg(feature = "text")]

use std::cmp::Ordering;

use abi_vector::{Status, TextHandle, TextVector};

#[test]
fn test_append_and_read_back() {
    let vector = TextVector::new();
    assert_eq!(vector.append(&TextHandle::from("alpha")), Status::Ok);
    assert_eq!(vector.append(&TextHandle::from_static("beta")), Status::Ok);

    let mut item = TextHandle::default();
    assert_eq!(vector.get_at(1, Some(&mut item)), Status::Ok);
    assert_eq!(item, "beta");
}

#[test]
fn test_stored_text_shares_data() {
    let name = TextHandle::from(String::from("Card"));
    let vector = TextVector::from_values(false, std::slice::from_ref(&name)).unwrap();

    let mut item = TextHandle::default();
    assert_eq!(vector.get_at(0, Some(&mut item)), Status::Ok);
    assert!(item.shares_data(&name));
}

#[test]
fn test_index_of_compares_contents() {
    let vector = TextVector::from_values(
        false,
        &[TextHandle::from("red"), TextHandle::from("green")],
    )
    .unwrap();

    // A separately allocated string with the same contents still matches.
    let green = TextHandle::from(String::from("green"));
    let (mut index, mut found) = (0, false);
    assert_eq!(
        vector.index_of(&green, Some(&mut index), Some(&mut found)),
        Status::Ok
    );
    assert!(found);
    assert_eq!(index, 1);

    assert_eq!(
        vector.index_of(&TextHandle::from("Green"), Some(&mut index), Some(&mut found)),
        Status::Ok
    );
    assert!(!found);
    assert_eq!(index, 0);
}

#[test]
fn test_empty_text_is_the_null_string() {
    let vector = TextVector::with_size(true, 2).unwrap();

    let mut item = TextHandle::from("stale");
    assert_eq!(vector.get_at(0, Some(&mut item)), Status::Ok);
    assert!(item.is_empty());

    let (mut index, mut found) = (9, false);
    assert_eq!(
        vector.index_of(&TextHandle::default(), Some(&mut index), Some(&mut found)),
        Status::Ok
    );
    assert!(found);
    assert_eq!(index, 0);
}

#[test]
fn test_failed_get_clears_text() {
    let vector = TextVector::new();
    let mut item = TextHandle::from("stale");
    assert_eq!(vector.get_at(0, Some(&mut item)), Status::OutOfBounds);
    assert!(item.is_empty());
}

#[test]
fn test_ordinal_compare_uses_utf16_units() {
    // U+FF61 encodes to one unit 0xFF61, U+1F600 to the surrogate pair 0xD83D 0xDE00.
    let halfwidth = TextHandle::from("\u{FF61}");
    let emoji = TextHandle::from("\u{1F600}");

    assert_eq!(halfwidth.compare_ordinal(&emoji), Ordering::Greater);
    assert_eq!(halfwidth.as_str().cmp(emoji.as_str()), Ordering::Less);
    assert!(halfwidth > emoji);
}

#[test]
fn test_ordinal_compare_is_case_sensitive() {
    let upper = TextHandle::from("B");
    let lower = TextHandle::from("a");
    assert_eq!(upper.compare_ordinal(&lower), Ordering::Less);
    assert_eq!(
        TextHandle::from("ab").compare_ordinal(&TextHandle::from("abc")),
        Ordering::Less
    );
    assert_eq!(
        TextHandle::default().compare_ordinal(&TextHandle::from("")),
        Ordering::Equal
    );
}

#[test]
fn test_from_utf8() {
    let handle = TextHandle::from_utf8(bytes::Bytes::from_static(b"ok")).unwrap();
    assert_eq!(handle.len(), 2);
    assert!(TextHandle::from_utf8(bytes::Bytes::from_static(&[0xFF, 0xFE])).is_err());
}

#[test]
fn test_view_over_text() {
    let vector = TextVector::new();
    let mut view = None;
    assert_eq!(vector.get_view(Some(&mut view)), Status::Ok);
    let view = view.unwrap();

    assert_eq!(vector.append(&TextHandle::from("late")), Status::Ok);

    let mut item = TextHandle::default();
    assert_eq!(view.get_at(0, Some(&mut item)), Status::Ok);
    assert_eq!(item.to_string(), "late");
}
