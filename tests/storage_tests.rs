//! Vectors over storage that runs out of room.

use abi_vector::{
    DefaultStorage, Error, Result, Status, StorageTraits, ValueElement, ValueVector, Vector,
};

type Inner = DefaultStorage<ValueElement<u16>>;

/// Storage that refuses to hold more than `CAP` elements.
struct Capped;

const CAP: usize = 2;

impl StorageTraits for Capped {
    type Element = ValueElement<u16>;
    type Buffer = Vec<u16>;

    fn with_size(len: u32) -> Result<Vec<u16>> {
        if len as usize > CAP {
            return Err(Error::OutOfMemory);
        }
        Inner::with_size(len)
    }

    fn size(buffer: &Vec<u16>) -> u32 {
        Inner::size(buffer)
    }

    fn get_at(buffer: &Vec<u16>, index: u32) -> Result<&u16> {
        Inner::get_at(buffer, index)
    }

    fn set_at(buffer: &mut Vec<u16>, index: u32, item: &u16) -> Result<()> {
        Inner::set_at(buffer, index, item)
    }

    fn insert_at(buffer: &mut Vec<u16>, index: u32, item: &u16) -> Result<()> {
        if buffer.len() >= CAP {
            return Err(Error::OutOfMemory);
        }
        Inner::insert_at(buffer, index, item)
    }

    fn remove_at(buffer: &mut Vec<u16>, index: u32) -> Result<()> {
        Inner::remove_at(buffer, index)
    }

    fn append(buffer: &mut Vec<u16>, item: &u16) -> Result<()> {
        if buffer.len() >= CAP {
            return Err(Error::OutOfMemory);
        }
        Inner::append(buffer, item)
    }

    fn clear(buffer: &mut Vec<u16>) -> Result<()> {
        Inner::clear(buffer)
    }
}

fn contents<S: StorageTraits<Element = ValueElement<u16>>>(vector: &Vector<S>) -> Vec<u16> {
    let mut size = 0;
    assert_eq!(vector.get_size(Some(&mut size)), Status::Ok);
    (0..size)
        .map(|i| {
            let mut item = 0;
            assert_eq!(vector.get_at(i, Some(&mut item)), Status::Ok);
            item
        })
        .collect()
}

#[test]
fn test_failed_replace_all_keeps_contents_and_flag() {
    let vector = Vector::<Capped>::from_values(false, &[1]).unwrap();

    assert_eq!(vector.replace_all(3, Some(&[7, 8, 9])), Status::OutOfMemory);
    assert_eq!(contents(&vector), [1]);
    assert!(!vector.is_changed());
}

#[test]
fn test_same_size_replace_all_on_fixed_storage() {
    let vector = Vector::<Capped>::from_values(true, &[1, 2]).unwrap();
    assert_eq!(vector.replace_all(2, Some(&[3, 4])), Status::Ok);
    assert_eq!(contents(&vector), [3, 4]);
    assert!(vector.is_changed());
}

#[test]
fn test_replace_all_within_capacity() {
    let vector = Vector::<Capped>::from_values(false, &[1]).unwrap();
    assert_eq!(vector.replace_all(2, Some(&[7, 8])), Status::Ok);
    assert_eq!(contents(&vector), [7, 8]);
    assert!(vector.is_changed());
}

#[test]
fn test_full_storage_reports_out_of_memory() {
    let vector = Vector::<Capped>::from_values(false, &[1, 2]).unwrap();

    assert_eq!(vector.append(&3), Status::OutOfMemory);
    assert_eq!(vector.insert_at(0, &3), Status::OutOfMemory);
    assert_eq!(contents(&vector), [1, 2]);
    assert!(!vector.is_changed());

    assert!(matches!(
        Vector::<Capped>::with_size(false, 3),
        Err(Error::OutOfMemory)
    ));
}

#[test]
fn test_growth_past_u32_is_out_of_memory() {
    let vector = ValueVector::<()>::new();
    {
        let mut buffer = vector.internal_vector().unwrap();
        // SAFETY: `()` is zero-sized, so every slot up to the (unbounded) capacity is
        // already a valid value.
        unsafe { buffer.set_len(u32::MAX as usize) };
    }

    let mut size = 0;
    assert_eq!(vector.get_size(Some(&mut size)), Status::Ok);
    assert_eq!(size, u32::MAX);

    assert_eq!(vector.append(&()), Status::OutOfMemory);
    assert_eq!(vector.insert_at(0, &()), Status::OutOfMemory);
    assert!(!vector.is_changed());

    let mut item = ();
    assert_eq!(vector.get_at(u32::MAX - 1, Some(&mut item)), Status::Ok);
    assert_eq!(vector.remove_at_end(), Status::Ok);
    assert_eq!(vector.append(&()), Status::Ok);
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_oversized_buffer_reports_saturated_size() {
    let vector = ValueVector::<()>::new();
    {
        let mut buffer = vector.internal_vector().unwrap();
        // SAFETY: as above, `()` needs no initialisation.
        unsafe { buffer.set_len(u32::MAX as usize + 5) };
    }

    let mut size = 0;
    assert_eq!(vector.get_size(Some(&mut size)), Status::Ok);
    assert_eq!(size, u32::MAX);
    assert_eq!(vector.append(&()), Status::OutOfMemory);
}
