use abi_vector::{Status, ValueVector};
use honggfuzz::fuzz;

/// Replays `data` as a sequence of vector operations and checks every result against a
/// plain `Vec`.
fn run(data: &[u8]) {
    let Some((&flags, mut data)) = data.split_first() else {
        return;
    };
    let fixed_size = flags & 1 != 0;
    let initial: Vec<u8> = data.iter().take((flags >> 1) as usize & 7).copied().collect();
    data = &data[initial.len()..];

    let Ok(vector) = ValueVector::<u8>::from_values(fixed_size, &initial) else {
        return;
    };
    let mut model = initial;

    let mut view = None;
    assert_eq!(vector.get_view(Some(&mut view)), Status::Ok);
    let Some(view) = view else { return };

    while let [op, index, value, rest @ ..] = data {
        data = rest;
        let index = *index as u32;
        let len = model.len();

        let status = match op % 8 {
            0 => {
                let mut item = 0xAA;
                let status = vector.get_at(index, Some(&mut item));
                match model.get(index as usize) {
                    Some(expected) => assert_eq!((status, item), (Status::Ok, *expected)),
                    None => assert_eq!((status, item), (Status::OutOfBounds, 0)),
                }
                continue;
            }
            1 => {
                let status = vector.set_at(index, value);
                if let Some(slot) = model.get_mut(index as usize) {
                    *slot = *value;
                }
                (status, index < len as u32)
            }
            2 => {
                let status = vector.insert_at(index, value);
                let ok = !fixed_size && (index as usize) <= len;
                if ok {
                    model.insert(index as usize, *value);
                }
                (status, ok)
            }
            3 => {
                let status = vector.remove_at(index);
                let ok = !fixed_size && (index as usize) < len;
                if ok {
                    model.remove(index as usize);
                }
                (status, ok)
            }
            4 => {
                let status = vector.append(value);
                if !fixed_size {
                    model.push(*value);
                }
                (status, !fixed_size)
            }
            5 => {
                let status = vector.remove_at_end();
                (status, !fixed_size && model.pop().is_some())
            }
            6 => {
                let status = vector.clear();
                if !fixed_size {
                    model.clear();
                }
                (status, !fixed_size)
            }
            _ => {
                let values = vec![*value; index as usize % 8];
                let status = vector.replace_all(values.len() as u32, Some(values.as_slice()));
                let ok = !fixed_size || values.len() == len;
                if ok {
                    model = values;
                }
                (status, ok)
            }
        };

        assert_eq!(status.0.is_ok(), status.1, "op {op} index {index}");

        let mut size = 0;
        assert_eq!(view.get_size(Some(&mut size)), Status::Ok);
        assert_eq!(size as usize, model.len());
        let (mut found_at, mut found) = (0, false);
        assert_eq!(
            view.index_of(value, Some(&mut found_at), Some(&mut found)),
            Status::Ok
        );
        assert_eq!(
            found.then_some(found_at as usize),
            model.iter().position(|v| v == value)
        );
    }
}

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            run(data);
        });
    }
}
