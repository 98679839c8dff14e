#![cfg(all(test, feature = "std"))]

use byteorder::{BigEndian, LittleEndian};
use proptest::collection::vec;
use proptest::prelude::*;

use crate::convert::{
    bytes_to_numeric, bytes_to_numeric_with, numeric_to_bytes, numeric_to_bytes_with,
    swap_byte_order,
};
use crate::element::Element;

/// A byte buffer plus a sub-range of it covering whole `width`-byte elements.
#[derive(Clone, Debug)]
struct ByteWindow {
    bytes: Vec<u8>,
    offset: usize,
    count: usize,
}

prop_compose! {
    /// A buffer of 0..256 bytes and a window in it holding a whole number of elements.
    fn arb_window(width: usize)(bytes in vec(any::<u8>(), 0..256))(
        offset in 0..=bytes.len(),
        seed in any::<usize>(),
        bytes in Just(bytes),
    ) -> ByteWindow {
        let count = seed % ((bytes.len() - offset) / width + 1);
        ByteWindow { bytes, offset, count }
    }
}

prop_compose! {
    /// A window which runs past the end of its buffer by at least one byte.
    fn arb_overrun(width: usize)(bytes in vec(any::<u8>(), 0..64))(
        offset in 0..=bytes.len() + 8,
        extra in 1usize..4,
        bytes in Just(bytes),
    ) -> ByteWindow {
        let count = (bytes.len().saturating_sub(offset)) / width + extra;
        ByteWindow { bytes, offset, count }
    }
}

/// Reinterprets the window as elements and back again.
fn round_trip<T: Element>(w: &ByteWindow) -> Vec<u8> {
    let mut values = vec![T::default(); w.count];
    bytes_to_numeric(&w.bytes, w.offset, &mut values, 0, w.count).expect("in bounds");

    let mut out = w.bytes.clone();
    out[w.offset..w.offset + w.count * T::WIDTH].fill(0);
    numeric_to_bytes(&values, 0, &mut out, w.offset, w.count).expect("in bounds");
    out
}

fn rejects_overrun<T: Element>(w: &ByteWindow) -> bool {
    let mut values = vec![T::default(); w.count];
    let ok = bytes_to_numeric(&w.bytes, w.offset, &mut values, 0, w.count).is_err();
    ok && values.iter().all(|v| *v == T::default())
}

proptest! {
    /// Bytes to elements to bytes reproduces the original buffer exactly, for every width.
    #[test]
    fn round_trip_i16(w in arb_window(2)) {
        prop_assert_eq!(&w.bytes, &round_trip::<i16>(&w));
    }

    #[test]
    fn round_trip_i32(w in arb_window(4)) {
        prop_assert_eq!(&w.bytes, &round_trip::<i32>(&w));
    }

    #[test]
    fn round_trip_i64(w in arb_window(8)) {
        prop_assert_eq!(&w.bytes, &round_trip::<i64>(&w));
    }

    /// Floats survive too, NaN payloads included, since nothing but bit copies happen.
    #[test]
    fn round_trip_f32(w in arb_window(4)) {
        prop_assert_eq!(&w.bytes, &round_trip::<f32>(&w));
    }

    #[test]
    fn round_trip_f64(w in arb_window(8)) {
        prop_assert_eq!(&w.bytes, &round_trip::<f64>(&w));
    }

    /// Reading past the end of the source fails and leaves the destination untouched.
    #[test]
    fn overrun_is_rejected(w2 in arb_overrun(2), w4 in arb_overrun(4), w8 in arb_overrun(8)) {
        prop_assert!(rejects_overrun::<i16>(&w2));
        prop_assert!(rejects_overrun::<f32>(&w4));
        prop_assert!(rejects_overrun::<i64>(&w8));
    }

    /// Writing past the end of the destination fails and leaves it untouched.
    #[test]
    fn short_destination_is_rejected(
        values in vec(any::<i32>(), 1..32),
        short in 1usize..4,
        offset in 0usize..8,
    ) {
        let len = (values.len() * 4 + offset).saturating_sub(short);
        let mut out = vec![0xAAu8; len];
        prop_assert!(numeric_to_bytes(&values, 0, &mut out, offset, values.len()).is_err());
        prop_assert!(out.iter().all(|&b| b == 0xAA));
    }

    /// Decoding with the opposite byte order equals decoding natively and then swapping.
    #[test]
    fn swap_is_opposite_order(values in vec(any::<i64>(), 0..32)) {
        let mut le = vec![0u8; values.len() * 8];
        numeric_to_bytes_with::<LittleEndian, _>(&values, 0, &mut le, 0, values.len()).unwrap();

        let mut as_be = vec![0i64; values.len()];
        bytes_to_numeric_with::<BigEndian, _>(&le, 0, &mut as_be, 0, values.len()).unwrap();

        let mut swapped = values.clone();
        swap_byte_order(&mut swapped, 0, values.len()).unwrap();
        prop_assert_eq!(&as_be, &swapped);

        swap_byte_order(&mut swapped, 0, values.len()).unwrap();
        prop_assert_eq!(&values, &swapped);
    }
}
