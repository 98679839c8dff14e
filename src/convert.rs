//! Typed, bounds-checked copies between byte buffers and numeric arrays.
use byteorder::{ByteOrder, NativeEndian};

use crate::bounds::span;
use crate::element::Element;
use crate::error::{Result, Side};

/// Reinterprets `count` elements' worth of bytes from `source`, starting at byte
/// `source_offset`, and stores them in `destination` starting at element `destination_offset`.
///
/// Bytes are read in the host's native order; no value conversion takes place. Both ranges are
/// validated before anything is written.
#[inline]
pub fn bytes_to_numeric<T: Element>(
    source: &[u8],
    source_offset: usize,
    destination: &mut [T],
    destination_offset: usize,
    count: usize,
) -> Result<()> {
    bytes_to_numeric_with::<NativeEndian, T>(
        source,
        source_offset,
        destination,
        destination_offset,
        count,
    )
}

/// Like [`bytes_to_numeric`], but reads the bytes in byte order `B`.
pub fn bytes_to_numeric_with<B: ByteOrder, T: Element>(
    source: &[u8],
    source_offset: usize,
    destination: &mut [T],
    destination_offset: usize,
    count: usize,
) -> Result<()> {
    let src = span(Side::Source, source_offset, count, T::WIDTH, source.len())?;
    let dst = span(Side::Destination, destination_offset, count, 1, destination.len())?;
    T::read_into::<B>(&source[src], &mut destination[dst]);
    Ok(())
}

/// Writes the raw bytes of `count` elements of `source`, starting at element `source_offset`,
/// into `destination` starting at byte `destination_offset`, in the host's native order.
#[inline]
pub fn numeric_to_bytes<T: Element>(
    source: &[T],
    source_offset: usize,
    destination: &mut [u8],
    destination_offset: usize,
    count: usize,
) -> Result<()> {
    numeric_to_bytes_with::<NativeEndian, T>(
        source,
        source_offset,
        destination,
        destination_offset,
        count,
    )
}

/// Like [`numeric_to_bytes`], but writes the bytes in byte order `B`.
pub fn numeric_to_bytes_with<B: ByteOrder, T: Element>(
    source: &[T],
    source_offset: usize,
    destination: &mut [u8],
    destination_offset: usize,
    count: usize,
) -> Result<()> {
    let src = span(Side::Source, source_offset, count, 1, source.len())?;
    let dst = span(Side::Destination, destination_offset, count, T::WIDTH, destination.len())?;
    T::write_into::<B>(&source[src], &mut destination[dst]);
    Ok(())
}

/// Reverses the byte order of `count` elements of `values` starting at `offset`.
///
/// This is the separate pass needed when the bytes were produced for, or will be consumed by, a
/// host of the other endianness.
pub fn swap_byte_order<T: Element>(values: &mut [T], offset: usize, count: usize) -> Result<()> {
    let range = span(Side::Destination, offset, count, 1, values.len())?;
    T::swap_in_place(&mut values[range]);
    Ok(())
}

/// Decodes `count` elements from `source` starting at byte `source_offset` into a new vector.
#[cfg(feature = "std")]
pub fn to_numeric_vec<T: Element>(
    source: &[u8],
    source_offset: usize,
    count: usize,
) -> Result<Vec<T>> {
    let src = span(Side::Source, source_offset, count, T::WIDTH, source.len())?;
    let mut out = vec![T::default(); count];
    T::read_into::<NativeEndian>(&source[src], &mut out);
    Ok(out)
}

/// Encodes `count` elements of `source` starting at `source_offset` into a new byte vector.
#[cfg(feature = "std")]
pub fn to_byte_vec<T: Element>(
    source: &[T],
    source_offset: usize,
    count: usize,
) -> Result<Vec<u8>> {
    let src = span(Side::Source, source_offset, count, 1, source.len())?;
    let mut out = vec![0u8; count * T::WIDTH];
    T::write_into::<NativeEndian>(&source[src], &mut out);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use byteorder::{BigEndian, LittleEndian};

    use super::*;
    use crate::error::{Cause, OutOfBoundsError};

    #[test]
    #[cfg(target_endian = "little")]
    fn one_float() {
        let bytes = [0x00, 0x00, 0x80, 0x3F];
        let mut floats = [0f32; 1];
        bytes_to_numeric(&bytes, 0, &mut floats, 0, 1).unwrap();
        assert_eq!([1.0], floats);

        let mut back = [0u8; 4];
        numeric_to_bytes(&floats, 0, &mut back, 0, 1).unwrap();
        assert_eq!(bytes, back);
    }

    #[test]
    fn sub_ranges() {
        let values = [10i32, 20, 30, 40];
        let mut bytes = [0xFFu8; 14];
        numeric_to_bytes(&values, 1, &mut bytes, 3, 2).unwrap();

        assert_eq!([0xFF; 3], bytes[..3]);
        assert_eq!(20i32.to_ne_bytes(), bytes[3..7]);
        assert_eq!(30i32.to_ne_bytes(), bytes[7..11]);
        assert_eq!([0xFF; 3], bytes[11..]);

        let mut out = [0i32; 4];
        bytes_to_numeric(&bytes, 3, &mut out, 2, 2).unwrap();
        assert_eq!([0, 0, 20, 30], out);
    }

    #[test]
    fn source_too_short() {
        let bytes = [0u8; 4];
        let mut floats = [7f32; 2];
        assert_eq!(
            Err(OutOfBoundsError {
                side: Side::Source,
                cause: Cause::Exceeds { end: 8, capacity: 4 }
            }),
            bytes_to_numeric(&bytes, 0, &mut floats, 0, 2)
        );
        assert_eq!([7.0, 7.0], floats);
    }

    #[test]
    fn destination_too_short() {
        let bytes = [1u8; 32];
        let mut longs = [5i64; 3];
        assert_eq!(
            Err(OutOfBoundsError {
                side: Side::Destination,
                cause: Cause::Exceeds { end: 4, capacity: 3 }
            }),
            bytes_to_numeric(&bytes, 0, &mut longs, 1, 3)
        );
        assert_eq!([5, 5, 5], longs);

        let mut bytes = [9u8; 7];
        assert_eq!(
            Err(OutOfBoundsError {
                side: Side::Destination,
                cause: Cause::Exceeds { end: 8, capacity: 7 }
            }),
            numeric_to_bytes(&[1i16, 2, 3, 4], 0, &mut bytes, 0, 4)
        );
        assert_eq!([9; 7], bytes);
    }

    #[test]
    fn zero_count() {
        let mut shorts: [i16; 0] = [];
        bytes_to_numeric(&[1, 2, 3], 3, &mut shorts, 0, 0).unwrap();

        let mut bytes = [4u8; 2];
        numeric_to_bytes::<f64>(&[], 0, &mut bytes, 2, 0).unwrap();
        assert_eq!([4, 4], bytes);

        assert!(bytes_to_numeric(&[1, 2, 3], 4, &mut shorts, 0, 0).is_err());
    }

    #[test]
    fn explicit_byte_order() {
        let bytes = [0x01, 0x02, 0x03, 0x04];

        let mut out = [0i32; 1];
        bytes_to_numeric_with::<BigEndian, _>(&bytes, 0, &mut out, 0, 1).unwrap();
        assert_eq!([0x0102_0304], out);

        bytes_to_numeric_with::<LittleEndian, _>(&bytes, 0, &mut out, 0, 1).unwrap();
        assert_eq!([0x0403_0201], out);

        let mut back = [0u8; 4];
        numeric_to_bytes_with::<BigEndian, _>(&[0x0403_0201i32], 0, &mut back, 0, 1).unwrap();
        assert_eq!([0x04, 0x03, 0x02, 0x01], back);
    }

    #[test]
    fn swap_matches_opposite_order() {
        let bytes = 3.25f64.to_be_bytes();
        let mut native = [0f64; 1];
        bytes_to_numeric(&bytes, 0, &mut native, 0, 1).unwrap();
        if cfg!(target_endian = "little") {
            swap_byte_order(&mut native, 0, 1).unwrap();
        }
        assert_eq!([3.25], native);
    }

    #[test]
    fn swap_sub_range() {
        let mut values = [0x0102i16, 0x0304, 0x0506];
        swap_byte_order(&mut values, 1, 1).unwrap();
        assert_eq!([0x0102, 0x0403, 0x0506], values);

        assert!(swap_byte_order(&mut values, 2, 2).is_err());
        assert_eq!([0x0102, 0x0403, 0x0506], values);
    }

    #[test]
    #[cfg(feature = "std")]
    fn vectors() {
        let bytes = to_byte_vec(&[1i64, 2, 3], 1, 2).unwrap();
        assert_eq!(16, bytes.len());
        assert_eq!(vec![2i64, 3], to_numeric_vec::<i64>(&bytes, 0, 2).unwrap());
        assert_eq!(vec![3i64], to_numeric_vec::<i64>(&bytes, 8, 1).unwrap());
        assert!(to_numeric_vec::<i64>(&bytes, 9, 1).is_err());
        assert!(to_byte_vec(&[1i64], 0, 2).is_err());
    }
}
