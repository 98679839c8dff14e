//! Tag-dispatched copies for callers which pick the element type at runtime and count in signed
//! integers.
use crate::bounds::index;
use crate::convert::{bytes_to_numeric, numeric_to_bytes};
use crate::element::TypeTag;
use crate::error::{Result, Side};

/// Which way bytes flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    BytesToNumeric,
    NumericToBytes,
}

/// A borrowed numeric array of one of the supported types.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Numeric<'a> {
    Int16(&'a [i16]),
    Int32(&'a [i32]),
    Int64(&'a [i64]),
    Float32(&'a [f32]),
    Float64(&'a [f64]),
}

/// A mutably borrowed numeric array of one of the supported types.
#[derive(Debug, PartialEq)]
pub enum NumericMut<'a> {
    Int16(&'a mut [i16]),
    Int32(&'a mut [i32]),
    Int64(&'a mut [i64]),
    Float32(&'a mut [f32]),
    Float64(&'a mut [f64]),
}

macro_rules! impl_tagged {
    ($name:ident) => {
        impl $name<'_> {
            pub fn type_tag(&self) -> TypeTag {
                match self {
                    $name::Int16(_) => TypeTag::Int16,
                    $name::Int32(_) => TypeTag::Int32,
                    $name::Int64(_) => TypeTag::Int64,
                    $name::Float32(_) => TypeTag::Float32,
                    $name::Float64(_) => TypeTag::Float64,
                }
            }

            /// The length in elements.
            pub fn len(&self) -> usize {
                match self {
                    $name::Int16(v) => v.len(),
                    $name::Int32(v) => v.len(),
                    $name::Int64(v) => v.len(),
                    $name::Float32(v) => v.len(),
                    $name::Float64(v) => v.len(),
                }
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }
        }
    };
}

impl_tagged!(Numeric);
impl_tagged!(NumericMut);

/// One copy request: the direction plus its borrowed source and destination.
#[derive(Debug)]
pub enum Transfer<'a> {
    BytesToNumeric { source: &'a [u8], destination: NumericMut<'a> },
    NumericToBytes { source: Numeric<'a>, destination: &'a mut [u8] },
}

impl Transfer<'_> {
    pub fn direction(&self) -> Direction {
        match self {
            Transfer::BytesToNumeric { .. } => Direction::BytesToNumeric,
            Transfer::NumericToBytes { .. } => Direction::NumericToBytes,
        }
    }

    pub fn type_tag(&self) -> TypeTag {
        match self {
            Transfer::BytesToNumeric { destination, .. } => destination.type_tag(),
            Transfer::NumericToBytes { source, .. } => source.type_tag(),
        }
    }
}

/// Copies `count` elements between the buffers of `transfer`. Offsets are in bytes on the byte
/// side and in elements on the numeric side.
///
/// Negative offsets or counts are rejected rather than wrapped.
pub fn copy(
    transfer: Transfer<'_>,
    source_offset: i64,
    destination_offset: i64,
    count: i64,
) -> Result<()> {
    let source_offset = index(Side::Source, source_offset)?;
    let destination_offset = index(Side::Destination, destination_offset)?;
    let count = index(Side::Source, count)?;

    match transfer {
        Transfer::BytesToNumeric { source, destination } => {
            macro_rules! dispatch {
                ($($variant:ident),*) => {
                    match destination {
                        $(NumericMut::$variant(d) => {
                            bytes_to_numeric(source, source_offset, d, destination_offset, count)
                        })*
                    }
                };
            }
            dispatch!(Int16, Int32, Int64, Float32, Float64)
        }
        Transfer::NumericToBytes { source, destination } => {
            macro_rules! dispatch {
                ($($variant:ident),*) => {
                    match source {
                        $(Numeric::$variant(s) => numeric_to_bytes(
                            s,
                            source_offset,
                            destination,
                            destination_offset,
                            count,
                        ),)*
                    }
                };
            }
            dispatch!(Int16, Int32, Int64, Float32, Float64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Cause, OutOfBoundsError};

    fn decode<'a>(source: &'a [u8], destination: NumericMut<'a>) -> Transfer<'a> {
        Transfer::BytesToNumeric { source, destination }
    }

    fn encode<'a>(source: Numeric<'a>, destination: &'a mut [u8]) -> Transfer<'a> {
        Transfer::NumericToBytes { source, destination }
    }

    #[test]
    fn tags_and_directions() {
        let bytes = [0u8; 8];
        let mut longs = [0i64; 1];
        let t = decode(&bytes, NumericMut::Int64(&mut longs));
        assert_eq!(Direction::BytesToNumeric, t.direction());
        assert_eq!(TypeTag::Int64, t.type_tag());

        let mut out = [0u8; 8];
        let t = encode(Numeric::Float32(&[1.0, 2.0]), &mut out);
        assert_eq!(Direction::NumericToBytes, t.direction());
        assert_eq!(TypeTag::Float32, t.type_tag());
    }

    #[test]
    fn round_trip_every_type() {
        let bytes: Vec<u8> = (0..48).collect();

        macro_rules! check {
            ($variant:ident, $t:ty) => {{
                let n = bytes.len() / TypeTag::$variant.width();
                let mut values = vec![<$t>::default(); n];
                copy(decode(&bytes, NumericMut::$variant(&mut values)), 0, 0, n as i64).unwrap();

                let mut back = vec![0u8; bytes.len()];
                copy(encode(Numeric::$variant(&values), &mut back), 0, 0, n as i64).unwrap();
                assert_eq!(bytes, back, "{}", TypeTag::$variant);
            }};
        }

        check!(Int16, i16);
        check!(Int32, i32);
        check!(Int64, i64);
        check!(Float32, f32);
        check!(Float64, f64);
    }

    #[test]
    fn negative_offsets() {
        let bytes = [0u8; 8];
        let mut ints = [3i32; 2];
        assert_eq!(
            Err(OutOfBoundsError { side: Side::Source, cause: Cause::Negative }),
            copy(decode(&bytes, NumericMut::Int32(&mut ints)), -4, 0, 1)
        );
        assert_eq!(
            Err(OutOfBoundsError { side: Side::Destination, cause: Cause::Negative }),
            copy(decode(&bytes, NumericMut::Int32(&mut ints)), 0, -1, 1)
        );
        assert!(copy(decode(&bytes, NumericMut::Int32(&mut ints)), 0, 0, -1).is_err());
        assert_eq!([3, 3], ints);
    }

    #[test]
    fn too_many_elements() {
        let mut out = [0u8; 4];
        assert_eq!(
            Err(OutOfBoundsError {
                side: Side::Destination,
                cause: Cause::Exceeds { end: 8, capacity: 4 }
            }),
            copy(encode(Numeric::Float32(&[1.0, 2.0]), &mut out), 0, 0, 2)
        );
        assert_eq!([0; 4], out);
    }

    #[test]
    fn lengths() {
        let mut shorts = [0i16; 3];
        assert_eq!(3, NumericMut::Int16(&mut shorts).len());
        assert!(Numeric::Float64(&[]).is_empty());
    }
}
