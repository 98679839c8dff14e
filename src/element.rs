//! Width descriptors for the supported numeric types.
//!
//! Each type gets the same four primitives from one `impl_element!` invocation; everything above
//! this module is generic over [`Element`].
use core::fmt;

use byteorder::ByteOrder;

/// The non-native byte order; converting "from" it in place swaps every element.
#[cfg(target_endian = "little")]
type Swapped = byteorder::BigEndian;
#[cfg(target_endian = "big")]
type Swapped = byteorder::LittleEndian;

/// Names one of the supported element types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
}

impl TypeTag {
    /// Every tag, narrowest integers first.
    pub const ALL: [TypeTag; 5] =
        [TypeTag::Int16, TypeTag::Int32, TypeTag::Int64, TypeTag::Float32, TypeTag::Float64];

    /// The number of bytes one element occupies.
    pub const fn width(self) -> usize {
        match self {
            TypeTag::Int16 => 2,
            TypeTag::Int32 | TypeTag::Float32 => 4,
            TypeTag::Int64 | TypeTag::Float64 => 8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TypeTag::Int16 => "int16",
            TypeTag::Int32 => "int32",
            TypeTag::Int64 => "int64",
            TypeTag::Float32 => "float32",
            TypeTag::Float64 => "float64",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width numeric type which can be reinterpreted to and from raw bytes.
///
/// Implemented for `i16`, `i32`, `i64`, `f32` and `f64` only.
pub trait Element: Copy + Default + PartialEq + fmt::Debug + sealed::Sealed {
    const TAG: TypeTag;

    /// Bytes per element.
    const WIDTH: usize = Self::TAG.width();

    /// Decodes `src` into `dst` using byte order `B`. `src.len()` must equal
    /// `dst.len() * Self::WIDTH`.
    fn read_into<B: ByteOrder>(src: &[u8], dst: &mut [Self]);

    /// Encodes `src` into `dst` using byte order `B`. `dst.len()` must equal
    /// `src.len() * Self::WIDTH`.
    fn write_into<B: ByteOrder>(src: &[Self], dst: &mut [u8]);

    /// Reverses the byte order of every element in place.
    fn swap_in_place(values: &mut [Self]);
}

macro_rules! impl_element {
    ($n:ty, $tag:ident, $read:ident, $write:ident, $from_slice:ident) => {
        impl sealed::Sealed for $n {}

        impl Element for $n {
            const TAG: TypeTag = TypeTag::$tag;

            #[inline(always)]
            fn read_into<B: ByteOrder>(src: &[u8], dst: &mut [Self]) {
                debug_assert_eq!(src.len(), dst.len() * Self::WIDTH);
                B::$read(src, dst);
            }

            #[inline(always)]
            fn write_into<B: ByteOrder>(src: &[Self], dst: &mut [u8]) {
                debug_assert_eq!(dst.len(), src.len() * Self::WIDTH);
                B::$write(src, dst);
            }

            #[inline(always)]
            fn swap_in_place(values: &mut [Self]) {
                Swapped::$from_slice(values);
            }
        }
    };
}

impl_element!(i16, Int16, read_i16_into, write_i16_into, from_slice_i16);
impl_element!(i32, Int32, read_i32_into, write_i32_into, from_slice_i32);
impl_element!(i64, Int64, read_i64_into, write_i64_into, from_slice_i64);
impl_element!(f32, Float32, read_f32_into, write_f32_into, from_slice_f32);
impl_element!(f64, Float64, read_f64_into, write_f64_into, from_slice_f64);
