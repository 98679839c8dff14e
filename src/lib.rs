//! Bit-exact conversion between byte buffers and fixed-width numeric arrays.
//!
//! The core operations, [`bytes_to_numeric`] and [`numeric_to_bytes`], copy a sub-range of one
//! buffer into a sub-range of the other, reinterpreting each element's bytes in the host's native
//! byte order. No arithmetic conversion happens: a round trip reproduces the original bytes
//! exactly. Every range is validated before anything is written, and the only failure is an
//! [`OutOfBoundsError`].
//!
//! ```
//! use nativedata::{bytes_to_numeric, numeric_to_bytes};
//!
//! let bytes = 1.0f32.to_ne_bytes();
//! let mut floats = [0f32; 1];
//! bytes_to_numeric(&bytes, 0, &mut floats, 0, 1)?;
//! assert_eq!([1.0], floats);
//!
//! let mut back = [0u8; 4];
//! numeric_to_bytes(&floats, 0, &mut back, 0, 1)?;
//! assert_eq!(bytes, back);
//!
//! // Two four-byte elements don't fit in four bytes.
//! assert!(bytes_to_numeric(&bytes, 0, &mut [0f32; 2], 0, 2).is_err());
//! # Ok::<(), nativedata::OutOfBoundsError>(())
//! ```
//!
//! The `_with` variants take an explicit [`byteorder::ByteOrder`], and [`swap_byte_order`] flips
//! elements in place for consumers of the other endianness. Callers which choose the element type
//! at runtime use [`dynamic::copy`]. With the `ffi` feature, [`ffi`] exports the same copies to C.
#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod bounds;
pub mod convert;
pub mod dynamic;
pub mod element;
pub mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
mod properties;

pub use byteorder::{BigEndian, ByteOrder, LittleEndian, NativeEndian};

#[cfg(feature = "std")]
pub use crate::convert::{to_byte_vec, to_numeric_vec};
pub use crate::convert::{
    bytes_to_numeric, bytes_to_numeric_with, numeric_to_bytes, numeric_to_bytes_with,
    swap_byte_order,
};
pub use crate::dynamic::{copy, Direction, Numeric, NumericMut, Transfer};
pub use crate::element::{Element, TypeTag};
pub use crate::error::{Cause, OutOfBoundsError, Result, Side};
