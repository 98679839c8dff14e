//! C entry points, one pair per element type.
//!
//! Every function takes each buffer as a `(pointer, length)` pair, with lengths in the buffer's
//! own units, plus signed offsets and a signed count. The pointers are only borrowed for the
//! duration of the call. Panics are caught and reported as [`NATIVEDATA_ERR_PANIC`].
//!
//! Null pointers are checked first: a null buffer with a non-zero length is
//! [`NATIVEDATA_ERR_INVALID_ARGS`] whatever the offsets, and only then are offsets and count
//! checked for [`NATIVEDATA_ERR_OUT_OF_BOUNDS`].
//!
//! # Safety
//!
//! Callers must pass pointers valid for `len` elements (or any pointer, including null, when
//! `len` is zero), and the two buffers must not overlap.
use core::ffi::c_int;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::slice;

use crate::bounds::index;
use crate::convert::{bytes_to_numeric, numeric_to_bytes};
use crate::element::Element;
use crate::error::Side;

pub const NATIVEDATA_OK: c_int = 0;
pub const NATIVEDATA_ERR_INVALID_ARGS: c_int = 1;
pub const NATIVEDATA_ERR_PANIC: c_int = 2;
pub const NATIVEDATA_ERR_OUT_OF_BOUNDS: c_int = 3;

unsafe fn borrow<'a, T>(ptr: *const T, len: usize) -> Option<&'a [T]> {
    if len == 0 {
        Some(&[])
    } else if ptr.is_null() {
        None
    } else {
        Some(unsafe { slice::from_raw_parts(ptr, len) })
    }
}

unsafe fn borrow_mut<'a, T>(ptr: *mut T, len: usize) -> Option<&'a mut [T]> {
    if len == 0 {
        Some(&mut [])
    } else if ptr.is_null() {
        None
    } else {
        Some(unsafe { slice::from_raw_parts_mut(ptr, len) })
    }
}

fn guarded(f: impl FnOnce() -> Result<(), c_int>) -> c_int {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => NATIVEDATA_OK,
        Ok(Err(code)) => code,
        Err(_) => NATIVEDATA_ERR_PANIC,
    }
}

struct Offsets {
    source: usize,
    destination: usize,
    count: usize,
}

fn offsets(source: i64, destination: i64, count: i64) -> Result<Offsets, c_int> {
    let oob = |_| NATIVEDATA_ERR_OUT_OF_BOUNDS;
    Ok(Offsets {
        source: index(Side::Source, source).map_err(oob)?,
        destination: index(Side::Destination, destination).map_err(oob)?,
        count: index(Side::Source, count).map_err(oob)?,
    })
}

unsafe fn copy_bytes_to<T: Element>(
    src: *const u8,
    src_len: usize,
    src_offset: i64,
    dst: *mut T,
    dst_len: usize,
    dst_offset: i64,
    count: i64,
) -> c_int {
    guarded(|| {
        let source = unsafe { borrow(src, src_len) }.ok_or(NATIVEDATA_ERR_INVALID_ARGS)?;
        let destination = unsafe { borrow_mut(dst, dst_len) }.ok_or(NATIVEDATA_ERR_INVALID_ARGS)?;
        let at = offsets(src_offset, dst_offset, count)?;
        bytes_to_numeric(source, at.source, destination, at.destination, at.count)
            .map_err(|_| NATIVEDATA_ERR_OUT_OF_BOUNDS)
    })
}

unsafe fn copy_to_bytes<T: Element>(
    src: *const T,
    src_len: usize,
    src_offset: i64,
    dst: *mut u8,
    dst_len: usize,
    dst_offset: i64,
    count: i64,
) -> c_int {
    guarded(|| {
        let source = unsafe { borrow(src, src_len) }.ok_or(NATIVEDATA_ERR_INVALID_ARGS)?;
        let destination = unsafe { borrow_mut(dst, dst_len) }.ok_or(NATIVEDATA_ERR_INVALID_ARGS)?;
        let at = offsets(src_offset, dst_offset, count)?;
        numeric_to_bytes(source, at.source, destination, at.destination, at.count)
            .map_err(|_| NATIVEDATA_ERR_OUT_OF_BOUNDS)
    })
}

macro_rules! export {
    ($n:ty, $bytes_to:ident, $to_bytes:ident) => {
        /// Copies bytes into a numeric array.
        ///
        /// # Safety
        ///
        /// See the module docs for the pointer and length contract.
        #[no_mangle]
        pub unsafe extern "C" fn $bytes_to(
            src: *const u8,
            src_len: usize,
            src_offset: i64,
            dst: *mut $n,
            dst_len: usize,
            dst_offset: i64,
            count: i64,
        ) -> c_int {
            unsafe {
                copy_bytes_to::<$n>(src, src_len, src_offset, dst, dst_len, dst_offset, count)
            }
        }

        /// Copies a numeric array into bytes.
        ///
        /// # Safety
        ///
        /// See the module docs for the pointer and length contract.
        #[no_mangle]
        pub unsafe extern "C" fn $to_bytes(
            src: *const $n,
            src_len: usize,
            src_offset: i64,
            dst: *mut u8,
            dst_len: usize,
            dst_offset: i64,
            count: i64,
        ) -> c_int {
            unsafe {
                copy_to_bytes::<$n>(src, src_len, src_offset, dst, dst_len, dst_offset, count)
            }
        }
    };
}

export!(i16, nativedata_copy_bytes_to_i16, nativedata_copy_i16_to_bytes);
export!(i32, nativedata_copy_bytes_to_i32, nativedata_copy_i32_to_bytes);
export!(i64, nativedata_copy_bytes_to_i64, nativedata_copy_i64_to_bytes);
export!(f32, nativedata_copy_bytes_to_f32, nativedata_copy_f32_to_bytes);
export!(f64, nativedata_copy_bytes_to_f64, nativedata_copy_f64_to_bytes);
