use core::ops::Range;

use crate::error::{Cause, OutOfBoundsError, Result, Side};

/// Returns the index range `offset..offset + count * width` if it lies within `0..capacity`.
///
/// For numeric arrays `width` is 1 and everything is counted in elements.
#[inline]
pub(crate) fn span(
    side: Side,
    offset: usize,
    count: usize,
    width: usize,
    capacity: usize,
) -> Result<Range<usize>> {
    let end = count
        .checked_mul(width)
        .and_then(|len| offset.checked_add(len))
        .ok_or(OutOfBoundsError::new(side, Cause::Overflow))?;
    if end > capacity {
        return Err(OutOfBoundsError::new(side, Cause::Exceeds { end, capacity }));
    }
    Ok(offset..end)
}

/// Converts a signed index coming from a caller that counts in `i64` (a managed runtime, the C
/// ABI) into a `usize`, rejecting negative values instead of wrapping them.
#[inline]
pub(crate) fn index(side: Side, value: i64) -> Result<usize> {
    if value < 0 {
        return Err(OutOfBoundsError::new(side, Cause::Negative));
    }
    usize::try_from(value).map_err(|_| OutOfBoundsError::new(side, Cause::Overflow))
}
