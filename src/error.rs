use core::fmt;

use thiserror::Error;

/// The buffer a failed range check refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Source,
    Destination,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Destination => f.write_str("destination"),
        }
    }
}

/// Why a requested range does not fit its buffer. Lengths and capacities are in the buffer's own
/// units: bytes for byte buffers, elements for numeric arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Cause {
    #[error("negative offset or count")]
    Negative,
    #[error("offset plus length overflows")]
    Overflow,
    #[error("range ends at {end} but the buffer holds {capacity}")]
    Exceeds { end: usize, capacity: usize },
}

/// The only way a conversion fails: some index or range falls outside one of the buffers.
///
/// Every check runs before the destination is touched, so a call returning this error has not
/// written anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{side} range out of bounds: {cause}")]
pub struct OutOfBoundsError {
    pub side: Side,
    #[source]
    pub cause: Cause,
}

impl OutOfBoundsError {
    pub(crate) fn new(side: Side, cause: Cause) -> Self {
        OutOfBoundsError { side, cause }
    }
}

pub type Result<T> = core::result::Result<T, OutOfBoundsError>;
