//! The over-the-air packet layout used by this driver.
//!
//! ```text
//! | length | address | payload ... |
//! ```
//!
//! The `length` byte counts every byte after itself (the address byte included).
//! With the default configuration, the CC2500 validates the length and CRC in hardware
//! and appends 2 status bytes (RSSI, LQI) to each received packet. Those status bytes
//! are not part of the frame.

/// The offset of the length field.
pub const LENGTH_FIELD: usize = 0;
/// The offset of the destination/source address field.
pub const ADDRESS_FIELD: usize = 1;
/// The offset of the first payload byte.
pub const DATA_FIELD: usize = 2;

/// The number of frame bytes that are not payload.
pub const HEADER_LENGTH: usize = DATA_FIELD;

/// Errors about malformed frames or buffers too small to hold them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameError {
    /// The frame does not fit in the given buffer (or in the length byte).
    BufferOverflow,
    /// The frame is shorter than its length field claims.
    Truncated,
}

#[cfg(feature = "defmt")]
impl defmt::Format for FrameError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FrameError::BufferOverflow => defmt::write!(fmt, "buffer overflow"),
            FrameError::Truncated => defmt::write!(fmt, "truncated frame"),
        }
    }
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameError::BufferOverflow => write!(f, "buffer overflow"),
            FrameError::Truncated => write!(f, "truncated frame"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FrameError {}

/// A parsed view of a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<'a> {
    /// The destination (when sending) or source (when receiving) address.
    pub address: u8,
    /// The bytes after the address byte.
    pub payload: &'a [u8],
}

impl<'a> Frame<'a> {
    /// View the bytes that a receive operation puts in its buffer
    /// (`[address, payload...]`, without the length byte) as a frame.
    ///
    /// `data` should be sliced to the received length.
    pub fn from_received(data: &'a [u8]) -> Result<Self, FrameError> {
        match data.split_first() {
            Some((address, payload)) => Ok(Self {
                address: *address,
                payload,
            }),
            None => Err(FrameError::Truncated),
        }
    }

    /// The value of this frame's length field.
    pub fn length(&self) -> usize {
        self.payload.len() + 1
    }
}

/// Write `payload` into `buf` framed for `destination`.
///
/// Returns the number of bytes to put on the air (`payload.len() + 2`).
pub fn pack(payload: &[u8], destination: u8, buf: &mut [u8]) -> Result<usize, FrameError> {
    let total = payload.len() + HEADER_LENGTH;
    if total > buf.len() || payload.len() + 1 > u8::MAX as usize {
        return Err(FrameError::BufferOverflow);
    }
    // the length field counts the address byte
    buf[LENGTH_FIELD] = payload.len() as u8 + 1;
    buf[ADDRESS_FIELD] = destination;
    buf[DATA_FIELD..total].copy_from_slice(payload);
    Ok(total)
}

/// Parse a frame (as it was given to [`pack()`]).
///
/// Bytes beyond the length field's extent are ignored.
pub fn unpack(frame: &[u8]) -> Result<Frame<'_>, FrameError> {
    let length = *frame.get(LENGTH_FIELD).ok_or(FrameError::Truncated)? as usize;
    if length == 0 || frame.len() < length + 1 {
        return Err(FrameError::Truncated);
    }
    Frame::from_received(&frame[ADDRESS_FIELD..length + 1])
}
