//! This module defines types used by various traits.
//! These types are meant to be agnostic of the trait implementation.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// The states of the CC2500's main radio control state machine,
/// as reported in the chip status byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChipState {
    /// Idle state (also reported for some transitional states).
    Idle,
    /// Receive mode.
    Rx,
    /// Transmit mode.
    Tx,
    /// Fast TX ready (frequency synthesizer is on).
    FastTxReady,
    /// Frequency synthesizer calibration is running.
    Calibrate,
    /// PLL is settling.
    Settling,
    /// RX FIFO has overflowed. Read out any useful data, then flush the FIFO.
    RxFifoOverflow,
    /// TX FIFO has underflowed. Acknowledge by flushing the FIFO.
    TxFifoUnderflow,
}

impl ChipState {
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & 7 {
            0 => ChipState::Idle,
            1 => ChipState::Rx,
            2 => ChipState::Tx,
            3 => ChipState::FastTxReady,
            4 => ChipState::Calibrate,
            5 => ChipState::Settling,
            6 => ChipState::RxFifoOverflow,
            _ => ChipState::TxFifoUnderflow,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ChipState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ChipState::Idle => defmt::write!(fmt, "IDLE"),
            ChipState::Rx => defmt::write!(fmt, "RX"),
            ChipState::Tx => defmt::write!(fmt, "TX"),
            ChipState::FastTxReady => defmt::write!(fmt, "FSTXON"),
            ChipState::Calibrate => defmt::write!(fmt, "CALIBRATE"),
            ChipState::Settling => defmt::write!(fmt, "SETTLING"),
            ChipState::RxFifoOverflow => defmt::write!(fmt, "RXFIFO_OVERFLOW"),
            ChipState::TxFifoUnderflow => defmt::write!(fmt, "TXFIFO_UNDERFLOW"),
        }
    }
}

impl Display for ChipState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ChipState::Idle => write!(f, "IDLE"),
            ChipState::Rx => write!(f, "RX"),
            ChipState::Tx => write!(f, "TX"),
            ChipState::FastTxReady => write!(f, "FSTXON"),
            ChipState::Calibrate => write!(f, "CALIBRATE"),
            ChipState::Settling => write!(f, "SETTLING"),
            ChipState::RxFifoOverflow => write!(f, "RXFIFO_OVERFLOW"),
            ChipState::TxFifoUnderflow => write!(f, "TXFIFO_UNDERFLOW"),
        }
    }
}

/// The chip status byte that the CC2500 clocks out with the header byte
/// of every SPI transaction.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct ChipStatus {
    /// The CHIP_RDYn flag. It is high until the crystal oscillator is stable.
    #[bits(1, access = RO)]
    pub(crate) chip_not_ready: bool,

    #[bits(3, access = None)]
    state: u8,

    /// Bytes available in the RX FIFO (for read transactions) or free bytes
    /// in the TX FIFO (for write transactions). Saturates at 15.
    #[bits(4, access = RO)]
    pub fifo_bytes: u8,
}

impl ChipStatus {
    const STATE_MASK: u8 = 0x70;

    /// Is the crystal oscillator running and the chip ready for commands?
    pub const fn chip_ready(&self) -> bool {
        !self.chip_not_ready()
    }

    pub const fn state(&self) -> ChipState {
        ChipState::from_bits((self.into_bits() & Self::STATE_MASK) >> 4)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ChipStatus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "ChipStatus ready: {}, state: {}, fifo bytes: {}",
            self.chip_ready(),
            self.state(),
            self.fifo_bytes()
        )
    }
}

impl Display for ChipStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "ChipStatus ready: {}, state: {}, fifo bytes: {}",
            self.chip_ready(),
            self.state(),
            self.fifo_bytes()
        )
    }
}

/// The two status bytes the CC2500 appends to every received packet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PacketStatus {
    rssi: u8,
    lqi: u8,
}

impl PacketStatus {
    pub(crate) const CRC_OK_MASK: u8 = 0x80;

    /// The RSSI offset (in dB) for the CC2500 at its common data rates.
    pub const RSSI_OFFSET: i16 = 72;

    /// Build a status from the raw `rssi` and `lqi` bytes (in the order they leave the RX FIFO).
    pub const fn from_bytes(rssi: u8, lqi: u8) -> Self {
        Self { rssi, lqi }
    }

    /// Did the packet's CRC match?
    pub const fn crc_ok(&self) -> bool {
        self.lqi & Self::CRC_OK_MASK != 0
    }

    /// The Link Quality Indicator (without the CRC flag). Lower is better.
    pub const fn lqi(&self) -> u8 {
        self.lqi & !Self::CRC_OK_MASK
    }

    /// The raw RSSI byte (two's complement, half-dB steps).
    pub const fn rssi_raw(&self) -> u8 {
        self.rssi
    }

    /// The received signal strength in dBm.
    pub const fn rssi_dbm(&self) -> i16 {
        (self.rssi as i8) as i16 / 2 - Self::RSSI_OFFSET
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PacketStatus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "PacketStatus rssi: {=i16} dBm, lqi: {=u8}, crc_ok: {=bool}",
            self.rssi_dbm(),
            self.lqi(),
            self.crc_ok()
        )
    }
}

impl Display for PacketStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "PacketStatus rssi: {} dBm, lqi: {}, crc_ok: {}",
            self.rssi_dbm(),
            self.lqi(),
            self.crc_ok()
        )
    }
}

/// Hardware filtering of received packets by their address byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressCheck {
    /// Accept all packets.
    Disabled,
    /// Accept packets addressed to this radio only.
    Exact,
    /// Accept packets addressed to this radio or to the broadcast address `0x00`.
    ExactOrBroadcast,
    /// Accept packets addressed to this radio or to either broadcast address (`0x00`, `0xFF`).
    ExactOrBroadcasts,
}

impl AddressCheck {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            AddressCheck::Disabled => 0,
            AddressCheck::Exact => 1,
            AddressCheck::ExactOrBroadcast => 2,
            AddressCheck::ExactOrBroadcasts => 3,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & 3 {
            0 => AddressCheck::Disabled,
            1 => AddressCheck::Exact,
            2 => AddressCheck::ExactOrBroadcast,
            _ => AddressCheck::ExactOrBroadcasts,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AddressCheck {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            AddressCheck::Disabled => defmt::write!(fmt, "disabled"),
            AddressCheck::Exact => defmt::write!(fmt, "exact"),
            AddressCheck::ExactOrBroadcast => defmt::write!(fmt, "exact or 0x00"),
            AddressCheck::ExactOrBroadcasts => defmt::write!(fmt, "exact, 0x00 or 0xFF"),
        }
    }
}

impl Display for AddressCheck {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            AddressCheck::Disabled => write!(f, "disabled"),
            AddressCheck::Exact => write!(f, "exact"),
            AddressCheck::ExactOrBroadcast => write!(f, "exact or 0x00"),
            AddressCheck::ExactOrBroadcasts => write!(f, "exact, 0x00 or 0xFF"),
        }
    }
}

/// The result of fetching a packet from the RX FIFO.
///
/// Only [`RxOutcome::Received`] describes a packet that should be trusted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RxOutcome {
    /// The RX FIFO was empty. The given buffer was not touched.
    NoData,
    /// The RX FIFO had overflowed and was flushed.
    Overflow,
    /// The next packet's length (the contained value) did not fit the given buffer.
    /// The RX FIFO was flushed.
    Oversized(u8),
    /// A packet of `length` bytes was copied into the buffer, but its CRC did not match.
    CrcFailed { length: u8, status: PacketStatus },
    /// A packet of `length` bytes was copied into the buffer and its CRC matched.
    Received { length: u8, status: PacketStatus },
}

impl RxOutcome {
    /// Is this a packet with a matching CRC?
    pub const fn is_crc_ok(&self) -> bool {
        matches!(self, RxOutcome::Received { .. })
    }

    /// The length field of the packet that was fetched (if any).
    ///
    /// For [`RxOutcome::Oversized`], this is the length that did not fit.
    pub const fn length(&self) -> Option<u8> {
        match self {
            RxOutcome::NoData | RxOutcome::Overflow => None,
            RxOutcome::Oversized(length)
            | RxOutcome::CrcFailed { length, .. }
            | RxOutcome::Received { length, .. } => Some(*length),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RxOutcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            RxOutcome::NoData => defmt::write!(fmt, "no data"),
            RxOutcome::Overflow => defmt::write!(fmt, "RX FIFO overflow"),
            RxOutcome::Oversized(len) => defmt::write!(fmt, "oversized packet ({=u8} bytes)", len),
            RxOutcome::CrcFailed { length, .. } => {
                defmt::write!(fmt, "CRC failed ({=u8} bytes)", length)
            }
            RxOutcome::Received { length, .. } => {
                defmt::write!(fmt, "received {=u8} bytes", length)
            }
        }
    }
}

impl Display for RxOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            RxOutcome::NoData => write!(f, "no data"),
            RxOutcome::Overflow => write!(f, "RX FIFO overflow"),
            RxOutcome::Oversized(len) => write!(f, "oversized packet ({len} bytes)"),
            RxOutcome::CrcFailed { length, .. } => write!(f, "CRC failed ({length} bytes)"),
            RxOutcome::Received { length, .. } => write!(f, "received {length} bytes"),
        }
    }
}
