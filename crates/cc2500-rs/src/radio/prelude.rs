//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use cc2500::radio::prelude::*;
//! ```

use embedded_hal::digital::InputPin;

use crate::types::{AddressCheck, ChipStatus, RxOutcome};

use super::RadioConfig;

/// A trait for the MCU pin wired to the radio's GDO0 output.
///
/// Besides reading the pin, the driver needs to mask and acknowledge the
/// pin's edge interrupt. These operations are specific to each MCU,
/// so applications implement this trait for their pin type.
///
/// ```ignore
/// impl Gdo0Pin for MyGdo0 {
///     fn enable_interrupt(&mut self) { self.pin.enable_interrupt(Edge::Falling) }
///     fn disable_interrupt(&mut self) { self.pin.disable_interrupt() }
///     fn is_interrupt_pending(&mut self) -> bool { self.pin.check_interrupt() }
///     fn clear_interrupt(&mut self) { self.pin.clear_interrupt_pending_bit() }
/// }
/// ```
pub trait Gdo0Pin: InputPin {
    /// Unmask the GDO0 interrupt.
    fn enable_interrupt(&mut self);

    /// Mask the GDO0 interrupt.
    fn disable_interrupt(&mut self);

    /// Is the GDO0 interrupt flag set?
    ///
    /// This is used to ignore interrupts of other pins that share the same vector.
    fn is_interrupt_pending(&mut self) -> bool;

    /// Clear the GDO0 interrupt flag.
    fn clear_interrupt(&mut self);
}

pub trait RfInit {
    type ConfigErrorType;

    /// Initialize the radio's hardware.
    ///
    /// This is similar to [`RfInit::with_config()`] (with [`RadioConfig::default()`]),
    /// but this function also
    ///
    /// - resets the radio and waits for it to settle
    /// - checks that the radio identifies itself as a CC2500
    ///
    /// This function should only be called once after instantiating the radio object.
    /// Afterward, it is quicker to use [`RfInit::with_config()`] to reconfigure the
    /// radio for different network requirements.
    fn init(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Reconfigure the radio using the given `config` object.
    ///
    /// All configuration registers and the PATABLE are written, both FIFOs are
    /// flushed, and the radio is left in RX mode.
    /// See [`RadioConfig`] for more detail.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType>;
}

/// A trait to represent sending and receiving packets with a CC2500-like transceiver.
pub trait RfRadio {
    type RadioErrorType;

    /// Put the radio into RX mode.
    fn as_rx(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Put the radio into IDLE mode.
    fn as_idle(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Blocking function to transmit a raw `frame`.
    ///
    /// The `frame` must already begin with its length byte (see [`crate::frame::pack()`]).
    /// The GDO0 interrupt is masked while transmitting, and its flag is cleared before
    /// the interrupt is unmasked again (even if the transmission failed).
    ///
    /// This waits for GDO0 to assert (sync word sent) and then deassert
    /// (packet sent). Each wait is bounded by
    /// [`CC2500::tx_timeout`](value@crate::radio::CC2500::tx_timeout).
    fn transmit(&mut self, frame: &[u8]) -> Result<(), Self::RadioErrorType>;

    /// Blocking function to transmit `payload` to the radio at `destination`.
    ///
    /// The payload is framed as `[payload.len() + 1, destination, payload...]`,
    /// so at most [`MAX_PAYLOAD_LENGTH`](constant@crate::radio::MAX_PAYLOAD_LENGTH)
    /// bytes can be sent at once.
    fn send(&mut self, payload: &[u8], destination: u8) -> Result<(), Self::RadioErrorType>;

    /// Fetch the next packet from the RX FIFO into `buf`.
    ///
    /// On success, `buf` holds `length` bytes of the packet (address byte first) followed
    /// by the 2 status bytes (RSSI, LQI) the radio appended. A packet only fits if
    /// `length + 2 <= buf.len()`; otherwise the RX FIFO is flushed and
    /// [`RxOutcome::Oversized`] is returned.
    ///
    /// ```ignore
    /// let mut buf = [0u8; 64];
    /// if let RxOutcome::Received { length, status } = radio.receive(&mut buf)? {
    ///     let frame = Frame::from_received(&buf[..length as usize])?;
    /// }
    /// ```
    fn receive(&mut self, buf: &mut [u8]) -> Result<RxOutcome, Self::RadioErrorType>;
}

/// A trait to represent manipulation of a channel (aka frequency)
/// for a CC2500-like transceiver.
pub trait RfChannel {
    type ChannelErrorType;

    /// Set the radio's currently selected channel.
    ///
    /// The channel is a multiple of the configured channel spacing above the base frequency.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the radio's currently selected channel.
    fn get_channel(&self) -> u8;
}

/// A trait to represent manipulation of the device address
/// for a CC2500-like transceiver.
pub trait RfAddress {
    type AddressErrorType;

    /// Set the address that hardware filtering compares to the address byte of
    /// incoming packets.
    ///
    /// This has no effect on received packets unless enabled with
    /// [`RfAddress::set_address_check()`].
    fn set_address(&mut self, address: u8) -> Result<(), Self::AddressErrorType>;

    /// Get the radio's currently configured address.
    fn get_address(&self) -> u8;

    /// Configure hardware filtering of incoming packets by address.
    fn set_address_check(&mut self, check: AddressCheck) -> Result<(), Self::AddressErrorType>;

    /// Get the currently configured address filtering.
    fn get_address_check(&self) -> AddressCheck;
}

/// A trait to represent manipulation of the transmit power
/// for a CC2500-like transceiver.
pub trait RfPower {
    type PowerErrorType;

    /// Set the transmit power by an index into
    /// [`POWER_TABLE`](constant@crate::radio::POWER_TABLE).
    ///
    /// The `level` is clamped to the table's last index (the highest power).
    fn set_power(&mut self, level: u8) -> Result<(), Self::PowerErrorType>;

    /// Get the currently configured power level index.
    fn get_power(&self) -> u8;

    /// Put the radio into its power down (SLEEP) state.
    ///
    /// Any SPI access wakes the radio, after which it needs to be
    /// reconfigured with [`RfInit::with_config()`] because the PATABLE is lost.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs
/// for a CC2500-like transceiver.
pub trait RfFifo {
    type FifoErrorType;

    /// Flush the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Flush the radio's TX FIFO.
    ///
    /// Call this after a [`RfRadio::transmit()`] failed.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Get the number of bytes in the RX FIFO.
    fn rx_bytes(&mut self) -> Result<u8, Self::FifoErrorType>;

    /// Get the number of bytes in the TX FIFO.
    fn tx_bytes(&mut self) -> Result<u8, Self::FifoErrorType>;
}

/// A trait to represent the chip status
/// for a CC2500-like transceiver.
pub trait RfStatus {
    type StatusErrorType;

    /// Get the [`ChipStatus`] that was cached from the latest SPI transaction.
    fn get_status(&self) -> ChipStatus;

    /// Refresh the internal cache of the chip status byte
    /// (which is also saved from every SPI transaction).
    fn update(&mut self) -> Result<(), Self::StatusErrorType>;
}
