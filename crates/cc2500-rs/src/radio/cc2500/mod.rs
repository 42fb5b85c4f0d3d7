use embedded_hal::{delay::DelayNs, spi::SpiDevice};
mod address;
mod channel;
mod constants;
mod fifo;
mod init;
mod irq;
mod power;
mod radio;
mod spi;
mod state;
pub use constants::{commands, mnemonics, registers, status};
pub use power::{power_dbm, POWER_DBM, POWER_TABLE};
use spi::Cc2500Spi;

use super::{
    handler::{NoopHandler, RxHandler},
    prelude::Gdo0Pin,
    RadioConfig,
};
use crate::frame::HEADER_LENGTH;

/// The depth (in bytes) of each of the CC2500's FIFOs.
///
/// This is also the size of the driver's own RX and TX buffers.
pub const BUFFER_LENGTH: usize = 64;

/// The largest packet length field that fits in the RX FIFO.
///
/// The FIFO must also hold the length byte and the 2 appended status bytes.
/// This is the upper limit of
/// [`RadioConfig::with_max_packet_length()`](fn@crate::radio::RadioConfig::with_max_packet_length),
/// and longer length fields are reported as
/// [`RxOutcome::Oversized`](crate::RxOutcome::Oversized).
pub const MAX_PACKET_LENGTH: usize = BUFFER_LENGTH - 3;

/// The largest payload that can be given to
/// [`RfRadio::send()`](fn@crate::radio::prelude::RfRadio::send).
///
/// This fills the TX FIFO. A receiving CC2500 only accepts payloads up to
/// [`MAX_PACKET_LENGTH`] - 1 bytes (less if its `PKTLEN` register is lower).
pub const MAX_PAYLOAD_LENGTH: usize = BUFFER_LENGTH - HEADER_LENGTH;

/// The interval (in microseconds) at which GDO0 is polled while transmitting.
pub const GDO0_POLL_INTERVAL: u32 = 10;

/// A collection of error types to describe hardware malfunctions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cc2500Error<SPI, GDO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalInput error (reading the GDO0 pin).
    Gpi(GDO),
    /// Represents a corruption of binary data (as it was transferred over the SPI bus' MISO)
    ///
    /// This is reported by [`RfInit::init()`](fn@crate::radio::prelude::RfInit::init)
    /// when the radio does not identify itself as a CC2500.
    BinaryCorruption,
    /// The GDO0 pin did not signal the end of a transmission within
    /// [`CC2500::tx_timeout`].
    Timeout,
    /// The data does not fit in the radio's FIFO.
    BufferOverflow,
}

impl<SPI: core::fmt::Debug, GDO: core::fmt::Debug> core::fmt::Display for Cc2500Error<SPI, GDO> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Cc2500Error::Spi(e) => write!(f, "SPI error: {e:?}"),
            Cc2500Error::Gpi(e) => write!(f, "GDO0 pin error: {e:?}"),
            Cc2500Error::BinaryCorruption => write!(f, "radio did not identify as a CC2500"),
            Cc2500Error::Timeout => write!(f, "timed out waiting for GDO0"),
            Cc2500Error::BufferOverflow => write!(f, "data does not fit in the FIFO"),
        }
    }
}

#[cfg(feature = "std")]
impl<SPI: core::fmt::Debug, GDO: core::fmt::Debug> std::error::Error for Cc2500Error<SPI, GDO> {}

impl<SPI, GDO> From<crate::frame::FrameError> for Cc2500Error<SPI, GDO> {
    fn from(_: crate::frame::FrameError) -> Self {
        Cc2500Error::BufferOverflow
    }
}

/// This struct implements the [`Rf*` traits](mod@crate::radio::prelude)
/// for the CC2500 transceiver.
///
/// The `H` type parameter is the [`RxHandler`] that receives packets from
/// [`CC2500::on_interrupt()`]. Every radio starts with the [`NoopHandler`];
/// use [`CC2500::with_handler()`] to install a real one.
pub struct CC2500<SPI, GDO, DELAY, H = NoopHandler> {
    /// The time (in microseconds) that
    /// [`RfRadio::transmit()`](fn@crate::radio::prelude::RfRadio::transmit)
    /// waits for each edge of the GDO0 signal before giving up with
    /// [`Cc2500Error::Timeout`].
    ///
    /// The default (100 ms) covers a full FIFO at the CC2500's slowest data rate.
    pub tx_timeout: u32,
    /// The GDO0 pin of the radio.
    ///
    /// The default configuration asserts GDO0 when a sync word was sent or received
    /// and deasserts it at the end of the packet.
    pub gdo0: GDO,
    _spi: Cc2500Spi<SPI>,
    _delay_impl: DELAY,
    _handler: H,
    _settings: RadioConfig,
    _rx_buf: [u8; BUFFER_LENGTH],
    _tx_buf: [u8; BUFFER_LENGTH],
}

impl<SPI, GDO, DELAY> CC2500<SPI, GDO, DELAY, NoopHandler>
where
    SPI: SpiDevice,
    GDO: Gdo0Pin,
    DELAY: DelayNs,
{
    /// Instantiate a [`CC2500`] object for use on the specified
    /// `spi` bus with the given `gdo0` pin.
    ///
    /// The radio's CSn pin (aka Chip Select pin) shall be defined
    /// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
    /// object (passed to the `spi` parameter).
    ///
    /// Nothing is sent to the radio until
    /// [`RfInit::init()`](fn@crate::radio::prelude::RfInit::init) is called.
    pub fn new(spi: SPI, gdo0: GDO, delay_impl: DELAY) -> Self {
        CC2500 {
            tx_timeout: 100_000,
            gdo0,
            _spi: Cc2500Spi::new(spi),
            _delay_impl: delay_impl,
            _handler: NoopHandler,
            _settings: RadioConfig::default(),
            _rx_buf: [0u8; BUFFER_LENGTH],
            _tx_buf: [0u8; BUFFER_LENGTH],
        }
    }

    /// Install the [`RxHandler`] that [`CC2500::on_interrupt()`] feeds.
    ///
    /// This consumes the radio (with its default handler), so a handler is
    /// installed at most once.
    pub fn with_handler<H: RxHandler>(self, handler: H) -> CC2500<SPI, GDO, DELAY, H> {
        CC2500 {
            tx_timeout: self.tx_timeout,
            gdo0: self.gdo0,
            _spi: self._spi,
            _delay_impl: self._delay_impl,
            _handler: handler,
            _settings: self._settings,
            _rx_buf: self._rx_buf,
            _tx_buf: self._tx_buf,
        }
    }
}

impl<SPI, GDO, DELAY, H> CC2500<SPI, GDO, DELAY, H>
where
    SPI: SpiDevice,
    GDO: Gdo0Pin,
    DELAY: DelayNs,
    H: RxHandler,
{
    /// The installed [`RxHandler`].
    pub fn handler(&self) -> &H {
        &self._handler
    }

    /// Mutable access to the installed [`RxHandler`].
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self._handler
    }

    /// The settings that were last written to the radio.
    ///
    /// These are kept in sync by every setter, so the returned [`RadioConfig`] can be
    /// given to [`RfInit::with_config()`](fn@crate::radio::prelude::RfInit::with_config)
    /// to restore the radio after a power loss.
    pub fn config(&self) -> &RadioConfig {
        &self._settings
    }

    /// Read the `PARTNUM` and `VERSION` status registers.
    ///
    /// A CC2500 reports `PARTNUM` `0x80`.
    pub fn get_part_info(&mut self) -> Result<(u8, u8), Cc2500Error<SPI::Error, GDO::Error>> {
        let part = self.read_status(status::PARTNUM)?;
        let version = self.read_status(status::VERSION)?;
        Ok((part, version))
    }

    fn strobe(&mut self, command: u8) -> Result<(), Cc2500Error<SPI::Error, GDO::Error>> {
        self._spi.strobe(command).map_err(Cc2500Error::Spi)
    }

    fn read_status(&mut self, address: u8) -> Result<u8, Cc2500Error<SPI::Error, GDO::Error>> {
        self._spi.read_status(address).map_err(Cc2500Error::Spi)
    }

    fn write_register(
        &mut self,
        address: u8,
        value: u8,
    ) -> Result<(), Cc2500Error<SPI::Error, GDO::Error>> {
        self._spi
            .write_register(address, value)
            .map_err(Cc2500Error::Spi)
    }

    /// Poll GDO0 until it reads `level`, for at most [`CC2500::tx_timeout`] microseconds.
    fn wait_for_gdo0(&mut self, level: bool) -> Result<(), Cc2500Error<SPI::Error, GDO::Error>> {
        let mut waited = 0u32;
        while self.gdo0.is_high().map_err(Cc2500Error::Gpi)? != level {
            if waited >= self.tx_timeout {
                return Err(Cc2500Error::Timeout);
            }
            self._delay_impl.delay_us(GDO0_POLL_INTERVAL);
            waited = waited.saturating_add(GDO0_POLL_INTERVAL);
        }
        Ok(())
    }
}
