use embedded_hal::spi::SpiDevice;

use super::{commands, registers, BUFFER_LENGTH};
use crate::ChipStatus;

/// The register-level access to a CC2500 over SPI.
///
/// Every transaction is a single `transfer_in_place()` on an internal buffer.
/// The first byte clocked out by the radio is always the chip status byte,
/// which is cached after each transaction.
pub(crate) struct Cc2500Spi<SPI> {
    spi: SPI,
    _buf: [u8; BUFFER_LENGTH + 1],
    _status: ChipStatus,
}

impl<SPI> Cc2500Spi<SPI>
where
    SPI: SpiDevice,
{
    pub fn new(spi: SPI) -> Self {
        Self {
            spi,
            _buf: [0u8; BUFFER_LENGTH + 1],
            _status: ChipStatus::from_bits(0),
        }
    }

    fn transfer(&mut self, len: usize) -> Result<(), SPI::Error> {
        self.spi.transfer_in_place(&mut self._buf[..len])?;
        self._status = ChipStatus::from_bits(self._buf[0]);
        Ok(())
    }

    /// The chip status byte from the latest transaction.
    pub fn status(&self) -> ChipStatus {
        self._status
    }

    /// Send a single byte command.
    pub fn strobe(&mut self, command: u8) -> Result<(), SPI::Error> {
        self._buf[0] = command;
        self.transfer(1)
    }

    /// Status registers share addresses with the strobes,
    /// so they are only readable with the burst bit set.
    pub fn read_status(&mut self, address: u8) -> Result<u8, SPI::Error> {
        self._buf[0] = address | commands::READ_BURST;
        self._buf[1] = 0;
        self.transfer(2)?;
        Ok(self._buf[1])
    }

    pub fn write_register(&mut self, address: u8, value: u8) -> Result<(), SPI::Error> {
        self._buf[0] = address;
        self._buf[1] = value;
        self.transfer(2)
    }

    /// Write consecutive registers (or the TX FIFO/PATABLE) starting at `address`.
    ///
    /// At most [`BUFFER_LENGTH`] bytes of `data` are written.
    pub fn write_burst(&mut self, address: u8, data: &[u8]) -> Result<(), SPI::Error> {
        let len = data.len().min(BUFFER_LENGTH);
        self._buf[0] = address | commands::WRITE_BURST;
        self._buf[1..len + 1].copy_from_slice(&data[..len]);
        self.transfer(len + 1)
    }

    /// Read consecutive registers (or the RX FIFO) starting at `address` into `out`.
    ///
    /// At most [`BUFFER_LENGTH`] bytes are read.
    pub fn read_burst(&mut self, address: u8, out: &mut [u8]) -> Result<(), SPI::Error> {
        let len = out.len().min(BUFFER_LENGTH);
        self._buf[0] = address | commands::READ_BURST;
        self._buf[1..len + 1].fill(0);
        self.transfer(len + 1)?;
        out[..len].copy_from_slice(&self._buf[1..len + 1]);
        Ok(())
    }

    pub fn write_fifo(&mut self, data: &[u8]) -> Result<(), SPI::Error> {
        self.write_burst(registers::FIFO, data)
    }

    pub fn read_fifo(&mut self, out: &mut [u8]) -> Result<(), SPI::Error> {
        self.read_burst(registers::FIFO, out)
    }
}
