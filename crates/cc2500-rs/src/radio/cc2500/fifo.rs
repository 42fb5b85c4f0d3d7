use embedded_hal::{delay::DelayNs, spi::SpiDevice};

use crate::radio::{
    handler::RxHandler,
    prelude::{Gdo0Pin, RfFifo},
    Cc2500Error, CC2500,
};

use super::{commands, mnemonics, status};

impl<SPI, GDO, DELAY, H> RfFifo for CC2500<SPI, GDO, DELAY, H>
where
    SPI: SpiDevice,
    GDO: Gdo0Pin,
    DELAY: DelayNs,
    H: RxHandler,
{
    type FifoErrorType = Cc2500Error<SPI::Error, GDO::Error>;

    /// Use this to discard all 64 bytes in the radio's RX FIFO.
    ///
    /// The radio only obeys this in the IDLE or RX_OVERFLOW states.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.strobe(commands::SFRX)
    }

    /// Use this to discard all 64 bytes in the radio's TX FIFO.
    ///
    /// The radio only obeys this in the IDLE or TX_UNDERFLOW states.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.strobe(commands::SFTX)
    }

    fn rx_bytes(&mut self) -> Result<u8, Self::FifoErrorType> {
        Ok(self.read_status(status::RXBYTES)? & mnemonics::NUM_BYTES)
    }

    fn tx_bytes(&mut self) -> Result<u8, Self::FifoErrorType> {
        Ok(self.read_status(status::TXBYTES)? & mnemonics::NUM_BYTES)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, status, RfFifo};
    use crate::{spi_test_expects, test::mk_radio};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn flush() {
        let spi_expectations = spi_test_expects![
            (vec![commands::SFRX], vec![0x0Fu8]),
            (vec![commands::SFTX], vec![0x0Fu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut gdo0) = (mocks.0, mocks.1, mocks.2);
        radio.flush_rx().unwrap();
        radio.flush_tx().unwrap();
        spi.done();
        gdo0.done();
    }

    #[test]
    pub fn fifo_bytes() {
        let spi_expectations = spi_test_expects![
            // the overflow flag is masked off
            (vec![status::RXBYTES | 0xC0, 0u8], vec![0x1Fu8, 0x85u8]),
            (vec![status::TXBYTES | 0xC0, 0u8], vec![0x1Fu8, 0x40u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut gdo0) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.rx_bytes().unwrap(), 5);
        assert_eq!(radio.tx_bytes().unwrap(), 0x40);
        spi.done();
        gdo0.done();
    }
}
