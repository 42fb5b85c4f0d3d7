use embedded_hal::{delay::DelayNs, spi::SpiDevice};

use crate::radio::{
    handler::RxHandler,
    prelude::{Gdo0Pin, RfStatus},
    Cc2500Error, CC2500,
};
use crate::ChipStatus;

use super::commands;

impl<SPI, GDO, DELAY, H> RfStatus for CC2500<SPI, GDO, DELAY, H>
where
    SPI: SpiDevice,
    GDO: Gdo0Pin,
    DELAY: DelayNs,
    H: RxHandler,
{
    type StatusErrorType = Cc2500Error<SPI::Error, GDO::Error>;

    fn get_status(&self) -> ChipStatus {
        self._spi.status()
    }

    /// This strobes `SNOP`, so [`ChipStatus::fifo_bytes()`] describes the TX FIFO.
    fn update(&mut self) -> Result<(), Self::StatusErrorType> {
        self.strobe(commands::SNOP)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, RfStatus};
    use crate::{spi_test_expects, test::mk_radio, ChipState};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::{format, vec};

    #[test]
    pub fn update() {
        let spi_expectations = spi_test_expects![
            (vec![commands::SNOP], vec![0x0Fu8]),
            // chip not ready, TX state
            (vec![commands::SNOP], vec![0xA0u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut gdo0) = (mocks.0, mocks.1, mocks.2);

        radio.update().unwrap();
        let status = radio.get_status();
        assert!(status.chip_ready());
        assert_eq!(status.state(), ChipState::Idle);
        assert_eq!(status.fifo_bytes(), 15);

        radio.update().unwrap();
        let status = radio.get_status();
        assert!(!status.chip_ready());
        assert_eq!(status.state(), ChipState::Tx);
        assert_eq!(status.fifo_bytes(), 0);
        assert_eq!(
            format!("{status}"),
            "ChipStatus ready: false, state: TX, fifo bytes: 0"
        );
        spi.done();
        gdo0.done();
    }
}
