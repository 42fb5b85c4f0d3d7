use super::{commands, mnemonics, registers, Cc2500Error, CC2500};
use crate::radio::{
    handler::RxHandler,
    prelude::{Gdo0Pin, RfInit},
    RadioConfig,
};
use embedded_hal::{delay::DelayNs, spi::SpiDevice};

/// The time (in microseconds) given to the radio after a `SRES` strobe.
const RESET_DELAY: u32 = 1000;

impl<SPI, GDO, DELAY, H> RfInit for CC2500<SPI, GDO, DELAY, H>
where
    SPI: SpiDevice,
    GDO: Gdo0Pin,
    DELAY: DelayNs,
    H: RxHandler,
{
    type ConfigErrorType = Cc2500Error<SPI::Error, GDO::Error>;

    /// Initialize the radio's hardware using the [`SpiDevice`] and [`Gdo0Pin`] given
    /// to [`CC2500::new()`].
    fn init(&mut self) -> Result<(), Self::ConfigErrorType> {
        self.strobe(commands::SRES)?;
        // Registers written before the crystal oscillator is stable are not retained.
        self._delay_impl.delay_us(RESET_DELAY);

        let (part, _version) = self.get_part_info()?;
        if part != mnemonics::CC2500_PARTNUM {
            #[cfg(feature = "defmt")]
            defmt::error!("unexpected PARTNUM {=u8:#04x}", part);
            return Err(Cc2500Error::BinaryCorruption);
        }
        self.with_config(&RadioConfig::default())
    }

    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType> {
        // registers are only safe to change while IDLE
        self.strobe(commands::SIDLE)?;

        self._spi
            .write_burst(registers::IOCFG2, config.registers())
            .map_err(Cc2500Error::Spi)?;
        self._spi
            .write_burst(registers::PATABLE, &[config.pa_table()])
            .map_err(Cc2500Error::Spi)?;

        self.strobe(commands::SFRX)?;
        self.strobe(commands::SFTX)?;
        self._settings = *config;
        self.strobe(commands::SRX)
    }
}
