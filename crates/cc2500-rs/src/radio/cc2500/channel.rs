use super::registers;
use crate::radio::{
    handler::RxHandler,
    prelude::{Gdo0Pin, RfChannel},
    Cc2500Error, CC2500,
};
use embedded_hal::{delay::DelayNs, spi::SpiDevice};

impl<SPI, GDO, DELAY, H> RfChannel for CC2500<SPI, GDO, DELAY, H>
where
    SPI: SpiDevice,
    GDO: Gdo0Pin,
    DELAY: DelayNs,
    H: RxHandler,
{
    type ChannelErrorType = Cc2500Error<SPI::Error, GDO::Error>;

    /// All 256 channels are accepted. With the default configuration,
    /// channel `n` is at 2433 MHz + `n` * 200 kHz.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        self.write_register(registers::CHANNR, channel)?;
        self._settings = self._settings.with_channel(channel);
        Ok(())
    }

    /// See also [`CC2500::set_channel()`].
    fn get_channel(&self) -> u8 {
        self._settings.channel()
    }
}
