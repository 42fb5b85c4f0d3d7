use super::registers;
use crate::radio::{
    handler::RxHandler,
    prelude::{Gdo0Pin, RfAddress},
    Cc2500Error, CC2500,
};
use crate::AddressCheck;
use embedded_hal::{delay::DelayNs, spi::SpiDevice};

impl<SPI, GDO, DELAY, H> RfAddress for CC2500<SPI, GDO, DELAY, H>
where
    SPI: SpiDevice,
    GDO: Gdo0Pin,
    DELAY: DelayNs,
    H: RxHandler,
{
    type AddressErrorType = Cc2500Error<SPI::Error, GDO::Error>;

    fn set_address(&mut self, address: u8) -> Result<(), Self::AddressErrorType> {
        self.write_register(registers::ADDR, address)?;
        self._settings = self._settings.with_address(address);
        Ok(())
    }

    fn get_address(&self) -> u8 {
        self._settings.address()
    }

    /// Packets that fail the check are discarded by the radio,
    /// so they never reach [`CC2500::on_interrupt()`].
    fn set_address_check(&mut self, check: AddressCheck) -> Result<(), Self::AddressErrorType> {
        let settings = self._settings.with_address_check(check);
        // only PKTCTRL1 changed
        let pktctrl1 = settings.registers()[registers::PKTCTRL1 as usize];
        self.write_register(registers::PKTCTRL1, pktctrl1)?;
        self._settings = settings;
        Ok(())
    }

    fn get_address_check(&self) -> AddressCheck {
        self._settings.address_check()
    }
}
