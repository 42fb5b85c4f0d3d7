use embedded_hal::{delay::DelayNs, spi::SpiDevice};

use crate::radio::{
    handler::RxHandler,
    prelude::{Gdo0Pin, RfPower},
    Cc2500Error, CC2500,
};

use super::{commands, registers};

/// PATABLE values for each supported output power, from lowest to highest.
///
/// These are the optimum settings listed in table 31 of the CC2500 datasheet.
/// The nominal output power of each entry is in [`POWER_DBM`].
pub const POWER_TABLE: [u8; 18] = [
    0x00, 0x50, 0x44, 0xC0, // -55, -30, -28, -26 dBm
    0x84, 0x81, 0x46, 0x93, // -24, -22, -20, -18 dBm
    0x55, 0x8D, 0xC6, 0x97, // -16, -14, -12, -10 dBm
    0x6E, 0x7F, 0xA9, 0xBB, // -8, -6, -4, -2 dBm
    0xFE, 0xFF, // 0, 1 dBm
];

/// The nominal output power (in dBm) of each [`POWER_TABLE`] entry.
pub const POWER_DBM: [i8; 18] = [
    -55, -30, -28, -26, -24, -22, -20, -18, -16, -14, -12, -10, -8, -6, -4, -2, 0, 1,
];

/// Get the nominal output power (in dBm) of a power `level`.
///
/// The `level` is clamped like in [`RfPower::set_power()`].
pub const fn power_dbm(level: u8) -> i8 {
    let index = clamp_level(level);
    POWER_DBM[index as usize]
}

const fn clamp_level(level: u8) -> u8 {
    let max = (POWER_TABLE.len() - 1) as u8;
    if level > max {
        max
    } else {
        level
    }
}

impl<SPI, GDO, DELAY, H> RfPower for CC2500<SPI, GDO, DELAY, H>
where
    SPI: SpiDevice,
    GDO: Gdo0Pin,
    DELAY: DelayNs,
    H: RxHandler,
{
    type PowerErrorType = Cc2500Error<SPI::Error, GDO::Error>;

    /// At the highest level (`17`), the CC2500 draws about 21.5 mA while transmitting.
    fn set_power(&mut self, level: u8) -> Result<(), Self::PowerErrorType> {
        let level = clamp_level(level);
        self._spi
            .write_burst(registers::PATABLE, &[POWER_TABLE[level as usize]])
            .map_err(Cc2500Error::Spi)?;
        self._settings = self._settings.with_power_level(level);
        Ok(())
    }

    fn get_power(&self) -> u8 {
        self._settings.power_level()
    }

    /// The radio must be IDLE before it can enter SLEEP, so this strobes `SIDLE` first.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType> {
        self.strobe(commands::SIDLE)?;
        self.strobe(commands::SPWD)
    }
}
