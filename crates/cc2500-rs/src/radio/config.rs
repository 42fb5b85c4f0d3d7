use crate::radio::cc2500::{mnemonics, registers, MAX_PACKET_LENGTH, POWER_TABLE};
use crate::AddressCheck;

/// The register image written by [`RadioConfig::default()`].
///
/// 2433 MHz base frequency, 250 kBaud MSK, variable packet length with CRC,
/// 2 status bytes appended to received packets, and GDO0 asserting on sync word.
const DEFAULT_REGISTERS: [u8; registers::COUNT] = [
    0x29, // IOCFG2: CHIP_RDYn
    0x2E, // IOCFG1: high impedance
    0x06, // IOCFG0: asserts on sync word, deasserts at end of packet
    0x07, // FIFOTHR
    0xD3, // SYNC1
    0x91, // SYNC0
    0x3D, // PKTLEN
    0x04, // PKTCTRL1: append status, no address check
    0x05, // PKTCTRL0: CRC enabled, variable length
    0x01, // ADDR
    0x00, // CHANNR
    0x07, // FSCTRL1
    0x00, // FSCTRL0
    0x5D, // FREQ2
    0x93, // FREQ1
    0xB1, // FREQ0
    0x2D, // MDMCFG4
    0x3B, // MDMCFG3
    0x73, // MDMCFG2
    0x22, // MDMCFG1
    0xF8, // MDMCFG0
    0x00, // DEVIATN
    0x07, // MCSM2
    0x3F, // MCSM1: stay in RX after RX and return to RX after TX
    0x18, // MCSM0
    0x1D, // FOCCFG
    0x1C, // BSCFG
    0xC7, // AGCCTRL2
    0x00, // AGCCTRL1
    0xB2, // AGCCTRL0
    0x87, // WOREVT1
    0x6B, // WOREVT0
    0xF8, // WORCTRL
    0xB6, // FREND1
    0x10, // FREND0
    0xEA, // FSCAL3
    0x0A, // FSCAL2
    0x00, // FSCAL1
    0x11, // FSCAL0
    0x41, // RCCTRL1
    0x00, // RCCTRL0
    0x59, // FSTEST
    0x7F, // PTEST
    0x3F, // AGCTEST
    0x88, // TEST2
    0x31, // TEST1
    0x0B, // TEST0
];

const MAX_PKTLEN: u8 = MAX_PACKET_LENGTH as u8;

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use cc2500::radio::RadioConfig;
///
/// let mut config = RadioConfig::default();
/// config = config.with_channel(42).with_address(0x12);
/// assert_eq!(config.channel(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioConfig {
    regs: [u8; registers::COUNT],
    power_level: u8,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::channel()`] | `0` |
    /// | [`RadioConfig::address()`] | `0x01` |
    /// | [`RadioConfig::address_check()`] | [`AddressCheck::Disabled`] |
    /// | [`RadioConfig::power_level()`] | `17` (+1 dBm) |
    /// | [`RadioConfig::max_packet_length()`] | `61` |
    /// | [`RadioConfig::sync_word()`] | `0xD391` |
    ///
    /// The remaining registers select a 2433 MHz base frequency at 250 kBaud
    /// with a 16 bit CRC.
    fn default() -> Self {
        Self {
            regs: DEFAULT_REGISTERS,
            power_level: (POWER_TABLE.len() - 1) as u8,
        }
    }
}

impl RadioConfig {
    /// Returns the value set by [`RadioConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.regs[registers::CHANNR as usize]
    }

    /// Set the channel number.
    ///
    /// See [`RfChannel::set_channel()`](fn@crate::radio::prelude::RfChannel::set_channel).
    pub fn with_channel(self, channel: u8) -> Self {
        self.with_register(registers::CHANNR, channel)
    }

    /// Returns the value set by [`RadioConfig::with_address()`].
    pub const fn address(&self) -> u8 {
        self.regs[registers::ADDR as usize]
    }

    /// Set the device address.
    ///
    /// See [`RfAddress::set_address()`](fn@crate::radio::prelude::RfAddress::set_address).
    pub fn with_address(self, address: u8) -> Self {
        self.with_register(registers::ADDR, address)
    }

    /// Returns the value set by [`RadioConfig::with_address_check()`].
    pub const fn address_check(&self) -> AddressCheck {
        AddressCheck::from_bits(self.regs[registers::PKTCTRL1 as usize])
    }

    /// Set the hardware filtering of received packets by address.
    ///
    /// See [`RfAddress::set_address_check()`](fn@crate::radio::prelude::RfAddress::set_address_check).
    pub fn with_address_check(self, check: AddressCheck) -> Self {
        let pktctrl1 = self.regs[registers::PKTCTRL1 as usize] & !mnemonics::ADR_CHK;
        self.with_register(registers::PKTCTRL1, pktctrl1 | check.into_bits())
    }

    /// Returns the value set by [`RadioConfig::with_power_level()`].
    pub const fn power_level(&self) -> u8 {
        self.power_level
    }

    /// Set the transmit power as an index into [`POWER_TABLE`].
    ///
    /// This value is clamped to range [0, 17].
    /// See also [`power_dbm()`](fn@crate::radio::power_dbm).
    pub fn with_power_level(self, level: u8) -> Self {
        Self {
            power_level: level.min((POWER_TABLE.len() - 1) as u8),
            ..self
        }
    }

    /// The PATABLE byte that corresponds to [`RadioConfig::power_level()`].
    pub const fn pa_table(&self) -> u8 {
        POWER_TABLE[self.power_level as usize]
    }

    /// Returns the value set by [`RadioConfig::with_max_packet_length()`].
    pub const fn max_packet_length(&self) -> u8 {
        self.regs[registers::PKTLEN as usize]
    }

    /// The largest length field that the radio accepts in a received packet.
    ///
    /// Longer packets are discarded by the radio.
    /// This value is clamped to range [1, [`MAX_PACKET_LENGTH`](constant@crate::radio::MAX_PACKET_LENGTH)].
    pub fn with_max_packet_length(self, length: u8) -> Self {
        self.with_register(registers::PKTLEN, length.clamp(1, MAX_PKTLEN))
    }

    /// Returns the value set by [`RadioConfig::with_sync_word()`].
    pub const fn sync_word(&self) -> u16 {
        u16::from_be_bytes([
            self.regs[registers::SYNC1 as usize],
            self.regs[registers::SYNC0 as usize],
        ])
    }

    /// The 16 bit sync word that precedes every packet.
    ///
    /// Radios only hear each other if they share the same sync word.
    pub fn with_sync_word(self, sync_word: u16) -> Self {
        let [high, low] = sync_word.to_be_bytes();
        self.with_register(registers::SYNC1, high)
            .with_register(registers::SYNC0, low)
    }

    /// Returns the cached value of the configuration register at `address`.
    ///
    /// Addresses beyond `TEST0` (`0x2E`) return `None`.
    pub fn register(&self, address: u8) -> Option<u8> {
        self.regs.get(address as usize).copied()
    }

    /// Override a configuration register with a raw `value`.
    ///
    /// This is meant for settings without a dedicated builder method,
    /// like the base frequency (`FREQ2..FREQ0`) or modem configuration.
    /// Addresses beyond `TEST0` (`0x2E`) are ignored.
    ///
    /// Changing `IOCFG0` or `MCSM1` will likely break
    /// [`RfRadio::transmit()`](fn@crate::radio::prelude::RfRadio::transmit).
    pub fn with_register(self, address: u8, value: u8) -> Self {
        let mut regs = self.regs;
        if let Some(reg) = regs.get_mut(address as usize) {
            *reg = value;
        }
        Self { regs, ..self }
    }

    /// The full image of configuration registers `IOCFG2` through `TEST0`.
    pub const fn registers(&self) -> &[u8; registers::COUNT] {
        &self.regs
    }
}
