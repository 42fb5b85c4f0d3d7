/// A private module encapsulating configuration register offsets for the CC2500.
pub mod registers {
    pub const IOCFG2: u8 = 0x00;
    pub const IOCFG1: u8 = 0x01;
    pub const IOCFG0: u8 = 0x02;
    pub const FIFOTHR: u8 = 0x03;
    pub const SYNC1: u8 = 0x04;
    pub const SYNC0: u8 = 0x05;
    pub const PKTLEN: u8 = 0x06;
    pub const PKTCTRL1: u8 = 0x07;
    pub const PKTCTRL0: u8 = 0x08;
    pub const ADDR: u8 = 0x09;
    pub const CHANNR: u8 = 0x0A;
    pub const MCSM1: u8 = 0x17;
    pub const TEST0: u8 = 0x2E;

    /// The number of configuration registers (`IOCFG2` through `TEST0`).
    pub const COUNT: usize = TEST0 as usize + 1;

    pub const PATABLE: u8 = 0x3E;
    pub const FIFO: u8 = 0x3F;
}

/// A private module encapsulating read-only status register offsets for the CC2500.
///
/// These share addresses with the command strobes and are only reachable
/// with the burst bit set (see [`super::commands::READ_BURST`]).
pub mod status {
    pub const PARTNUM: u8 = 0x30;
    pub const VERSION: u8 = 0x31;
    pub const LQI: u8 = 0x33;
    pub const RSSI: u8 = 0x34;
    pub const MARCSTATE: u8 = 0x35;
    pub const PKTSTATUS: u8 = 0x38;
    pub const TXBYTES: u8 = 0x3A;
    pub const RXBYTES: u8 = 0x3B;
}

/// A private module encapsulating SPI header bits and command strobes for the CC2500.
pub mod commands {
    pub const WRITE_BURST: u8 = 0x40;
    pub const READ_SINGLE: u8 = 0x80;
    pub const READ_BURST: u8 = 0xC0;

    pub const SRES: u8 = 0x30;
    pub const SFSTXON: u8 = 0x31;
    pub const SXOFF: u8 = 0x32;
    pub const SCAL: u8 = 0x33;
    pub const SRX: u8 = 0x34;
    pub const STX: u8 = 0x35;
    pub const SIDLE: u8 = 0x36;
    pub const SWOR: u8 = 0x38;
    pub const SPWD: u8 = 0x39;
    pub const SFRX: u8 = 0x3A;
    pub const SFTX: u8 = 0x3B;
    pub const SWORRST: u8 = 0x3C;
    pub const SNOP: u8 = 0x3D;
}

/// A private module to encapsulate bit mnemonics
pub mod mnemonics {
    /// The CRC_OK flag in the appended LQI status byte.
    pub const CRC_OK: u8 = 1 << 7;
    /// The overflow flag in the RXBYTES (and underflow flag in TXBYTES) status register.
    pub const FIFO_OVERFLOW: u8 = 1 << 7;
    /// The byte count field in the RXBYTES/TXBYTES status registers.
    pub const NUM_BYTES: u8 = 0x7F;
    /// The address check field in the PKTCTRL1 register.
    pub const ADR_CHK: u8 = 0b11;
    /// The value of the PARTNUM status register on every CC2500.
    pub const CC2500_PARTNUM: u8 = 0x80;
}
