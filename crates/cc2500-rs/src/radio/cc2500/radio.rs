use super::{
    commands, mnemonics, spi::Cc2500Spi, status, Cc2500Error, BUFFER_LENGTH, CC2500,
    MAX_PACKET_LENGTH,
};
use crate::{
    frame,
    radio::{
        handler::RxHandler,
        prelude::{Gdo0Pin, RfRadio},
    },
    PacketStatus, RxOutcome,
};
use embedded_hal::{delay::DelayNs, spi::SpiDevice};

/// Fetch the next packet from the RX FIFO into `buf`.
///
/// This only needs the SPI layer, so the interrupt handler can lend it the
/// driver's own RX buffer.
pub(super) fn receive_packet<SPI: SpiDevice>(
    spi: &mut Cc2500Spi<SPI>,
    buf: &mut [u8],
) -> Result<RxOutcome, SPI::Error> {
    let rx_bytes = spi.read_status(status::RXBYTES)?;
    if rx_bytes & mnemonics::FIFO_OVERFLOW != 0 {
        // the radio stays in RXFIFO_OVERFLOW until flushed
        spi.strobe(commands::SFRX)?;
        spi.strobe(commands::SRX)?;
        #[cfg(feature = "defmt")]
        defmt::warn!("RX FIFO overflowed and was flushed");
        return Ok(RxOutcome::Overflow);
    }
    if rx_bytes & mnemonics::NUM_BYTES == 0 {
        return Ok(RxOutcome::NoData);
    }

    let mut length = [0u8];
    spi.read_fifo(&mut length)?;
    let length = length[0];
    let len = length as usize;

    // room for the payload and both status bytes
    if len > MAX_PACKET_LENGTH || len + 2 > buf.len() {
        spi.strobe(commands::SFRX)?;
        #[cfg(feature = "defmt")]
        defmt::warn!("discarded {=u8} byte packet", length);
        return Ok(RxOutcome::Oversized(length));
    }

    if len > 0 {
        spi.read_fifo(&mut buf[..len])?;
    }
    spi.read_fifo(&mut buf[len..len + 2])?;
    let status = PacketStatus::from_bytes(buf[len], buf[len + 1]);
    if status.crc_ok() {
        Ok(RxOutcome::Received { length, status })
    } else {
        Ok(RxOutcome::CrcFailed { length, status })
    }
}

impl<SPI, GDO, DELAY, H> CC2500<SPI, GDO, DELAY, H>
where
    SPI: SpiDevice,
    GDO: Gdo0Pin,
    DELAY: DelayNs,
    H: RxHandler,
{
    /// Transmit the first `len` bytes of the TX buffer with the GDO0 interrupt masked.
    fn transmit_buffered(&mut self, len: usize) -> Result<(), Cc2500Error<SPI::Error, GDO::Error>> {
        self.gdo0.disable_interrupt();
        let result = self.transmit_unmasked(len);
        // the end of our own packet also raised the GDO0 interrupt flag
        self.gdo0.clear_interrupt();
        self.gdo0.enable_interrupt();
        #[cfg(feature = "defmt")]
        if matches!(result, Err(Cc2500Error::Timeout)) {
            defmt::warn!("GDO0 did not signal the end of transmission");
        }
        result
    }

    fn transmit_unmasked(&mut self, len: usize) -> Result<(), Cc2500Error<SPI::Error, GDO::Error>> {
        self._spi
            .write_fifo(&self._tx_buf[..len])
            .map_err(Cc2500Error::Spi)?;
        self.strobe(commands::STX)?;
        // sync word sent
        self.wait_for_gdo0(true)?;
        // end of packet
        self.wait_for_gdo0(false)
    }
}

impl<SPI, GDO, DELAY, H> RfRadio for CC2500<SPI, GDO, DELAY, H>
where
    SPI: SpiDevice,
    GDO: Gdo0Pin,
    DELAY: DelayNs,
    H: RxHandler,
{
    type RadioErrorType = Cc2500Error<SPI::Error, GDO::Error>;

    fn as_rx(&mut self) -> Result<(), Self::RadioErrorType> {
        self.strobe(commands::SRX)
    }

    fn as_idle(&mut self) -> Result<(), Self::RadioErrorType> {
        self.strobe(commands::SIDLE)
    }

    /// See [`RfRadio::transmit()`] for implementation-agnostic detail.
    ///
    /// The default configuration returns the radio to RX mode after transmitting.
    /// Upon failure, the TX FIFO may still hold (part of) the `frame`;
    /// use [`RfFifo::flush_tx()`](fn@crate::radio::prelude::RfFifo::flush_tx)
    /// before transmitting again.
    fn transmit(&mut self, frame: &[u8]) -> Result<(), Self::RadioErrorType> {
        if frame.len() > BUFFER_LENGTH {
            return Err(Cc2500Error::BufferOverflow);
        }
        self._tx_buf[..frame.len()].copy_from_slice(frame);
        self.transmit_buffered(frame.len())
    }

    fn send(&mut self, payload: &[u8], destination: u8) -> Result<(), Self::RadioErrorType> {
        let len = frame::pack(payload, destination, &mut self._tx_buf)?;
        self.transmit_buffered(len)
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<RxOutcome, Self::RadioErrorType> {
        receive_packet(&mut self._spi, buf).map_err(Cc2500Error::Spi)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, status, RfRadio, BUFFER_LENGTH, MAX_PACKET_LENGTH};
    use crate::radio::Cc2500Error;
    use crate::test::{mk_failing_radio, mk_radio, IrqEvent};
    use crate::{spi_test_expects, RxOutcome};
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::{vec, vec::Vec};

    const RXBYTES: u8 = status::RXBYTES | commands::READ_BURST;
    const TX_FIFO: u8 = 0x7F;
    const RX_FIFO: u8 = 0xFF;

    #[test]
    fn as_rx_and_idle() {
        let spi_expectations = spi_test_expects![
            (vec![commands::SRX], vec![0x0Fu8]),
            (vec![commands::SIDLE], vec![0x1Fu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut gdo0) = (mocks.0, mocks.1, mocks.2);
        radio.as_rx().unwrap();
        radio.as_idle().unwrap();
        spi.done();
        gdo0.done();
    }

    #[test]
    fn send() {
        let pin_expectations = [
            // wait for sync word
            PinTransaction::get(PinState::Low),
            PinTransaction::get(PinState::High),
            // wait for end of packet
            PinTransaction::get(PinState::High),
            PinTransaction::get(PinState::High),
            PinTransaction::get(PinState::Low),
        ];
        let spi_expectations = spi_test_expects![
            (
                vec![TX_FIFO, 0x03, 0x05, 0xAA, 0xBB],
                vec![0x1Fu8, 0x1F, 0x1F, 0x1F, 0x1F],
            ),
            (vec![commands::STX], vec![0x1Fu8]),
        ];
        let mocks = mk_radio(&pin_expectations, &spi_expectations);
        let (mut radio, mut spi, mut gdo0) = (mocks.0, mocks.1, mocks.2);
        radio.send(&[0xAA, 0xBB], 0x05).unwrap();
        assert_eq!(
            radio.gdo0.events,
            [IrqEvent::Disable, IrqEvent::Clear, IrqEvent::Enable]
        );
        spi.done();
        gdo0.done();
    }

    #[test]
    fn send_too_long() {
        let mocks = mk_radio(&[], &[]);
        let (mut radio, mut spi, mut gdo0) = (mocks.0, mocks.1, mocks.2);
        let payload = [0u8; BUFFER_LENGTH - 1];
        assert!(matches!(
            radio.send(&payload, 1),
            Err(Cc2500Error::BufferOverflow)
        ));
        let frame = [1u8; BUFFER_LENGTH + 1];
        assert!(matches!(
            radio.transmit(&frame),
            Err(Cc2500Error::BufferOverflow)
        ));
        // nothing was sent and the interrupt was never masked
        assert!(radio.gdo0.events.is_empty());
        spi.done();
        gdo0.done();
    }

    #[test]
    fn transmit_timeout() {
        let pin_expectations = [
            // polled at 0, 10, and 20 us
            PinTransaction::get(PinState::Low),
            PinTransaction::get(PinState::Low),
            PinTransaction::get(PinState::Low),
        ];
        let spi_expectations = spi_test_expects![
            (vec![TX_FIFO, 0x02, 0x09, 0x42], vec![0x1Fu8, 0x1F, 0x1F, 0x1F]),
            (vec![commands::STX], vec![0x1Fu8]),
        ];
        let mocks = mk_radio(&pin_expectations, &spi_expectations);
        let (mut radio, mut spi, mut gdo0) = (mocks.0, mocks.1, mocks.2);
        radio.tx_timeout = 20;
        assert!(matches!(
            radio.transmit(&[0x02, 0x09, 0x42]),
            Err(Cc2500Error::Timeout)
        ));
        // the interrupt is restored anyway
        assert_eq!(
            radio.gdo0.events,
            [IrqEvent::Disable, IrqEvent::Clear, IrqEvent::Enable]
        );
        spi.done();
        gdo0.done();
    }

    #[test]
    fn transmit_spi_error_restores_interrupt() {
        let (mut radio, mut gdo0) = mk_failing_radio(&[]);
        assert!(matches!(
            radio.send(&[0xAA], 0x05),
            Err(Cc2500Error::Spi(_))
        ));
        assert_eq!(
            radio.gdo0.events,
            [IrqEvent::Disable, IrqEvent::Clear, IrqEvent::Enable]
        );
        gdo0.done();
    }

    #[test]
    fn receive_spi_error() {
        let (mut radio, mut gdo0) = mk_failing_radio(&[]);
        let mut buf = [0u8; BUFFER_LENGTH];
        assert!(matches!(
            radio.receive(&mut buf),
            Err(Cc2500Error::Spi(_))
        ));
        gdo0.done();
    }

    #[test]
    fn receive_no_data() {
        let spi_expectations = spi_test_expects![(vec![RXBYTES, 0u8], vec![0x0Fu8, 0u8]),];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut gdo0) = (mocks.0, mocks.1, mocks.2);
        let mut buf = [0x55u8; 10];
        assert_eq!(radio.receive(&mut buf).unwrap(), RxOutcome::NoData);
        assert_eq!(buf, [0x55u8; 10]);
        spi.done();
        gdo0.done();
    }

    #[test]
    fn receive_overflow() {
        let spi_expectations = spi_test_expects![
            (vec![RXBYTES, 0u8], vec![0x6Fu8, 0xC0u8]),
            (vec![commands::SFRX], vec![0x6Fu8]),
            (vec![commands::SRX], vec![0x0Fu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut gdo0) = (mocks.0, mocks.1, mocks.2);
        let mut buf = [0u8; 10];
        assert_eq!(radio.receive(&mut buf).unwrap(), RxOutcome::Overflow);
        spi.done();
        gdo0.done();
    }

    /// The transactions of a receive that fetches `[0x04, 0x09, 0x01, 0x02, 0x03, 0xEC, lqi]`.
    fn packet_expectations(lqi: u8) -> Vec<SpiTransaction<u8>> {
        spi_test_expects![
            (vec![RXBYTES, 0u8], vec![0x1Fu8, 7u8]),
            (vec![RX_FIFO, 0u8], vec![0x1Fu8, 4u8]),
            (
                vec![RX_FIFO, 0u8, 0, 0, 0],
                vec![0x1Fu8, 0x09, 0x01, 0x02, 0x03],
            ),
            (vec![RX_FIFO, 0u8, 0], vec![0x1Fu8, 0xEC, lqi]),
        ]
        .to_vec()
    }

    #[test]
    fn receive_packet() {
        let spi_expectations = packet_expectations(0xAD);
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut gdo0) = (mocks.0, mocks.1, mocks.2);
        let mut buf = [0u8; 10];
        let outcome = radio.receive(&mut buf).unwrap();
        assert!(outcome.is_crc_ok());
        assert_eq!(outcome.length(), Some(4));
        let RxOutcome::Received { length, status } = outcome else {
            panic!("expected a received packet, got {outcome:?}");
        };
        assert_eq!(buf[..length as usize], [0x09, 0x01, 0x02, 0x03]);
        assert_eq!(buf[4..6], [0xEC, 0xAD]);
        assert_eq!(status.lqi(), 0x2D);
        assert_eq!(status.rssi_dbm(), -82);
        spi.done();
        gdo0.done();
    }

    #[test]
    fn receive_crc_failed() {
        let spi_expectations = packet_expectations(0x2D);
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut gdo0) = (mocks.0, mocks.1, mocks.2);
        let mut buf = [0u8; 10];
        let outcome = radio.receive(&mut buf).unwrap();
        assert!(!outcome.is_crc_ok());
        assert!(matches!(outcome, RxOutcome::CrcFailed { length: 4, .. }));
        // the payload is still copied
        assert_eq!(buf[..4], [0x09, 0x01, 0x02, 0x03]);
        spi.done();
        gdo0.done();
    }

    #[test]
    fn receive_oversized() {
        let spi_expectations = spi_test_expects![
            (vec![RXBYTES, 0u8], vec![0x1Fu8, 7u8]),
            (vec![RX_FIFO, 0u8], vec![0x1Fu8, 4u8]),
            // flushed exactly once
            (vec![commands::SFRX], vec![0x1Fu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut gdo0) = (mocks.0, mocks.1, mocks.2);
        let mut buf = [0u8; 2];
        let outcome = radio.receive(&mut buf).unwrap();
        assert_eq!(outcome, RxOutcome::Oversized(4));
        assert_eq!(outcome.length(), Some(4));
        assert!(!outcome.is_crc_ok());
        assert_eq!(buf, [0u8; 2]);
        spi.done();
        gdo0.done();
    }

    #[test]
    fn receive_needs_room_for_status_bytes() {
        let spi_expectations = spi_test_expects![
            (vec![RXBYTES, 0u8], vec![0x1Fu8, 7u8]),
            (vec![RX_FIFO, 0u8], vec![0x1Fu8, 4u8]),
            (vec![commands::SFRX], vec![0x1Fu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut gdo0) = (mocks.0, mocks.1, mocks.2);
        // the payload fits, but the status bytes would not
        let mut buf = [0u8; 5];
        assert_eq!(radio.receive(&mut buf).unwrap(), RxOutcome::Oversized(4));
        spi.done();
        gdo0.done();
    }

    #[test]
    fn receive_empty_packet() {
        let spi_expectations = spi_test_expects![
            (vec![RXBYTES, 0u8], vec![0x1Fu8, 3u8]),
            (vec![RX_FIFO, 0u8], vec![0x1Fu8, 0u8]),
            // only the status bytes follow
            (vec![RX_FIFO, 0u8, 0], vec![0x1Fu8, 0x10, 0x80]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut gdo0) = (mocks.0, mocks.1, mocks.2);
        let mut buf = [0u8; 4];
        let outcome = radio.receive(&mut buf).unwrap();
        assert_eq!(outcome.length(), Some(0));
        assert!(outcome.is_crc_ok());
        assert_eq!(buf[..2], [0x10, 0x80]);
        spi.done();
        gdo0.done();
    }

    #[test]
    fn receive_length_beyond_fifo() {
        let spi_expectations = spi_test_expects![
            (vec![RXBYTES, 0u8], vec![0x1Fu8, 0x3Fu8]),
            (vec![RX_FIFO, 0u8], vec![0x1Fu8, (MAX_PACKET_LENGTH + 1) as u8]),
            (vec![commands::SFRX], vec![0x1Fu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut gdo0) = (mocks.0, mocks.1, mocks.2);
        // the buffer has room, but the radio can not hold such a packet
        let mut buf = [0u8; 2 * BUFFER_LENGTH];
        assert_eq!(radio.receive(&mut buf).unwrap(), RxOutcome::Oversized(62));
        spi.done();
        gdo0.done();
    }
}
