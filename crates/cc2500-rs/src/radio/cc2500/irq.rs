use embedded_hal::{delay::DelayNs, spi::SpiDevice};

use super::{radio::receive_packet, Cc2500Error, CC2500};
use crate::{
    radio::{handler::RxHandler, prelude::Gdo0Pin},
    RxOutcome,
};

impl<SPI, GDO, DELAY, H> CC2500<SPI, GDO, DELAY, H>
where
    SPI: SpiDevice,
    GDO: Gdo0Pin,
    DELAY: DelayNs,
    H: RxHandler,
{
    /// Service the GDO0 interrupt.
    ///
    /// Call this from the interrupt routine of the MCU pin wired to GDO0. With the default
    /// configuration, the pin's falling edge marks the end of a received packet.
    ///
    /// If the GDO0 interrupt flag is set, the next packet is fetched into the driver's
    /// own RX buffer. A packet that passed the CRC check is then given to the installed
    /// [`RxHandler`] (see [`CC2500::with_handler()`]). Packets with a length field of 0
    /// carry no address byte and are not given to the handler. The returned [`RxOutcome`] tells
    /// what happened; [`RxOutcome::NoData`] also covers interrupts raised by other pins
    /// that share the same vector.
    ///
    /// The GDO0 interrupt flag is always cleared before returning, even upon failure.
    ///
    /// <div class="warning">
    ///
    /// The handler runs in the context of this call (usually an interrupt context),
    /// so it must not block or transmit.
    ///
    /// </div>
    pub fn on_interrupt(&mut self) -> Result<RxOutcome, Cc2500Error<SPI::Error, GDO::Error>> {
        if !self.gdo0.is_interrupt_pending() {
            self.gdo0.clear_interrupt();
            return Ok(RxOutcome::NoData);
        }
        let result = self.dispatch_packet();
        self.gdo0.clear_interrupt();
        result
    }

    fn dispatch_packet(&mut self) -> Result<RxOutcome, Cc2500Error<SPI::Error, GDO::Error>> {
        let outcome = receive_packet(&mut self._spi, &mut self._rx_buf).map_err(Cc2500Error::Spi)?;
        match outcome {
            RxOutcome::Received { length, status } if length > 0 => {
                // the status byte is reserved
                let _ = self
                    ._handler
                    .on_packet(&self._rx_buf[..length as usize], status);
            }
            #[cfg(feature = "defmt")]
            RxOutcome::Received { .. } => {
                // no address byte
                defmt::trace!("dropped empty packet");
            }
            #[cfg(feature = "defmt")]
            RxOutcome::CrcFailed { length, .. } => {
                // also caused by an address mismatch when address checking is enabled
                defmt::trace!("dropped {=u8} byte packet with bad CRC", length);
            }
            _ => (),
        }
        Ok(outcome)
    }
}
