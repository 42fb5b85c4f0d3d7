//! Receive handlers invoked by [`CC2500::on_interrupt()`](fn@crate::radio::CC2500::on_interrupt).
use heapless::{spsc::Producer, Vec};

use crate::{radio::cc2500::MAX_PACKET_LENGTH, PacketStatus};

/// A trait for the one receiver of packets fetched from the radio's interrupt.
///
/// Implementations run inside the interrupt context that called
/// [`CC2500::on_interrupt()`](fn@crate::radio::CC2500::on_interrupt),
/// so they must return quickly and never block. Do not transmit from a handler.
///
/// Closures of the form `FnMut(&[u8], PacketStatus) -> u8` implement this trait.
pub trait RxHandler {
    /// Handle a packet that passed the CRC check.
    ///
    /// `data` holds exactly the packet's length field worth of bytes: the address byte
    /// followed by the payload (see [`Frame::from_received()`](fn@crate::frame::Frame::from_received)).
    /// It is never empty.
    /// The RSSI and LQI bytes that the radio appended are decoded in `status`.
    ///
    /// The returned status byte is reserved; the driver ignores it.
    fn on_packet(&mut self, data: &[u8], status: PacketStatus) -> u8;
}

/// The handler every [`CC2500`](struct@crate::radio::CC2500) starts with. It discards packets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopHandler;

impl RxHandler for NoopHandler {
    fn on_packet(&mut self, _data: &[u8], _status: PacketStatus) -> u8 {
        0
    }
}

impl<F> RxHandler for F
where
    F: FnMut(&[u8], PacketStatus) -> u8,
{
    fn on_packet(&mut self, data: &[u8], status: PacketStatus) -> u8 {
        self(data, status)
    }
}

/// An owned copy of a received packet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceivedPacket {
    /// The address byte followed by the payload.
    pub data: Vec<u8, MAX_PACKET_LENGTH>,
    /// The decoded RSSI/LQI bytes.
    pub status: PacketStatus,
}

impl ReceivedPacket {
    /// The packet's address byte.
    pub fn address(&self) -> Option<u8> {
        self.data.first().copied()
    }

    /// The bytes after the address byte.
    pub fn payload(&self) -> &[u8] {
        self.data.get(1..).unwrap_or(&[])
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ReceivedPacket {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "ReceivedPacket {=[u8]:#04x} ({})",
            self.data.as_slice(),
            self.status
        )
    }
}

/// A handler that moves received packets out of the interrupt context
/// through a [`heapless::spsc`] queue.
///
/// ```ignore
/// static mut QUEUE: Queue<ReceivedPacket, 4> = Queue::new();
/// let (producer, mut consumer) = unsafe { QUEUE.split() };
/// let mut radio = CC2500::new(spi, gdo0, delay).with_handler(PacketQueue::new(producer));
/// // in the GDO0 interrupt: radio.on_interrupt()
/// // in thread mode:
/// while let Some(packet) = consumer.dequeue() { /* ... */ }
/// ```
pub struct PacketQueue<'a, const N: usize> {
    producer: Producer<'a, ReceivedPacket, N>,
    dropped: u32,
}

impl<'a, const N: usize> PacketQueue<'a, N> {
    pub fn new(producer: Producer<'a, ReceivedPacket, N>) -> Self {
        Self {
            producer,
            dropped: 0,
        }
    }

    /// How many packets were discarded because the queue was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

impl<const N: usize> RxHandler for PacketQueue<'_, N> {
    /// Returns `1` if the packet was queued, `0` if it was dropped.
    fn on_packet(&mut self, data: &[u8], status: PacketStatus) -> u8 {
        let Ok(data) = Vec::from_slice(data) else {
            self.dropped = self.dropped.wrapping_add(1);
            return 0;
        };
        match self.producer.enqueue(ReceivedPacket { data, status }) {
            Ok(()) => 1,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("RX queue full; packet dropped");
                self.dropped = self.dropped.wrapping_add(1);
                0
            }
        }
    }
}
