//! A module to encapsulate all things related to radio operation.
pub mod prelude;

pub mod handler;
pub use handler::{NoopHandler, PacketQueue, ReceivedPacket, RxHandler};

pub(crate) mod cc2500;
pub use cc2500::{
    commands, mnemonics, power_dbm, registers, status, Cc2500Error, BUFFER_LENGTH, CC2500,
    GDO0_POLL_INTERVAL, MAX_PACKET_LENGTH, MAX_PAYLOAD_LENGTH, POWER_DBM, POWER_TABLE,
};

mod config;
pub use config::RadioConfig;
