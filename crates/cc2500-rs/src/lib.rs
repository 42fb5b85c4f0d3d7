#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`CC2500::new()`](fn@crate::radio::CC2500::new)
//! - [`CC2500::init()`](radio/struct.CC2500.html#method.init)
//! - [`CC2500::send()`](radio/struct.CC2500.html#method.send)
//! - [`CC2500::receive()`](radio/struct.CC2500.html#method.receive)
//! - [`CC2500::with_handler()`](fn@crate::radio::CC2500::with_handler)
//! - [`CC2500::on_interrupt()`](fn@crate::radio::CC2500::on_interrupt)
//! - [`CC2500::set_address()`](radio/struct.CC2500.html#method.set_address)
//! - [`CC2500::set_channel()`](radio/struct.CC2500.html#method.set_channel)
//! - [`CC2500::set_power()`](radio/struct.CC2500.html#method.set_power)
//!
//! ## Advanced API
//!
//! - [`CC2500::transmit()`](radio/struct.CC2500.html#method.transmit)
//! - [`CC2500::tx_timeout`](value@crate::radio::CC2500::tx_timeout)
//! - [`CC2500::as_rx()`](radio/struct.CC2500.html#method.as_rx)
//! - [`CC2500::as_idle()`](radio/struct.CC2500.html#method.as_idle)
//! - [`CC2500::power_down()`](radio/struct.CC2500.html#method.power_down)
//! - [`CC2500::flush_rx()`](radio/struct.CC2500.html#method.flush_rx)
//! - [`CC2500::flush_tx()`](radio/struct.CC2500.html#method.flush_tx)
//! - [`CC2500::rx_bytes()`](radio/struct.CC2500.html#method.rx_bytes)
//! - [`CC2500::tx_bytes()`](radio/struct.CC2500.html#method.tx_bytes)
//! - [`CC2500::update()`](radio/struct.CC2500.html#method.update)
//! - [`CC2500::get_status()`](radio/struct.CC2500.html#method.get_status)
//! - [`CC2500::get_part_info()`](fn@crate::radio::CC2500::get_part_info)
//!
//! ## Configuration API
//!
//! - [`CC2500::with_config()`](radio/struct.CC2500.html#method.with_config)
//! - [`CC2500::config()`](fn@crate::radio::CC2500::config)
//! - [`CC2500::get_address()`](radio/struct.CC2500.html#method.get_address)
//! - [`CC2500::set_address_check()`](radio/struct.CC2500.html#method.set_address_check)
//! - [`CC2500::get_address_check()`](radio/struct.CC2500.html#method.get_address_check)
//! - [`CC2500::get_channel()`](radio/struct.CC2500.html#method.get_channel)
//! - [`CC2500::get_power()`](radio/struct.CC2500.html#method.get_power)
//! - [`power_dbm()`](fn@crate::radio::power_dbm)
//!
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod types;
pub use types::{AddressCheck, ChipState, ChipStatus, PacketStatus, RxOutcome};
pub mod frame;
pub mod radio;

#[cfg(test)]
mod test {
    extern crate std;
    use crate::radio::{prelude::Gdo0Pin, CC2500};
    use embedded_hal::{
        digital::{ErrorType, InputPin},
        spi::{self, ErrorKind, Operation, SpiDevice},
    };
    use embedded_hal_mock::eh1::{
        delay::NoopDelay,
        digital::{Mock as PinMock, Transaction as PinTransaction},
        spi::{Mock as SpiMock, Transaction as SpiTransaction},
    };
    use std::vec::Vec;

    /// Takes an indefinite repetition of a tuple of 2 vectors: `(expected_data, response_data)`
    /// and generates an array of `SpiTransaction`s.
    ///
    /// NOTE: This macro is only used to generate code in unit tests (for this crate only).
    #[macro_export]
    macro_rules! spi_test_expects {
        ($( ($expected:expr , $response:expr $(,)? ) , ) + ) => {
            [
                $(
                    SpiTransaction::transaction_start(),
                    SpiTransaction::transfer_in_place($expected, $response),
                    SpiTransaction::transaction_end(),
                )*
            ]
        }
    }

    /// The interrupt controls used on a [`MockGdo0`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum IrqEvent {
        Enable,
        Disable,
        Clear,
    }

    /// A GDO0 pin that reads from a [`PinMock`] and records the interrupt controls.
    pub struct MockGdo0 {
        pin: PinMock,
        /// The interrupt controls used so far (in order).
        pub events: Vec<IrqEvent>,
        /// The emulated interrupt flag.
        pub pending: bool,
    }

    impl ErrorType for MockGdo0 {
        type Error = <PinMock as ErrorType>::Error;
    }

    impl InputPin for MockGdo0 {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.pin.is_high()
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.pin.is_low()
        }
    }

    impl Gdo0Pin for MockGdo0 {
        fn enable_interrupt(&mut self) {
            self.events.push(IrqEvent::Enable);
        }

        fn disable_interrupt(&mut self) {
            self.events.push(IrqEvent::Disable);
        }

        fn is_interrupt_pending(&mut self) -> bool {
            self.pending
        }

        fn clear_interrupt(&mut self) {
            self.pending = false;
            self.events.push(IrqEvent::Clear);
        }
    }

    /// A tuple struct to encapsulate objects used to mock [`CC2500`],
    pub struct MockRadio(
        pub CC2500<SpiMock<u8>, MockGdo0, NoopDelay>,
        pub SpiMock<u8>,
        pub PinMock,
    );

    /// Create a mock objects using the given expectations.
    ///
    /// The `gdo0_expectations` parameter only describes reads of the GDO0 pin.
    /// Interrupt controls are recorded in [`MockGdo0::events`].
    pub fn mk_radio(
        gdo0_expectations: &[PinTransaction],
        spi_expectations: &[SpiTransaction<u8>],
    ) -> MockRadio {
        let spi = SpiMock::new(spi_expectations);
        let pin = PinMock::new(gdo0_expectations);
        let gdo0 = MockGdo0 {
            pin: pin.clone(),
            events: Vec::new(),
            pending: false,
        };
        let delay_impl = NoopDelay;
        let radio = CC2500::new(spi.clone(), gdo0, delay_impl);
        MockRadio(radio, spi, pin)
    }

    /// An SPI bus on which every transaction fails.
    pub struct FailingSpi;

    impl spi::ErrorType for FailingSpi {
        type Error = ErrorKind;
    }

    impl SpiDevice for FailingSpi {
        fn transaction(&mut self, _operations: &mut [Operation<'_, u8>]) -> Result<(), ErrorKind> {
            Err(ErrorKind::Other)
        }
    }

    /// Create a [`CC2500`] on a [`FailingSpi`] bus.
    ///
    /// The returned [`PinMock`] describes reads of the GDO0 pin.
    pub fn mk_failing_radio(
        gdo0_expectations: &[PinTransaction],
    ) -> (CC2500<FailingSpi, MockGdo0, NoopDelay>, PinMock) {
        let pin = PinMock::new(gdo0_expectations);
        let gdo0 = MockGdo0 {
            pin: pin.clone(),
            events: Vec::new(),
            pending: false,
        };
        (CC2500::new(FailingSpi, gdo0, NoopDelay), pin)
    }
}
