//! UART console port.
//!
//! Full-duplex UART driver behind the [`Port`] trait. Reads never block so
//! the main loop can interleave polling with other work.
//!
//! # Hardware Setup
//!
//! ```text
//! ESP32-S3 TX ──────▶ USB-UART RX
//! ESP32-S3 RX ◀────── USB-UART TX
//!                      └─▶ PC terminal (115200 8N1)
//! ```

use esp_idf_svc::hal::delay::NON_BLOCK;
use esp_idf_svc::hal::gpio;
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::hal::uart::{self, UartDriver};
use esp_idf_svc::sys::EspError;

use crate::port::Port;

/// UART configuration for the console.
pub struct UartPortConfig {
    pub baud_rate: u32,
}

impl Default for UartPortConfig {
    fn default() -> Self {
        Self { baud_rate: 115200 }
    }
}

/// Console transport over one UART.
pub struct UartPort<'d> {
    driver: UartDriver<'d>,
}

impl<'d> UartPort<'d> {
    /// Configure `uart` on the given pins, no flow control.
    pub fn new<UART: uart::Uart>(
        uart: impl Peripheral<P = UART> + 'd,
        tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
        rx_pin: impl Peripheral<P = impl gpio::InputPin> + 'd,
        config: &UartPortConfig,
    ) -> Result<Self, EspError> {
        let uart_config = uart::config::Config::default()
            .baudrate(esp_idf_svc::hal::units::Hertz(config.baud_rate));

        let driver = UartDriver::new(
            uart,
            tx_pin,
            rx_pin,
            Option::<gpio::AnyIOPin>::None, // CTS
            Option::<gpio::AnyIOPin>::None, // RTS
            &uart_config,
        )?;

        Ok(Self { driver })
    }
}

impl Port for UartPort<'_> {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        self.driver.read(buf, NON_BLOCK).unwrap_or(0)
    }

    fn write(&mut self, bytes: &[u8]) {
        let mut rest = bytes;
        while !rest.is_empty() {
            match self.driver.write(rest) {
                Ok(0) | Err(_) => break,
                Ok(n) => rest = &rest[n..],
            }
        }
    }
}
