//! Character transport boundary
//!
//! The console never touches hardware. It writes through
//! `core::fmt::Write`; a [`Port`] is the byte-level driver the main loop
//! reads from, wrapped in [`PortWriter`] for output.

use core::fmt;

/// Byte-in / byte-out transport
pub trait Port {
    /// Read whatever is available into `buf` (may be 0 bytes).
    fn read(&mut self, buf: &mut [u8]) -> usize;

    /// Send bytes, fire and forget.
    fn write(&mut self, bytes: &[u8]);
}

impl<P: Port + ?Sized> Port for &mut P {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        (**self).read(buf)
    }

    fn write(&mut self, bytes: &[u8]) {
        (**self).write(bytes)
    }
}

/// `core::fmt::Write` adapter over a [`Port`]
pub struct PortWriter<'a, P: Port + ?Sized> {
    port: &'a mut P,
}

impl<'a, P: Port + ?Sized> PortWriter<'a, P> {
    pub fn new(port: &'a mut P) -> Self {
        Self { port }
    }
}

impl<P: Port + ?Sized> fmt::Write for PortWriter<'_, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.port.write(s.as_bytes());
        Ok(())
    }
}
