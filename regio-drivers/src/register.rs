//! Width-typed register access over I2C
//!
//! Frame format on the wire:
//! - Every write transaction starts with the register address byte,
//!   followed by the value bytes least-significant first.
//! - Every read is two bus transactions: a one-byte priming write of the
//!   register address (sets the peripheral's internal read pointer), then
//!   a read of the requested byte count.
//!
//! # Byte order
//!
//! Writes serialize values **little-endian**; reads decode the received
//! bytes **big-endian**, and [`RegisterIo::read_dword`] additionally
//! interprets them as a *signed* integer. The mismatch is deliberate:
//! it matches the wire behavior peripherals in the field were programmed
//! against, so it must not be "fixed" to symmetric round-tripping.
//!
//! # Out-of-range values
//!
//! Values are truncated to the target byte width, never rejected. The
//! fixed-width parameter types carry most of that contract; the `as u8`
//! casts in the serializers mask each value byte the same way.

use regio_hal::I2cBus;

/// Power-on default bus address of supported peripherals
pub const DEFAULT_ADDRESS: u8 = 0x10;

/// Register-level driver for a single I2C peripheral
///
/// Owns the bus handle and the current device address. All operations are
/// blocking and address the bus at the most recently configured address.
/// The priming-write/read pair inside a read operation is two separate bus
/// transactions; a concurrent [`set_address`](Self::set_address) between
/// the phases would redirect the second one, so callers sharing a driver
/// across tasks must serialize access themselves.
pub struct RegisterIo<B> {
    bus: B,
    address: u8,
}

impl<B> RegisterIo<B> {
    /// Create a driver talking to [`DEFAULT_ADDRESS`]
    pub fn new(bus: B) -> Self {
        Self::with_address(bus, DEFAULT_ADDRESS)
    }

    /// Create a driver talking to a specific device address
    pub fn with_address(bus: B, address: u8) -> Self {
        Self { bus, address }
    }

    /// Current device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Change the device address for all subsequent transactions
    ///
    /// No validation is performed; the new address takes effect on the
    /// next operation.
    pub fn set_address(&mut self, address: u8) {
        self.address = address;
    }

    /// Release the bus handle
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: I2cBus> RegisterIo<B> {
    /// Write a byte register
    pub fn write_byte(&mut self, reg: u8, value: u8) -> Result<(), B::Error> {
        self.bus.write(self.address, &[reg, value])
    }

    /// Read a byte register
    pub fn read_byte(&mut self, reg: u8) -> Result<u8, B::Error> {
        let mut buf = [0u8; 1];
        self.prime_and_read(reg, &mut buf)?;
        Ok(buf[0])
    }

    /// Write a 16-bit register, low byte first
    pub fn write_word(&mut self, reg: u8, value: u16) -> Result<(), B::Error> {
        self.bus
            .write(self.address, &[reg, value as u8, (value >> 8) as u8])
    }

    /// Read a 16-bit register, decoded big-endian
    ///
    /// Note the asymmetry with [`write_word`](Self::write_word): written
    /// values go out little-endian (see the module docs).
    pub fn read_word(&mut self, reg: u8) -> Result<u16, B::Error> {
        let mut buf = [0u8; 2];
        self.prime_and_read(reg, &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Write a 32-bit register, low byte first
    pub fn write_dword(&mut self, reg: u8, value: u32) -> Result<(), B::Error> {
        self.bus.write(
            self.address,
            &[
                reg,
                value as u8,
                (value >> 8) as u8,
                (value >> 16) as u8,
                (value >> 24) as u8,
            ],
        )
    }

    /// Read a 32-bit register, decoded as a *signed* big-endian integer
    ///
    /// Receiving `[0xFF, 0xFF, 0xFF, 0xFF]` yields `-1`. The signed decode
    /// is part of the wire contract (see the module docs).
    pub fn read_dword(&mut self, reg: u8) -> Result<i32, B::Error> {
        let mut buf = [0u8; 4];
        self.prime_and_read(reg, &mut buf)?;
        Ok(i32::from_be_bytes(buf))
    }

    /// Write `values` to consecutive registers starting at `reg`
    ///
    /// Submits one bus transaction of `1 + values.len()` bytes; the two
    /// chunks are gathered by the transport, so the length is unbounded.
    pub fn write_buffer(&mut self, reg: u8, values: &[u8]) -> Result<(), B::Error> {
        self.bus.write_split(self.address, &[reg], values)
    }

    /// Read `buf.len()` bytes from consecutive registers starting at `reg`
    ///
    /// Bytes land in `buf` in received order.
    pub fn read_buffer(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), B::Error> {
        self.prime_and_read(reg, buf)
    }

    /// Prime the peripheral's read pointer, then fetch `buf.len()` bytes
    ///
    /// Two transactions at the current address, in that order. Not exposed
    /// separately so a lock can later wrap the pair in one place.
    fn prime_and_read(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), B::Error> {
        self.bus.write(self.address, &[reg])?;
        self.bus.read(self.address, buf)
    }
}
