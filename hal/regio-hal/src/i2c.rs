//! I2C bus abstractions
//!
//! Provides the transport trait the register drivers issue their
//! transactions through, plus a common error taxonomy for transports
//! without a richer error type of their own.

/// I2C bus master
///
/// Each method is exactly one bus transaction. Framing (register-address
/// prefixes, value byte order) is the caller's business; the transport
/// only moves bytes to and from the device at `address`.
pub trait I2cBus {
    /// Error type for bus operations
    type Error;

    /// Write `bytes` to the device at `address`
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `bytes` - Bytes to write
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Write `header` followed by `body` as one continuous bus write
    ///
    /// The device must see a single write transaction with no restart
    /// between the two slices. This lets a caller prepend a register
    /// address to an arbitrary-length payload without an intermediate
    /// buffer. Transports that cannot gather two slices may copy into a
    /// scratch buffer before transmitting.
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `header` - Leading bytes (typically a register address)
    /// * `body` - Remaining bytes of the same transaction
    fn write_split(
        &mut self,
        address: u8,
        header: &[u8],
        body: &[u8],
    ) -> Result<(), Self::Error>;

    /// Read exactly `buf.len()` bytes from the device at `address`
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// Error from a failed bus exchange
///
/// Covers the usual I2C failure modes. Transports with a native error type
/// may use that instead; the drivers propagate whatever the transport
/// reports without inspecting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// NACK received (device absent or byte rejected)
    Nack,
    /// Bus timeout
    Timeout,
    /// Arbitration lost to another master
    ArbitrationLost,
    /// Bus error (misplaced start/stop condition)
    Bus,
    /// Receive overrun
    Overrun,
    /// Other error
    Other,
}
