//! embedded-hal bus adapter
//!
//! Bridges any blocking embedded-hal 1.0 I2C master into the
//! [`regio_hal::I2cBus`] transport consumed by the register drivers.

use embedded_hal::i2c::{Error, ErrorKind, I2c, Operation};
use regio_hal::{I2cBus, TransportError};

/// Adapter exposing an `embedded_hal::i2c::I2c` master as an [`I2cBus`]
pub struct HalBus<I> {
    i2c: I,
}

impl<I> HalBus<I> {
    /// Wrap an embedded-hal I2C master
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Release the wrapped master
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> I2cBus for HalBus<I> {
    type Error = TransportError;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), TransportError> {
        self.i2c.write(address, bytes).map_err(map_error)
    }

    fn write_split(
        &mut self,
        address: u8,
        header: &[u8],
        body: &[u8],
    ) -> Result<(), TransportError> {
        // Consecutive writes in one embedded-hal transaction are sent as a
        // single continuous write on the wire, no restart between them.
        self.i2c
            .transaction(
                address,
                &mut [Operation::Write(header), Operation::Write(body)],
            )
            .map_err(map_error)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), TransportError> {
        self.i2c.read(address, buf).map_err(map_error)
    }
}

fn map_error<E: Error>(err: E) -> TransportError {
    match err.kind() {
        ErrorKind::NoAcknowledge(_) => TransportError::Nack,
        ErrorKind::ArbitrationLoss => TransportError::ArbitrationLost,
        ErrorKind::Bus => TransportError::Bus,
        ErrorKind::Overrun => TransportError::Overrun,
        _ => TransportError::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::NoAcknowledgeSource;
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct FakeError(ErrorKind);

    impl Error for FakeError {
        fn kind(&self) -> ErrorKind {
            self.0
        }
    }

    /// Flattens every transaction onto one "wire" byte stream.
    #[derive(Default)]
    struct FakeI2c {
        wire: Vec<u8, 32>,
        transactions: usize,
        fail_with: Option<ErrorKind>,
    }

    impl embedded_hal::i2c::ErrorType for FakeI2c {
        type Error = FakeError;
    }

    impl I2c for FakeI2c {
        fn transaction(
            &mut self,
            _address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), FakeError> {
            if let Some(kind) = self.fail_with {
                return Err(FakeError(kind));
            }
            self.transactions += 1;
            for op in operations.iter_mut() {
                match op {
                    Operation::Write(bytes) => self.wire.extend_from_slice(bytes).unwrap(),
                    Operation::Read(buf) => buf.fill(0),
                }
            }
            Ok(())
        }
    }

    #[test]
    fn write_split_is_one_continuous_transaction() {
        let mut bus = HalBus::new(FakeI2c::default());
        bus.write_split(0x10, &[0x00], &[1, 2, 3]).unwrap();

        let i2c = bus.release();
        assert_eq!(i2c.transactions, 1);
        assert_eq!(&i2c.wire[..], &[0x00, 1, 2, 3]);
    }

    #[test]
    fn error_kinds_map_to_transport_errors() {
        let mut bus = HalBus::new(FakeI2c {
            fail_with: Some(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)),
            ..FakeI2c::default()
        });
        assert_eq!(bus.write(0x10, &[0x00]), Err(TransportError::Nack));

        let mut bus = HalBus::new(FakeI2c {
            fail_with: Some(ErrorKind::ArbitrationLoss),
            ..FakeI2c::default()
        });
        let mut buf = [0u8; 1];
        assert_eq!(bus.read(0x10, &mut buf), Err(TransportError::ArbitrationLost));
    }
}
