//! Byte source abstraction and its I2C implementation.
//!
//! The decoder only needs two things from the hardware: the current 8-bit
//! port snapshot and a yes/no answer to "is anyone at this address".

use embedded_hal::i2c::I2c;

/// Provider of raw sample bytes.
pub trait ByteSource {
    /// Error reported when a sample cannot be read.
    type Error;

    /// Fetch the current 8-bit port snapshot.
    fn read_byte(&mut self) -> Result<u8, Self::Error>;

    /// Check whether the peripheral acknowledges its address.
    fn probe(&mut self) -> bool;
}

/// [`ByteSource`] backed by an 8-bit I2C port expander.
///
/// Owns an I2C peripheral and the 7-bit device address. Reads are single
/// one-byte transactions; the expander has no register pointer.
pub struct I2cByteSource<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cByteSource<I2C>
where
    I2C: I2c,
{
    /// Create a new byte source.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `address` — 7-bit I2C device address (typically 0x20–0x27)
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The configured 7-bit device address.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the I2C peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> ByteSource for I2cByteSource<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.i2c.read(self.address, &mut buf)?;
        Ok(buf[0])
    }

    /// Issues a zero-length write; an acknowledged address completes
    /// without error.
    fn probe(&mut self) -> bool {
        self.i2c.write(self.address, &[]).is_ok()
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const ADDR: u8 = 0x21;

    #[test]
    fn read_byte_issues_single_byte_read() {
        let expectations = [
            I2cTransaction::read(ADDR, vec![0xA5]),
            I2cTransaction::read(ADDR, vec![0x00]),
        ];
        let mut source = I2cByteSource::new(I2cMock::new(&expectations), ADDR);

        assert_eq!(source.read_byte(), Ok(0xA5));
        assert_eq!(source.read_byte(), Ok(0x00));

        source.release().done();
    }

    #[test]
    fn read_byte_propagates_bus_error() {
        let expectations = [I2cTransaction::read(ADDR, vec![0x00]).with_error(ErrorKind::Bus)];
        let mut source = I2cByteSource::new(I2cMock::new(&expectations), ADDR);

        assert_eq!(source.read_byte(), Err(ErrorKind::Bus));

        source.release().done();
    }

    #[test]
    fn probe_acknowledged() {
        let expectations = [I2cTransaction::write(ADDR, vec![])];
        let mut source = I2cByteSource::new(I2cMock::new(&expectations), ADDR);

        assert!(source.probe());

        source.release().done();
    }

    #[test]
    fn probe_not_acknowledged() {
        let expectations = [I2cTransaction::write(ADDR, vec![])
            .with_error(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))];
        let mut source = I2cByteSource::new(I2cMock::new(&expectations), ADDR);

        assert!(!source.probe());

        source.release().done();
    }

    #[test]
    fn address_is_kept() {
        let expectations: [I2cTransaction; 0] = [];
        let mut mock = I2cMock::new(&expectations);
        let source = I2cByteSource::new(mock.clone(), ADDR);
        assert_eq!(source.address(), ADDR);
        mock.done();
    }
}
