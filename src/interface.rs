//! Bus binding and raw register access

use embedded_hal::i2c::I2c;
use log::{debug, trace, warn};

use crate::{Ds3232, Error, DEVICE_ADDRESS};

impl<I2C> Ds3232<I2C> {
    /// Create a driver with no bus bound yet.
    pub fn new() -> Self {
        Ds3232 { i2c: None }
    }

    /// Give the bus back, leaving the driver unbound.
    pub fn release(&mut self) -> Option<I2C> {
        self.i2c.take()
    }

    /// Whether a bus is currently bound.
    pub fn is_bound(&self) -> bool {
        self.i2c.is_some()
    }

    fn bus(&mut self) -> Result<&mut I2C, Error> {
        self.i2c.as_mut().ok_or(Error::NotBound)
    }
}

impl<I2C> Ds3232<I2C>
where
    I2C: I2c,
{
    /// Bind the driver to `i2c` and check that the device answers.
    ///
    /// Any previously bound bus is dropped first. The device is probed with
    /// an empty write; if nobody acknowledges the address this returns
    /// [`Error::Comm`] and the new bus stays bound so `begin` can be retried
    /// after fixing the wiring.
    pub fn begin(&mut self, i2c: I2C) -> Result<(), Error> {
        if self.i2c.replace(i2c).is_some() {
            debug!("DS3232: dropping previous bus binding");
        }
        match self.bus()?.write(DEVICE_ADDRESS, &[]) {
            Ok(()) => {
                debug!("DS3232: device acknowledged at {:#04x}", DEVICE_ADDRESS);
                Ok(())
            }
            Err(_err) => {
                warn!("DS3232: no acknowledge at {:#04x}", DEVICE_ADDRESS);
                Err(Error::Comm)
            }
        }
    }

    /// Write one byte to `register`.
    pub fn write_register(&mut self, register: u8, data: u8) -> Result<(), Error> {
        trace!("DS3232: write {:#04x} <- {:#04x}", register, data);
        let payload: [u8; 2] = [register, data];
        self.bus()?
            .write(DEVICE_ADDRESS, &payload)
            .map_err(|_err| Error::Comm)
    }

    /// Write `payload` in one transaction. `payload[0]` is the register pointer.
    pub(crate) fn write_data(&mut self, payload: &[u8]) -> Result<(), Error> {
        trace!("DS3232: write block {:02x?}", payload);
        self.bus()?
            .write(DEVICE_ADDRESS, payload)
            .map_err(|_err| Error::Comm)
    }

    /// Read one byte from `register`.
    pub fn read_register(&mut self, register: u8) -> Result<u8, Error> {
        let mut data = [0];
        self.read_data(register, &mut data)?;
        Ok(data[0])
    }

    /// Fill `data` starting at `register` with a repeated-start read.
    pub(crate) fn read_data(&mut self, register: u8, data: &mut [u8]) -> Result<(), Error> {
        self.bus()?
            .write_read(DEVICE_ADDRESS, &[register], data)
            .map_err(|_err| Error::Comm)?;
        trace!("DS3232: read {:#04x} -> {:02x?}", register, data);
        Ok(())
    }

    pub(crate) fn set_register_bits(&mut self, register: u8, mask: u8) -> Result<(), Error> {
        let value = self.read_register(register)?;
        self.write_register(register, value | mask)
    }

    pub(crate) fn clear_register_bits(&mut self, register: u8, mask: u8) -> Result<(), Error> {
        let value = self.read_register(register)?;
        self.write_register(register, value & !mask)
    }

    pub(crate) fn is_register_bit_set(&mut self, register: u8, mask: u8) -> Result<bool, Error> {
        let value = self.read_register(register)?;
        Ok((value & mask) != 0)
    }
}
