//! Battery-backed NVRAM
//!
//! NVRAM address 0 is device register 0x14; the region is 236 bytes long.
//! Addresses are not checked against the end of the region, keeping
//! `address + len <= 236` is up to the caller.

use crate::{Ds3232, Error, Register, NVRAM_SIZE};
use embedded_hal::i2c::I2c;

fn nvram_register(address: u8) -> u8 {
    Register::NVRAM.wrapping_add(address)
}

impl<I2C> Ds3232<I2C>
where
    I2C: I2c,
{
    /// Fill `buffer` from NVRAM starting at `address`.
    pub fn read_nvram(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Error> {
        self.read_data(nvram_register(address), buffer)
    }

    /// Write `data` to NVRAM starting at `address` in one transaction.
    ///
    /// `data` longer than the whole NVRAM region is rejected with
    /// [`Error::InvalidInputData`].
    pub fn write_nvram(&mut self, address: u8, data: &[u8]) -> Result<(), Error> {
        if data.len() > NVRAM_SIZE {
            return Err(Error::InvalidInputData);
        }
        let mut payload = [0; NVRAM_SIZE + 1];
        payload[0] = nvram_register(address);
        payload[1..=data.len()].copy_from_slice(data);
        self.write_data(&payload[..=data.len()])
    }

    /// Read one byte of NVRAM.
    pub fn read_nvram_byte(&mut self, address: u8) -> Result<u8, Error> {
        let mut data = [0];
        self.read_nvram(address, &mut data)?;
        Ok(data[0])
    }

    /// Write one byte of NVRAM.
    pub fn write_nvram_byte(&mut self, address: u8, data: u8) -> Result<(), Error> {
        self.write_nvram(address, &[data])
    }
}
