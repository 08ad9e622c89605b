#![allow(dead_code)]

use ds3232::{Ds3232, NaiveDate, NaiveDateTime};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

pub const DEVICE_ADDRESS: u8 = 0b110_1000;

pub struct Register;

impl Register {
    pub const SECONDS: u8 = 0x00;
    pub const ALARM1_SECONDS: u8 = 0x07;
    pub const ALARM2_MINUTES: u8 = 0x0B;
    pub const CONTROL: u8 = 0x0E;
    pub const STATUS: u8 = 0x0F;
    pub const AGING_OFFSET: u8 = 0x10;
    pub const TEMP_MSB: u8 = 0x11;
    pub const TEMP_CONV: u8 = 0x13;
    pub const NVRAM: u8 = 0x14;
}

pub fn probe() -> I2cTrans {
    I2cTrans::write(DEVICE_ADDRESS, vec![])
}

pub fn read(register: u8, response: Vec<u8>) -> I2cTrans {
    I2cTrans::write_read(DEVICE_ADDRESS, vec![register], response)
}

pub fn write(payload: Vec<u8>) -> I2cTrans {
    I2cTrans::write(DEVICE_ADDRESS, payload)
}

/// Driver bound to a mock expecting the probe followed by `transactions`.
pub fn new_ds3232(transactions: &[I2cTrans]) -> Ds3232<I2cMock> {
    let mut expectations = vec![probe()];
    expectations.extend_from_slice(transactions);
    let mut rtc = Ds3232::new();
    rtc.begin(I2cMock::new(&expectations)).unwrap();
    rtc
}

/// Check that every expected transaction happened.
pub fn destroy(mut rtc: Ds3232<I2cMock>) {
    rtc.release().unwrap().done();
}

pub fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}
