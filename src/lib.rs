//! Platform-agnostic driver for the DS3232 real-time clock.
//!
//! The device keeps time, two alarms, a temperature sensor and 236 bytes of
//! battery-backed NVRAM behind a single I²C address. Every operation talks to
//! the device directly: the driver never caches register contents, so each
//! read hits the bus and every flag update is a read-modify-write.
//!
//! ```no_run
//! # fn run<I2C: embedded_hal::i2c::I2c>(i2c: I2C) -> Result<(), ds3232::Error> {
//! use ds3232::{Ds3232, NaiveDate};
//!
//! let mut rtc = Ds3232::new();
//! rtc.begin(i2c)?;
//! if rtc.lost_power()? {
//!     let datetime = NaiveDate::from_ymd_opt(2024, 3, 17)
//!         .and_then(|date| date.and_hms_opt(12, 30, 0))
//!         .ok_or(ds3232::Error::InvalidInputData)?;
//!     rtc.adjust(&datetime)?;
//! }
//! let now = rtc.now()?;
//! # let _ = now;
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]
#![cfg_attr(not(test), no_std)]

pub use rtcc::{DateTimeAccess, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// All possible errors in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// I²C bus error
    Comm,
    /// No bus is bound yet. Call [`Ds3232::begin`] first.
    NotBound,
    /// Invalid input data provided
    InvalidInputData,
    /// Internal device state is invalid.
    ///
    /// It was not possible to read a valid date and/or time.
    /// The device is probably missing initialization.
    InvalidDeviceState,
    /// An alarm was requested while the INT/SQW pin is in square-wave mode.
    ///
    /// Nothing was written to the device. Select
    /// [`SqwPinMode::Off`] first so the pin signals alarm interrupts.
    InterruptControlDisabled,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Comm => f.write_str("I2C communication with the DS3232 failed"),
            Error::NotBound => f.write_str("no I2C bus bound to the driver"),
            Error::InvalidInputData => f.write_str("invalid input data"),
            Error::InvalidDeviceState => f.write_str("device holds an invalid date/time"),
            Error::InterruptControlDisabled => {
                f.write_str("alarm interrupts are disabled (INTCN bit clear)")
            }
        }
    }
}

/// Mode of the INT/SQW output pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqwPinMode {
    /// No square wave: the pin signals alarm interrupts (INTCN set)
    Off,
    /// 1 Hz square wave
    SquareWave1Hz,
    /// 1.024 kHz square wave
    SquareWave1kHz,
    /// 4.096 kHz square wave
    SquareWave4kHz,
    /// 8.192 kHz square wave
    SquareWave8kHz,
}

impl SqwPinMode {
    /// Control register bits (INTCN, RS1, RS2) for this mode.
    pub(crate) const fn bits(self) -> u8 {
        match self {
            SqwPinMode::Off => BitFlags::INTCN | BitFlags::RS1 | BitFlags::RS2,
            SqwPinMode::SquareWave1Hz => 0,
            SqwPinMode::SquareWave1kHz => BitFlags::RS1,
            SqwPinMode::SquareWave4kHz => BitFlags::RS2,
            SqwPinMode::SquareWave8kHz => BitFlags::RS2 | BitFlags::RS1,
        }
    }

    pub(crate) const fn from_control(control: u8) -> Self {
        if control & BitFlags::INTCN != 0 {
            return SqwPinMode::Off;
        }
        match control & (BitFlags::RS2 | BitFlags::RS1) {
            BitFlags::RS1 => SqwPinMode::SquareWave1kHz,
            BitFlags::RS2 => SqwPinMode::SquareWave4kHz,
            0 => SqwPinMode::SquareWave1Hz,
            _ => SqwPinMode::SquareWave8kHz,
        }
    }
}

/// Temperature conversion rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempConvRate {
    /// Once every 64 seconds (default)
    _64s,
    /// Once every 128 seconds
    _128s,
    /// Once every 256 seconds
    _256s,
    /// Once every 512 seconds
    _512s,
}

impl TempConvRate {
    pub(crate) const fn bits(self) -> u8 {
        match self {
            TempConvRate::_64s => 0,
            TempConvRate::_128s => BitFlags::CRATE0,
            TempConvRate::_256s => BitFlags::CRATE1,
            TempConvRate::_512s => BitFlags::CRATE1 | BitFlags::CRATE0,
        }
    }
}

/// Alarm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alarm {
    /// Alarm 1 (seconds resolution)
    Alarm1,
    /// Alarm 2 (minutes resolution)
    Alarm2,
}

impl Alarm {
    /// Bit `n - 1`: interrupt enable in Control, fired flag in Status.
    pub(crate) const fn mask(self) -> u8 {
        match self {
            Alarm::Alarm1 => 0b0000_0001,
            Alarm::Alarm2 => 0b0000_0010,
        }
    }
}

struct Register;

impl Register {
    const SECONDS: u8 = 0x00;
    const ALARM1_SECONDS: u8 = 0x07;
    const ALARM2_MINUTES: u8 = 0x0B;
    const CONTROL: u8 = 0x0E;
    const STATUS: u8 = 0x0F;
    const AGING_OFFSET: u8 = 0x10;
    const TEMP_MSB: u8 = 0x11;
    const TEMP_CONV: u8 = 0x13;
    const NVRAM: u8 = 0x14;
}

struct BitFlags;

impl BitFlags {
    const CENTURY: u8 = 0b1000_0000;
    const EOSC: u8 = 0b1000_0000;
    const BBSQW: u8 = 0b0100_0000;
    const TEMP_CONV: u8 = 0b0010_0000;
    const RS2: u8 = 0b0001_0000;
    const RS1: u8 = 0b0000_1000;
    const INTCN: u8 = 0b0000_0100;
    const OSC_STOP: u8 = 0b1000_0000;
    const BB32KHZ: u8 = 0b0100_0000;
    const CRATE1: u8 = 0b0010_0000;
    const CRATE0: u8 = 0b0001_0000;
    const EN32KHZ: u8 = 0b0000_1000;
    const BUSY: u8 = 0b0000_0100;
    const TEMP_CONV_BAT: u8 = 0b0000_0001;
    const ALARM_MATCH: u8 = 0b1000_0000;
    const WEEKDAY: u8 = 0b0100_0000;
}

/// 7-bit I²C address of the DS3232
pub const DEVICE_ADDRESS: u8 = 0b110_1000;

/// Size of the battery-backed NVRAM region in bytes
pub const NVRAM_SIZE: usize = 236;

/// DS3232 RTC driver
///
/// The driver starts unbound; [`begin`](Ds3232::begin) hands it the bus.
#[derive(Debug)]
pub struct Ds3232<I2C> {
    i2c: Option<I2C>,
}

impl<I2C> Default for Ds3232<I2C> {
    fn default() -> Self {
        Ds3232 { i2c: None }
    }
}

mod ds3232;
pub use crate::ds3232::{dow_to_device, Alarm1Mode, Alarm2Mode};
mod interface;
