//! Register-level I2C peripheral drivers
//!
//! This crate provides width-typed access to the register map of a single
//! I2C peripheral, for firmware that wants named byte/word/dword register
//! reads and writes instead of hand-assembled transaction buffers:
//!
//! - [`register::RegisterIo`] - byte/word/dword/buffer register operations
//! - [`bus::HalBus`] - adapter exposing any blocking embedded-hal I2C
//!   master as a [`regio_hal::I2cBus`]

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod register;
