//! Regio Hardware Abstraction Layer
//!
//! This crate defines the bus traits the regio register drivers are written
//! against. Chip-specific HALs (or a host-side mock) implement the traits;
//! the drivers only compose transactions on top of them, so the same driver
//! code runs on any platform.
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C master operations

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;

// Re-export key items at crate root for convenience
pub use i2c::{I2cBus, TransportError};
