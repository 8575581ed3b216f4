//! Blocking driver for two push-button rotary encoders read through an
//! 8-bit I2C port expander (PCF8574 class).
//!
//! Each encoder occupies one nibble of the expander's input byte: bits 0–1
//! carry the quadrature phase and bit 2 the push-button (active low). The
//! low nibble is slot 0, the high nibble slot 1.
//!
//! # Architecture
//!
//! The crate is split into two layers:
//!
//! - **[`source`]** — the [`ByteSource`] abstraction and its I2C
//!   implementation [`I2cByteSource`], which fetches the raw sample byte and
//!   probes the bus address.
//! - **[`RotaryDecoderSwitch`]** — the quadrature decoder that turns
//!   successive samples into per-slot tick counts and exposes button state.
//!
//! # Quick start
//!
//! ```no_run
//! use rotary_decoder_switch::{RotaryDecoderSwitch, DEFAULT_ADDRESS};
//!
//! # fn example(i2c: impl embedded_hal::i2c::I2c) {
//! let mut decoder = RotaryDecoderSwitch::new(i2c, DEFAULT_ADDRESS);
//! if decoder.begin(2) {
//!     decoder.initialize().unwrap();
//!     loop {
//!         if decoder.update().unwrap() {
//!             let ticks = decoder.get_value(0).unwrap();
//!             let pressed = decoder.is_key_pressed(0);
//!             # let _ = (ticks, pressed);
//!         }
//!     }
//! }
//! # }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on public types
//!   and debug logging inside the driver.

#![cfg_attr(not(test), no_std)]

pub use decoder::RotaryDecoderSwitch;
pub use error::DecoderError;
pub use source::{ByteSource, I2cByteSource};
pub use transitions::{MAX_SLOTS, SINGLE_TABLE, STEP_TABLE};

/// Default I2C address of a PCF8574 with A0–A2 tied low.
pub const DEFAULT_ADDRESS: u8 = 0x20;

mod decoder;
mod error;
pub mod source;
pub mod transitions;
