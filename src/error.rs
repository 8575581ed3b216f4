//! Error types for the decoder.

use core::fmt;

/// Errors that can occur when talking to the expander or addressing a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderError<E> {
    /// The byte source failed to deliver a sample.
    Bus(E),

    /// Slot index out of valid range (must be 0–1).
    InvalidSlot,
}

// Allow ergonomic `?` propagation from raw bus errors.
impl<E> From<E> for DecoderError<E> {
    fn from(error: E) -> Self {
        DecoderError::Bus(error)
    }
}

impl<E: fmt::Debug> fmt::Display for DecoderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecoderError::Bus(e) => write!(f, "bus error: {:?}", e),
            DecoderError::InvalidSlot => write!(f, "invalid slot index (must be 0-1)"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for DecoderError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DecoderError::Bus(e) => defmt::write!(f, "bus error: {}", e),
            DecoderError::InvalidSlot => defmt::write!(f, "invalid slot index"),
        }
    }
}
