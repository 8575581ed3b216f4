//! Quadrature decoder for two push-button encoders sharing one sample byte.
//!
//! [`RotaryDecoderSwitch`] polls a [`ByteSource`], compares each slot's
//! phase with the previous sample and accumulates ticks through one of the
//! transition tables in [`crate::transitions`].

use embedded_hal::i2c::I2c;

use crate::error::DecoderError;
use crate::source::{ByteSource, I2cByteSource};
use crate::transitions::{
    button_mask, phase, transition_code, TransitionTable, MAX_SLOTS, SINGLE_TABLE, STEP_TABLE,
};

/// Decoder for up to two rotary encoders with push-buttons.
///
/// Holds the last sample byte, the last phase of every slot and a signed
/// tick accumulator per slot. All state lives in fixed-size arrays.
///
/// # Lifecycle
///
/// 1. [`RotaryDecoderSwitch::new()`] — no bus traffic.
/// 2. [`RotaryDecoderSwitch::begin()`] — sets the slot count, probes the
///    device.
/// 3. [`RotaryDecoderSwitch::initialize()`] — captures the baseline phase.
/// 4. [`update()`](RotaryDecoderSwitch::update) or
///    [`update_single()`](RotaryDecoderSwitch::update_single) on every poll.
///
/// # Example
///
/// ```no_run
/// use rotary_decoder_switch::RotaryDecoderSwitch;
///
/// # fn example(i2c: impl embedded_hal::i2c::I2c) {
/// let mut decoder = RotaryDecoderSwitch::new(i2c, 0x20);
/// assert!(decoder.begin(2));
/// decoder.initialize().unwrap();
///
/// if decoder.update().unwrap() {
///     let ticks = decoder.get_value(1).unwrap();
///     # let _ = ticks;
/// }
/// # }
/// ```
pub struct RotaryDecoderSwitch<S> {
    source: S,
    /// Active slots, clamped to [`MAX_SLOTS`].
    count: u8,
    last_value: u8,
    last_pos: [u8; MAX_SLOTS],
    encoder: [i32; MAX_SLOTS],
}

impl<I2C> RotaryDecoderSwitch<I2cByteSource<I2C>>
where
    I2C: I2c,
{
    /// Create a decoder for an expander at `address` on `i2c`.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `address` — 7-bit I2C device address
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self::from_source(I2cByteSource::new(i2c, address))
    }
}

impl<S> RotaryDecoderSwitch<S>
where
    S: ByteSource,
{
    /// Create a decoder on top of any [`ByteSource`].
    ///
    /// The decoder starts with no active slots; call
    /// [`begin()`](Self::begin) to enable them.
    pub fn from_source(source: S) -> Self {
        Self {
            source,
            count: 0,
            last_value: 0,
            last_pos: [0; MAX_SLOTS],
            encoder: [0; MAX_SLOTS],
        }
    }

    /// Consume the decoder and hand back its byte source.
    pub fn release(self) -> S {
        self.source
    }

    // -----------------------------------------------------------------------
    // Setup
    // -----------------------------------------------------------------------

    /// Set the number of active slots and probe the device.
    ///
    /// `count` above [`MAX_SLOTS`] is clamped silently. Returns whether the
    /// expander acknowledged its address.
    pub fn begin(&mut self, count: u8) -> bool {
        self.count = count.min(MAX_SLOTS as u8);
        #[cfg(feature = "defmt")]
        if count != self.count {
            defmt::debug!("slot count {} clamped to {}", count, self.count);
        }

        let connected = self.is_connected();
        #[cfg(feature = "defmt")]
        if !connected {
            defmt::warn!("rotary decoder did not acknowledge probe");
        }
        connected
    }

    /// Check whether the expander acknowledges its address.
    pub fn is_connected(&mut self) -> bool {
        self.source.probe()
    }

    /// Read the baseline sample.
    ///
    /// Stores the raw byte and every active slot's phase so the first
    /// [`update()`](Self::update) compares against real hardware state.
    /// Accumulators are left untouched.
    pub fn initialize(&mut self) -> Result<(), DecoderError<S::Error>> {
        let value = self.source.read_byte()?;
        self.last_value = value;
        for slot in 0..self.count as usize {
            self.last_pos[slot] = phase(value, slot);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("baseline sample {=u8:#x}", value);

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Polling
    // -----------------------------------------------------------------------

    /// Read a fresh sample and report whether it differs from the last one.
    ///
    /// Nothing is stored; a following [`update()`](Self::update) performs
    /// its own read.
    pub fn has_changed(&mut self) -> Result<bool, DecoderError<S::Error>> {
        let value = self.source.read_byte()?;
        Ok(value != self.last_value)
    }

    /// Poll and decode in step mode.
    ///
    /// A valid single-phase step forward adds 1, backward subtracts 1;
    /// repeats and skipped phases are ignored. Returns `false` without
    /// touching any state when the sample equals the previous one.
    pub fn update(&mut self) -> Result<bool, DecoderError<S::Error>> {
        self.decode(&STEP_TABLE)
    }

    /// Poll and decode in single mode.
    ///
    /// Forward steps add 1, skipped phases add 2 and reverse steps add 3,
    /// so the accumulator only ever grows. The direction is recovered by the
    /// caller modulo 4.
    pub fn update_single(&mut self) -> Result<bool, DecoderError<S::Error>> {
        self.decode(&SINGLE_TABLE)
    }

    fn decode(&mut self, table: &TransitionTable) -> Result<bool, DecoderError<S::Error>> {
        let value = self.source.read_byte()?;
        if value == self.last_value {
            return Ok(false);
        }
        self.last_value = value;

        for slot in 0..self.count as usize {
            let current = phase(value, slot);
            let code = transition_code(self.last_pos[slot], current);
            self.encoder[slot] = self.encoder[slot].wrapping_add(i32::from(table[code as usize]));
            self.last_pos[slot] = current;
        }

        Ok(true)
    }

    // -----------------------------------------------------------------------
    // State queries
    // -----------------------------------------------------------------------

    /// Whether the push-button of `slot` was down in the last sample.
    ///
    /// No bus traffic: the answer comes from the byte captured by the last
    /// [`initialize()`](Self::initialize) or update. Slot 0 reads bit 2,
    /// every other index reads bit 6. The button is active low.
    pub fn is_key_pressed(&self, slot: u8) -> bool {
        self.last_value & button_mask(slot) == 0
    }

    /// Tick accumulator of `slot`.
    ///
    /// # Errors
    /// * [`DecoderError::InvalidSlot`] if `slot >= 2`
    pub fn get_value(&self, slot: u8) -> Result<i32, DecoderError<S::Error>> {
        let slot = Self::check_slot(slot)?;
        Ok(self.encoder[slot])
    }

    /// Overwrite the tick accumulator of `slot`, e.g. to reset it to zero.
    ///
    /// # Errors
    /// * [`DecoderError::InvalidSlot`] if `slot >= 2`
    pub fn set_value(&mut self, slot: u8, value: i32) -> Result<(), DecoderError<S::Error>> {
        let slot = Self::check_slot(slot)?;
        self.encoder[slot] = value;
        Ok(())
    }

    /// Last observed 2-bit phase of `slot`.
    ///
    /// # Errors
    /// * [`DecoderError::InvalidSlot`] if `slot >= 2`
    pub fn last_position(&self, slot: u8) -> Result<u8, DecoderError<S::Error>> {
        let slot = Self::check_slot(slot)?;
        Ok(self.last_pos[slot])
    }

    /// Raw byte of the most recent stored sample.
    pub fn last_value(&self) -> u8 {
        self.last_value
    }

    /// Number of active slots.
    pub fn count(&self) -> u8 {
        self.count
    }

    fn check_slot(slot: u8) -> Result<usize, DecoderError<S::Error>> {
        let slot = usize::from(slot);
        if slot >= MAX_SLOTS {
            return Err(DecoderError::InvalidSlot);
        }
        Ok(slot)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
