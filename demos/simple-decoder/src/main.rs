//! Simple decoder demo
//!
//! Polls two push-button rotary encoders wired to a PCF8574 expander on the
//! Raspberry Pi Pico 2 and logs tick counts and button presses via defmt.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                         |
//! |-----------|------------|-------------------------------|
//! | I2C0 SDA  | GP20       |                               |
//! | I2C0 SCL  | GP21       |                               |
//! | P0/P1     | —          | Encoder 0 A/B                 |
//! | P2        | —          | Encoder 0 switch (to ground)  |
//! | P4/P5     | —          | Encoder 1 A/B                 |
//! | P6        | —          | Encoder 1 switch (to ground)  |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use rotary_decoder_switch::{RotaryDecoderSwitch, DEFAULT_ADDRESS};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

/// Poll interval; fast enough not to miss phases at hand-turning speed.
const POLL_PERIOD: Duration = Duration::from_millis(2);

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- I2C bus (GP20 = SDA, GP21 = SCL), blocking mode ---
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_21, p.PIN_20, i2c::Config::default());

    let mut decoder = RotaryDecoderSwitch::new(i2c, DEFAULT_ADDRESS);

    if !decoder.begin(2) {
        error!("No expander at {=u8:#x}", DEFAULT_ADDRESS);
        return;
    }

    if let Err(e) = decoder.initialize() {
        error!("Initial read failed: {}", e);
        return;
    }

    info!("Decoder demo started — turn or press a knob");

    let mut pressed = [false; 2];

    loop {
        Timer::after(POLL_PERIOD).await;

        match decoder.update() {
            Ok(true) => {
                info!(
                    "Values: [{}, {}]",
                    decoder.get_value(0).unwrap_or_default(),
                    decoder.get_value(1).unwrap_or_default(),
                );

                for (slot, was_pressed) in pressed.iter_mut().enumerate() {
                    let now = decoder.is_key_pressed(slot as u8);
                    if now && !*was_pressed {
                        info!("Button {} pressed", slot);
                        // Pressing a knob zeroes its counter.
                        let _ = decoder.set_value(slot as u8, 0);
                    }
                    *was_pressed = now;
                }
            }
            Ok(false) => {}
            Err(e) => error!("Read failed: {}", e),
        }
    }
}
