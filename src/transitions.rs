//! Sample-byte layout and quadrature transition tables.
//!
//! A transition code is formed from the previous and current 2-bit phase of
//! a slot: `(previous << 2) | current`. Each table maps the 16 possible
//! codes to the delta applied to that slot's accumulator.
//!
//! ```text
//!  phase sequence (one detent):  0 -> 1 -> 3 -> 2 -> 0   forward
//!                                0 -> 2 -> 3 -> 1 -> 0   reverse
//! ```

// ---------------------------------------------------------------------------
// Sample byte layout
// ---------------------------------------------------------------------------

/// Number of encoder slots carried by one sample byte.
pub const MAX_SLOTS: usize = 2;

/// Bit width of one slot within the sample byte.
pub const SLOT_SHIFT: usize = 4;

/// Mask for the quadrature phase bits within a slot.
pub const PHASE_MASK: u8 = 0x03;

/// Push-button bit of slot 0 (active low).
pub const BUTTON_MASK_SLOT0: u8 = 0x04;

/// Push-button bit of slot 1 (active low).
pub const BUTTON_MASK_SLOT1: u8 = 0x40;

// ---------------------------------------------------------------------------
// Transition tables
// ---------------------------------------------------------------------------

/// Accumulator delta for each of the 16 transition codes.
pub type TransitionTable = [i8; 16];

/// Step mode: one detent phase forward is `+1`, one phase back is `-1`.
/// Repeats and double jumps count as noise.
#[rustfmt::skip]
pub const STEP_TABLE: TransitionTable = [
    // 00->00  00->01  00->10  00->11
    0, 1, -1, 0,
    // 01->00  01->01  01->10  01->11
    -1, 0, 0, 1,
    // 10->00  10->01  10->10  10->11
    1, 0, 0, -1,
    // 11->00  11->01  11->10  11->11
    0, -1, 1, 0,
];

/// Single mode: forward adds 1, a double jump adds 2 and a reverse step adds
/// 3. Callers read the accumulator modulo 4, where `+3` is one step back.
#[rustfmt::skip]
pub const SINGLE_TABLE: TransitionTable = [
    // 00->00  00->01  00->10  00->11
    0, 1, 3, 2,
    // 01->00  01->01  01->10  01->11
    3, 0, 2, 1,
    // 10->00  10->01  10->10  10->11
    1, 2, 0, 3,
    // 11->00  11->01  11->10  11->11
    2, 3, 1, 0,
];

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Extract the 2-bit phase of `slot` from a sample byte.
#[inline]
pub const fn phase(value: u8, slot: usize) -> u8 {
    (value >> (SLOT_SHIFT * slot)) & PHASE_MASK
}

/// Build the 4-bit transition code from the previous and current phase.
#[inline]
pub const fn transition_code(previous: u8, current: u8) -> u8 {
    ((previous & PHASE_MASK) << 2) | (current & PHASE_MASK)
}

/// Button mask for a slot. Slot 0 maps to the low nibble, every other
/// index to the high nibble.
#[inline]
pub const fn button_mask(slot: u8) -> u8 {
    if slot == 0 {
        BUTTON_MASK_SLOT0
    } else {
        BUTTON_MASK_SLOT1
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const FORWARD: [u8; 4] = [0b0001, 0b0111, 0b1110, 0b1000];
    const REVERSE: [u8; 4] = [0b0010, 0b0100, 0b1101, 0b1011];
    const DOUBLE: [u8; 4] = [0b0011, 0b0110, 0b1001, 0b1100];

    // ── Layout ───────────────────────────────────────────────────────

    #[test]
    fn phase_extracts_each_nibble() {
        assert_eq!(phase(0b0011_0001, 0), 1);
        assert_eq!(phase(0b0011_0001, 1), 3);
        // Button bits never leak into the phase.
        assert_eq!(phase(0xFC, 0), 0);
        assert_eq!(phase(0xCF, 1), 0);
    }

    #[test]
    fn transition_code_puts_previous_in_high_bits() {
        assert_eq!(transition_code(0, 1), 0b0001);
        assert_eq!(transition_code(3, 2), 0b1110);
        assert_eq!(transition_code(2, 3), 0b1011);
    }

    #[test]
    fn button_masks() {
        assert_eq!(button_mask(0), 0x04);
        assert_eq!(button_mask(1), 0x40);
        assert_eq!(button_mask(7), 0x40);
    }

    // ── Step table ───────────────────────────────────────────────────

    #[test]
    fn step_table_classifies_all_codes() {
        for code in 0..16u8 {
            let expected = if FORWARD.contains(&code) {
                1
            } else if REVERSE.contains(&code) {
                -1
            } else {
                0
            };
            assert_eq!(STEP_TABLE[code as usize], expected, "code {:04b}", code);
        }
    }

    #[test]
    fn step_table_full_turn_sums_to_four() {
        let sequence = [0u8, 1, 3, 2, 0];
        let forward: i32 = sequence
            .windows(2)
            .map(|w| i32::from(STEP_TABLE[transition_code(w[0], w[1]) as usize]))
            .sum();
        let reverse: i32 = sequence
            .windows(2)
            .map(|w| i32::from(STEP_TABLE[transition_code(w[1], w[0]) as usize]))
            .sum();
        assert_eq!(forward, 4);
        assert_eq!(reverse, -4);
    }

    // ── Single table ─────────────────────────────────────────────────

    #[test]
    fn single_table_classifies_all_codes() {
        for code in 0..16u8 {
            let expected = if FORWARD.contains(&code) {
                1
            } else if DOUBLE.contains(&code) {
                2
            } else if REVERSE.contains(&code) {
                3
            } else {
                0
            };
            assert_eq!(SINGLE_TABLE[code as usize], expected, "code {:04b}", code);
        }
    }

    #[test]
    fn single_table_never_decrements() {
        assert!(SINGLE_TABLE.iter().all(|&delta| delta >= 0));
    }
}
