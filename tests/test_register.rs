//! Integration tests for the Register state machine.
//!
//! Covers the hand-computed reference trace, the reset and output laws, and
//! property-based checks of period detection over random seeds.

use lfsr::{LfsrError, Register};
use proptest::prelude::*;
use rand::SeedableRng;

fn seed_strategy(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::bool::ANY, 2..=max_len)
        .prop_map(|bits| bits.into_iter().map(|b| if b { '1' } else { '0' }).collect())
}

// =============================================================================
// Reference Trace
// =============================================================================

#[test]
fn test_trace_seed_1000() {
    let mut reg = Register::new("1000").unwrap();

    // (state after step, output bit, feedback injected)
    let expected: [(&str, char, u8); 5] = [
        ("1100", '0', 1),
        ("0110", '0', 0),
        ("0011", '0', 0),
        ("0001", '1', 0),
        ("1000", '1', 1),
    ];

    let mut output = String::new();
    for (state, out, feedback) in expected {
        assert_eq!(reg.feedback_bit(), feedback);
        reg.step();
        output.push(out);
        assert_eq!(reg.state_as_bitstring(), state);
        assert_eq!(reg.output(), output);
    }
}

#[test]
fn test_feedback_uses_pre_shift_bits() {
    // Feedback taken after the shift would be XOR(0,0,0,1) = 1 here
    let mut reg = Register::new("0011").unwrap();
    reg.step();
    assert_eq!(reg.state_as_bitstring(), "0001");
}

#[test]
fn test_size_and_state() {
    let reg = Register::new("101100111").unwrap();
    assert_eq!(reg.size(), 9);
    assert_eq!(reg.state_as_bitstring(), "101100111");
}

#[test]
fn test_wide_register() {
    let seed: String = (0..100).map(|i| if i % 7 == 0 { '1' } else { '0' }).collect();
    let mut reg = Register::new(&seed).unwrap();

    reg.step_n(250);
    assert_eq!(reg.size(), 100);
    assert_eq!(reg.output_len(), 250);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_invalid_character() {
    let err = Register::new("0102").unwrap_err();
    assert!(matches!(err, LfsrError::InvalidInput { position: 3, found: '2' }));
}

#[test]
fn test_too_short() {
    assert!(matches!(
        Register::new("0"),
        Err(LfsrError::InvalidConfiguration { length: 1 })
    ));
    assert!(matches!(
        Register::from_bits(&[1]),
        Err(LfsrError::InvalidConfiguration { length: 1 })
    ));

    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    assert!(matches!(
        Register::random(1, &mut rng),
        Err(LfsrError::InvalidConfiguration { length: 1 })
    ));
}

// =============================================================================
// Output Log
// =============================================================================

#[test]
fn test_clear_output() {
    let mut reg = Register::new("1000").unwrap();
    reg.step_n(3);
    let state = reg.state_as_bitstring();

    reg.clear_output();
    assert_eq!(reg.output(), "");
    assert_eq!(reg.state_as_bitstring(), state);

    reg.clear_output();
    assert_eq!(reg.output(), "");
    assert_eq!(reg.state_as_bitstring(), state);

    reg.step();
    assert_eq!(reg.output(), "1");
}

#[test]
fn test_output_bits() {
    let mut reg = Register::new("1000").unwrap();
    reg.step_n(5);
    assert_eq!(reg.output_bits(), vec![0, 0, 0, 1, 1]);
}

// =============================================================================
// Period
// =============================================================================

#[test]
fn test_period_all_zero() {
    let mut reg = Register::new("000").unwrap();
    assert_eq!(reg.period(), 1);

    reg.step();
    assert_eq!(reg.state_as_bitstring(), "000");
}

#[test]
fn test_period_resets_register() {
    let mut reg = Register::new("1000").unwrap();
    reg.step_n(3);

    assert_eq!(reg.period(), 5);
    assert_eq!(reg.state_as_bitstring(), "1000");
    assert_eq!(reg.output(), "");
}

#[test]
fn test_cycle_matches_period() {
    for seed in ["11", "101", "110", "1000", "10110", "0000001"] {
        let mut reg = Register::new(seed).unwrap();
        let cycle = reg.cycle();
        assert_eq!(cycle.period(), reg.period(), "seed {}", seed);
    }
}

#[test]
fn test_random_register_deterministic() {
    let mut rng1 = rand::rngs::StdRng::seed_from_u64(42);
    let mut rng2 = rand::rngs::StdRng::seed_from_u64(42);

    let mut a = Register::random(16, &mut rng1).unwrap();
    let mut b = Register::random(16, &mut rng2).unwrap();
    assert_eq!(a.state_as_bitstring(), b.state_as_bitstring());
    assert_eq!(a.step_n(40), b.step_n(40));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn test_display_layout() {
    let mut reg = Register::new("110").unwrap();
    reg.step_n(2);

    let text = reg.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "-----     ".repeat(3));
    assert_eq!(lines[1], "| 0 | --> | 0 | --> | 1 | --> 01");
    assert_eq!(lines[2], lines[0]);
}

// =============================================================================
// Property-Based Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_construction_preserves_seed(seed in seed_strategy(64)) {
        let reg = Register::new(&seed).unwrap();
        prop_assert_eq!(reg.size(), seed.len());
        prop_assert_eq!(reg.state_as_bitstring(), seed);
    }

    #[test]
    fn prop_deterministic(seed in seed_strategy(32), k in 0..200usize) {
        let mut a = Register::new(&seed).unwrap();
        let mut b = Register::new(&seed).unwrap();
        a.step_n(k);
        b.step_n(k);
        prop_assert_eq!(a.state_as_bitstring(), b.state_as_bitstring());
        prop_assert_eq!(a.output(), b.output());
    }

    #[test]
    fn prop_reset_law(seed in seed_strategy(32), k in 0..200usize) {
        let mut reg = Register::new(&seed).unwrap();
        reg.step_n(k);
        reg.reset();
        prop_assert_eq!(reg.state_as_bitstring(), seed);
        prop_assert_eq!(reg.output(), "");
    }

    #[test]
    fn prop_output_records_last_bit(seed in seed_strategy(32), k in 1..100usize) {
        let mut reg = Register::new(&seed).unwrap();
        let mut expected = Vec::with_capacity(k);
        for _ in 0..k {
            expected.push(reg.state().last_bit());
            reg.step();
            prop_assert_eq!(reg.size(), seed.len());
        }
        prop_assert_eq!(reg.output_len(), k);
        prop_assert_eq!(reg.output_bits(), expected);
    }

    #[test]
    fn prop_period_bounded(seed in seed_strategy(10)) {
        let mut reg = Register::new(&seed).unwrap();
        let p = reg.period();
        prop_assert!(p >= 1);
        prop_assert!(p <= 1usize << seed.len());
    }

    #[test]
    fn prop_period_returns_to_seed(seed in seed_strategy(10)) {
        // Every cell feeds back, so the step map is invertible and the seed
        // always lies on its own cycle.
        let mut reg = Register::new(&seed).unwrap();
        let p = reg.period();
        reg.step_n(p);
        prop_assert_eq!(reg.state_as_bitstring(), seed.clone());
        prop_assert_eq!(reg.cycle().transient, 0);
    }

    #[test]
    fn prop_cycle_is_pure(seed in seed_strategy(10), k in 0..50usize) {
        let mut reg = Register::new(&seed).unwrap();
        reg.step_n(k);
        let before = (reg.state_as_bitstring(), reg.output());
        let cycle = reg.cycle();
        prop_assert_eq!((reg.state_as_bitstring(), reg.output()), before);
        prop_assert_eq!(cycle.period(), reg.period());
    }
}
