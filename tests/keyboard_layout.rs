//! Keyboard layout properties: key counts, group pattern, determinism.

use synthdial::keyboard::{black_key_count, generate, KeyDescriptor, KeyKind};

/// Black keys expected for `n` white keys, counted group by group: a group of
/// size `g` spans `g + 1` white keys and its first white key is the gap.
fn expected_black_keys(n: usize) -> usize {
    let mut remaining = n;
    let mut total = 0;
    let mut group = 3;
    while remaining > 0 {
        let span = group + 1;
        let used = remaining.min(span);
        total += used.saturating_sub(1);
        remaining -= used;
        group = if group == 3 { 2 } else { 3 };
    }
    total
}

#[test]
fn white_and_black_counts_for_many_sizes() {
    for n in 0..=150 {
        let keys = generate(n);
        let whites = keys.iter().filter(|k| k.kind() == KeyKind::White).count();
        let blacks = keys.iter().filter(|k| k.kind() == KeyKind::Black).count();
        assert_eq!(whites, n, "white count for n = {n}");
        assert_eq!(blacks, expected_black_keys(n), "black count for n = {n}");
        assert_eq!(black_key_count(n), blacks, "closed form for n = {n}");
    }
}

#[test]
fn empty_keyboard() {
    assert_eq!(generate(0), Vec::<KeyDescriptor>::new());
}

#[test]
fn one_octave_has_groups_of_three_then_two() {
    let keys = generate(7);
    let anchors: Vec<usize> = keys.iter().filter_map(|k| k.preceding_white_index()).collect();
    assert_eq!(anchors, vec![1, 2, 3, 5, 6]);
}

#[test]
fn generation_is_deterministic() {
    for n in [0, 1, 7, 20, 88] {
        assert_eq!(generate(n), generate(n));
    }
}

#[test]
fn black_keys_anchor_to_the_white_key_before_them() {
    let keys = generate(30);
    let mut last_white = None;
    for key in &keys {
        match *key {
            KeyDescriptor::White { index } => last_white = Some(index),
            KeyDescriptor::Black {
                preceding_white_index,
                ..
            } => assert_eq!(Some(preceding_white_index), last_white),
        }
    }
}

#[test]
fn no_key_beyond_requested_count() {
    for n in 1..40 {
        let keys = generate(n);
        assert!(keys
            .iter()
            .filter_map(|k| k.preceding_white_index())
            .all(|anchor| anchor < n));
        assert_eq!(keys.first(), Some(&KeyDescriptor::White { index: 0 }));
    }
}

#[test]
fn gaps_between_groups_alternate() {
    // Whites without a black key: every group's first position.
    let keys = generate(21);
    let with_black: Vec<usize> = keys.iter().filter_map(|k| k.preceding_white_index()).collect();
    let gaps: Vec<usize> = (0..21).filter(|w| !with_black.contains(w)).collect();
    assert_eq!(gaps, vec![0, 4, 7, 11, 14, 18]);
}
