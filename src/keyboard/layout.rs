//! Keyboard layout generator: places black keys among white keys.
//!
//! A small state machine walks the white keys and tracks the current black-key
//! group (3 or 2 keys, alternating, starting with 3). The first white key of
//! every group is the gap; each remaining position up to the group size gets a
//! black key anchored right after it. One (3, 2) pair spans seven white keys,
//! with black keys after white offsets 1, 2, 3, 5 and 6.

/// Black keys in the first group of each pair.
const LARGE_GROUP: usize = 3;
/// Black keys in the second group of each pair.
const SMALL_GROUP: usize = 2;
/// White keys spanned by one (3, 2) group pair.
const WHITE_KEYS_PER_CYCLE: usize = LARGE_GROUP + SMALL_GROUP + 2;
/// Largest white-key count accepted from the command line or config.
pub const MAX_KEYS: usize = 256;

/// White or black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    White,
    Black,
}

/// A single key in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyDescriptor {
    /// `index` counts white keys only.
    White { index: usize },
    /// `index` counts black keys only; the key sits just right of white key
    /// `preceding_white_index`.
    Black {
        index: usize,
        preceding_white_index: usize,
    },
}

impl KeyDescriptor {
    pub fn kind(&self) -> KeyKind {
        match self {
            KeyDescriptor::White { .. } => KeyKind::White,
            KeyDescriptor::Black { .. } => KeyKind::Black,
        }
    }

    /// Position among keys of the same kind.
    pub fn index(&self) -> usize {
        match *self {
            KeyDescriptor::White { index } | KeyDescriptor::Black { index, .. } => index,
        }
    }

    /// The white key a black key is anchored to. `None` for white keys.
    pub fn preceding_white_index(&self) -> Option<usize> {
        match *self {
            KeyDescriptor::White { .. } => None,
            KeyDescriptor::Black {
                preceding_white_index,
                ..
            } => Some(preceding_white_index),
        }
    }

    pub fn is_black(&self) -> bool {
        self.kind() == KeyKind::Black
    }
}

/// Generate the layout for `num_keys` white keys.
///
/// Each white key is followed by its black key, if it has one. The output has
/// exactly `num_keys` white keys; black keys for slots past the last white
/// key are never emitted.
pub fn generate(num_keys: usize) -> Vec<KeyDescriptor> {
    let mut keys = Vec::with_capacity(layout_len(num_keys).min(2 * MAX_KEYS));
    let mut counter = 0;
    let mut group = LARGE_GROUP;
    let mut black_index = 0;

    for white in 0..num_keys {
        keys.push(KeyDescriptor::White { index: white });

        if (1..=group).contains(&counter) {
            keys.push(KeyDescriptor::Black {
                index: black_index,
                preceding_white_index: white,
            });
            black_index += 1;
        }

        if counter == group {
            counter = 0;
            group = if group == LARGE_GROUP {
                SMALL_GROUP
            } else {
                LARGE_GROUP
            };
        } else {
            counter += 1;
        }
    }

    keys
}

/// Total keys [`generate`] emits for `num_keys` white keys, saturating at
/// `usize::MAX`.
pub fn layout_len(num_keys: usize) -> usize {
    num_keys.saturating_add(black_key_count(num_keys))
}

/// Number of black keys [`generate`] places among `num_keys` white keys.
pub fn black_key_count(num_keys: usize) -> usize {
    let full_cycles = num_keys / WHITE_KEYS_PER_CYCLE;
    let remainder = num_keys % WHITE_KEYS_PER_CYCLE;
    let partial = (0..remainder).filter(|&offset| has_black_after(offset)).count();
    full_cycles * (LARGE_GROUP + SMALL_GROUP) + partial
}

/// Whether the white key at `offset` within a cycle carries a black key.
fn has_black_after(offset: usize) -> bool {
    let large_span = LARGE_GROUP + 1;
    if offset < large_span {
        offset != 0
    } else {
        offset != large_span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_anchors(keys: &[KeyDescriptor]) -> Vec<usize> {
        keys.iter().filter_map(|k| k.preceding_white_index()).collect()
    }

    #[test]
    fn zero_keys_is_empty() {
        assert!(generate(0).is_empty());
        assert_eq!(black_key_count(0), 0);
    }

    #[test]
    fn single_key_is_white_only() {
        assert_eq!(generate(1), vec![KeyDescriptor::White { index: 0 }]);
    }

    #[test]
    fn seven_keys_is_one_full_cycle() {
        let keys = generate(7);
        assert_eq!(black_anchors(&keys), vec![1, 2, 3, 5, 6]);
        assert_eq!(keys.len(), 12);
    }

    #[test]
    fn fourteen_keys_repeats_pattern() {
        let keys = generate(14);
        assert_eq!(
            black_anchors(&keys),
            vec![1, 2, 3, 5, 6, 8, 9, 10, 12, 13]
        );
    }

    #[test]
    fn black_follows_its_white_key() {
        let keys = generate(7);
        assert_eq!(
            &keys[..4],
            &[
                KeyDescriptor::White { index: 0 },
                KeyDescriptor::White { index: 1 },
                KeyDescriptor::Black {
                    index: 0,
                    preceding_white_index: 1
                },
                KeyDescriptor::White { index: 2 },
            ]
        );
    }

    #[test]
    fn indices_are_per_kind() {
        let keys = generate(10);
        let whites: Vec<usize> = keys.iter().filter(|k| !k.is_black()).map(|k| k.index()).collect();
        let blacks: Vec<usize> = keys.iter().filter(|k| k.is_black()).map(|k| k.index()).collect();
        assert_eq!(whites, (0..10).collect::<Vec<_>>());
        assert_eq!(blacks, (0..blacks.len()).collect::<Vec<_>>());
    }

    #[test]
    fn mid_group_truncation() {
        // Five keys: the large group completes, the small group has only its gap.
        assert_eq!(black_anchors(&generate(5)), vec![1, 2, 3]);
        assert_eq!(black_anchors(&generate(3)), vec![1, 2]);
    }

    #[test]
    fn counts_do_not_overflow_at_usize_max() {
        assert_eq!(black_key_count(usize::MAX), usize::MAX / 7 * 5);
        assert_eq!(layout_len(usize::MAX), usize::MAX);
    }

    #[test]
    fn layout_len_matches_generator() {
        for n in [0, 1, 6, 7, 8, MAX_KEYS] {
            assert_eq!(generate(n).len(), layout_len(n), "n = {n}");
        }
    }

    #[test]
    fn closed_form_matches_generator() {
        for n in 0..100 {
            let generated = generate(n).iter().filter(|k| k.is_black()).count();
            assert_eq!(black_key_count(n), generated, "n = {n}");
        }
    }

    #[test]
    fn kind_accessors() {
        let w = KeyDescriptor::White { index: 3 };
        let b = KeyDescriptor::Black {
            index: 1,
            preceding_white_index: 2,
        };
        assert_eq!(w.kind(), KeyKind::White);
        assert_eq!(b.kind(), KeyKind::Black);
        assert_eq!(w.preceding_white_index(), None);
        assert_eq!(b.preceding_white_index(), Some(2));
    }
}
