//! Keyboard drawing: turns a key layout into two text rows.
//!
//! Each white key is three columns wide with a `|` on its left edge. A black
//! key is drawn as `#` on the boundary to the right of its anchor white key.

use crate::keyboard::KeyDescriptor;

const WHITE_WIDTH: usize = 3;

/// Text rows for the black keys (top) and white keys (bottom).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardRows {
    pub black: String,
    pub white: String,
}

/// Render a layout. Both rows have the same width.
pub fn render_rows(keys: &[KeyDescriptor]) -> KeyboardRows {
    let whites = keys.iter().filter(|k| !k.is_black()).count();
    if whites == 0 {
        return KeyboardRows {
            black: String::new(),
            white: String::new(),
        };
    }

    let width = whites * WHITE_WIDTH + 1;
    let mut black: Vec<char> = vec![' '; width];
    for anchor in keys.iter().filter_map(|k| k.preceding_white_index()) {
        let column = (anchor + 1) * WHITE_WIDTH;
        if column < width {
            black[column] = '#';
        }
    }

    let mut white = "|  ".repeat(whites);
    white.push('|');

    KeyboardRows {
        black: black.into_iter().collect(),
        white,
    }
}
