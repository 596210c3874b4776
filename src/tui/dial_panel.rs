//! Dial panel: which dial is selected, and the per-dial display rows.

use crate::params::{Dial, ParameterStore};

/// Display info for a single dial row.
#[derive(Debug, Clone, PartialEq)]
pub struct DialRow {
    pub label: String,
    pub value_text: String,
    pub ratio: f64,
    pub selected: bool,
}

/// Selection state for the dial list.
#[derive(Debug, Clone, Default)]
pub struct DialPanel {
    pub selected: usize,
}

impl DialPanel {
    /// Move selection down, wrapping.
    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move selection up, wrapping.
    pub fn select_prev(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// The selected dial in `store`, if any.
    pub fn selected_dial<'a>(&self, store: &'a ParameterStore) -> Option<&'a Dial> {
        store.dial_at(self.selected)
    }

    /// Rows for every dial in seed order.
    pub fn rows(&self, store: &ParameterStore) -> Vec<DialRow> {
        store
            .dials()
            .enumerate()
            .map(|(i, dial)| DialRow {
                label: dial.label.clone(),
                value_text: format_value(dial),
                ratio: dial.normalized(),
                selected: i == self.selected,
            })
            .collect()
    }
}

/// Format a value with as many decimals as its step needs.
pub fn format_value(dial: &Dial) -> String {
    let decimals = step_decimals(dial.step);
    format!("{:.*}", decimals, dial.value)
}

fn step_decimals(step: f64) -> usize {
    let mut decimals = 0;
    let mut scaled = step;
    while decimals < 6 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}
