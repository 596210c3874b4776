//! Piano keyboard layout.

pub mod layout;

pub use layout::{black_key_count, generate, layout_len, KeyDescriptor, KeyKind, MAX_KEYS};
