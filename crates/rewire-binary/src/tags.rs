// crates/rewire-binary/src/tags.rs

//! Node discriminant bytes for the pattern payload.

pub(crate) const COMPOSITE: u8 = 0x01;
pub(crate) const VARIABLE: u8 = 0x02;
pub(crate) const STRING: u8 = 0x03;

pub(crate) const SORT_VARIABLE: u8 = 0x10;
pub(crate) const SORT_COMPOSITE: u8 = 0x11;
