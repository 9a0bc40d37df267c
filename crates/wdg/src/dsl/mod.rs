//! Locating WMI buffers inside decompiled DSDT text.

pub mod extract;

pub use extract::{find_buffers, DslBuffer, WDG_NAME, WQ_NAME};
