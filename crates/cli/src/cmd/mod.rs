//! Command implementations

pub mod hooks;
