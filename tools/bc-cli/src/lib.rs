//! BC-CLI: billing-cycle calculator and schedule envelope tool
//!
//! Thin command layer over the schedule projector and envelope codec. The
//! binary in `main.rs` only parses arguments, installs logging and wires
//! stdin/stdout into the functions here.

pub mod commands;
pub mod password;
pub mod render;

pub use commands::{run_calculate, run_decrypt, CalculateArgs, DecryptArgs};
pub use password::{resolve_password, PASSWORD_ENV};
