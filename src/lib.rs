#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # knx-dpt
//!
//! KNX Datapoint Type codecs for embedded systems.
//!
//! This crate provides a `no_std`, allocation-free implementation of the
//! KNX DPT payload formats, usable on microcontrollers and on the host.
//!
//! ## Features
//!
//! - Two-step validate-then-decode contract for bytes and text
//! - Canonical re-encoding of every decoded value
//! - Structured errors carrying DPT id, bounds and offending input
//! - Optional `defmt`/`log` logging and `serde` support

// Macro modules (must be declared before use)
#[macro_use]
mod macros;
#[macro_use]
pub mod logging;

pub mod dpt;
pub mod error;

// Re-export commonly used types
#[doc(inline)]
pub use dpt::{DataPointType, DataPointValue, Payload};
#[doc(inline)]
pub use error::{KnxError, Result};
