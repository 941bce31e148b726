//! DPT 17.001 - Scene number
//!
//! ## Format
//!
//! ```text
//! bit:  7 6 5 4 3 2 1 0
//!       r r N N N N N N
//! ```
//!
//! `NNNNNN` is the scene number 0..63; the reserved bits must be zero,
//! otherwise decoding fails with an out-of-range error.

use crate::dpt::integer::{IntegerWidth, ScaledInteger};
use crate::dpt::range::Scaling;

/// Highest scene number of a 6-bit scene field
pub const MAX_SCENE_NUMBER: u8 = 63;

/// DPT 17.xxx scene number types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt17 {
    /// DPT 17.001 - Scene number (0-63)
    SceneNumber,
}

impl Dpt17 {
    /// Get the DPT identifier string
    pub const fn identifier(&self) -> &'static str {
        "17.001"
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        "Scene number"
    }

    /// Scene numbers have no unit
    pub const fn unit_symbol(&self) -> Option<&'static str> {
        None
    }
}

impl ScaledInteger for Dpt17 {
    const WIDTH: IntegerWidth = IntegerWidth::U8;

    fn scaling(&self) -> Scaling {
        Scaling::identity(0.0, f64::from(MAX_SCENE_NUMBER))
    }
}

impl_integer_dpt!(Dpt17, u8);
