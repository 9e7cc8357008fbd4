//! Shared size constants and the canonical solved-state templates the view
//! codecs check their inputs against.

/// Number of distinct facelet/sticker positions on a 3x3x3 cube.
pub const N_FACELETS: usize = 54;

/// Exclusive upper bound on `cp_lex` (`8!`).
pub const N_CORNER_PERMUTATIONS: u32 = 40_320;

/// Exclusive upper bound on `co_mask` (`3^8`).
pub const N_CORNER_ORIENTATIONS: u32 = 6_561;

/// Exclusive upper bound on `ep_lex` (`12!`).
pub const N_EDGE_PERMUTATIONS: u32 = 479_001_600;

/// Exclusive upper bound on `eo_mask` (`2^12`).
pub const N_EDGE_ORIENTATIONS: u32 = 4_096;

/// Length in bytes of the packed wire format.
pub const N_WIRE_BYTES: usize = 11;

/// Length in characters of a Reid string.
pub const N_REID_CHARS: usize = 67;

pub use crate::moves::ALL_MOVES;
pub use crate::reid::TEMPLATE as SOLVED_REID;
