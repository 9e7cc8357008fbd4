//! # cubecoords
//! `cubecoords`: binary and text codecs for the 3x3x3 Rubik's cube coordinate
//! tuple — a compact, lossless description of any reachable cube state
//! (corner/edge permutation and orientation), with conversions to and from
//! an 11-byte packed wire format, sticker arrays, facelet-permutations, and
//! Reid strings, plus a move engine for applying face turns to any of those
//! views.

#[macro_use]
extern crate lazy_static;

/// Permutation <-> lexicographic-rank codec shared by every coordinate
/// field that is itself a permutation ordinal.
pub mod perm;

/// Error taxonomy returned by every codec in this crate.
pub mod error;

/// The coordinate tuple itself.
pub mod coords;

/// The 11-byte packed wire format.
pub mod wire;

/// Facelet layout and cubie lookup/expand tables shared by the sticker and
/// facelet-permutation views.
pub mod layout;

/// The sticker-array view.
pub mod sticker;

/// The facelet-permutation ("Heykube") view.
pub mod facelet;

/// The Reid-string view.
pub mod reid;

/// Cubie-level base-move states used to seed the move engine's table.
pub mod cubie;

/// The move engine: base-move table, composition, and application.
pub mod moves;

/// Shared size constants and solved-state templates.
pub mod constants;
