//! The facelet layout shared by the sticker and facelet-permutation
//! (Heykube) view codecs, and the cubie lookup/expand tables built from it.
//!
//! 54 facelet positions are numbered 0..53 as six 3x3 faces in column-major
//! order, with the faces in the order Left, Front, Right, Back, Up, Down:
//!
//! ```text
//!              36 39 42
//!              37 40 43
//!              38 41 44
//!
//!    0  3  6    9 12 15   18 21 24   27 30 33
//!    1  4  7   10 13 16   19 22 25   28 31 34
//!    2  5  8   11 14 17   20 23 26   29 32 35
//!
//!              45 48 51
//!              46 49 52
//!              47 50 53
//! ```
//!
//! A facelet's face-of-origin ("color", 0..5) is `facelet / 9`, so colors are
//! 0=L, 1=F, 2=R, 3=B, 4=U, 5=D in this layout.

/// Canonical facelet position of each cubie's facelets, in Reid order:
/// 12 edges (2 each), 8 corners (3 each, clockwise), 6 centers (1 each).
/// Indices into a 54-element facelet array of a *solved* cube double as both
/// "the position this facelet belongs to" and "the solved content at that
/// position" when building the lookup/expand tables below.
#[rustfmt::skip]
pub const REID_ORDER: [u8; 54] = [
    41, 12,  43, 21,  39, 30,  37, 3,   // up edges:    UF UR UB UL
    48, 14,  52, 23,  50, 32,  46, 5,   // down edges:  DF DR DB DL
    16, 19,  10, 7,   28, 25,  34, 1,   // middle edges:FR FL BR BL
    44, 15, 18,  42, 24, 27,  36, 33, 0,  38, 6, 9,   // up corners:   UFR URB UBL ULF
    51, 20, 17,  45, 11, 8,   47, 2, 35,  53, 29, 26, // down corners: DRF DFL DLB DBR
    4, 13, 22, 31, 40, 49,              // centers: L F R B U D
];

/// Lookup/expand tables mapping an observed color pair/triple (0..5 each) to
/// an oriented cubie index and back to the exact facelet pair/triple that
/// cubie occupies in the solved reference cube.
pub struct CubieTables {
    /// `6*(c0/9)+c1/9 -> cubie*2+orientation`, 255 = no such edge.
    pub edge_lookup: [u8; 36],
    /// `6*(c0/9)+c1/9 -> cubie*4+orientation`, 255 = no such corner.
    pub corner_lookup: [u8; 36],
    /// `cubie*2+orientation -> (facelet0<<6)+facelet1`.
    pub edge_expand: [u16; 24],
    /// `cubie*4+orientation -> (facelet0<<12)+(facelet1<<6)+facelet2`.
    pub corner_expand: [u32; 32],
}

impl CubieTables {
    fn build() -> Self {
        let mut edge_lookup = [255u8; 36];
        let mut corner_lookup = [255u8; 36];
        let mut edge_expand = [0u16; 24];
        let mut corner_expand = [0u32; 32];

        for i in 0..12usize {
            let c0 = REID_ORDER[2 * i] as u16;
            let c1 = REID_ORDER[2 * i + 1] as u16;
            let f0 = (c0 / 9) as usize;
            let f1 = (c1 / 9) as usize;
            edge_lookup[6 * f0 + f1] = (2 * i) as u8;
            edge_expand[2 * i] = (c0 << 6) + c1;
            edge_lookup[6 * f1 + f0] = (2 * i + 1) as u8;
            edge_expand[2 * i + 1] = (c1 << 6) + c0;
        }

        for i in 0..8usize {
            let c0 = REID_ORDER[24 + 3 * i] as u32;
            let c1 = REID_ORDER[24 + 3 * i + 1] as u32;
            let c2 = REID_ORDER[24 + 3 * i + 2] as u32;
            let f0 = (c0 / 9) as usize;
            let f1 = (c1 / 9) as usize;
            let f2 = (c2 / 9) as usize;
            corner_lookup[6 * f0 + f1] = (4 * i) as u8;
            corner_expand[4 * i] = (c0 << 12) + (c1 << 6) + c2;
            corner_lookup[6 * f1 + f2] = (4 * i + 1) as u8;
            corner_expand[4 * i + 1] = (c1 << 12) + (c2 << 6) + c0;
            corner_lookup[6 * f2 + f0] = (4 * i + 2) as u8;
            corner_expand[4 * i + 2] = (c2 << 12) + (c0 << 6) + c1;
        }

        CubieTables {
            edge_lookup,
            corner_lookup,
            edge_expand,
            corner_expand,
        }
    }
}

lazy_static! {
    pub static ref CUBIE_TABLES: CubieTables = CubieTables::build();
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reid_order_is_self_consistent_for_solved_cube() {
        // every entry must be a valid facelet index
        for &p in REID_ORDER.iter() {
            assert!(p < 54);
        }
    }

    #[test]
    fn every_edge_and_corner_slot_has_two_lookup_entries() {
        let t = &*CUBIE_TABLES;
        let edge_entries = t.edge_lookup.iter().filter(|&&v| v != 255).count();
        assert_eq!(edge_entries, 24);
        let corner_entries = t.corner_lookup.iter().filter(|&&v| v != 255).count();
        assert_eq!(corner_entries, 24); // 8 corners * 3 rotations, orientation 3 unused
    }

    #[test]
    fn edge_expand_round_trips_through_lookup() {
        let t = &*CUBIE_TABLES;
        for cubie in 0..24usize {
            let packed = t.edge_expand[cubie];
            let c0 = (packed >> 6) as usize;
            let c1 = (packed & 63) as usize;
            let key = 6 * (c0 / 9) + (c1 / 9);
            assert_eq!(t.edge_lookup[key] as usize, cubie);
        }
    }

    #[test]
    fn corner_expand_round_trips_through_lookup() {
        let t = &*CUBIE_TABLES;
        for cubie in 0..32usize {
            if cubie % 4 == 3 {
                continue; // orientation 3 is unused for corners
            }
            let packed = t.corner_expand[cubie];
            let c0 = (packed >> 12) as usize;
            let c1 = ((packed >> 6) & 63) as usize;
            let key = 6 * (c0 / 9) + (c1 / 9);
            assert_eq!(t.corner_lookup[key] as usize, cubie);
        }
    }
}
