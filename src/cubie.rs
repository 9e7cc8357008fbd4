//! Cubie-level states for the six base quarter-turn moves, used only to seed
//! the facelet-permutation move table (see `moves.rs`). Corner and edge
//! arrays are indexed in Reid order: corners
//! `UFR,URB,UBL,ULF,DRF,DFL,DLB,DBR`, edges
//! `UF,UR,UB,UL,DF,DR,DB,DL,FR,FL,BR,BL`.

use crate::coords::CubeCoords;
use crate::perm::encode_perm;

/// A cube state expressed as corner/edge permutation and orientation arrays,
/// rather than the lexicographic-rank encoding `CubeCoords` uses. Orientation
/// values are corner twist (0..2, clockwise) and edge flip (0..1).
pub struct CubieState {
    pub cp: [u8; 8],
    pub co: [u8; 8],
    pub ep: [u8; 12],
    pub eo: [u8; 12],
}

impl CubieState {
    /// Converts to the rank-encoded coordinate tuple used by every other
    /// view. Centers and the reserved fields are always the solved sentinel
    /// values: these base states only ever describe corner/edge movement.
    pub fn to_coords(&self) -> CubeCoords {
        let cp_lex = encode_perm(&self.cp).expect("base move permutations are always valid");
        let ep_lex = encode_perm(&self.ep).expect("base move permutations are always valid");
        let mut co_mask = 0u32;
        for &t in self.co.iter() {
            co_mask = co_mask * 3 + t as u32;
        }
        let mut eo_mask = 0u32;
        for &f in self.eo.iter() {
            eo_mask = eo_mask * 2 + f as u32;
        }
        CubeCoords {
            cp_lex,
            co_mask,
            ep_lex,
            eo_mask,
            po_idx_u: 7,
            po_idx_l: 0,
            mo_support: 0,
            mo_mask: 0,
        }
    }
}

/// Turning U clockwise cycles the four up corners and four up edges; nothing
/// changes orientation (U never tilts a sticker out of the U/D axis).
pub const U_MOVE: CubieState = CubieState {
    cp: [3, 0, 1, 2, 4, 5, 6, 7],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// Turning D clockwise cycles the four down corners and four down edges.
pub const D_MOVE: CubieState = CubieState {
    cp: [0, 1, 2, 3, 5, 6, 7, 4],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [0, 1, 2, 3, 7, 4, 5, 6, 8, 9, 10, 11],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// Turning F clockwise cycles UFR->ULF->DFL->DRF (each twisting) and
/// UF->FL->DF->FR (each flipping).
pub const F_MOVE: CubieState = CubieState {
    cp: [3, 1, 2, 5, 0, 4, 6, 7],
    co: [1, 0, 0, 2, 2, 1, 0, 0],
    ep: [9, 1, 2, 3, 8, 5, 6, 7, 0, 4, 10, 11],
    eo: [1, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0],
};

/// Turning B clockwise cycles URB->DBR->DLB->UBL (each twisting) and
/// UB->BR->DB->BL (each flipping).
pub const B_MOVE: CubieState = CubieState {
    cp: [0, 7, 1, 3, 4, 5, 2, 6],
    co: [0, 2, 1, 0, 0, 0, 2, 1],
    ep: [0, 1, 10, 3, 4, 5, 11, 7, 8, 9, 6, 2],
    eo: [0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 1],
};

/// Turning R clockwise cycles UFR->DRF->DBR->URB (each twisting); the four
/// edges it moves keep their flip (R never touches a U/D-axis sticker).
pub const R_MOVE: CubieState = CubieState {
    cp: [4, 0, 2, 3, 7, 5, 6, 1],
    co: [2, 1, 0, 0, 1, 0, 0, 2],
    ep: [0, 8, 2, 3, 4, 10, 6, 7, 5, 9, 1, 11],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// Turning L clockwise cycles ULF->UBL->DLB->DFL (each twisting); like R, its
/// edges keep their flip.
pub const L_MOVE: CubieState = CubieState {
    cp: [0, 1, 6, 2, 4, 3, 5, 7],
    co: [0, 0, 2, 1, 0, 2, 1, 0],
    ep: [0, 1, 2, 11, 4, 5, 6, 9, 8, 3, 10, 7],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

#[cfg(test)]
mod test {
    use super::*;

    fn is_permutation(a: &[u8]) -> bool {
        let mut seen = vec![false; a.len()];
        for &v in a {
            let v = v as usize;
            if v >= a.len() || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }

    const MOVES: [&CubieState; 6] = [
        &U_MOVE, &D_MOVE, &F_MOVE, &B_MOVE, &R_MOVE, &L_MOVE,
    ];

    #[test]
    fn every_base_move_permutes_corners_and_edges() {
        for m in MOVES {
            assert!(is_permutation(&m.cp), "corner perm not a permutation");
            assert!(is_permutation(&m.ep), "edge perm not a permutation");
        }
    }

    #[test]
    fn corner_twists_sum_to_zero_mod_three() {
        for m in MOVES {
            let sum: u32 = m.co.iter().map(|&t| t as u32).sum();
            assert_eq!(sum % 3, 0);
        }
    }

    #[test]
    fn edge_flips_sum_to_zero_mod_two() {
        for m in MOVES {
            let sum: u32 = m.eo.iter().map(|&f| f as u32).sum();
            assert_eq!(sum % 2, 0);
        }
    }

    #[test]
    fn every_base_move_is_a_single_product_of_two_four_cycles() {
        // A quarter turn moves exactly 4 corners and 4 edges, fixing the rest.
        for m in MOVES {
            let moved_corners = m.cp.iter().enumerate().filter(|&(i, &v)| i != v as usize).count();
            let moved_edges = m.ep.iter().enumerate().filter(|&(i, &v)| i != v as usize).count();
            assert_eq!(moved_corners, 4);
            assert_eq!(moved_edges, 4);
        }
    }

    #[test]
    fn to_coords_round_trips_through_encode_perm() {
        for m in MOVES {
            let cc = m.to_coords();
            assert_eq!(cc.po_idx_u, 7);
            assert_eq!(cc.mo_mask, 0);
        }
    }

    #[test]
    fn u_move_matches_the_known_seed_ranks() {
        let cc = U_MOVE.to_coords();
        assert_eq!(cc.ep_lex, 119_750_400);
        assert_eq!(cc.cp_lex, 15_120);
    }
}
