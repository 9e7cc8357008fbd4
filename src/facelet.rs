//! The facelet-permutation ("Heykube") view: 54 values that are a
//! permutation of 0..53, restricted to physically reachable cube states.

use crate::coords::CubeCoords;
use crate::error::Error;
use crate::layout::{CUBIE_TABLES, REID_ORDER};
use crate::perm::{decode_perm, encode_perm};

/// A facelet-permutation state: which original facelet currently occupies
/// each of the 54 canonical positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceletPerm(pub [u8; 54]);

/// The identity facelet-permutation (a solved cube): position `i` holds
/// facelet `i`.
pub fn iota() -> FaceletPerm {
    let mut a = [0u8; 54];
    for (i, slot) in a.iter_mut().enumerate() {
        *slot = i as u8;
    }
    FaceletPerm(a)
}

impl Default for FaceletPerm {
    fn default() -> Self {
        iota()
    }
}

/// Converts a facelet-permutation into its coordinate tuple.
pub fn facelet_to_tuple(kubeperm: &FaceletPerm) -> Result<CubeCoords, Error> {
    let kubeperm = &kubeperm.0;
    for &v in kubeperm.iter() {
        if v > 53 {
            return Err(Error::PermElementOutOfRange);
        }
    }

    let tables = &*CUBIE_TABLES;
    let mut perm12 = [0u8; 12];
    let mut edgeo: u32 = 0;
    for i in 0..12usize {
        let p0 = REID_ORDER[2 * i] as usize;
        let p1 = REID_ORDER[2 * i + 1] as usize;
        let f0 = kubeperm[p0];
        let f1 = kubeperm[p1];
        let key = 6 * (f0 as usize / 9) + (f1 as usize / 9);
        let cubie = tables.edge_lookup[key];
        if cubie == 255 || tables.edge_expand[cubie as usize] != ((f0 as u16) << 6) + f1 as u16 {
            return Err(Error::IllegalCubieSeen);
        }
        perm12[i] = cubie >> 1;
        edgeo = 2 * edgeo + (cubie & 1) as u32;
    }
    let ep_lex = encode_perm(&perm12).ok_or(Error::MissingEdgeCubie)?;

    let mut perm8 = [0u8; 8];
    let mut cornero: u32 = 0;
    for i in 0..8usize {
        let p0 = REID_ORDER[24 + 3 * i] as usize;
        let p1 = REID_ORDER[24 + 3 * i + 1] as usize;
        let p2 = REID_ORDER[24 + 3 * i + 2] as usize;
        let f0 = kubeperm[p0];
        let f1 = kubeperm[p1];
        let f2 = kubeperm[p2];
        let key = 6 * (f0 as usize / 9) + (f1 as usize / 9);
        let cubie = tables.corner_lookup[key];
        if cubie == 255
            || tables.corner_expand[cubie as usize]
                != ((f0 as u32) << 12) + ((f1 as u32) << 6) + f2 as u32
        {
            return Err(Error::IllegalCubieSeen);
        }
        perm8[i] = cubie >> 2;
        cornero = 3 * cornero + (cubie & 3) as u32;
    }
    let cp_lex = encode_perm(&perm8).ok_or(Error::MissingCornerCubie)?;

    let mut centers = [0u8; 6];
    for i in 0..6usize {
        let p = REID_ORDER[48 + i] as usize;
        centers[i] = kubeperm[p] / 9;
    }
    if encode_perm(&centers) != Some(0) {
        return Err(Error::PuzzleOrientationNotSupported);
    }

    Ok(CubeCoords {
        cp_lex,
        co_mask: cornero,
        ep_lex,
        eo_mask: edgeo,
        po_idx_u: 7,
        po_idx_l: 0,
        mo_support: 0,
        mo_mask: 0,
    })
}

/// Converts a coordinate tuple into its facelet-permutation.
///
/// Does not validate the tuple's fields are in range; callers that need that
/// guarantee round trip through the wire codec.
pub fn tuple_to_facelet(cc: &CubeCoords) -> FaceletPerm {
    let tables = &*CUBIE_TABLES;
    let mut kubeperm = [0u8; 54];

    let perm12 = decode_perm(cc.ep_lex, 12);
    let eo = cc.eo_mask;
    for i in 0..12usize {
        let bit = 1 & (eo >> (11 - i));
        let colors = tables.edge_expand[2 * perm12[i] as usize + bit as usize];
        kubeperm[REID_ORDER[2 * i] as usize] = (colors >> 6) as u8;
        kubeperm[REID_ORDER[2 * i + 1] as usize] = (colors & 63) as u8;
    }

    let perm8 = decode_perm(cc.cp_lex, 8);
    let mut co = cc.co_mask;
    for i in (0..8usize).rev() {
        let colors = tables.corner_expand[4 * perm8[i] as usize + (co % 3) as usize];
        kubeperm[REID_ORDER[3 * i + 24] as usize] = (colors >> 12) as u8;
        kubeperm[REID_ORDER[3 * i + 25] as usize] = ((colors >> 6) & 63) as u8;
        kubeperm[REID_ORDER[3 * i + 26] as usize] = (colors & 63) as u8;
        co /= 3;
    }

    for i in 0..6usize {
        let p = REID_ORDER[48 + i] as usize;
        kubeperm[p] = p as u8;
    }

    FaceletPerm(kubeperm)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coords::SOLVED;

    #[test]
    fn solved_cube_is_iota() {
        assert_eq!(tuple_to_facelet(&SOLVED), iota());
        assert_eq!(facelet_to_tuple(&iota()), Ok(SOLVED));
    }

    #[test]
    fn round_trips_through_both_directions() {
        let cc = CubeCoords {
            cp_lex: 12345,
            co_mask: 200,
            ep_lex: 123_456_789,
            eo_mask: 50,
            po_idx_u: 7,
            po_idx_l: 0,
            mo_support: 0,
            mo_mask: 0,
        };
        let perm = tuple_to_facelet(&cc);
        assert_eq!(facelet_to_tuple(&perm), Ok(cc));
    }

    #[test]
    fn rejects_out_of_range_facelet_value() {
        let mut perm = iota();
        perm.0[0] = 54;
        assert_eq!(facelet_to_tuple(&perm), Err(Error::PermElementOutOfRange));
    }

    #[test]
    fn rejects_wrong_facelets_for_a_cubie() {
        // Swap two facelets belonging to different edges: both still valid
        // colors individually, but the pairing no longer matches any cubie's
        // exact facelet pair.
        let mut perm = iota();
        perm.0.swap(41, 48); // UF's U-facelet <-> DF's D-facelet
        assert_eq!(facelet_to_tuple(&perm), Err(Error::IllegalCubieSeen));
    }

    #[test]
    fn rejects_reoriented_centers() {
        let mut perm = iota();
        perm.0.swap(4, 13); // swap L and F centers
        assert_eq!(
            facelet_to_tuple(&perm),
            Err(Error::PuzzleOrientationNotSupported)
        );
    }
}
