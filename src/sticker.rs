//! The sticker view: 54 face-color values (0..5), one per facelet, in the
//! same canonical layout as the facelet-permutation view (see `layout`).

use crate::coords::CubeCoords;
use crate::error::Error;
use crate::layout::{CUBIE_TABLES, REID_ORDER};
use crate::perm::{decode_perm, encode_perm};

/// A sticker array: the observed color (0..5) at each of the 54 canonical
/// facelet positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stickers(pub [u8; 54]);

/// The solved cube's sticker array: each face shows its own color uniformly.
pub fn solved_stickers() -> Stickers {
    let mut a = [0u8; 54];
    for (face, slot) in a.chunks_mut(9).enumerate() {
        slot.fill(face as u8);
    }
    Stickers(a)
}

impl Default for Stickers {
    fn default() -> Self {
        solved_stickers()
    }
}

/// Converts a sticker array into its coordinate tuple.
pub fn stickers_to_tuple(stickers: &Stickers) -> Result<CubeCoords, Error> {
    let stickers = &stickers.0;
    for &v in stickers.iter() {
        if v > 5 {
            return Err(Error::StickerElementOutOfRange);
        }
    }

    let tables = &*CUBIE_TABLES;
    let mut perm12 = [0u8; 12];
    let mut edgeo: u32 = 0;
    for i in 0..12usize {
        let c0 = stickers[REID_ORDER[2 * i] as usize];
        let c1 = stickers[REID_ORDER[2 * i + 1] as usize];
        let key = 6 * c0 as usize + c1 as usize;
        let cubie = tables.edge_lookup[key];
        if cubie == 255 {
            return Err(Error::IllegalCubieSeen);
        }
        perm12[i] = cubie >> 1;
        edgeo = 2 * edgeo + (cubie & 1) as u32;
    }
    let ep_lex = encode_perm(&perm12).ok_or(Error::MissingEdgeCubie)?;

    let mut perm8 = [0u8; 8];
    let mut cornero: u32 = 0;
    for i in 0..8usize {
        let c0 = stickers[REID_ORDER[24 + 3 * i] as usize];
        let c1 = stickers[REID_ORDER[24 + 3 * i + 1] as usize];
        let c2 = stickers[REID_ORDER[24 + 3 * i + 2] as usize];
        let key = 6 * c0 as usize + c1 as usize;
        let cubie = tables.corner_lookup[key];
        if cubie == 255 {
            return Err(Error::IllegalCubieSeen);
        }
        let stored = tables.corner_expand[cubie as usize];
        let stored_c2 = (stored & 63) as u8 / 9;
        if stored_c2 != c2 {
            return Err(Error::IllegalCubieSeen);
        }
        perm8[i] = cubie >> 2;
        cornero = 3 * cornero + (cubie & 3) as u32;
    }
    let cp_lex = encode_perm(&perm8).ok_or(Error::MissingCornerCubie)?;

    let mut centers = [0u8; 6];
    for i in 0..6usize {
        centers[i] = stickers[REID_ORDER[48 + i] as usize];
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

/// Converts a coordinate tuple into its sticker array.
pub fn tuple_to_stickers(cc: &CubeCoords) -> Stickers {
    let tables = &*CUBIE_TABLES;
    let mut stickers = [0u8; 54];

    let perm12 = decode_perm(cc.ep_lex, 12);
    let eo = cc.eo_mask;
    for i in 0..12usize {
        let bit = 1 & (eo >> (11 - i));
        let packed = tables.edge_expand[2 * perm12[i] as usize + bit as usize];
        stickers[REID_ORDER[2 * i] as usize] = (packed >> 6) as u8 / 9;
        stickers[REID_ORDER[2 * i + 1] as usize] = (packed & 63) as u8 / 9;
    }

    let perm8 = decode_perm(cc.cp_lex, 8);
    let mut co = cc.co_mask;
    for i in (0..8usize).rev() {
        let packed = tables.corner_expand[4 * perm8[i] as usize + (co % 3) as usize];
        stickers[REID_ORDER[3 * i + 24] as usize] = (packed >> 12) as u8 / 9;
        stickers[REID_ORDER[3 * i + 25] as usize] = ((packed >> 6) & 63) as u8 / 9;
        stickers[REID_ORDER[3 * i + 26] as usize] = (packed & 63) as u8 / 9;
        co /= 3;
    }

    for i in 0..6usize {
        stickers[REID_ORDER[48 + i] as usize] = i as u8;
    }

    Stickers(stickers)
}
