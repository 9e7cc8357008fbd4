//! The 11-byte (88-bit, 82 meaningful bits) packed wire format. Fields are
//! packed big-endian, back to back, bit-exact with the canonical on-disk
//! layout: `epLex` first, then `eoMask`, `cpLex`, `coMask`, `poIdxU`,
//! `poIdxL`, `moSupport`, `moMask`.

use crate::coords::CubeCoords;
use crate::error::Error;

/// Packs a coordinate tuple into its 11-byte wire representation.
///
/// Does not validate; callers that need the range/reserved-bit checks round
/// trip through [`from_bytes11`].
pub fn to_bytes11(cc: &CubeCoords) -> [u8; 11] {
    let ep = cc.ep_lex;
    let eo = cc.eo_mask;
    let cp = cc.cp_lex;
    let co = cc.co_mask;
    let pu = cc.po_idx_u;
    let pl = cc.po_idx_l;
    let ms = cc.mo_support;
    let mm = cc.mo_mask;

    [
        (ep >> 21) as u8,
        (ep >> 13) as u8,
        (ep >> 5) as u8,
        ((ep << 3) + (eo >> 9)) as u8,
        (eo >> 1) as u8,
        ((eo << 7) + (cp >> 9)) as u8,
        (cp >> 1) as u8,
        ((cp << 7) + (co >> 6)) as u8,
        ((co << 2) + (pu >> 1)) as u8,
        ((pu << 7) + (pl << 5) + (ms << 4) + (mm >> 8)) as u8,
        mm as u8,
    ]
}

/// Unpacks an 11-byte wire buffer into a coordinate tuple, validating every
/// range and reserved-bit constraint in the order specified by the wire
/// format: edge permutation, edge orientation, corner permutation, corner
/// orientation, puzzle orientation, center-orientation support. The first
/// violation found is returned.
pub fn from_bytes11(p: &[u8; 11]) -> Result<CubeCoords, Error> {
    let p = p.map(|b| b as u32);

    let ep_lex = (p[0] << 21) + (p[1] << 13) + (p[2] << 5) + (p[3] >> 3);
    if ep_lex >= 479_001_600 {
        return Err(Error::EdgePermutationOutOfRange);
    }

    let eo_mask = ((p[3] & 0o7) << 9) + (p[4] << 1) + (p[5] >> 7);
    if eo_mask >= 4096 {
        return Err(Error::EdgeOrientationOutOfRange);
    }

    let cp_lex = ((p[5] & 0o177) << 9) + (p[6] << 1) + (p[7] >> 7);
    if cp_lex >= 40320 {
        return Err(Error::CornerPermutationOutOfRange);
    }

    let co_mask = ((p[7] & 0o177) << 6) + (p[8] >> 2);
    if co_mask >= 6561 {
        return Err(Error::CornerOrientationOutOfRange);
    }

    let po_idx_u = ((p[8] & 3) << 1) + (p[9] >> 7);
    if po_idx_u != 7 {
        return Err(Error::PuzzleOrientationNotSupported);
    }

    let po_idx_l = (p[9] >> 5) & 3;
    let mo_support = (p[9] >> 4) & 1;
    if mo_support != 0 {
        return Err(Error::CenterOrientationNotSupported);
    }

    let mo_mask = ((p[9] & 0o17) << 8) + p[10];

    Ok(CubeCoords {
        cp_lex,
        co_mask,
        ep_lex,
        eo_mask,
        po_idx_u,
        po_idx_l,
        mo_support,
        mo_mask,
    })
}
