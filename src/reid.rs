//! The Reid view: a 67-character string naming each of the 20 non-center
//! cubies by the faces it touches, in a fixed canonical order.

use crate::coords::CubeCoords;
use crate::error::Error;
use crate::perm::{decode_perm, encode_perm};

/// The solved cube's Reid string; also the shape template every input is
/// checked against (token lengths and space positions).
pub const TEMPLATE: &str = "UF UR UB UL DF DR DB DL FR FL BR BL UFR URB UBL ULF DRF DFL DLB DBR";

struct ReidTables {
    /// `(c0 + 15*c1) & 63 -> cubie*2+orientation`, 255 = no such edge.
    edge_lookup: [u8; 64],
    /// `(c0 + 15*c1) & 63 -> cubie*4+orientation`, 255 = no such corner.
    corner_lookup: [u8; 64],
    /// `cubie*2+orientation -> (c0<<5)+c1`, letters as `ch & 31`.
    edge_expand: [u16; 24],
    /// `cubie*4+orientation -> (c0<<10)+(c1<<5)+c2`.
    corner_expand: [u32; 32],
}

fn letter(b: u8) -> u16 {
    (b & 31) as u16
}

impl ReidTables {
    fn build() -> Self {
        let t = TEMPLATE.as_bytes();
        let mut edge_lookup = [255u8; 64];
        let mut corner_lookup = [255u8; 64];
        let mut edge_expand = [0u16; 24];
        let mut corner_expand = [0u32; 32];

        for i in 0..12usize {
            let c0 = letter(t[3 * i]);
            let c1 = letter(t[3 * i + 1]);
            edge_lookup[((c0 + 15 * c1) & 63) as usize] = (2 * i) as u8;
            edge_expand[2 * i] = (c0 << 5) + c1;
            edge_lookup[((c1 + 15 * c0) & 63) as usize] = (2 * i + 1) as u8;
            edge_expand[2 * i + 1] = (c1 << 5) + c0;
        }

        for i in 0..8usize {
            let c0 = letter(t[36 + 4 * i]) as u32;
            let c1 = letter(t[37 + 4 * i]) as u32;
            let c2 = letter(t[38 + 4 * i]) as u32;
            corner_lookup[((c0 + 15 * c1) & 63) as usize] = (4 * i) as u8;
            corner_expand[4 * i] = (c0 << 10) + (c1 << 5) + c2;
            corner_lookup[((c1 + 15 * c2) & 63) as usize] = (4 * i + 1) as u8;
            corner_expand[4 * i + 1] = (c1 << 10) + (c2 << 5) + c0;
            corner_lookup[((c2 + 15 * c0) & 63) as usize] = (4 * i + 2) as u8;
            corner_expand[4 * i + 2] = (c2 << 10) + (c0 << 5) + c1;
        }

        ReidTables {
            edge_lookup,
            corner_lookup,
            edge_expand,
            corner_expand,
        }
    }
}

lazy_static! {
    static ref REID_TABLES: ReidTables = ReidTables::build();
}

/// Converts a Reid string into its coordinate tuple.
pub fn reid_to_tuple(reid: &str) -> Result<CubeCoords, Error> {
    if reid.len() != TEMPLATE.len() {
        return Err(Error::WrongReidLength);
    }
    let bytes = reid.as_bytes();
    let tmpl = TEMPLATE.as_bytes();
    for i in 0..tmpl.len() {
        let ok = if tmpl[i] == b' ' {
            bytes[i] == b' '
        } else {
            matches!(bytes[i], b'U' | b'F' | b'R' | b'D' | b'B' | b'L')
        };
        if !ok {
            return Err(Error::ReidElementOutOfRange);
        }
    }

    let tables = &*REID_TABLES;
    let mut perm12 = [0u8; 12];
    let mut edgeo: u32 = 0;
    for i in 0..12usize {
        let c0 = letter(bytes[3 * i]);
        let c1 = letter(bytes[3 * i + 1]);
        let key = ((c0 + 15 * c1) & 63) as usize;
        let cubie = tables.edge_lookup[key];
        if cubie == 255 || tables.edge_expand[cubie as usize] != (c0 << 5) + c1 {
            return Err(Error::IllegalCubieSeen);
        }
        perm12[i] = cubie >> 1;
        edgeo = 2 * edgeo + (cubie & 1) as u32;
    }
    let ep_lex = encode_perm(&perm12).ok_or(Error::MissingEdgeCubie)?;

    let mut perm8 = [0u8; 8];
    let mut cornero: u32 = 0;
    for i in 0..8usize {
        let c0 = letter(bytes[36 + 4 * i]) as u32;
        let c1 = letter(bytes[37 + 4 * i]) as u32;
        let c2 = letter(bytes[38 + 4 * i]) as u32;
        let key = ((c0 + 15 * c1) & 63) as usize;
        let cubie = tables.corner_lookup[key];
        if cubie == 255 || tables.corner_expand[cubie as usize] != (c0 << 10) + (c1 << 5) + c2 {
            return Err(Error::IllegalCubieSeen);
        }
        perm8[i] = cubie >> 2;
        cornero = 3 * cornero + (cubie & 3) as u32;
    }
    let cp_lex = encode_perm(&perm8).ok_or(Error::MissingCornerCubie)?;

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

/// Converts a coordinate tuple into its Reid string. Centers are assumed
/// identity and are not represented (the Reid block only covers edges and
/// corners).
pub fn tuple_to_reid(cc: &CubeCoords) -> String {
    let tables = &*REID_TABLES;
    let mut buf = vec![b' '; TEMPLATE.len()];

    let perm12 = decode_perm(cc.ep_lex, 12);
    let eo = cc.eo_mask;
    for i in 0..12usize {
        let bit = 1 & (eo >> (11 - i));
        let colors = tables.edge_expand[2 * perm12[i] as usize + bit as usize];
        buf[3 * i] = b'@' + (colors >> 5) as u8;
        buf[3 * i + 1] = b'@' + (colors & 31) as u8;
    }

    let perm8 = decode_perm(cc.cp_lex, 8);
    let mut co = cc.co_mask;
    for i in (0..8usize).rev() {
        let colors = tables.corner_expand[4 * perm8[i] as usize + (co % 3) as usize];
        buf[36 + 4 * i] = b'@' + (colors >> 10) as u8;
        buf[37 + 4 * i] = b'@' + ((colors >> 5) & 31) as u8;
        buf[38 + 4 * i] = b'@' + (colors & 31) as u8;
        co /= 3;
    }

    String::from_utf8(buf).expect("Reid buffer is always ASCII")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coords::SOLVED;

    #[test]
    fn solved_reid_round_trips() {
        assert_eq!(tuple_to_reid(&SOLVED), TEMPLATE);
        assert_eq!(reid_to_tuple(TEMPLATE), Ok(SOLVED));
    }

    #[test]
    fn rejects_wrong_length() {
        let short = &TEMPLATE[..TEMPLATE.len() - 1];
        assert_eq!(reid_to_tuple(short), Err(Error::WrongReidLength));
        let long = format!("{TEMPLATE}X");
        assert_eq!(reid_to_tuple(&long), Err(Error::WrongReidLength));
    }

    #[test]
    fn rejects_invalid_letter() {
        let mut bad = TEMPLATE.to_string();
        bad.replace_range(0..1, "X");
        assert_eq!(reid_to_tuple(&bad), Err(Error::ReidElementOutOfRange));
    }

    #[test]
    fn rejects_letter_where_space_expected() {
        let mut bad = TEMPLATE.to_string();
        bad.replace_range(2..3, "U"); // the space after "UF"
        assert_eq!(reid_to_tuple(&bad), Err(Error::ReidElementOutOfRange));
    }

    #[test]
    fn round_trips_a_non_solved_state() {
        let cc = CubeCoords {
            cp_lex: 777,
            co_mask: 55,
            ep_lex: 4_000_000,
            eo_mask: 12,
            po_idx_u: 7,
            po_idx_l: 0,
            mo_support: 0,
            mo_mask: 0,
        };
        let reid = tuple_to_reid(&cc);
        assert_eq!(reid.len(), TEMPLATE.len());
        assert_eq!(reid_to_tuple(&reid), Ok(cc));
    }
}
