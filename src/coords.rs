use std::fmt;

/// In-memory record of the eight coordinate fields that together describe a
/// cube state. See the field table in the crate's data model notes for
/// ranges; every tuple this crate *produces* satisfies `po_idx_u == 7`,
/// `po_idx_l == 0`, `mo_support == 0`, `mo_mask == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeCoords {
    pub cp_lex: u32,
    pub co_mask: u32,
    pub ep_lex: u32,
    pub eo_mask: u32,
    pub po_idx_u: u32,
    pub po_idx_l: u32,
    pub mo_support: u32,
    pub mo_mask: u32,
}

/// The coordinate tuple of the solved cube.
pub const SOLVED: CubeCoords = CubeCoords {
    cp_lex: 0,
    co_mask: 0,
    ep_lex: 0,
    eo_mask: 0,
    po_idx_u: 7,
    po_idx_l: 0,
    mo_support: 0,
    mo_mask: 0,
};

impl Default for CubeCoords {
    fn default() -> Self {
        SOLVED
    }
}

impl fmt::Display for CubeCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.cp_lex, self.co_mask, self.ep_lex, self.eo_mask
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn solved_has_sentinel_fields() {
        assert_eq!(SOLVED.po_idx_u, 7);
        assert_eq!(SOLVED.po_idx_l, 0);
        assert_eq!(SOLVED.mo_support, 0);
        assert_eq!(SOLVED.mo_mask, 0);
        assert_eq!(CubeCoords::default(), SOLVED);
    }

    #[test]
    fn display_prints_four_main_fields() {
        assert_eq!(SOLVED.to_string(), "0 0 0 0");
    }
}
