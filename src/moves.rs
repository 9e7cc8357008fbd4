//! The move engine: 18 precomputed facelet-permutations (6 faces x 3 turn
//! amounts) and composition/application on top of them.

use crate::cubie::{B_MOVE, D_MOVE, F_MOVE, L_MOVE, R_MOVE, U_MOVE};
use crate::error::Error;
use crate::facelet::{tuple_to_facelet, FaceletPerm};
use std::fmt;
use std::str::FromStr;

/// One quarter, half, or reverse-quarter turn of a single face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    U,
    U2,
    Ui,
    D,
    D2,
    Di,
    F,
    F2,
    Fi,
    B,
    B2,
    Bi,
    R,
    R2,
    Ri,
    L,
    L2,
    Li,
}

/// Every move, in table order; indexing into the base-move table is
/// `ALL_MOVES.iter().position(...)`, or equivalently `move as usize`.
pub const ALL_MOVES: [Move; 18] = [
    Move::U,
    Move::U2,
    Move::Ui,
    Move::D,
    Move::D2,
    Move::Di,
    Move::F,
    Move::F2,
    Move::Fi,
    Move::B,
    Move::B2,
    Move::Bi,
    Move::R,
    Move::R2,
    Move::Ri,
    Move::L,
    Move::L2,
    Move::Li,
];

impl Move {
    fn index(self) -> usize {
        ALL_MOVES.iter().position(|&m| m == self).unwrap()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Move::U => "U",
            Move::U2 => "U2",
            Move::Ui => "U'",
            Move::D => "D",
            Move::D2 => "D2",
            Move::Di => "D'",
            Move::F => "F",
            Move::F2 => "F2",
            Move::Fi => "F'",
            Move::B => "B",
            Move::B2 => "B2",
            Move::Bi => "B'",
            Move::R => "R",
            Move::R2 => "R2",
            Move::Ri => "R'",
            Move::L => "L",
            Move::L2 => "L2",
            Move::Li => "L'",
        };
        f.write_str(s)
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Ok(match s {
            "U" => Move::U,
            "U2" => Move::U2,
            "U'" => Move::Ui,
            "D" => Move::D,
            "D2" => Move::D2,
            "D'" => Move::Di,
            "F" => Move::F,
            "F2" => Move::F2,
            "F'" => Move::Fi,
            "B" => Move::B,
            "B2" => Move::B2,
            "B'" => Move::Bi,
            "R" => Move::R,
            "R2" => Move::R2,
            "R'" => Move::Ri,
            "L" => Move::L,
            "L2" => Move::L2,
            "L'" => Move::Li,
            _ => return Err(Error::BadMoveFormat),
        })
    }
}

/// Composes two facelet-permutations: `compose(a, b)[i] = b[a[i]]`, i.e. the
/// result of applying `a` and then `b`.
pub fn compose(a: &FaceletPerm, b: &FaceletPerm) -> FaceletPerm {
    let mut out = [0u8; 54];
    for i in 0..54usize {
        out[i] = b.0[a.0[i] as usize];
    }
    FaceletPerm(out)
}

struct MoveTable([FaceletPerm; 18]);

impl MoveTable {
    fn build() -> Self {
        let bases = [U_MOVE, D_MOVE, F_MOVE, B_MOVE, R_MOVE, L_MOVE];
        let mut table = [FaceletPerm([0; 54]); 18];
        for (face, base) in bases.iter().enumerate() {
            let quarter = tuple_to_facelet(&base.to_coords());
            let half = compose(&quarter, &quarter);
            let three_quarter = compose(&half, &quarter);
            table[3 * face] = quarter;
            table[3 * face + 1] = half;
            table[3 * face + 2] = three_quarter;
        }
        MoveTable(table)
    }
}

lazy_static! {
    static ref MOVE_TABLE: MoveTable = MoveTable::build();
}

/// The facelet-permutation effect of applying a single move to a solved
/// cube.
pub fn base_permutation(m: Move) -> FaceletPerm {
    MOVE_TABLE.0[m.index()]
}

/// Applies one move to a facelet-permutation state.
pub fn apply_move(state: &FaceletPerm, m: Move) -> FaceletPerm {
    compose(state, &base_permutation(m))
}

/// Applies a sequence of moves in order.
pub fn apply_moves(state: &FaceletPerm, moves: &[Move]) -> FaceletPerm {
    moves.iter().fold(*state, |acc, &m| apply_move(&acc, m))
}

/// Parses a whitespace-separated move string, e.g. `"R U R' U'"`.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, Error> {
    s.split_whitespace().map(Move::from_str).collect()
}
