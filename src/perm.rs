//! Bidirectional map between a permutation of `0..n` and its zero-based
//! lexicographic ordinal (Lehmer code). Shared by every coordinate that is
//! stored as a permutation ordinal (corner and edge permutation).

/// Encodes `a`, a permutation of `0..a.len()`, as its Lehmer-code ordinal.
///
/// Returns `None` if `a` is not a permutation (a value repeats or is out of
/// range), detected by ORing a bitmask of seen values and checking it equals
/// `2^n - 1`.
pub fn encode_perm(a: &[u8]) -> Option<u32> {
    let n = a.len();
    let mut seen = 0u32;
    for &v in a {
        if v as usize >= n {
            return None;
        }
        seen |= 1 << v;
    }
    if seen != (1u32 << n) - 1 {
        return None;
    }

    let mut factorial = 1u32;
    let mut rank = 0u32;
    for i in (0..n).rev() {
        let smaller = a[i + 1..].iter().filter(|&&x| x < a[i]).count() as u32;
        rank += smaller * factorial;
        factorial *= (n - i) as u32;
    }
    Some(rank)
}

/// Decodes `ordinal`, a Lehmer-code rank in `0..n!`, back into the
/// permutation of `0..n` it names.
///
/// Does not validate `ordinal < n!`; callers that need the range check do it
/// themselves (the wire codec is the range gate per the spec).
pub fn decode_perm(mut ordinal: u32, n: usize) -> Vec<u8> {
    let mut a = vec![0u8; n];
    if n == 0 {
        return a;
    }
    a[n - 1] = 0;
    for i in (0..n - 1).rev() {
        let radix = (n - i) as u32;
        let digit = ordinal % radix;
        ordinal /= radix;
        a[i] = digit as u8;
        for j in i + 1..n {
            if a[j] >= a[i] {
                a[j] += 1;
            }
        }
    }
    a
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn solved_is_zero() {
        assert_eq!(encode_perm(&[0, 1, 2, 3, 4, 5, 6, 7]), Some(0));
        assert_eq!(decode_perm(0, 8), vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn last_ordinal_is_reverse() {
        let rev: Vec<u8> = (0..8).rev().collect();
        assert_eq!(encode_perm(&rev), Some(40319));
        assert_eq!(decode_perm(40319, 8), rev);
    }

    #[test]
    fn single_transposition() {
        // swap the last two elements of the identity: smallest nonzero rank.
        assert_eq!(encode_perm(&[0, 1, 2, 3, 4, 5, 7, 6]), Some(1));
        assert_eq!(decode_perm(1, 8), vec![0, 1, 2, 3, 4, 5, 7, 6]);
    }

    #[test]
    fn rejects_duplicate_or_out_of_range() {
        assert_eq!(encode_perm(&[0, 0, 2, 3, 4, 5, 6, 7]), None);
        assert_eq!(encode_perm(&[0, 1, 2, 3, 4, 5, 6, 8]), None);
    }

    #[test]
    fn round_trips_every_permutation_of_small_n() {
        // n=4 is small enough to brute force exhaustively.
        fn permutations(n: usize) -> Vec<Vec<u8>> {
            if n == 0 {
                return vec![vec![]];
            }
            let mut out = Vec::new();
            for p in permutations(n - 1) {
                for i in 0..n {
                    let mut q = p.clone();
                    q.insert(i, (n - 1) as u8);
                    out.push(q);
                }
            }
            out
        }
        for p in permutations(4) {
            let rank = encode_perm(&p).unwrap();
            assert_eq!(decode_perm(rank, 4), p);
        }
    }

    #[test]
    fn encode_decode_round_trip_on_ranks() {
        for k in 0..479_001_600u32 {
            if k % 50_000_000 != 0 {
                continue;
            }
            let a = decode_perm(k, 12);
            assert_eq!(encode_perm(&a), Some(k));
        }
    }
}
