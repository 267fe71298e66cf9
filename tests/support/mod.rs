#![allow(dead_code)]

/// (declared count, cards, expected maximum)
pub const CASES: &[(usize, &[i64], usize)] = &[
    (0, &[], 0),
    (3, &[0, 0, 0], 3),
    (2, &[-1, -2], 0),
    (4, &[2, -1, -1, -1], 3),
    (5, &[4, -4, -1, -2, 9], 4),
    (6, &[1, -1, 1, -1, 1, -1], 6),
    (6, &[3, -4, 2, -1, 2, -1], 5),
    (5, &[5, -6, 4, -3, 1], 4),
];

/// Exhaustive check over all 2^n take/skip masks; independent of every
/// solver in the crate.
pub fn brute_force(cards: &[i64]) -> usize {
    assert!(cards.len() <= 16, "brute force is for tiny inputs");
    let mut best = 0;
    for mask in 0u32..(1 << cards.len()) {
        let mut running_sum = 0i64;
        let mut ok = true;
        for (i, &card) in cards.iter().enumerate() {
            if mask & (1 << i) != 0 {
                running_sum += card;
                if running_sum < 0 {
                    ok = false;
                    break;
                }
            }
        }
        if ok {
            best = best.max(mask.count_ones() as usize);
        }
    }
    best
}
