//! Exact sizes of the search space.
//!
//! Shapes with `n` operations are counted by the Catalan number `C(n)`, and canonical labelings
//! of `k` leaves by the Bell number `B(k)`. The number of candidate equations visited for a
//! bound `m` is therefore
//!
//! ```text
//! sum over a + b <= m of  C(a) * C(b) * B(a + b + 2)
//! ```
//!
//! These grow quickly, so everything here is computed with [`BigUint`].

use num_bigint::BigUint;

/// The `n`-th Catalan number.
pub fn catalan(n: usize) -> BigUint {
    let mut c = BigUint::from(1u32);
    for i in 0..n {
        // C(i+1) = C(i) * 2(2i+1) / (i+2), exact at every step
        c = c * BigUint::from(2 * (2 * i + 1)) / BigUint::from(i + 2);
    }
    c
}

/// The first `n + 1` Bell numbers `B(0), ..., B(n)`, via the Bell triangle.
pub fn bell_numbers(n: usize) -> Vec<BigUint> {
    let mut result = vec![BigUint::from(1u32)];
    let mut row = vec![BigUint::from(1u32)];
    for _ in 0..n {
        let mut next = Vec::with_capacity(row.len() + 1);
        next.push(row[row.len() - 1].clone());
        for x in &row {
            let value = &next[next.len() - 1] + x;
            next.push(value);
        }
        result.push(next[0].clone());
        row = next;
    }
    result
}

/// The `n`-th Bell number.
pub fn bell(n: usize) -> BigUint {
    bell_numbers(n).swap_remove(n)
}

/// Number of candidate `(lhs, rhs)` pairs visited when enumerating up to `max_ops` operations.
pub fn search_space(max_ops: usize) -> BigUint {
    let catalans: Vec<BigUint> = (0..=max_ops).map(catalan).collect();
    let bells = bell_numbers(max_ops + 2);

    let mut total = BigUint::ZERO;
    for a in 0..=max_ops {
        for b in 0..=(max_ops - a) {
            total += &catalans[a] * &catalans[b] * &bells[a + b + 2];
        }
    }
    total
}
