//! Tompkins triangle construction.
//!
//! `T_k` uses Pascal's additive rule with a skewed boundary:
//!
//!   T_k(0,0) = c                      where c = k - 2
//!   T_k(n,0) = 1, T_k(n,n) = c        for n >= 1
//!   T_k(n,r) = T_k(n-1,r-1) + T_k(n-1,r)

use std::fmt;

use crate::error::{TompkinsError, TompkinsResult};

/// A fully built triangle. Row `n` holds `n + 1` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
    k: u64,
    c: u128,
    rows: Vec<Vec<u128>>,
}

/// Build `T_k` up to row `n_max` (inclusive).
///
/// Parameters arrive signed so that out-of-range CLI input is reported as
/// `InvalidParameter` instead of a parse failure.
pub fn build_triangle(k: i64, n_max: i64) -> TompkinsResult<Triangle> {
    if k < 3 {
        return Err(TompkinsError::invalid(format!(
            "polygon side count k must be >= 3, got {}",
            k
        )));
    }
    if n_max < 0 {
        return Err(TompkinsError::invalid(format!(
            "max row index n must be >= 0, got {}",
            n_max
        )));
    }

    let k = k as u64;
    let c = u128::from(k - 2);
    // Unsized on purpose: rows past ~130 overflow u128, so n_max never
    // drives an allocation.
    let mut rows: Vec<Vec<u128>> = vec![vec![c]];

    for n in 1..=n_max as usize {
        let next = next_row(&rows[n - 1], c)
            .ok_or_else(|| TompkinsError::invalid(format!("row {} overflows u128", n)))?;
        rows.push(next);
    }

    log::debug!("built T_{} with {} rows (c={})", k, rows.len(), c);
    Ok(Triangle { k, c, rows })
}

/// Fold the previous row into the next one: `1`, pairwise sums, `c`.
fn next_row(prev: &[u128], c: u128) -> Option<Vec<u128>> {
    let mut row = Vec::with_capacity(prev.len() + 1);
    row.push(1);
    for pair in prev.windows(2) {
        row.push(pair[0].checked_add(pair[1])?);
    }
    row.push(c);
    Some(row)
}

impl Triangle {
    pub fn k(&self) -> u64 {
        self.k
    }

    /// The apex and right-edge constant `k - 2`.
    pub fn c(&self) -> u128 {
        self.c
    }

    /// Index of the last row.
    pub fn n_max(&self) -> usize {
        self.rows.len() - 1
    }

    pub fn rows(&self) -> &[Vec<u128>] {
        &self.rows
    }

    pub fn row(&self, n: usize) -> Option<&[u128]> {
        self.rows.get(n).map(|r| r.as_slice())
    }

    pub fn get(&self, n: usize, r: usize) -> Option<u128> {
        self.rows.get(n)?.get(r).copied()
    }

    /// Iterate over every cell as `(n, r, value)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u128)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(n, row)| row.iter().enumerate().map(move |(r, &v)| (n, r, v)))
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, row) in self.rows.iter().enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
