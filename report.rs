use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::combinations::Combination;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub target_sum: i64,
    pub count: usize,
    pub combinations: Vec<Combination>,
}

impl Solution {
    pub fn new(target_sum: i64, combinations: Vec<Combination>) -> Self {
        Solution {
            target_sum,
            count: combinations.len(),
            combinations,
        }
    }
}

/// Writes the count line followed by one `[a, b, c]` line per combination.
pub fn write_text<W: Write>(out: &mut W, combinations: &[Combination]) -> io::Result<()> {
    writeln!(out, "Found {} combinations:", combinations.len())?;
    for combination in combinations {
        writeln!(out, "{}", combination)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(
    out: &mut W,
    target_sum: i64,
    combinations: &[Combination],
) -> io::Result<()> {
    let solution = Solution::new(target_sum, combinations.to_vec());
    serde_json::to_writer_pretty(&mut *out, &solution)?;
    writeln!(out)
}
