use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Three values taken from distinct positions of the input, in position order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combination(pub [i64; 3]);

impl Combination {
    pub fn values(&self) -> [i64; 3] {
        self.0
    }

    pub fn first(&self) -> i64 {
        self.0[0]
    }
}

impl From<[i64; 3]> for Combination {
    fn from(values: [i64; 3]) -> Self {
        Combination(values)
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// A combination together with the positions it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match {
    pub indices: [usize; 3],
    pub combination: Combination,
}

/// Every ordered triple of pairwise distinct positions `(i, j, k)` whose
/// first value is even and whose values sum to `target_sum`.
///
/// Positions are visited with `i` outermost and `k` innermost, so results
/// come out in lexicographic position order. Equal values at different
/// positions are reported separately.
pub fn matches(numbers: &[i64], target_sum: i64) -> Vec<Match> {
    let found: Vec<Match> = (0..numbers.len())
        .permutations(3)
        .filter_map(|indices| {
            let values = [numbers[indices[0]], numbers[indices[1]], numbers[indices[2]]];
            if accepts(values, target_sum) {
                Some(Match {
                    indices: [indices[0], indices[1], indices[2]],
                    combination: Combination(values),
                })
            } else {
                None
            }
        })
        .collect();

    log::debug!(
        "searched {} numbers for target {}: {} matches",
        numbers.len(),
        target_sum,
        found.len()
    );
    found
}

/// Values of [`matches`], in the same order.
pub fn combinations(numbers: &[i64], target_sum: i64) -> Vec<Combination> {
    matches(numbers, target_sum)
        .into_iter()
        .map(|m| m.combination)
        .collect()
}

fn accepts([a, b, c]: [i64; 3], target_sum: i64) -> bool {
    // widened so extreme inputs can't overflow into a false match
    a % 2 == 0 && i128::from(a) + i128::from(b) + i128::from(c) == i128::from(target_sum)
}
