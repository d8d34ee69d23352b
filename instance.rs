use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Numbers to search and the sum the triples must reach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub numbers: Vec<i64>,
    pub target_sum: i64,
}

impl Instance {
    pub fn new(numbers: Vec<i64>, target_sum: i64) -> Self {
        Instance {
            numbers,
            target_sum,
        }
    }

    /// The built-in puzzle: 1 through 7, target 12.
    pub fn sample() -> Self {
        Instance::new(vec![1, 2, 3, 4, 5, 6, 7], 12)
    }

    /// Reads a JSON document of the form `{"numbers": [...], "target_sum": n}`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let instance: Instance = serde_json::from_str(&text).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "loaded {} numbers from {}",
            instance.numbers.len(),
            path.display()
        );
        Ok(instance)
    }

    /// Replaces whichever fields were given explicitly.
    pub fn with_overrides(mut self, numbers: Option<Vec<i64>>, target_sum: Option<i64>) -> Self {
        if let Some(numbers) = numbers {
            self.numbers = numbers;
        }
        if let Some(target_sum) = target_sum {
            self.target_sum = target_sum;
        }
        self
    }
}

impl Default for Instance {
    fn default() -> Self {
        Instance::sample()
    }
}
