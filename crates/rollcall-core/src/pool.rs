//! Candidate pool loading: roster file or synthetic numbered pool.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::PoolConfig;
use crate::errors::PoolError;

/// Ordered list of distinct candidate identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidatePool {
    names: Vec<String>,
}

impl CandidatePool {
    /// Build a pool from names: trimmed, blanks dropped, first occurrence wins.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let names = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .filter(|n| seen.insert(n.clone()))
            .collect();
        Self { names }
    }

    /// Numbered pool `"1"..="size"`.
    pub fn synthetic(size: usize) -> Self {
        Self {
            names: (1..=size).map(|i| i.to_string()).collect(),
        }
    }

    /// Parse roster text: one candidate per line, `#` starts a comment line.
    pub fn parse_roster(text: &str) -> Self {
        Self::from_names(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// Read a roster file. Fails when unreadable or when no candidate remains.
    pub fn from_roster_file(path: &Path) -> Result<Self, PoolError> {
        let text = std::fs::read_to_string(path).map_err(|e| PoolError::RosterUnreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let pool = Self::parse_roster(&text);
        if pool.is_empty() {
            return Err(PoolError::EmptyRoster {
                path: path.display().to_string(),
            });
        }
        Ok(pool)
    }

    /// Resolve the pool for a config. Never fails: any roster problem falls
    /// back to the synthetic numbered pool.
    pub fn load(config: &PoolConfig) -> Self {
        if let Some(path) = &config.roster_path {
            match Self::from_roster_file(Path::new(path)) {
                Ok(pool) => {
                    debug!(roster = %path, size = pool.len(), "roster loaded");
                    return pool;
                }
                Err(e) => {
                    warn!(error = %e, fallback_size = config.fallback_size, "using numbered pool");
                }
            }
        }
        Self::synthetic(config.fallback_size)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.names.iter().any(|n| n == candidate)
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_pool_is_one_based() {
        let pool = CandidatePool::synthetic(60);
        assert_eq!(pool.len(), 60);
        assert_eq!(pool.names()[0], "1");
        assert_eq!(pool.names()[59], "60");
    }

    #[test]
    fn roster_skips_comments_blanks_and_duplicates() {
        let pool = CandidatePool::parse_roster("# class 3A\nAlice\n\n  Bob  \nAlice\nCarol\n");
        assert_eq!(pool.names(), ["Alice", "Bob", "Carol"]);
    }
}
