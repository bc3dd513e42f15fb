/// Candidate pool loading errors.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("failed to read roster {path}: {message}")]
    RosterUnreadable { path: String, message: String },

    #[error("roster {path} contains no candidates")]
    EmptyRoster { path: String },
}
