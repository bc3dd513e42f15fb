/// History store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read history file {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("failed to write history file {path}: {message}")]
    WriteFailed { path: String, message: String },

    #[error("history file {path} is corrupt: {message}")]
    Corrupt { path: String, message: String },

    #[error("history store lock poisoned: {message}")]
    LockPoisoned { message: String },
}
