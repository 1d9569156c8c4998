//! Server startup errors.

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The listener could not bind.
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },

    /// The server loop exited with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
