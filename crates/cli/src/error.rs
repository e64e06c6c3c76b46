//! Result and Error types for phantoms-cli

/// Type alias for `Result<T, cli::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `phantom3d` binary
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Anything from generating or writing the phantom
    #[error(transparent)]
    PhantomError(#[from] phantoms_phantom::Error),

    /// Logger was already initialised
    #[error("failed to initialise logging")]
    LoggerError(#[from] log::SetLoggerError),
}
