use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the kinetics core.
///
/// Out-of-domain parameter values are clamped rather than reported, so the variants here
/// cover only inputs that have no sensible clamp target and genuine contract violations.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter (e.g. a NaN slider value).
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Parameter name that does not map to any `Param`.
    #[error("unknown parameter: {0:?}")]
    UnknownParameter(String),

    /// Non-finite state detected after a tick. The ensemble must be reseeded or dropped.
    #[error("non-finite {what} at particle {index}")]
    NumericFault {
        /// Which quantity went non-finite ("position", "velocity", "pressure").
        what: &'static str,
        /// Offending particle index (0 for ensemble-wide quantities).
        index: usize,
    },

    /// A controller tried to send after its simulation was dropped.
    #[error("simulation has been torn down")]
    Disconnected,
}
