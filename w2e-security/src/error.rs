/// Security-related errors for token signing and verification.
#[derive(Debug)]
pub enum SecurityError {
    /// `JWT_SECRET` is not configured. Raised when a token operation is
    /// attempted, never at settings construction.
    MissingSecret,

    /// The token is invalid (malformed, bad signature, claim mismatch).
    InvalidToken(String),

    /// The token has expired.
    TokenExpired,

    /// Signing failed.
    SigningFailed(String),
}

impl std::fmt::Display for SecurityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecurityError::MissingSecret => {
                write!(f, "Token signing requires JWT_SECRET to be set")
            }
            SecurityError::InvalidToken(msg) => write!(f, "Invalid token: {msg}"),
            SecurityError::TokenExpired => write!(f, "Token expired"),
            SecurityError::SigningFailed(msg) => write!(f, "Token signing failed: {msg}"),
        }
    }
}

impl std::error::Error for SecurityError {}
