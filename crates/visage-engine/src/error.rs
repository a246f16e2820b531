use std::fmt;

/// Error returned by [`crate::composer::compose`] and the fingerprint step.
///
/// Failures are precondition checks only; once a surface is allocated,
/// generation cannot fail (every derived count is clamped before use).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// The identity record is unusable (e.g. blank full name).
    InvalidInput(String),
    /// The requested image side length is below the supported minimum.
    SizeTooSmall { requested: u32, min: u32 },
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::InvalidInput(msg) => write!(f, "invalid identity record: {msg}"),
            ComposeError::SizeTooSmall { requested, min } => {
                write!(f, "image size {requested} is below the minimum of {min}")
            }
        }
    }
}

impl std::error::Error for ComposeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = ComposeError::InvalidInput("full name is blank".into());
        assert_eq!(e.to_string(), "invalid identity record: full name is blank");

        let e = ComposeError::SizeTooSmall { requested: 99, min: 100 };
        assert_eq!(e.to_string(), "image size 99 is below the minimum of 100");
    }
}
