/// Errors surfaced by the debug draw overlay.
///
/// Drawing while the overlay is hidden is not an error; those calls return
/// `Ok(())` without doing any work.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    /// The caller passed an argument the draw call cannot honor.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The host renderer could not allocate a mesh instance or material.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),
    /// The overlay was set up in a way it cannot run with.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let e = DrawError::InvalidArgument("ray direction is zero".into());
        assert_eq!(e.to_string(), "invalid argument: ray direction is zero");

        let e = DrawError::PreconditionViolation("mounted at /root/Other".into());
        assert!(e.to_string().contains("/root/Other"));
    }
}
