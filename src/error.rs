use thiserror::Error;

/// First field that fails the waitlist form constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your full name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter your phone number.")]
    MissingPhone,
    #[error("Please enter your age.")]
    MissingAge,
    #[error("Age must be a whole number between {min} and {max}.")]
    AgeOutOfRange { min: u8, max: u8 },
    #[error("Unknown membership plan: {0}")]
    UnknownPlan(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// No response came back (offline, DNS, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}
