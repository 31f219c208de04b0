use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidAppId { input: String },
    InvalidMobileNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidAppId { input } => write!(f, "invalid app id: {input}"),
            Self::InvalidMobileNumber { input } => write!(f, "invalid mobile number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}
