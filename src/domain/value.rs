use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Tencent Cloud SMS application id (`sdkappid`).
///
/// Invariant: non-empty after trimming and made of ASCII digits only, so it
/// goes into the endpoint query string unchanged.
pub struct AppId(String);

impl AppId {
    /// Query parameter name used by the provider (`sdkappid`).
    pub const FIELD: &'static str = "sdkappid";

    /// Create a validated [`AppId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidAppId { input: value });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated application id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, PartialEq, Eq)]
/// Application secret key (`appkey`).
///
/// Only ever used as input to the request signature; it is never sent on the
/// wire and its `Debug` output is redacted.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct AppKey(String);

impl AppKey {
    /// Name of the key inside the signed string (`appkey`).
    pub const FIELD: &'static str = "appkey";

    /// Create a validated [`AppKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AppKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppKey(***)")
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
/// Provider-assigned id of an SMS sign (`sign_id`).
pub struct SignId(u64);

impl SignId {
    /// JSON field name used by the provider (`sign_id`).
    pub const FIELD: &'static str = "sign_id";

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
/// Provider-assigned id of a message template (`tpl_id`).
pub struct TemplateId(u64);

impl TemplateId {
    /// JSON field name used by the provider (`tpl_id`).
    pub const FIELD: &'static str = "tpl_id";

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Recipient mobile number without the country code (`tel.mobile`).
///
/// Invariant: non-empty after trimming and made of ASCII digits only. The
/// country code travels separately as `tel.nationcode`.
pub struct MobileNumber(String);

impl MobileNumber {
    /// JSON field name used by the provider (`mobile`).
    pub const FIELD: &'static str = "mobile";

    /// Create a validated [`MobileNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidMobileNumber { input: value });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS sign text, the sender label the provider shows in brackets.
///
/// Invariant: non-empty after trimming. The original value is preserved.
pub struct SignText(String);

impl SignText {
    /// JSON field name used by the provider when sending (`sign`).
    pub const FIELD: &'static str = "sign";

    /// Create validated sign text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "i32")]
/// Review state of a sign or template (`status`).
///
/// Unknown codes are preserved in [`ReviewStatus::Other`].
pub enum ReviewStatus {
    #[default]
    Approved,
    Pending,
    Rejected,
    Other(i32),
}

impl ReviewStatus {
    pub fn code(self) -> i32 {
        match self {
            Self::Approved => 0,
            Self::Pending => 1,
            Self::Rejected => 2,
            Self::Other(code) => code,
        }
    }
}

impl From<i32> for ReviewStatus {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Approved,
            1 => Self::Pending,
            2 => Self::Rejected,
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "i32")]
/// Template category (`type`): ordinary notification or marketing.
pub enum TemplateKind {
    #[default]
    Ordinary,
    Marketing,
    Other(i32),
}

impl TemplateKind {
    pub fn code(self) -> i32 {
        match self {
            Self::Ordinary => 0,
            Self::Marketing => 1,
            Self::Other(code) => code,
        }
    }
}

impl From<i32> for TemplateKind {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Ordinary,
            1 => Self::Marketing,
            other => Self::Other(other),
        }
    }
}
