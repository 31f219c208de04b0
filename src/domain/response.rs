use serde::Deserialize;

use crate::domain::value::{ReviewStatus, SignId, TemplateId, TemplateKind};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SignRecord {
    pub id: SignId,
    pub status: ReviewStatus,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SignStatusRecord {
    pub id: SignId,
    /// Reviewer reply, usually set for rejected signs.
    pub reply: String,
    pub status: ReviewStatus,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct TemplateRecord {
    pub id: TemplateId,
    pub status: ReviewStatus,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: TemplateKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct TemplateStatusRecord {
    pub id: TemplateId,
    pub reply: String,
    pub status: ReviewStatus,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: TemplateKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddSignResponse {
    pub result: i32,
    #[serde(default)]
    pub errmsg: String,
    #[serde(default)]
    pub data: SignRecord,
}

/// Response shared by `del_sign` and `del_template`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteResponse {
    pub result: i32,
    #[serde(default)]
    pub errmsg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetSignsResponse {
    pub result: i32,
    #[serde(default)]
    pub errmsg: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub data: Vec<SignStatusRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddTemplateResponse {
    pub result: i32,
    #[serde(default)]
    pub errmsg: String,
    #[serde(default)]
    pub data: TemplateRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetTemplatesResponse {
    pub result: i32,
    #[serde(default)]
    pub errmsg: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub data: Vec<TemplateStatusRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SendSmsResponse {
    pub result: i32,
    #[serde(default)]
    pub errmsg: String,
    /// Number of billed message parts; `0` means nothing was delivered.
    #[serde(default)]
    pub fee: u32,
    #[serde(default)]
    pub sid: String,
}
