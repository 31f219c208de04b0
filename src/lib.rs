//! Typed Rust client for the Tencent Cloud SMS v5 HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! that signs requests and owns the wire format, and a small client layer that
//! dispatches requests and estimates message length.
//!
//! ```rust,no_run
//! use qsms::{Credentials, MobileNumber, QsmsClient, SendSmsSingle, SignText, TemplateId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), qsms::QsmsError> {
//!     let client = QsmsClient::new(Credentials::new("1400000000", "...")?);
//!     let sign = SignText::new("Acme")?;
//!     let params = vec!["123456".to_owned()];
//!
//!     let length = client.text_num(&sign, TemplateId::new(42), &params).await?;
//!     println!("message length: {length}");
//!
//!     let request = SendSmsSingle::new(
//!         MobileNumber::new("13800138000")?,
//!         sign,
//!         TemplateId::new(42),
//!         params,
//!     );
//!     let response = client.send_sms_single(request).await?;
//!     response.check()?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod cache;
pub mod client;
pub mod domain;
mod transport;

pub use transport::AuthError;

pub use cache::{InMemoryTemplateCache, TemplateCache, TemplateCacheKey};
pub use client::{
    Credentials, ProviderReply, QsmsClient, QsmsClientBuilder, QsmsError, TemplateFetchFailure,
};
pub use domain::{
    AddSign, AddSignResponse, AddTemplate, AddTemplateResponse, AppId, AppKey, DeleteResponse,
    DeleteSigns, DeleteTemplates, GetSigns, GetSignsResponse, GetTemplates, GetTemplatesResponse,
    MobileNumber, NATION_CODE, ReviewStatus, SendSmsResponse, SendSmsSingle, SignId, SignText,
    TemplateId, TemplateKind, ValidationError,
};
