//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod template_text;
mod validation;
mod value;

pub use request::{
    AddSign, AddTemplate, DeleteSigns, DeleteTemplates, GetSigns, GetTemplates, NATION_CODE,
    SendSmsSingle,
};
pub use response::{
    AddSignResponse, AddTemplateResponse, DeleteResponse, GetSignsResponse,
    GetTemplatesResponse, SendSmsResponse, SignRecord, SignStatusRecord, TemplateRecord,
    TemplateStatusRecord,
};
pub use template_text::{message_length, strip_placeholders};
pub use validation::ValidationError;
pub use value::{
    AppId, AppKey, MobileNumber, ReviewStatus, SignId, SignText, TemplateId, TemplateKind,
};
