use crate::domain::validation::ValidationError;
use crate::domain::value::{MobileNumber, SignId, SignText, TemplateId, TemplateKind};

/// Country code attached to every outgoing message (`tel.nationcode`).
pub const NATION_CODE: &str = "86";

#[derive(Debug, Clone)]
/// Register a new SMS sign for review.
pub struct AddSign {
    pub text: SignText,
    /// Base64-encoded proof image; may be empty.
    pub pic: String,
    pub remark: String,
}

impl AddSign {
    pub fn new(text: SignText) -> Self {
        Self {
            text,
            pic: String::new(),
            remark: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DeleteSigns {
    sign_ids: Vec<SignId>,
}

impl DeleteSigns {
    pub fn new(sign_ids: Vec<SignId>) -> Result<Self, ValidationError> {
        non_empty(&sign_ids, SignId::FIELD)?;
        Ok(Self { sign_ids })
    }

    pub fn sign_ids(&self) -> &[SignId] {
        &self.sign_ids
    }
}

#[derive(Debug, Clone)]
pub struct GetSigns {
    sign_ids: Vec<SignId>,
}

impl GetSigns {
    pub fn new(sign_ids: Vec<SignId>) -> Result<Self, ValidationError> {
        non_empty(&sign_ids, SignId::FIELD)?;
        Ok(Self { sign_ids })
    }

    pub fn one(sign_id: SignId) -> Self {
        Self {
            sign_ids: vec![sign_id],
        }
    }

    pub fn sign_ids(&self) -> &[SignId] {
        &self.sign_ids
    }
}

#[derive(Debug, Clone)]
/// Register a new message template for review.
///
/// Placeholders in `text` use the `{1}`, `{2}`, ... syntax.
pub struct AddTemplate {
    text: String,
    pub title: String,
    pub remark: String,
    pub kind: TemplateKind,
}

impl AddTemplate {
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::Empty { field: "text" });
        }
        Ok(Self {
            text,
            title: String::new(),
            remark: String::new(),
            kind: TemplateKind::default(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone)]
pub struct DeleteTemplates {
    template_ids: Vec<TemplateId>,
}

impl DeleteTemplates {
    pub fn new(template_ids: Vec<TemplateId>) -> Result<Self, ValidationError> {
        non_empty(&template_ids, TemplateId::FIELD)?;
        Ok(Self { template_ids })
    }

    pub fn template_ids(&self) -> &[TemplateId] {
        &self.template_ids
    }
}

#[derive(Debug, Clone)]
pub struct GetTemplates {
    template_ids: Vec<TemplateId>,
}

impl GetTemplates {
    pub fn new(template_ids: Vec<TemplateId>) -> Result<Self, ValidationError> {
        non_empty(&template_ids, TemplateId::FIELD)?;
        Ok(Self { template_ids })
    }

    pub fn one(template_id: TemplateId) -> Self {
        Self {
            template_ids: vec![template_id],
        }
    }

    pub fn template_ids(&self) -> &[TemplateId] {
        &self.template_ids
    }
}

#[derive(Debug, Clone)]
/// Send one templated message to one recipient.
pub struct SendSmsSingle {
    mobile: MobileNumber,
    sign: SignText,
    template_id: TemplateId,
    params: Vec<String>,
}

impl SendSmsSingle {
    pub fn new(
        mobile: MobileNumber,
        sign: SignText,
        template_id: TemplateId,
        params: Vec<String>,
    ) -> Self {
        Self {
            mobile,
            sign,
            template_id,
            params,
        }
    }

    pub fn mobile(&self) -> &MobileNumber {
        &self.mobile
    }

    pub fn sign(&self) -> &SignText {
        &self.sign
    }

    pub fn template_id(&self) -> TemplateId {
        self.template_id
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }
}

fn non_empty<T>(ids: &[T], field: &'static str) -> Result<(), ValidationError> {
    if ids.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}
