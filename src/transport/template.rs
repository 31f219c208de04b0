use serde::Serialize;

use super::auth::{Authenticated, Envelope};
use crate::domain::{AddTemplate, DeleteTemplates, GetTemplates, TemplateId};

pub const ADD_TEMPLATE_PATH: &str = "add_template";
pub const DELETE_TEMPLATE_PATH: &str = "del_template";
pub const GET_TEMPLATE_PATH: &str = "get_template";

#[derive(Debug, Serialize)]
pub struct AddTemplateJsonRequest<'a> {
    remark: &'a str,
    text: &'a str,
    title: &'a str,
    #[serde(rename = "type")]
    kind: i32,
    #[serde(flatten)]
    envelope: Envelope,
}

/// Body shared by `del_template` and `get_template`.
#[derive(Debug, Serialize)]
pub struct TemplateIdsJsonRequest<'a> {
    tpl_id: &'a [TemplateId],
    #[serde(flatten)]
    envelope: Envelope,
}

impl Authenticated for AddTemplateJsonRequest<'_> {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

impl Authenticated for TemplateIdsJsonRequest<'_> {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

pub fn encode_add_template(
    request: &AddTemplate,
    envelope: Envelope,
) -> AddTemplateJsonRequest<'_> {
    AddTemplateJsonRequest {
        remark: &request.remark,
        text: request.text(),
        title: &request.title,
        kind: request.kind.code(),
        envelope,
    }
}

pub fn encode_delete_templates(
    request: &DeleteTemplates,
    envelope: Envelope,
) -> TemplateIdsJsonRequest<'_> {
    TemplateIdsJsonRequest {
        tpl_id: request.template_ids(),
        envelope,
    }
}

pub fn encode_get_templates(
    request: &GetTemplates,
    envelope: Envelope,
) -> TemplateIdsJsonRequest<'_> {
    TemplateIdsJsonRequest {
        tpl_id: request.template_ids(),
        envelope,
    }
}
