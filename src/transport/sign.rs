use serde::Serialize;

use super::auth::{Authenticated, Envelope};
use crate::domain::{AddSign, DeleteSigns, GetSigns, SignId};

pub const ADD_SIGN_PATH: &str = "add_sign";
pub const DELETE_SIGN_PATH: &str = "del_sign";
pub const GET_SIGN_PATH: &str = "get_sign";

#[derive(Debug, Serialize)]
pub struct AddSignJsonRequest<'a> {
    text: &'a str,
    pic: &'a str,
    remark: &'a str,
    #[serde(flatten)]
    envelope: Envelope,
}

/// Body shared by `del_sign` and `get_sign`.
#[derive(Debug, Serialize)]
pub struct SignIdsJsonRequest<'a> {
    sign_id: &'a [SignId],
    #[serde(flatten)]
    envelope: Envelope,
}

impl Authenticated for AddSignJsonRequest<'_> {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

impl Authenticated for SignIdsJsonRequest<'_> {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

pub fn encode_add_sign(request: &AddSign, envelope: Envelope) -> AddSignJsonRequest<'_> {
    AddSignJsonRequest {
        text: request.text.as_str(),
        pic: &request.pic,
        remark: &request.remark,
        envelope,
    }
}

pub fn encode_delete_signs(request: &DeleteSigns, envelope: Envelope) -> SignIdsJsonRequest<'_> {
    SignIdsJsonRequest {
        sign_id: request.sign_ids(),
        envelope,
    }
}

pub fn encode_get_signs(request: &GetSigns, envelope: Envelope) -> SignIdsJsonRequest<'_> {
    SignIdsJsonRequest {
        sign_id: request.sign_ids(),
        envelope,
    }
}
