//! Transport layer: request authentication and wire-format details.

mod auth;
mod send_sms;
mod sign;
mod template;

pub use auth::{AuthError, Authenticated, Envelope};
pub use send_sms::{SEND_SMS_PATH, encode_send_sms_single};
pub use sign::{
    ADD_SIGN_PATH, DELETE_SIGN_PATH, GET_SIGN_PATH, encode_add_sign, encode_delete_signs,
    encode_get_signs,
};
pub use template::{
    ADD_TEMPLATE_PATH, DELETE_TEMPLATE_PATH, GET_TEMPLATE_PATH, encode_add_template,
    encode_delete_templates, encode_get_templates,
};

#[cfg(test)]
pub(crate) use auth::signature;
