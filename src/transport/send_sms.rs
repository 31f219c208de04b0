use serde::Serialize;

use super::auth::{Authenticated, Envelope};
use crate::domain::{NATION_CODE, SendSmsSingle, TemplateId};

pub const SEND_SMS_PATH: &str = "sendsms";

#[derive(Debug, Serialize)]
pub struct SendSmsJsonRequest<'a> {
    sign: &'a str,
    tpl_id: TemplateId,
    params: &'a [String],
    tel: Telephone<'a>,
    #[serde(flatten)]
    envelope: Envelope,
}

#[derive(Debug, Serialize)]
struct Telephone<'a> {
    mobile: &'a str,
    nationcode: &'static str,
}

impl Authenticated for SendSmsJsonRequest<'_> {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

/// The envelope must have been derived with the recipient's mobile number.
pub fn encode_send_sms_single(
    request: &SendSmsSingle,
    envelope: Envelope,
) -> SendSmsJsonRequest<'_> {
    SendSmsJsonRequest {
        sign: request.sign().as_str(),
        tpl_id: request.template_id(),
        params: request.params(),
        tel: Telephone {
            mobile: request.mobile().as_str(),
            nationcode: NATION_CODE,
        },
        envelope,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{AppId, AppKey, MobileNumber, SignText};

    #[test]
    fn send_body_matches_wire_layout() {
        let mobile = MobileNumber::new("13800138000").unwrap();
        let request = SendSmsSingle::new(
            mobile.clone(),
            SignText::new("Acme").unwrap(),
            TemplateId::new(7),
            vec!["123456".to_owned(), "5".to_owned()],
        );
        let envelope = Envelope::from_parts(
            &AppId::new("1400000000").unwrap(),
            &AppKey::new("secret").unwrap(),
            "https://yun.tim.qq.com/v5/tlssmssvr/",
            SEND_SMS_PATH,
            Some(&mobile),
            123456,
            1_700_000_000,
        )
        .unwrap();

        let body = encode_send_sms_single(&request, envelope);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "sign": "Acme",
                "tpl_id": 7,
                "params": ["123456", "5"],
                "tel": { "mobile": "13800138000", "nationcode": "86" },
                "sig": "b79104bc5ea12341ed5a92e8466bb1b663f95e3b0a6002abbf5b065cdcc118c1",
                "time": 1_700_000_000
            })
        );
    }
}
