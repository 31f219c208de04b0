use crate::client::QsmsError;
use crate::domain::{
    AddSignResponse, AddTemplateResponse, DeleteResponse, GetSignsResponse, GetTemplatesResponse,
    SendSmsResponse,
};

/// Common `result`/`errmsg` pair carried by every provider reply.
pub trait ProviderReply: Sized {
    fn result(&self) -> i32;
    fn errmsg(&self) -> &str;

    /// `true` when the provider reported `result = 0`.
    ///
    /// `errmsg` is not consulted: successful sends carry `"OK"` there.
    fn is_success(&self) -> bool {
        self.result() == 0
    }

    /// Turn a reply with a non-zero `result` into [`QsmsError::Provider`].
    fn ensure_success(self) -> Result<Self, QsmsError> {
        if self.is_success() {
            return Ok(self);
        }
        Err(QsmsError::Provider {
            result: self.result(),
            errmsg: self.errmsg().to_owned(),
        })
    }
}

macro_rules! impl_provider_reply {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ProviderReply for $ty {
                fn result(&self) -> i32 {
                    self.result
                }

                fn errmsg(&self) -> &str {
                    &self.errmsg
                }
            }
        )+
    };
}

impl_provider_reply!(
    AddSignResponse,
    DeleteResponse,
    GetSignsResponse,
    AddTemplateResponse,
    GetTemplatesResponse,
    SendSmsResponse,
);

impl SendSmsResponse {
    /// Reject replies that billed nothing.
    ///
    /// The provider can answer `result = 0` for a message it never delivered;
    /// a zero `fee` is the reliable signal, so it wins over `result`.
    pub fn check(&self) -> Result<(), QsmsError> {
        if self.fee == 0 {
            return Err(QsmsError::SendSanity {
                result: self.result,
                errmsg: self.errmsg.clone(),
                sid: self.sid.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send_response(result: i32, fee: u32) -> SendSmsResponse {
        SendSmsResponse {
            result,
            errmsg: String::new(),
            fee,
            sid: "sid-1".to_owned(),
        }
    }

    #[test]
    fn zero_fee_fails_check_even_when_result_is_zero() {
        let err = send_response(0, 0).check().unwrap_err();
        assert!(matches!(
            err,
            QsmsError::SendSanity { result: 0, ref sid, .. } if sid == "sid-1"
        ));
    }

    #[test]
    fn billed_send_passes_check() {
        assert!(send_response(0, 1).check().is_ok());
        assert!(send_response(0, 2).is_success());
    }

    #[test]
    fn ensure_success_maps_provider_failures() {
        let reply = DeleteResponse {
            result: 1016,
            errmsg: "invalid sig".to_owned(),
        };
        assert!(!reply.is_success());
        match reply.ensure_success().unwrap_err() {
            QsmsError::Provider { result, errmsg } => {
                assert_eq!(result, 1016);
                assert_eq!(errmsg, "invalid sig");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn ok_errmsg_with_zero_result_is_success() {
        let reply = SendSmsResponse {
            result: 0,
            errmsg: "OK".to_owned(),
            fee: 1,
            sid: "sid-2".to_owned(),
        };
        assert!(reply.ensure_success().is_ok());
    }
}
