//! Client layer: authenticates requests, dispatches them, and maps failures.

mod reply;
mod text_num;

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

pub use reply::ProviderReply;

use crate::cache::{InMemoryTemplateCache, TemplateCache};
use crate::domain::{
    AddSign, AddSignResponse, AddTemplate, AddTemplateResponse, AppId, AppKey, DeleteResponse,
    DeleteSigns, DeleteTemplates, GetSigns, GetSignsResponse, GetTemplates, GetTemplatesResponse,
    MobileNumber, SendSmsResponse, SendSmsSingle, TemplateId, ValidationError,
};
use crate::transport::{self, AuthError, Authenticated, Envelope};

const DEFAULT_BASE_URL: &str = "https://yun.tim.qq.com/v5/tlssmssvr/";

type BoxError = Box<dyn StdError + Send + Sync>;
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug)]
struct HttpResponse {
    status: u16,
    /// Kept separate from the status so a failed read is only reported for
    /// responses that were going to be decoded.
    body: Result<String, BoxError>,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(BoxError::from);
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Application credentials issued by the provider console.
pub struct Credentials {
    app_id: AppId,
    app_key: AppKey,
}

impl Credentials {
    /// Validate and pair an application id with its secret key.
    pub fn new(
        app_id: impl Into<String>,
        app_key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            app_id: AppId::new(app_id)?,
            app_key: AppKey::new(app_key)?,
        })
    }

    pub fn app_id(&self) -> &AppId {
        &self.app_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Why message length estimation could not resolve a template.
pub enum TemplateFetchFailure {
    #[error("provider returned result={result} errmsg={errmsg:?}")]
    Provider { result: i32, errmsg: String },

    #[error("expected exactly one template, got {count}")]
    UnexpectedCount { count: usize },
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`QsmsClient`].
pub enum QsmsError {
    /// The HTTP exchange could not be completed (DNS, TLS, connection reset, ...).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The provider answered with a status other than `200`.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The response body could not be read to the end.
    #[error("failed to read response body: {0}")]
    Read(#[source] BoxError),

    /// The response body is not valid JSON or does not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// The signature envelope could not be derived (clock or URL failure).
    #[error("request authentication failed: {0}")]
    Authenticate(#[from] AuthError),

    /// The provider reported a non-zero `result`; see [`ProviderReply::ensure_success`].
    #[error("provider error: result={result} errmsg={errmsg:?}")]
    Provider { result: i32, errmsg: String },

    #[error("failed to fetch template {template_id}: {reason}")]
    TemplateFetch {
        template_id: TemplateId,
        reason: TemplateFetchFailure,
    },

    /// The provider accepted the message but billed nothing for it.
    #[error("message not sent: zero fee (result={result}, errmsg={errmsg:?}, sid={sid:?})")]
    SendSanity {
        result: i32,
        errmsg: String,
        sid: String,
    },

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Clone)]
/// Builder for [`QsmsClient`].
///
/// The only setting beyond the credentials is the template cache, so several
/// clients can share one.
pub struct QsmsClientBuilder {
    credentials: Credentials,
    template_cache: Option<Arc<dyn TemplateCache>>,
}

impl fmt::Debug for QsmsClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QsmsClientBuilder")
            .field("credentials", &self.credentials)
            .field("shared_template_cache", &self.template_cache.is_some())
            .finish()
    }
}

impl QsmsClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            template_cache: None,
        }
    }

    /// Use an existing template cache instead of a fresh per-client one.
    pub fn template_cache(mut self, cache: Arc<dyn TemplateCache>) -> Self {
        self.template_cache = Some(cache);
        self
    }

    /// Build a [`QsmsClient`] targeting the provider's fixed base URL.
    pub fn build(self) -> QsmsClient {
        QsmsClient {
            credentials: self.credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
            template_cache: self
                .template_cache
                .unwrap_or_else(|| Arc::new(InMemoryTemplateCache::new())),
        }
    }
}

#[derive(Clone)]
/// Tencent Cloud SMS client.
///
/// Every call derives a fresh signature envelope, posts a JSON body to
/// `https://yun.tim.qq.com/v5/tlssmssvr/<endpoint>`, and decodes the JSON reply.
///
/// Sign, template and send operations return the provider's reply as-is, even
/// when it reports a non-zero `result`. Use [`ProviderReply::ensure_success`]
/// to turn such replies into errors.
pub struct QsmsClient {
    credentials: Credentials,
    base_url: String,
    http: Arc<dyn HttpTransport>,
    template_cache: Arc<dyn TemplateCache>,
}

impl fmt::Debug for QsmsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QsmsClient")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl QsmsClient {
    /// Create a client with a private template cache.
    ///
    /// To share a template cache between clients, use [`QsmsClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        QsmsClientBuilder::new(credentials).build()
    }

    /// Start building a client that uses a shared template cache.
    pub fn builder(credentials: Credentials) -> QsmsClientBuilder {
        QsmsClientBuilder::new(credentials)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Register a new SMS sign (`add_sign`).
    pub async fn add_sign(&self, request: AddSign) -> Result<AddSignResponse, QsmsError> {
        let envelope = self.envelope(transport::ADD_SIGN_PATH, None)?;
        self.dispatch(&transport::encode_add_sign(&request, envelope))
            .await
    }

    /// Delete SMS signs by id (`del_sign`).
    pub async fn delete_signs(&self, request: DeleteSigns) -> Result<DeleteResponse, QsmsError> {
        let envelope = self.envelope(transport::DELETE_SIGN_PATH, None)?;
        self.dispatch(&transport::encode_delete_signs(&request, envelope))
            .await
    }

    /// Query review status of SMS signs (`get_sign`).
    pub async fn get_signs(&self, request: GetSigns) -> Result<GetSignsResponse, QsmsError> {
        let envelope = self.envelope(transport::GET_SIGN_PATH, None)?;
        self.dispatch(&transport::encode_get_signs(&request, envelope))
            .await
    }

    /// Register a new message template (`add_template`).
    pub async fn add_template(
        &self,
        request: AddTemplate,
    ) -> Result<AddTemplateResponse, QsmsError> {
        let envelope = self.envelope(transport::ADD_TEMPLATE_PATH, None)?;
        self.dispatch(&transport::encode_add_template(&request, envelope))
            .await
    }

    /// Delete message templates by id (`del_template`).
    pub async fn delete_templates(
        &self,
        request: DeleteTemplates,
    ) -> Result<DeleteResponse, QsmsError> {
        let envelope = self.envelope(transport::DELETE_TEMPLATE_PATH, None)?;
        self.dispatch(&transport::encode_delete_templates(&request, envelope))
            .await
    }

    /// Query review status and text of message templates (`get_template`).
    pub async fn get_templates(
        &self,
        request: GetTemplates,
    ) -> Result<GetTemplatesResponse, QsmsError> {
        let envelope = self.envelope(transport::GET_TEMPLATE_PATH, None)?;
        self.dispatch(&transport::encode_get_templates(&request, envelope))
            .await
    }

    /// Send one templated message to one mainland China number (`sendsms`).
    ///
    /// The reply is returned as-is; call [`SendSmsResponse::check`] to reject
    /// replies that billed nothing.
    pub async fn send_sms_single(
        &self,
        request: SendSmsSingle,
    ) -> Result<SendSmsResponse, QsmsError> {
        let envelope = self.envelope(transport::SEND_SMS_PATH, Some(request.mobile()))?;
        let result: Result<SendSmsResponse, QsmsError> = self
            .dispatch(&transport::encode_send_sms_single(&request, envelope))
            .await;

        match &result {
            Ok(response) => info!(
                template_id = %request.template_id(),
                result = response.result,
                errmsg = %response.errmsg,
                fee = response.fee,
                sid = %response.sid,
                "sendsms completed"
            ),
            Err(err) => warn!(template_id = %request.template_id(), error = %err, "sendsms failed"),
        }
        result
    }

    fn envelope(&self, path: &str, mobile: Option<&MobileNumber>) -> Result<Envelope, QsmsError> {
        Envelope::initialize(
            &self.credentials.app_id,
            &self.credentials.app_key,
            &self.base_url,
            path,
            mobile,
        )
        .map_err(QsmsError::from)
    }

    /// Post any authenticated request and decode the reply into `Res`.
    async fn dispatch<Req, Res>(&self, request: &Req) -> Result<Res, QsmsError>
    where
        Req: Authenticated + Sync,
        Res: DeserializeOwned,
    {
        let envelope = request.envelope();
        let url = envelope.url();
        let body = serde_json::to_vec(request).map_err(QsmsError::Encode)?;
        debug!(
            path = url.path(),
            time = envelope.time(),
            bytes = body.len(),
            "dispatching provider request"
        );

        let response = self
            .http
            .post_json(url.as_str(), body)
            .await
            .map_err(QsmsError::Transport)?;

        if response.status != 200 {
            debug!(path = url.path(), status = response.status, "provider returned non-200");
            let body = response
                .body
                .ok()
                .filter(|body| !body.trim().is_empty());
            return Err(QsmsError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let body = response.body.map_err(QsmsError::Read)?;
        serde_json::from_str(&body).map_err(QsmsError::Decode)
    }
}
