use tracing::debug;

use crate::cache::TemplateCacheKey;
use crate::client::{QsmsClient, QsmsError, TemplateFetchFailure};
use crate::domain::{GetTemplates, SignText, TemplateId, message_length, strip_placeholders};

impl QsmsClient {
    /// Estimate the length, in characters, of the message that sending
    /// `template_id` with `sign` and `params` would deliver.
    ///
    /// Template text is fetched once per `(app id, template id)` and kept in
    /// the client's template cache with its `{0}`..`{9}` placeholders removed.
    ///
    /// `sign` is a validated [`SignText`], so an empty sign cannot be passed;
    /// build the estimate with the sign the message will actually carry.
    ///
    /// Errors:
    /// - [`QsmsError::TemplateFetch`] when the provider reports a failure or
    ///   does not return exactly one template,
    /// - any dispatch error of the underlying `get_template` call.
    pub async fn text_num(
        &self,
        sign: &SignText,
        template_id: TemplateId,
        params: &[String],
    ) -> Result<usize, QsmsError> {
        let text = self.stripped_template_text(template_id).await?;
        Ok(message_length(&text, sign, params))
    }

    async fn stripped_template_text(&self, template_id: TemplateId) -> Result<String, QsmsError> {
        let key = TemplateCacheKey::new(self.credentials.app_id().clone(), template_id);
        if let Some(text) = self.template_cache.get(&key) {
            debug!(app_id = %key.app_id, %template_id, "template text cache hit");
            return Ok(text);
        }
        debug!(app_id = %key.app_id, %template_id, "template text cache miss");

        let response = self.get_templates(GetTemplates::one(template_id)).await?;
        if response.result != 0 || !response.errmsg.is_empty() {
            return Err(QsmsError::TemplateFetch {
                template_id,
                reason: TemplateFetchFailure::Provider {
                    result: response.result,
                    errmsg: response.errmsg,
                },
            });
        }

        let mut data = response.data;
        if data.len() != 1 {
            return Err(QsmsError::TemplateFetch {
                template_id,
                reason: TemplateFetchFailure::UnexpectedCount { count: data.len() },
            });
        }
        let template = data.remove(0);

        let text = strip_placeholders(&template.text);
        self.template_cache.put(key, text.clone());
        Ok(text)
    }
}
