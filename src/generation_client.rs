use crate::constant::{
    GENERATE_FALLBACK_MESSAGE, GENERATE_PATH, SEND_EMAIL_FALLBACK_MESSAGE, SEND_EMAIL_PATH,
};
use crate::domain::{EmailStatus, GenerationRequest, GenerationResult, SendEmailRequest};
use crate::error::{BizErrorEnum, RequestError, SubmitError};
use crate::request::{GenerationForm, SendEmailForm};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

/// Typed client for the content generation service.
///
/// Every operation performs exactly one HTTP call: there are no retries
/// and nothing is cached.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http_client: Client,
    base_url: Url,
}

impl GenerationClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BizErrorEnum> {
        let mut url = Url::parse(base_url).map_err(|e| {
            tracing::error!("Failed to parse url: url={}, e={:?}", base_url, e);
            BizErrorEnum::ParseUrlError(base_url.to_string())
        })?;
        if url.cannot_be_a_base() {
            return Err(BizErrorEnum::UrlCannotBeABase(base_url.to_string()));
        }
        // Endpoints are joined as relative paths, so `/api/v1` must end with a
        // slash or `join` would replace its last segment.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let http_client = Client::builder()
            // timeout is a MUST option for client
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build http client: {:?}", e);
                BizErrorEnum::BuildHttpClientError(e)
            })?;
        Ok(GenerationClient {
            http_client,
            base_url: url,
        })
    }

    /// Validates the form and, if it is valid, asks the service to generate content.
    #[tracing::instrument(
        name = "Submitting a content brief",
        skip(self, form),
        fields(
            request_id = %Uuid::new_v4(),
            send_email = form.send_email
        )
    )]
    pub async fn submit(&self, form: &GenerationForm) -> Result<GenerationResult, SubmitError> {
        let request = GenerationRequest::try_from(form).map_err(|e| {
            tracing::warn!("Content brief rejected before sending: {}", e);
            e
        })?;
        Ok(self.generate(&request).await?)
    }

    #[tracing::instrument(
        name = "Generating content",
        skip_all,
        fields(topics = request.content_topics().len())
    )]
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, RequestError> {
        self.post_json(GENERATE_PATH, request, GENERATE_FALLBACK_MESSAGE)
            .await
    }

    /// Emails content that was generated earlier.
    #[tracing::instrument(
        name = "Re-sending generated content",
        skip(self, form),
        fields(request_id = %Uuid::new_v4())
    )]
    pub async fn send_email_only(&self, form: &SendEmailForm) -> Result<EmailStatus, SubmitError> {
        let request = SendEmailRequest::try_from(form).map_err(|e| {
            tracing::warn!("Email request rejected before sending: {}", e);
            e
        })?;
        Ok(self.send_email(&request).await?)
    }

    #[tracing::instrument(
        name = "Sending email",
        skip_all,
        fields(recipient_email = %request.recipient_email())
    )]
    pub async fn send_email(&self, request: &SendEmailRequest) -> Result<EmailStatus, RequestError> {
        self.post_json(SEND_EMAIL_PATH, request, SEND_EMAIL_FALLBACK_MESSAGE)
            .await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.base_url.join(path).map_err(|e| {
            tracing::error!("Url failed to join {}: {:?}", path, e);
            RequestError::fallback(fallback)
        })?;

        let response = self
            .http_client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach the generation service: {:?}", e);
                RequestError::fallback(fallback)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let error = RequestError::from_response_body(status.as_u16(), &body);
            tracing::error!(
                status = status.as_u16(),
                "Generation service returned an error: {}",
                error
            );
            return Err(error);
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse the generation service response: {:?}", e);
            RequestError::fallback(fallback)
        })
    }
}
