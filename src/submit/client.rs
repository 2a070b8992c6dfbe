use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use super::payload::SubmissionPayload;

/// Failures at the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no API credential is configured")]
    MissingCredential,
    #[error("invalid API base url: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{detail}")]
    Remote { status: u16, detail: String },
}

/// Reference to a provisioned site, as returned by create/update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteRef {
    pub id: String,
}

/// Site-provisioning API: create a new invitation site or update an
/// existing one. Same payload shape and response contract for both.
#[async_trait]
pub trait SiteApi {
    async fn create(&self, payload: &SubmissionPayload) -> Result<SiteRef, ApiError>;
    async fn update(&self, site_id: &str, payload: &SubmissionPayload)
        -> Result<SiteRef, ApiError>;
}

/// Account balance lookup backing the pro-tier gate.
#[async_trait]
pub trait BalanceApi {
    async fn balance(&self) -> Result<f64, ApiError>;
}

#[derive(Debug, Deserialize)]
struct BalanceBody {
    balance: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Bearer-authenticated reqwest implementation of both collaborator
/// contracts.
#[derive(Clone)]
pub struct HttpApi {
    http: reqwest::Client,
    base: Url,
    token: Option<String>,
}

impl HttpApi {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, ApiError> {
        Ok(Self {
            http: reqwest::Client::new(),
            base: Url::parse(base_url)?,
            token,
        })
    }

    fn bearer(&self) -> Result<&str, ApiError> {
        self.token.as_deref().ok_or(ApiError::MissingCredential)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }

    async fn read_site_ref(response: reqwest::Response) -> Result<SiteRef, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        // Non-OK responses carry an error detail to surface verbatim.
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| status.to_string());
        Err(ApiError::Remote {
            status: status.as_u16(),
            detail,
        })
    }
}

#[async_trait]
impl SiteApi for HttpApi {
    async fn create(&self, payload: &SubmissionPayload) -> Result<SiteRef, ApiError> {
        let token = self.bearer()?;
        let response = self
            .http
            .post(self.endpoint("sites")?)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        Self::read_site_ref(response).await
    }

    async fn update(
        &self,
        site_id: &str,
        payload: &SubmissionPayload,
    ) -> Result<SiteRef, ApiError> {
        let token = self.bearer()?;
        let response = self
            .http
            .put(self.endpoint(&format!("sites/{site_id}"))?)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        Self::read_site_ref(response).await
    }
}

#[async_trait]
impl BalanceApi for HttpApi {
    async fn balance(&self) -> Result<f64, ApiError> {
        let token = self.bearer()?;
        let response = self
            .http
            .get(self.endpoint("balance")?)
            .bearer_auth(token)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Remote {
                status: status.as_u16(),
                detail: status.to_string(),
            });
        }
        let body: BalanceBody = response.json().await?;
        Ok(body.balance)
    }
}
