//! HTTP client for the schedule backend.

use gloo_net::http::{Request, Response};
use schedule_types::{
    AuthResponse, DismissalAction, DismissalRequest, GroupInfo, HiddenSubject, ScheduleEntry,
    SetGroupRequest,
};
use thiserror::Error;

use crate::telegram;

/// Base URL of the schedule backend, baked in at build time.
const API_URL: &str = match option_env!("SCHEDULE_API_URL") {
    Some(url) => url,
    None => "https://rozklad-api.fly.dev",
};

/// Errors from backend requests.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    /// The backend answered with a non-success status.
    #[error("backend rejected the request: HTTP {0}")]
    Rejected(u16),
}

/// Result type for backend requests.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Client for the schedule backend, carrying the bearer credential issued
/// by the Telegram host. Compared by value so it can sit in component props.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base: String,
    init_data: String,
}

impl ApiClient {
    /// Build a client from the embedding page: the compile-time base URL
    /// plus the Telegram `initData` credential (empty outside Telegram).
    pub fn from_host() -> Self {
        Self {
            base: API_URL.trim_end_matches('/').to_string(),
            init_data: telegram::init_data().unwrap_or_default(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.init_data)
    }

    fn accept(response: &Response) -> Result<()> {
        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::Rejected(response.status()))
        }
    }

    /// POST /auth - register or look up the Telegram account.
    pub async fn authorize(&self) -> Result<AuthResponse> {
        let response = Request::post(&self.url("/auth"))
            .header("Authorization", &self.bearer())
            .send()
            .await?;
        Self::accept(&response)?;
        Ok(response.json().await?)
    }

    /// GET /schedule - the current week's entries.
    pub async fn schedule(&self) -> Result<Vec<ScheduleEntry>> {
        let response = Request::get(&self.url("/schedule")).send().await?;
        Self::accept(&response)?;
        Ok(response.json().await?)
    }

    /// GET /groups - study groups available for onboarding.
    pub async fn groups(&self) -> Result<Vec<GroupInfo>> {
        let response = Request::get(&self.url("/groups")).send().await?;
        Self::accept(&response)?;
        Ok(response.json().await?)
    }

    /// POST /set-group - bind the account to a study group.
    pub async fn set_group(&self, site_id: &str) -> Result<()> {
        let response = Request::post(&self.url("/set-group"))
            .header("Authorization", &self.bearer())
            .json(&SetGroupRequest {
                group_id: site_id.to_string(),
            })?
            .send()
            .await?;
        Self::accept(&response)
    }

    /// GET /get_hidden_subjects - subjects the account has swiped away.
    pub async fn hidden_subjects(&self) -> Result<Vec<HiddenSubject>> {
        let response = Request::get(&self.url("/get_hidden_subjects"))
            .header("Authorization", &self.bearer())
            .send()
            .await?;
        Self::accept(&response)?;
        Ok(response.json().await?)
    }

    /// Confirm a committed swipe with the backend. Success means the entry
    /// may be dropped from the active list; any failure leaves it in place.
    pub async fn dismiss(&self, action: DismissalAction, request: &DismissalRequest) -> Result<()> {
        let response = Request::post(&self.url(action.endpoint()))
            .header("Authorization", &self.bearer())
            .json(request)?
            .send()
            .await?;
        Self::accept(&response)
    }
}
