//! Shared fixtures and mock collaborators for the integration suites.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use shaqyru_core::submit::{ApiError, BalanceApi, SiteApi, SiteRef, SubmissionPayload};
use shaqyru_core::wizard::{EventKind, WizardState};

/// A wedding state as the wizard would leave it after the texts step.
pub fn wedding_state() -> WizardState {
    let mut state = WizardState::new("uilenu-toi", EventKind::Video);
    state.title = "Біздің той".into();
    state.name_fields.insert("name".into(), "Асан".into());
    state.name_fields.insert("name2".into(), "Алия".into());
    state.event_date = "2025-06-01T18:00".into();
    state.site_type = "classic".into();
    state.address = "Думан мейрамханасы".into();
    state.city = "Астана".into();
    state.address_link = "https://go.2gis.com/duman".into();
    state.invitation_text = "Шақырамыз!".into();
    state.host_text = "Асан мен Алия".into();
    state
}

/// Scripted site API: records calls and returns a canned result.
pub struct MockSiteApi {
    pub result: Result<SiteRef, String>,
    pub created: Mutex<Vec<SubmissionPayload>>,
    pub updated: Mutex<Vec<(String, SubmissionPayload)>>,
    pub delay_ms: u64,
}

impl MockSiteApi {
    pub fn ok(site_id: &str) -> Self {
        Self {
            result: Ok(SiteRef {
                id: site_id.to_string(),
            }),
            created: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
            delay_ms: 0,
        }
    }

    pub fn failing(detail: &str) -> Self {
        Self {
            result: Err(detail.to_string()),
            created: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
            delay_ms: 0,
        }
    }

    fn respond(&self) -> Result<SiteRef, ApiError> {
        match &self.result {
            Ok(site) => Ok(site.clone()),
            Err(detail) => Err(ApiError::Remote {
                status: 422,
                detail: detail.clone(),
            }),
        }
    }
}

#[async_trait]
impl SiteApi for MockSiteApi {
    async fn create(&self, payload: &SubmissionPayload) -> Result<SiteRef, ApiError> {
        if self.delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.delay_ms)).await;
        }
        self.created.lock().unwrap().push(payload.clone());
        self.respond()
    }

    async fn update(
        &self,
        site_id: &str,
        payload: &SubmissionPayload,
    ) -> Result<SiteRef, ApiError> {
        self.updated
            .lock()
            .unwrap()
            .push((site_id.to_string(), payload.clone()));
        self.respond()
    }
}

/// Scripted balance API counting how often the gate consulted it.
pub struct MockBalanceApi {
    pub result: Result<f64, ()>,
    pub calls: AtomicUsize,
}

impl MockBalanceApi {
    pub fn with_balance(balance: f64) -> Self {
        Self {
            result: Ok(balance),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BalanceApi for MockBalanceApi {
    async fn balance(&self) -> Result<f64, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.result {
            Ok(balance) => Ok(balance),
            Err(()) => Err(ApiError::Remote {
                status: 503,
                detail: "balance service unavailable".into(),
            }),
        }
    }
}
