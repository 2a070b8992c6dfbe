use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use uuid::Uuid;

use crate::catalog::CategoryCatalog;
use crate::wizard::{EntryContext, EventKind, WizardState};

use super::assembler::SubmissionAssembler;
use super::client::{ApiError, BalanceApi, SiteApi};
use super::payload::{DEFAULT_TARIFF, PRO_BALANCE_THRESHOLD, PRO_TARIFF};

/// Where the user is routed after a successful submission. Both targets
/// carry the provisioned site id plus the category and tariff parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    ImageSelection {
        site_id: String,
        category_route: String,
        tariff: String,
    },
    WhatsappDelivery {
        site_id: String,
        category_route: String,
        tariff: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub site_id: String,
    pub redirect: RedirectTarget,
}

/// Submission failures surfaced to the user. Every arm leaves the wizard
/// state and step cursor untouched so the attempt can be retried.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    AlreadyInFlight,
    #[error("no API credential is configured")]
    Environment,
    #[error("{0}")]
    Remote(String),
}

impl From<ApiError> for SubmitError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::MissingCredential | ApiError::BaseUrl(_) => SubmitError::Environment,
            ApiError::Transport(inner) => SubmitError::Remote(inner.to_string()),
            ApiError::Remote { detail, .. } => SubmitError::Remote(detail),
        }
    }
}

/// Drives the final submission: the in-flight guard, the pro-tier balance
/// gate, the create-vs-update branch, and the redirect decision.
pub struct SubmissionService<S, B> {
    site_api: S,
    balance_api: B,
    in_flight: AtomicBool,
}

impl<S: SiteApi, B: BalanceApi> SubmissionService<S, B> {
    pub fn new(site_api: S, balance_api: B) -> Self {
        Self {
            site_api,
            balance_api,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn site_api(&self) -> &S {
        &self.site_api
    }

    pub fn balance_api(&self) -> &B {
        &self.balance_api
    }

    /// Submits the aggregated wizard state.
    ///
    /// Repeated calls while a submission is in flight are refused: the
    /// provisioning API has no dedupe key of its own, so the guard here is
    /// the only thing preventing duplicate sites from double clicks.
    pub async fn submit(
        &self,
        state: &WizardState,
        catalog: &CategoryCatalog,
        entry: &EntryContext,
    ) -> Result<SubmissionOutcome, SubmitError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(SubmitError::AlreadyInFlight);
        }
        let result = self.submit_inner(state, catalog, entry).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn submit_inner(
        &self,
        state: &WizardState,
        catalog: &CategoryCatalog,
        entry: &EntryContext,
    ) -> Result<SubmissionOutcome, SubmitError> {
        let attempt = Uuid::new_v4();
        let tariff = entry.tariff.as_deref().unwrap_or(DEFAULT_TARIFF);
        let is_paid = self.resolve_paid_eligibility(tariff).await;
        let payload = SubmissionAssembler::build(state, catalog, Some(tariff), is_paid);

        tracing::info!(%attempt, tariff, update = entry.existing_site_id.is_some(), "submitting site");
        let site = match &entry.existing_site_id {
            Some(site_id) => self.site_api.update(site_id, &payload).await?,
            None => self.site_api.create(&payload).await?,
        };
        tracing::info!(%attempt, site_id = %site.id, "site submission accepted");

        let redirect = match state.event_kind {
            EventKind::Photo => RedirectTarget::ImageSelection {
                site_id: site.id.clone(),
                category_route: state.category_route.clone(),
                tariff: tariff.to_string(),
            },
            EventKind::Video => RedirectTarget::WhatsappDelivery {
                site_id: site.id.clone(),
                category_route: state.category_route.clone(),
                tariff: tariff.to_string(),
            },
        };
        Ok(SubmissionOutcome {
            site_id: site.id,
            redirect,
        })
    }

    /// Pro tier requires a funded balance; every other tier is eligible as
    /// is. The lookup is best effort: a failure degrades to not-eligible so
    /// the submission itself still proceeds.
    async fn resolve_paid_eligibility(&self, tariff: &str) -> bool {
        if tariff != PRO_TARIFF {
            return true;
        }
        match self.balance_api.balance().await {
            Ok(balance) => balance >= PRO_BALANCE_THRESHOLD,
            Err(err) => {
                tracing::warn!(error = %err, "balance lookup failed, treating pro tier as unpaid");
                false
            }
        }
    }
}
