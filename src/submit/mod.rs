//! Submission pipeline: payload assembly, the site-provisioning API
//! boundary, and the submission service with its payment-tier gate.

pub mod assembler;
pub mod client;
pub mod payload;
pub mod submitter;

pub use assembler::SubmissionAssembler;
pub use client::{ApiError, BalanceApi, HttpApi, SiteApi, SiteRef};
pub use payload::{
    MetadataEntry, SubmissionPayload, TranslationBlock, DEFAULT_TARIFF, PHOTO_VIDEO_SENTINEL,
    PRO_BALANCE_THRESHOLD, PRO_TARIFF, SECONDARY_LANGUAGE,
};
pub use submitter::{RedirectTarget, SubmissionOutcome, SubmissionService, SubmitError};
