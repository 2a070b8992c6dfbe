#![doc(test(attr(deny(warnings))))]

//! Shaqyru Core builds localized event-invitation sites: it owns the Kazakh
//! suffix/connector generator, the invitation text renderer, and the five-step
//! wizard state machine that feeds the site-provisioning API.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod i18n;
pub mod linguistics;
pub mod submit;
pub mod template;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Shaqyru Core tracing initialized.");
    });
}
