//! Kazakh phonology helpers behind the invitation text generator.
//!
//! Name inputs are free text, so everything here degrades to a defined
//! default instead of failing: empty names stay empty, unclassified
//! characters fall back to the back-harmony voiced forms.

pub mod connector;
pub mod harmony;
pub mod suffix;

pub use connector::{select_connector, CONNECTORS, DEFAULT_CONNECTOR};
pub use harmony::{register_harmony_override, Harmony};
pub use suffix::attach_suffix;
