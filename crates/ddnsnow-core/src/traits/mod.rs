//! Core traits for DDNS Now record management
//!
//! - [`RecordClient`]: create/read/update/delete verbs over one account

pub mod record_client;

pub use record_client::RecordClient;
