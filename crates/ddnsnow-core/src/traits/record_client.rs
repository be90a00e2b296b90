// # Record Client Trait
//
// Defines the create/read/update/delete verbs a workflow layer (for example
// an infrastructure-as-code resource) drives against DDNS Now.
//
// ## Implementations
//
// - Control panel over HTTPS: `ddnsnow-provider` crate
//
// ## Usage
//
// ```rust,ignore
// use ddnsnow_core::{Record, RecordClient, RecordKind};
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let client = /* RecordClient implementation */;
//
//     client.create_record(Record::new(RecordKind::TXT, "v=spf1 -all")).await?;
//     let a = client.get_record(RecordKind::A, None).await?;
//
//     Ok(())
// }
// ```

use async_trait::async_trait;

use crate::record::{Record, RecordKind};
use crate::settings::Settings;

/// Trait for DDNS Now record clients
///
/// Every mutating verb is one fetch-mutate-submit cycle: the current page is
/// fetched, parsed into [`Settings`], changed locally and submitted whole.
///
/// # Single-shot
///
/// Implementations must not retry, back off or cache settings between
/// calls. A failed request fails the whole operation.
///
/// # Concurrency
///
/// The backend has no compare-and-swap. Two callers mutating the same
/// account at the same time can lose one update; callers that need safety
/// must serialize their calls.
#[async_trait]
pub trait RecordClient: Send + Sync {
    /// Fetch and parse the current settings
    async fn settings(&self) -> Result<Settings, crate::Error>;

    /// Look up one record
    ///
    /// Singleton kinds are addressed by kind alone, multi-value kinds by kind
    /// and value.
    async fn get_record(
        &self,
        kind: RecordKind,
        value: Option<&str>,
    ) -> Result<Record, crate::Error>;

    /// Add a record
    ///
    /// Returns the record as stored.
    async fn create_record(&self, record: Record) -> Result<Record, crate::Error>;

    /// Replace `old` with `new` in one submission
    async fn update_record(&self, old: &Record, new: Record) -> Result<Record, crate::Error>;

    /// Remove a record
    async fn delete_record(&self, record: &Record) -> Result<(), crate::Error>;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}
