// # DDNS Now Provider
//
// HTTP transport for DDNS Now. The service has no record-level API: the
// control panel renders the account state as an HTML form and accepts the
// whole form back as a POST.
//
// ## Flow per verb
//
// 1. GET  `/control.php` with the login cookie → HTML page
// 2. Parse the page into `Settings` and apply the change locally
// 3. POST `/control.php` with the full form → `{result, errorcode, errormsg}`
//
// Validation happens in step 2, so a rejected change never reaches the
// backend.
//
// ## Constraints
//
// - One GET and at most one POST per verb
// - NO retry or backoff: a failed request fails the operation
// - NO caching: every verb re-fetches the page
// - Dry-run mode performs the GET, logs the body it would POST and stops
//
// ## Security Requirements
//
// - The password hash, API token and ukey NEVER appear in logs
//
// ## Endpoints
//
// - Control panel: GET/POST `{server}/control.php`
// - Update API: GET `{server}/update.php?domain=…&password=…&format=json&ip=…`

use async_trait::async_trait;
use ddnsnow_core::traits::RecordClient;
use ddnsnow_core::{
    Error, FormSubmission, ProviderConfig, Record, RecordKind, Result, Settings,
    interpret_response, parse_settings,
};
use reqwest::header::COOKIE;
use std::time::Duration;

/// DDNS Now client over the control panel
///
/// Stateless between calls: every verb works on a freshly fetched page.
pub struct DdnsNowProvider {
    config: ProviderConfig,

    /// HTTP client for panel and API requests
    client: reqwest::Client,
}

// Custom Debug implementation that hides the credentials
impl std::fmt::Debug for DdnsNowProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DdnsNowProvider")
            .field("config", &self.config)
            .finish()
    }
}

impl DdnsNowProvider {
    /// Create a new provider from a validated configuration
    pub fn new(config: ProviderConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        if config.dry_run {
            tracing::warn!("DDNS Now provider running in DRY-RUN mode - no changes will be made");
        }

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn mode(&self) -> &'static str {
        if self.config.dry_run { "DRY-RUN" } else { "LIVE" }
    }

    /// Fetch the raw control panel page
    pub async fn fetch_page(&self) -> Result<Vec<u8>> {
        let url = self.config.control_url();
        tracing::debug!("Fetching control panel: {}", url);

        let response = self
            .client
            .get(&url)
            .header(COOKIE, self.config.login_cookie())
            .send()
            .await
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let response = check_status(response, "Control panel fetch").await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::http(format!("Failed to read body: {}", e)))?;

        Ok(body.to_vec())
    }

    /// Submit the complete settings back to the panel
    pub async fn submit(&self, settings: &Settings) -> Result<()> {
        let submission = FormSubmission::new(settings, &self.config.control_fields());

        if self.config.dry_run {
            tracing::info!(
                "[DRY-RUN] Would send POST request to {} with body: {}",
                self.config.control_url(),
                submission.encode_redacted()?
            );
            return Ok(());
        }

        let response = self
            .client
            .post(self.config.control_url())
            .header(COOKIE, self.config.login_cookie())
            .form(submission.fields())
            .send()
            .await
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let response = check_status(response, "Control panel update").await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::http(format!("Failed to read body: {}", e)))?;

        interpret_response(&body)
    }

    /// Set a record through the update API instead of the control panel
    ///
    /// The update API overwrites the slot for the record's kind in one GET.
    /// It needs the API token and has no NS parameter.
    pub async fn update_via_api(&self, record: &Record) -> Result<()> {
        let api_token = self
            .config
            .api_token
            .as_deref()
            .ok_or_else(|| Error::config("DDNS Now API token is required for the update API"))?;

        let field = match record.kind {
            RecordKind::A => "ip",
            RecordKind::AAAA => "ipv6",
            RecordKind::CNAME => "cname",
            RecordKind::TXT => "txt",
            RecordKind::NS => {
                return Err(Error::invalid_input(format!(
                    "unsupported record type for the update API: {}",
                    record.kind
                )));
            }
        };

        tracing::info!("Updating DDNS Now record via API: {} [mode: {}]", record, self.mode());

        if self.config.dry_run {
            tracing::info!(
                "[DRY-RUN] Would send GET request to {} with {}={}",
                self.config.update_url(),
                field,
                record.value
            );
            return Ok(());
        }

        let response = self
            .client
            .get(self.config.update_url())
            .query(&[
                ("domain", self.config.username.as_str()),
                ("password", api_token),
                ("format", "json"),
                (field, record.value.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let response = check_status(response, "Update API").await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::http(format!("Failed to read body: {}", e)))?;

        interpret_response(&body)
    }
}

#[async_trait]
impl RecordClient for DdnsNowProvider {
    async fn settings(&self) -> Result<Settings> {
        let page = self.fetch_page().await?;
        parse_settings(&page)
    }

    async fn get_record(&self, kind: RecordKind, value: Option<&str>) -> Result<Record> {
        tracing::debug!("Reading DDNS Now record: {}", kind);
        self.settings().await?.lookup(kind, value)
    }

    async fn create_record(&self, record: Record) -> Result<Record> {
        tracing::info!("Creating DDNS Now record: {} [mode: {}]", record, self.mode());

        let mut settings = self.settings().await?;
        settings.add(record.clone())?;
        self.submit(&settings).await?;

        tracing::info!("DDNS Now record created: {}", record);
        Ok(record)
    }

    async fn update_record(&self, old: &Record, new: Record) -> Result<Record> {
        tracing::info!(
            "Updating DDNS Now record: {} -> {} [mode: {}]",
            old,
            new,
            self.mode()
        );

        let mut settings = self.settings().await?;
        settings.replace(old, new.clone())?;
        self.submit(&settings).await?;

        tracing::info!("DDNS Now record updated: {}", new);
        Ok(new)
    }

    async fn delete_record(&self, record: &Record) -> Result<()> {
        tracing::info!("Deleting DDNS Now record: {} [mode: {}]", record, self.mode());

        let mut settings = self.settings().await?;
        settings.remove(record)?;
        self.submit(&settings).await?;

        tracing::info!("DDNS Now record deleted: {}", record);
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "ddnsnow"
    }
}

/// Map non-success statuses to errors, passing successful responses through
async fn check_status(response: reqwest::Response, action: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unable to read error response".to_string());

    match status.as_u16() {
        401 | 403 => Err(Error::http(format!(
            "Authentication failed: invalid login cookie or API token. Status: {}",
            status
        ))),
        404 => Err(Error::http(format!("{} failed: endpoint not found. Status: {}", action, status))),
        500..=599 => Err(Error::http(format!(
            "DDNS Now server error (transient): {} - {}",
            status, error_text
        ))),
        _ => Err(Error::http(format!("{} failed: {} - {}", action, status, error_text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProviderConfig {
        ProviderConfig::new("testdomain", "secret_hash_12345")
    }

    #[test]
    fn test_provider_creation() {
        let provider = DdnsNowProvider::new(config()).unwrap();
        assert_eq!(provider.provider_name(), "ddnsnow");
        assert_eq!(provider.config().username, "testdomain");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = DdnsNowProvider::new(ProviderConfig::new("testdomain", "")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_mode() {
        let live = DdnsNowProvider::new(config()).unwrap();
        let dry = DdnsNowProvider::new(config().with_dry_run(true)).unwrap();

        assert_eq!(live.mode(), "LIVE");
        assert_eq!(dry.mode(), "DRY-RUN");
    }

    #[test]
    fn test_credentials_not_exposed_in_debug() {
        let provider =
            DdnsNowProvider::new(config().with_api_token("secret_token_67890")).unwrap();

        let debug_str = format!("{:?}", provider);
        assert!(!debug_str.contains("secret_hash_12345"));
        assert!(!debug_str.contains("secret_token_67890"));
        assert!(debug_str.contains("DdnsNowProvider"));
    }
}
