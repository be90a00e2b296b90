//! [`Settings`] → flat form submission
//!
//! The counterpart of the parser: each present kind becomes one field whose
//! value is the newline-joined list, exactly as the panel's textarea holds it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::WILDCARD_FIELD;
use crate::settings::Settings;

/// Account token the panel embeds in its own update form
pub const DEFAULT_UKEY: &str = "UKEY@061e10718b1455b638af4a55a8377a01";

/// Static fields the backend requires on every submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlFields {
    /// `action` marker
    pub action: String,
    /// `json` response-format marker
    pub json: String,
    /// `ukey` authorization token
    pub ukey: String,
}

impl ControlFields {
    /// Control fields for the given account token
    pub fn new(ukey: impl Into<String>) -> Self {
        Self {
            action: "update".to_string(),
            json: "1".to_string(),
            ukey: ukey.into(),
        }
    }
}

impl Default for ControlFields {
    fn default() -> Self {
        Self::new(DEFAULT_UKEY)
    }
}

impl Settings {
    /// Domain fields in serialization order
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields: Vec<(&'static str, String)> = self
            .kinds()
            .map(|(kind, values)| (kind.form_id(), values.join("\n")))
            .collect();

        if self.wildcard_enabled() {
            fields.push((WILDCARD_FIELD, "1".to_string()));
        }

        fields
    }
}

/// A complete, ordered submission for the control panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    fields: Vec<(String, String)>,
}

impl FormSubmission {
    /// Domain fields of `settings` followed by the control fields
    pub fn new(settings: &Settings, control: &ControlFields) -> Self {
        let mut fields: Vec<(String, String)> = settings
            .form_fields()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();

        fields.push(("action".to_string(), control.action.clone()));
        fields.push(("json".to_string(), control.json.clone()));
        fields.push(("ukey".to_string(), control.ukey.clone()));

        Self { fields }
    }

    /// Key/value pairs, e.g. for `reqwest::RequestBuilder::form`
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Value of the first field named `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// `application/x-www-form-urlencoded` body
    pub fn encode(&self) -> Result<String> {
        encode_pairs(&self.fields)
    }

    /// Same as [`FormSubmission::encode`] with the account token masked, for logs
    pub fn encode_redacted(&self) -> Result<String> {
        let redacted: Vec<(&str, &str)> = self
            .fields
            .iter()
            .map(|(key, value)| match key.as_str() {
                "ukey" => (key.as_str(), "<REDACTED>"),
                _ => (key.as_str(), value.as_str()),
            })
            .collect();
        encode_pairs(&redacted)
    }
}

/// Encode the domain fields of `settings` only
pub fn encode_fields(settings: &Settings) -> Result<String> {
    encode_pairs(&settings.form_fields())
}

fn encode_pairs<K: Serialize, V: Serialize>(pairs: &[(K, V)]) -> Result<String> {
    serde_urlencoded::to_string(pairs).map_err(|e| Error::invalid_input(format!("encode form: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Record, RecordKind};

    #[test]
    fn test_empty_settings_have_no_fields() {
        assert!(Settings::new().form_fields().is_empty());
        assert_eq!(encode_fields(&Settings::new()).unwrap(), "");
    }

    #[test]
    fn test_fields_follow_kind_order() {
        let mut settings = Settings::new();
        settings.add(Record::new(RecordKind::TXT, "t")).unwrap();
        settings.add(Record::new(RecordKind::NS, "ns1")).unwrap();
        settings.add(Record::new(RecordKind::AAAA, "::1")).unwrap();

        let keys: Vec<&str> = settings.form_fields().into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["update_data_aaaa", "update_data_ns", "update_data_txt"]);
    }

    #[test]
    fn test_wildcard_field_only_when_enabled() {
        let mut settings = Settings::new();
        assert_eq!(encode_fields(&settings).unwrap(), "");

        settings.set_wildcard(true);
        assert_eq!(encode_fields(&settings).unwrap(), "update_data_wildcard=1");
    }

    #[test]
    fn test_multi_values_are_newline_joined() {
        let mut settings = Settings::new();
        settings.add(Record::new(RecordKind::NS, "ns1.example.com")).unwrap();
        settings.add(Record::new(RecordKind::NS, "ns2.example.com")).unwrap();

        assert_eq!(
            settings.form_fields(),
            vec![("update_data_ns", "ns1.example.com\nns2.example.com".to_string())]
        );
    }

    #[test]
    fn test_submission_appends_control_fields() {
        let mut settings = Settings::new();
        settings.add(Record::new(RecordKind::A, "127.0.0.1")).unwrap();

        let submission = FormSubmission::new(&settings, &ControlFields::new("UKEY@test"));
        assert_eq!(
            submission.encode().unwrap(),
            "update_data_a=127.0.0.1&action=update&json=1&ukey=UKEY%40test"
        );
        assert_eq!(submission.get("action"), Some("update"));
        assert_eq!(submission.get("update_data_aaaa"), None);
    }

    #[test]
    fn test_redacted_encoding_masks_ukey() {
        let submission = FormSubmission::new(&Settings::new(), &ControlFields::new("UKEY@secret"));
        let redacted = submission.encode_redacted().unwrap();

        assert!(!redacted.contains("secret"));
        assert!(redacted.ends_with("ukey=%3CREDACTED%3E"));
    }

    #[test]
    fn test_default_control_fields() {
        let control = ControlFields::default();
        assert_eq!(control.action, "update");
        assert_eq!(control.json, "1");
        assert_eq!(control.ukey, DEFAULT_UKEY);
    }
}
