//! Control panel page → [`Settings`]
//!
//! The panel renders its state as form elements keyed by `id`:
//!
//! | id | element | extraction |
//! |---|---|---|
//! | `update_data_a`, `update_data_aaaa`, `update_data_cname` | `input` | `value` attribute |
//! | `update_data_txt`, `update_data_ns` | `textarea` | body, split on `\n` |
//! | `update_data_wildcard` | `input` | presence of `checked` |
//!
//! Missing elements, unknown ids and empty values all mean "kind absent".
//! When an id repeats, elements only ever add state: a singleton keeps the
//! first non-empty value, multi-value kinds collect the lines of every
//! element and one `checked` box is enough to enable the wildcard.

use std::borrow::Cow;

use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};
use crate::record::RecordKind;
use crate::settings::Settings;

/// Form id of the wildcard checkbox
pub const WILDCARD_FIELD: &str = "update_data_wildcard";

const FIELD_SELECTOR: &str = "input, textarea";

/// Parse the raw bytes of a control panel page
///
/// Bytes that are not UTF-8 are replaced with U+FFFD rather than failing the
/// whole page.
pub fn parse_settings(document: &[u8]) -> Result<Settings> {
    let document = String::from_utf8_lossy(document);
    if let Cow::Owned(_) = document {
        tracing::warn!("control panel page is not valid UTF-8, invalid bytes replaced");
    }
    Settings::from_html(&document)
}

impl Settings {
    /// Parse a control panel page
    pub fn from_html(document: &str) -> Result<Self> {
        let html = Html::parse_document(document);
        let selector = Selector::parse(FIELD_SELECTOR)
            .map_err(|e| Error::parse(format!("invalid selector {}: {}", FIELD_SELECTOR, e)))?;

        let mut settings = Settings::new();
        for element in html.select(&selector) {
            let Some(id) = element.value().attr("id") else {
                continue;
            };

            if id == WILDCARD_FIELD {
                if element.value().attr("checked").is_some() {
                    settings.set_wildcard(true);
                }
                continue;
            }

            let Some(kind) = RecordKind::from_form_id(id) else {
                continue;
            };

            let extracted = extract_values(kind, element);
            if extracted.is_empty() || (kind.is_singleton() && settings.contains_kind(kind)) {
                continue;
            }

            let mut values = settings.values(kind).to_vec();
            values.extend(extracted);
            settings.set_values(kind, values);
        }

        tracing::debug!(
            records = settings.records().len(),
            wildcard = settings.wildcard_enabled(),
            "parsed control panel settings"
        );

        Ok(settings)
    }
}

fn extract_values(kind: RecordKind, element: ElementRef<'_>) -> Vec<String> {
    if kind.is_singleton() {
        return match element.value().attr("value") {
            Some(value) if !value.is_empty() => vec![value.to_string()],
            _ => Vec::new(),
        };
    }

    let body: String = element.text().collect();
    if body.is_empty() {
        return Vec::new();
    }
    body.split('\n').map(str::to_string).collect()
}
