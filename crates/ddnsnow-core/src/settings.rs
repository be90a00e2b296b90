//! In-memory snapshot of what the provider currently stores
//!
//! A [`Settings`] value is built from one control panel page, mutated with a
//! single logical change and serialized straight back. It is never cached:
//! the page is the only observable source of truth.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::record::{Record, RecordKind};
use crate::validation::Validator;

/// Per-kind ordered values plus the wildcard flag
///
/// Kinds without values are absent from the map, never present with an
/// empty list.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    records: BTreeMap<RecordKind, Vec<String>>,
    wildcard_enabled: bool,
    validator: Validator,
}

impl Settings {
    /// Empty settings guarded by the default rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty settings guarded by a custom validator
    pub fn with_validator(validator: Validator) -> Self {
        Self {
            validator,
            ..Self::default()
        }
    }

    /// Swap the validator used by [`Settings::add`]
    pub fn set_validator(&mut self, validator: Validator) {
        self.validator = validator;
    }

    /// Whether wildcard subdomain resolution is enabled
    pub fn wildcard_enabled(&self) -> bool {
        self.wildcard_enabled
    }

    /// Enable or disable wildcard subdomain resolution
    pub fn set_wildcard(&mut self, enabled: bool) {
        self.wildcard_enabled = enabled;
    }

    /// True when `kind` holds at least one value
    pub fn contains_kind(&self, kind: RecordKind) -> bool {
        self.records.get(&kind).is_some_and(|values| !values.is_empty())
    }

    /// Stored values for `kind`, in panel order
    pub fn values(&self, kind: RecordKind) -> &[String] {
        self.records.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every stored record, grouped by kind in serialization order
    pub fn records(&self) -> Vec<Record> {
        self.records
            .iter()
            .flat_map(|(kind, values)| values.iter().map(|value| Record::new(*kind, value.clone())))
            .collect()
    }

    /// True when no record is stored
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the values of one kind wholesale; an empty list makes the
    /// kind absent
    pub(crate) fn set_values(&mut self, kind: RecordKind, values: Vec<String>) {
        if values.is_empty() {
            self.records.remove(&kind);
        } else {
            self.records.insert(kind, values);
        }
    }

    pub(crate) fn kinds(&self) -> impl Iterator<Item = (RecordKind, &[String])> {
        self.records.iter().map(|(kind, values)| (*kind, values.as_slice()))
    }

    /// Find a stored record
    ///
    /// Singleton kinds are addressed by kind alone and `value` is ignored.
    /// Multi-value kinds need an exact value match.
    pub fn lookup(&self, kind: RecordKind, value: Option<&str>) -> Result<Record> {
        let values = self.values(kind);

        let found = if kind.is_singleton() {
            values.first()
        } else {
            value.and_then(|wanted| values.iter().find(|stored| *stored == wanted))
        };

        found
            .map(|value| Record::new(kind, value.clone()))
            .ok_or_else(|| Error::not_found(describe(kind, value)))
    }

    /// Add a record after running every validation rule
    ///
    /// On rejection the settings are left untouched.
    pub fn add(&mut self, record: Record) -> Result<()> {
        self.validator
            .validate(self, &record)
            .map_err(Error::conflict)?;

        let values = self.records.entry(record.kind).or_default();
        if record.kind.is_singleton() {
            *values = vec![record.value];
        } else {
            values.push(record.value);
        }

        Ok(())
    }

    /// Remove a record
    ///
    /// Singleton kinds are cleared whenever a value is stored, whatever the
    /// value; the panel exposes one slot per singleton kind. Multi-value kinds
    /// drop the first exact match and keep the order of the rest.
    pub fn remove(&mut self, record: &Record) -> Result<()> {
        let kind = record.kind;
        if !self.contains_kind(kind) {
            return Err(Error::not_found(describe(kind, Some(record.value.as_str()))));
        }

        if kind.is_singleton() {
            self.records.remove(&kind);
            return Ok(());
        }

        let values = self.records.entry(kind).or_default();
        let index = values
            .iter()
            .position(|stored| *stored == record.value)
            .ok_or_else(|| Error::not_found(describe(kind, Some(record.value.as_str()))))?;
        values.remove(index);

        if values.is_empty() {
            self.records.remove(&kind);
        }

        Ok(())
    }

    /// Remove `old` and add `new` as one change
    ///
    /// Both steps run on a working copy that is committed only when both
    /// succeed.
    pub fn replace(&mut self, old: &Record, new: Record) -> Result<()> {
        let mut working = self.clone();
        working.remove(old)?;
        working.add(new)?;
        *self = working;
        Ok(())
    }
}

/// Equality covers the stored state only, not the rules guarding it
impl PartialEq for Settings {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records && self.wildcard_enabled == other.wildcard_enabled
    }
}

impl Eq for Settings {}

fn describe(kind: RecordKind, value: Option<&str>) -> String {
    match value {
        Some(value) if !kind.is_singleton() => format!("{} {}", kind, value),
        _ => kind.to_string(),
    }
}
