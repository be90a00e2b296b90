//! Validation rules applied before an addition is committed
//!
//! Every rule sees the stored state and the candidate record. All rules run;
//! their reasons are collected into [`Violations`] so a rejected addition
//! reports every broken constraint at once.
//!
//! Built-in rules, in the order [`Validator::default`] runs them:
//! [`CnameExclusivity`], [`SingletonSlot`], [`SingleLineValue`].

use std::fmt;
use std::sync::Arc;

use crate::record::{Record, RecordKind};
use crate::settings::Settings;

/// A consistency rule of the provider
pub trait Rule: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Return the violation reason if adding `record` to `settings` breaks
    /// this rule
    fn check(&self, settings: &Settings, record: &Record) -> Option<String>;
}

/// CNAME cannot coexist with A, AAAA or TXT
#[derive(Debug, Clone, Copy, Default)]
pub struct CnameExclusivity;

impl Rule for CnameExclusivity {
    fn name(&self) -> &'static str {
        "cname-exclusivity"
    }

    fn check(&self, settings: &Settings, record: &Record) -> Option<String> {
        match record.kind {
            RecordKind::A | RecordKind::AAAA | RecordKind::TXT
                if settings.contains_kind(RecordKind::CNAME) =>
            {
                Some("CNAME record already exists".to_string())
            }
            RecordKind::CNAME
                if [RecordKind::A, RecordKind::AAAA, RecordKind::TXT]
                    .into_iter()
                    .any(|kind| settings.contains_kind(kind)) =>
            {
                Some("A/AAAA/TXT record already exists".to_string())
            }
            _ => None,
        }
    }
}

/// Singleton kinds expose exactly one slot
#[derive(Debug, Clone, Copy, Default)]
pub struct SingletonSlot;

impl Rule for SingletonSlot {
    fn name(&self) -> &'static str {
        "singleton-slot"
    }

    fn check(&self, settings: &Settings, record: &Record) -> Option<String> {
        (record.kind.is_singleton() && settings.contains_kind(record.kind))
            .then(|| "record already exists".to_string())
    }
}

/// Values travel as lines of a textarea or a single input, so they cannot
/// carry a line break of their own
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleLineValue;

impl Rule for SingleLineValue {
    fn name(&self) -> &'static str {
        "single-line-value"
    }

    fn check(&self, _settings: &Settings, record: &Record) -> Option<String> {
        record
            .value
            .contains(['\n', '\r'])
            .then(|| "record value must not contain a line break".to_string())
    }
}

/// Non-empty list of reasons an addition was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(Vec<String>);

impl Violations {
    /// A single violation
    pub fn single(reason: impl Into<String>) -> Self {
        Self(vec![reason.into()])
    }

    /// Reasons in rule order
    pub fn reasons(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("; "))
    }
}

/// Ordered set of rules run against every addition
#[derive(Clone)]
pub struct Validator {
    rules: Vec<Arc<dyn Rule>>,
}

impl Validator {
    /// A validator with no rules
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule; rules run in insertion order
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the configured rules
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Run every rule, collecting all violations
    pub fn validate(&self, settings: &Settings, record: &Record) -> Result<(), Violations> {
        let reasons: Vec<String> = self
            .rules
            .iter()
            .filter_map(|rule| {
                let reason = rule.check(settings, record)?;
                tracing::debug!(rule = rule.name(), %record, %reason, "validation rule violated");
                Some(reason)
            })
            .collect();

        if reasons.is_empty() {
            Ok(())
        } else {
            Err(Violations(reasons))
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::empty()
            .with_rule(CnameExclusivity)
            .with_rule(SingletonSlot)
            .with_rule(SingleLineValue)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rule_names())
            .finish()
    }
}
