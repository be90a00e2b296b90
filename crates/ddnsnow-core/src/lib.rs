// # ddnsnow-core
//
// Core library for managing records on DDNS Now, a dynamic-DNS provider
// whose only mutation interface is the HTML form on its control panel.
//
// ## Architecture Overview
//
// - **Record / RecordKind**: the atomic values the panel exposes
// - **parser**: control panel page → `Settings`
// - **Settings**: per-kind record lists plus the wildcard flag, with
//   validated add/remove/replace
// - **validation**: pluggable rules run before every addition
// - **form**: `Settings` → form submission, including the static control fields
// - **response**: the `{result, errorcode, errormsg}` acknowledgement
// - **RecordClient**: the verbs a transport implements on top of the above
//
// ## Design Principles
//
// 1. **Fresh state**: every mutation starts from a freshly fetched page
// 2. **Local validation**: rule violations are caught before anything is sent
// 3. **Matched codec**: parser and serializer are tested against each other

pub mod config;
pub mod error;
pub mod form;
pub mod parser;
pub mod record;
pub mod response;
pub mod settings;
pub mod traits;
pub mod validation;

// Re-export core types for convenience
pub use config::ProviderConfig;
pub use error::{Error, Result};
pub use form::{ControlFields, FormSubmission, encode_fields};
pub use parser::parse_settings;
pub use record::{Record, RecordKind};
pub use response::{ProviderResponse, interpret_response};
pub use settings::Settings;
pub use traits::RecordClient;
pub use validation::{
    CnameExclusivity, Rule, SingleLineValue, SingletonSlot, Validator, Violations,
};
