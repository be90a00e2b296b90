//! Acknowledgement returned by the control panel and the update API
//!
//! ```json
//! {"result": "NG", "errorcode": 101, "errormsg": "...", "remote_ip": "192.0.2.1"}
//! ```

use serde::Deserialize;

use crate::error::{Error, Result};

const RESULT_OK: &str = "OK";
const RESULT_NG: &str = "NG";

/// Raw response body
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderResponse {
    /// `OK` or `NG`
    pub result: String,

    /// Provider error code, 0 on success
    #[serde(default)]
    pub errorcode: i64,

    /// Provider error message, passed through verbatim
    #[serde(default)]
    pub errormsg: String,

    /// Client address as seen by the provider
    #[serde(default)]
    pub remote_ip: Option<String>,
}

impl ProviderResponse {
    /// Map the `result` marker to success or a typed error
    pub fn into_result(self) -> Result<()> {
        match self.result.as_str() {
            RESULT_OK => Ok(()),
            RESULT_NG => Err(Error::provider(self.errorcode, self.errormsg)),
            other => Err(Error::decode(format!("unexpected result: {:?}", other))),
        }
    }
}

/// Decode a response body into success or failure
pub fn interpret_response(body: &[u8]) -> Result<()> {
    let response: ProviderResponse = serde_json::from_slice(body)
        .map_err(|e| Error::decode(format!("unmarshal body: {}", e)))?;

    tracing::debug!(
        result = %response.result,
        errorcode = response.errorcode,
        remote_ip = response.remote_ip.as_deref().unwrap_or("-"),
        "provider acknowledgement"
    );

    response.into_result()
}
