use std::net::IpAddr;

use serde::{Deserialize, Serialize};

pub mod dto;
pub mod endpoint;
mod middleware;
pub mod router;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub server_ip: Option<IpAddr>,
    pub server_port: Option<u16>,
    pub trace_json: Option<bool>,
    pub trace_level: Option<String>,
    // when set to true hides the `cause` field in the error response
    pub hide_error_response_cause: bool,
    /// seconds between sweeps of expired pending verifications
    pub purge_interval: Option<u64>,
}
