use anyhow::Context;
use std::env;
use std::net::SocketAddr;

const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_GRAPHQL_PATH: &str = "/gql";
const DEFAULT_TOOL_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub http_addr: SocketAddr,
    pub graphql_path: String,
    pub tool_channel_capacity: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let http_addr = lookup("RECEIPTS_HTTP_ADDR")
            .unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string())
            .parse()
            .context("RECEIPTS_HTTP_ADDR is not a socket address")?;
        let graphql_path =
            lookup("RECEIPTS_GRAPHQL_PATH").unwrap_or_else(|| DEFAULT_GRAPHQL_PATH.to_string());
        if !graphql_path.starts_with('/') {
            anyhow::bail!("RECEIPTS_GRAPHQL_PATH must start with '/', got {graphql_path}");
        }
        let tool_channel_capacity = match lookup("RECEIPTS_TOOL_CHANNEL_CAPACITY") {
            Some(raw) => raw
                .parse()
                .context("RECEIPTS_TOOL_CHANNEL_CAPACITY is not a number")?,
            None => DEFAULT_TOOL_CHANNEL_CAPACITY,
        };
        Ok(Self {
            http_addr,
            graphql_path,
            tool_channel_capacity,
        })
    }
}
