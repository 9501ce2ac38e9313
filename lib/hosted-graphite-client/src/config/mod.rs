/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;
use std::time::Duration;

use anyhow::anyhow;
use base64::prelude::*;
use http::HeaderValue;
use http::uri::{PathAndQuery, Uri};

use crate::export::HostedGraphiteClient;

#[cfg(feature = "yaml")]
mod yaml;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_RSP_HEAD_MAX_SIZE: usize = 8192;

// the backend shows this literal path prefix when no application identity is
// configured, dashboards fed by the legacy reporter rely on it
const UNSET_INSTANCE_ID: &str = "null";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostedGraphiteClientConfig {
    url: String,
    api_key: String,
    instance_id: Option<String>,
    request_timeout: Duration,
    rsp_head_max_size: usize,
}

impl HostedGraphiteClientConfig {
    pub fn new<U, K>(url: U, api_key: K) -> Self
    where
        U: Into<String>,
        K: Into<String>,
    {
        HostedGraphiteClientConfig {
            url: url.into(),
            api_key: api_key.into(),
            instance_id: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            rsp_head_max_size: DEFAULT_RSP_HEAD_MAX_SIZE,
        }
    }

    pub fn set_instance_id<T: Into<String>>(&mut self, instance_id: T) {
        self.instance_id = Some(instance_id.into());
    }

    pub fn set_request_timeout(&mut self, timeout: Duration) {
        self.request_timeout = timeout;
    }

    pub fn set_rsp_head_max_size(&mut self, size: usize) {
        self.rsp_head_max_size = size;
    }

    /// Validate the config and build the immutable client. All per-call
    /// state (credential header, peer address string, api path) is derived
    /// here once.
    pub fn build(&self) -> anyhow::Result<HostedGraphiteClient> {
        if self.api_key.is_empty() {
            return Err(anyhow!("api key is not set"));
        }

        let uri =
            Uri::from_str(&self.url).map_err(|e| anyhow!("invalid url {}: {e}", self.url))?;
        match uri.scheme_str() {
            Some("http") => {}
            Some(scheme) => return Err(anyhow!("unsupported url scheme {scheme}")),
            None => return Err(anyhow!("no scheme in url {}", self.url)),
        }
        let Some(host) = uri.host() else {
            return Err(anyhow!("no host in url {}", self.url));
        };
        let port = uri.port_u16().unwrap_or(80);
        let peer = format!("{host}:{port}");
        let host_header = if port == 80 {
            host.to_string()
        } else {
            peer.clone()
        };
        let api_path = uri
            .path_and_query()
            .cloned()
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        // key-only basic auth, the fixed ":foo" password is what the
        // ingestion endpoint expects
        let auth = format!(
            "Basic {}",
            BASE64_STANDARD.encode(format!("{}:foo", self.api_key))
        );
        let auth_header =
            HeaderValue::from_str(&auth).map_err(|e| anyhow!("unencodable api key: {e}"))?;

        let instance = self
            .instance_id
            .clone()
            .unwrap_or_else(|| UNSET_INSTANCE_ID.to_string());

        Ok(HostedGraphiteClient::new(
            peer,
            host_header,
            api_path,
            auth_header,
            instance,
            self.request_timeout,
            self.rsp_head_max_size,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_ok() {
        let config = HostedGraphiteClientConfig::new("http://www.hostedgraphite.com", "RosesAreRed");
        let client = config.build().unwrap();
        assert_eq!(client.peer, "www.hostedgraphite.com:80");
        assert_eq!(client.host_header, "www.hostedgraphite.com");
        assert_eq!(client.api_path.as_str(), "/");
        assert_eq!(
            client.auth_header.to_str().unwrap(),
            "Basic Um9zZXNBcmVSZWQ6Zm9v"
        );
        assert_eq!(client.instance, "null");
        assert_eq!(client.request_timeout, Duration::from_secs(60));
        assert_eq!(client.rsp_head_max_size, 8192);

        let mut config =
            HostedGraphiteClientConfig::new("http://sink.example.net:8080/api/v1/sink", "key");
        config.set_instance_id("myapp");
        config.set_request_timeout(Duration::from_secs(10));
        let client = config.build().unwrap();
        assert_eq!(client.peer, "sink.example.net:8080");
        assert_eq!(client.host_header, "sink.example.net:8080");
        assert_eq!(client.api_path.as_str(), "/api/v1/sink");
        assert_eq!(client.instance, "myapp");
        assert_eq!(client.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn build_invalid_url() {
        let config = HostedGraphiteClientConfig::new("http://[invalid", "key");
        assert!(config.build().is_err());

        let config = HostedGraphiteClientConfig::new("www.hostedgraphite.com", "key");
        assert!(config.build().is_err());

        let config = HostedGraphiteClientConfig::new("https://www.hostedgraphite.com", "key");
        assert!(config.build().is_err());
    }

    #[test]
    fn build_no_api_key() {
        let config = HostedGraphiteClientConfig::new("http://www.hostedgraphite.com", "");
        assert!(config.build().is_err());
    }

}
