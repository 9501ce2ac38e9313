/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, anyhow};
use humanize_rs::ParseError;
use yaml_rust::Yaml;

use super::HostedGraphiteClientConfig;

impl HostedGraphiteClientConfig {
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        let Yaml::Hash(map) = v else {
            return Err(anyhow!(
                "yaml value type for 'hosted graphite client config' should be 'map'"
            ));
        };

        let mut config = HostedGraphiteClientConfig::new("", "");
        for (k, v) in map.iter() {
            let Yaml::String(k) = k else {
                return Err(anyhow!("config keys should be in 'string' type"));
            };
            config
                .set_by_yaml_kv(&key_normalize(k), v)
                .context(format!("invalid value for key {k}"))?;
        }

        if config.url.is_empty() {
            return Err(anyhow!("no url has been set"));
        }
        if config.api_key.is_empty() {
            return Err(anyhow!("no api key has been set"));
        }
        Ok(config)
    }

    fn set_by_yaml_kv(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match k {
            "url" => {
                self.url = as_string(v)?;
                Ok(())
            }
            "api_key" | "secret" => {
                self.api_key = as_string(v)?;
                Ok(())
            }
            "instance_id" | "instance" => {
                self.instance_id = Some(as_string(v)?);
                Ok(())
            }
            "request_timeout" => {
                self.request_timeout = as_duration(v)
                    .context(format!("invalid humanize duration value for key {k}"))?;
                Ok(())
            }
            "rsp_header_max_size" => {
                self.rsp_head_max_size =
                    as_usize(v).context(format!("invalid usize value for key {k}"))?;
                Ok(())
            }
            _ => Err(anyhow!("invalid key {k}")),
        }
    }
}

fn key_normalize(raw: &str) -> String {
    raw.to_lowercase().replace('-', "_")
}

fn as_string(v: &Yaml) -> anyhow::Result<String> {
    match v {
        Yaml::String(s) => Ok(s.to_string()),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Real(s) => Ok(s.to_string()),
        _ => Err(anyhow!("yaml value type should be 'string'")),
    }
}

fn as_usize(v: &Yaml) -> anyhow::Result<usize> {
    match v {
        Yaml::Integer(i) => {
            usize::try_from(*i).map_err(|e| anyhow!("invalid usize value: {e}"))
        }
        Yaml::String(s) => usize::from_str(s).map_err(|e| anyhow!("invalid usize string: {e}")),
        _ => Err(anyhow!(
            "yaml value type for usize should be 'integer' or 'string'"
        )),
    }
}

fn as_duration(v: &Yaml) -> anyhow::Result<Duration> {
    match v {
        Yaml::String(value) => match humanize_rs::duration::parse(value) {
            Ok(v) => Ok(v),
            Err(ParseError::MissingUnit) => {
                if let Ok(u) = u64::from_str(value) {
                    Ok(Duration::from_secs(u))
                } else {
                    Err(anyhow!("invalid duration string"))
                }
            }
            Err(e) => Err(anyhow!("invalid humanize duration string: {e}")),
        },
        Yaml::Integer(value) => {
            if let Ok(u) = u64::try_from(*value) {
                Ok(Duration::from_secs(u))
            } else {
                Err(anyhow!("out of range duration value"))
            }
        }
        _ => Err(anyhow!(
            "yaml value type for humanize duration should be 'string' or 'integer'"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yaml_rust::YamlLoader;

    fn load_yaml(s: &str) -> Yaml {
        YamlLoader::load_from_str(s).unwrap().pop().unwrap()
    }

    #[test]
    fn parse_yaml_ok() {
        let yaml = load_yaml(
            r#"
                url: "http://www.hostedgraphite.com/api/v1/sink"
                api_key: "RosesAreRed"
                instance_id: "myapp"
                request_timeout: "90s"
            "#,
        );
        let config = HostedGraphiteClientConfig::parse_yaml(&yaml).unwrap();
        assert_eq!(config.url, "http://www.hostedgraphite.com/api/v1/sink");
        assert_eq!(config.api_key, "RosesAreRed");
        assert_eq!(config.instance_id.as_deref(), Some("myapp"));
        assert_eq!(config.request_timeout, Duration::from_secs(90));

        let yaml = load_yaml(
            r#"
                url: "http://sink.example.net:8080"
                secret: "key"
                request_timeout: 30
                rsp_header_max_size: 4096
            "#,
        );
        let config = HostedGraphiteClientConfig::parse_yaml(&yaml).unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.instance_id, None);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.rsp_head_max_size, 4096);

        config.build().unwrap();
    }

    #[test]
    fn parse_yaml_err() {
        let yaml = load_yaml(
            r#"
                url: "http://www.hostedgraphite.com"
                api_key: "key"
                invalid_key: "value"
            "#,
        );
        assert!(HostedGraphiteClientConfig::parse_yaml(&yaml).is_err());

        let yaml = load_yaml(
            r#"
                api_key: "key"
            "#,
        );
        assert!(HostedGraphiteClientConfig::parse_yaml(&yaml).is_err());

        let yaml = load_yaml(
            r#"
                url: "http://www.hostedgraphite.com"
            "#,
        );
        assert!(HostedGraphiteClientConfig::parse_yaml(&yaml).is_err());

        let yaml = load_yaml(
            r#"
                url: "http://www.hostedgraphite.com"
                api_key: "key"
                request_timeout: "1xs"
            "#,
        );
        assert!(HostedGraphiteClientConfig::parse_yaml(&yaml).is_err());

        let yaml = load_yaml(
            r#"
                url: "http://www.hostedgraphite.com"
                api_key: "key"
                rsp_header_max_size: -1
            "#,
        );
        assert!(HostedGraphiteClientConfig::parse_yaml(&yaml).is_err());

        let yaml = Yaml::Array(vec![]);
        assert!(HostedGraphiteClientConfig::parse_yaml(&yaml).is_err());

        let yaml = Yaml::Integer(123);
        assert!(HostedGraphiteClientConfig::parse_yaml(&yaml).is_err());
    }
}
