//! Loader for `seek` configuration with YAML + environment overlays.
//!
//! Sources, lowest precedence first:
//!
//! 1. an optional YAML file (`--config`, or `~/.config/seek/seek.yaml`)
//! 2. `SEEK__`-prefixed environment variables, `__` between path segments
//!    (e.g. `SEEK__TAVILY__ENDPOINT=http://localhost:8080`)
//! 3. the provider credential variables `SERPER_API_KEY` / `TAVILY_API_KEY`,
//!    consulted only for providers whose `api_key` is still unset
//!
//! String values may reference other environment variables with `${VAR}`;
//! expansion is recursive up to a fixed depth.
use config::{Config, ConfigError, Environment, File, FileFormat};
use seek_common::observability::LogFormat;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::{Path, PathBuf};

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

/// Credential variable for the Serper snippet-search API.
pub const SERPER_API_KEY_ENV: &str = "SERPER_API_KEY";
/// Credential variable for the Tavily search + extract API.
pub const TAVILY_API_KEY_ENV: &str = "TAVILY_API_KEY";

pub const DEFAULT_CONFIG_FILE: &str = "seek.yaml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeekConfig {
    #[serde(default)]
    pub serper: ProviderSettings,
    #[serde(default)]
    pub tavily: ProviderSettings,
    #[serde(default)]
    pub http: HttpSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Explicit per-provider configuration handed to adapter constructors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL override; adapters fall back to their public endpoint.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default, deserialize_with = "de_opt_u64")]
    pub timeout_secs: Option<u64>,
}

impl ProviderSettings {
    /// Settings whose only populated field is the credential read from `var`.
    ///
    /// ```
    /// use seek_config::ProviderSettings;
    ///
    /// let settings = ProviderSettings::from_env("SEEK_DOCTEST_UNSET_KEY");
    /// assert!(settings.api_key.is_none());
    /// ```
    pub fn from_env(var: &str) -> Self {
        Self {
            api_key: normalize_secret(std::env::var(var).ok()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpSettings {
    /// Default request timeout for providers without their own.
    #[serde(default, deserialize_with = "de_opt_u64")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub format: LogFormat,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl SeekConfig {
    /// Fill unset credentials from the provider variables and let providers
    /// inherit the shared HTTP timeout.
    fn resolve(mut self) -> Self {
        for (settings, var) in [
            (&mut self.serper, SERPER_API_KEY_ENV),
            (&mut self.tavily, TAVILY_API_KEY_ENV),
        ] {
            settings.api_key = normalize_secret(settings.api_key.take())
                .or_else(|| normalize_secret(std::env::var(var).ok()));
            if settings.timeout_secs.is_none() {
                settings.timeout_secs = self.http.timeout_secs;
            }
        }
        self
    }
}

/// Location of the per-user config file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("seek").join(DEFAULT_CONFIG_FILE))
}

/// Empty and unexpanded `${VAR}` placeholders count as "not configured".
/// `expand_env_in_value` leaves `${VAR}` literal when `VAR` is unset, and this
/// check is what turns that into a missing credential.
fn normalize_secret(raw: Option<String>) -> Option<String> {
    let s = raw?.trim().to_string();
    if s.is_empty() || (s.starts_with("${") && s.ends_with('}')) {
        None
    } else {
        Some(s)
    }
}

/// Environment overlays arrive as strings; accept both `30` and `"30"`.
fn de_opt_u64<'de, D>(de: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(u64),
        Str(String),
    }

    match Option::<NumOrStr>::deserialize(de)? {
        None => Ok(None),
        Some(NumOrStr::Num(n)) => Ok(Some(n)),
        Some(NumOrStr::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(NumOrStr::Str(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid integer {s:?}: {e}"))),
    }
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hides the `config` crate wiring (YAML + env overrides).
pub struct SeekConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for SeekConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SeekConfigLoader {
    /// Start with only the `SEEK__` environment overlay.
    ///
    /// ```
    /// use seek_config::SeekConfigLoader;
    ///
    /// let config = SeekConfigLoader::new()
    ///     .with_yaml_str("serper:\n  endpoint: http://localhost:9000")
    ///     .load()
    ///     .expect("valid config");
    ///
    /// assert_eq!(config.serper.endpoint.as_deref(), Some("http://localhost:9000"));
    /// ```
    pub fn new() -> Self {
        let builder = Config::builder();
        Self { builder }
    }

    /// Attach a YAML/TOML/JSON file that must exist; the `config` crate infers
    /// format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Attach a file that is silently skipped when missing.
    pub fn with_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Allow tests/CLI to merge inline YAML snippets.
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources into strongly
    /// typed config.
    ///
    /// ```
    /// use seek_config::SeekConfigLoader;
    ///
    /// temp_env::with_vars(
    ///     [("DOC_TAVILY_TOKEN", Some("tvly-from-env")), ("TAVILY_API_KEY", None)],
    ///     || {
    ///         let config = SeekConfigLoader::new()
    ///             .with_yaml_str(r#"
    /// tavily:
    ///   api_key: "${DOC_TAVILY_TOKEN}"
    /// http:
    ///   timeout_secs: 20
    /// "#)
    ///             .load()
    ///             .expect("valid configuration");
    ///
    ///         assert_eq!(config.tavily.api_key.as_deref(), Some("tvly-from-env"));
    ///         assert_eq!(config.tavily.timeout_secs, Some(20));
    ///     },
    /// );
    /// ```
    pub fn load(self) -> Result<SeekConfig, ConfigError> {
        // Environment overlay is added last so it wins over files.
        let cfg = self
            .builder
            .add_source(
                Environment::with_prefix("SEEK")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: SeekConfig =
            serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))?;

        Ok(typed.resolve())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expands_simple_string() {
        temp_env::with_var("FOO", Some("bar"), || {
            let mut v = json!("prefix-${FOO}-suffix");
            expand_env_in_value(&mut v);
            assert_eq!(v, json!("prefix-bar-suffix"));
        });
    }

    #[test]
    fn expands_in_array_and_object() {
        temp_env::with_vars([("CITY", Some("Winston")), ("STATE", Some("NC"))], || {
            let mut v = json!([
                "hello-$CITY",
                { "loc": "${CITY}-${STATE}" },
                42,
                true,
                null
            ]);
            expand_env_in_value(&mut v);
            assert_eq!(
                v,
                json!(["hello-Winston", { "loc": "Winston-NC" }, 42, true, null])
            );
        });
    }

    #[test]
    fn expands_recursively_across_env_values() {
        temp_env::with_vars(
            [
                ("BAZ", Some("qux")),
                ("BAR", Some("mid-${BAZ}")),
                ("FOO", Some("start-${BAR}-end")),
            ],
            || {
                let mut v = json!("X=${FOO}");
                expand_env_in_value(&mut v);
                assert_eq!(v, json!("X=start-mid-qux-end"));
            },
        );
    }

    #[test]
    fn stops_on_cycles() {
        temp_env::with_vars([("A", Some("${B}")), ("B", Some("${A}"))], || {
            let mut v = json!("x=${A}-y");
            expand_env_in_value(&mut v);
            let s = v.as_str().unwrap();
            assert!(s.starts_with("x=") && s.ends_with("-y"));
            assert!(s.contains("${"));
        });
    }

    #[test]
    fn unknown_vars_are_left_as_is() {
        let mut v = json!("hi-${DOES_NOT_EXIST}");
        expand_env_in_value(&mut v);
        assert_eq!(v, json!("hi-${DOES_NOT_EXIST}"));
    }

    #[test]
    fn blank_and_placeholder_secrets_are_absent() {
        assert_eq!(normalize_secret(None), None);
        assert_eq!(normalize_secret(Some("   ".into())), None);
        assert_eq!(normalize_secret(Some("${TAVILY_API_KEY}".into())), None);
        assert_eq!(normalize_secret(Some(" k-1 ".into())), Some("k-1".into()));
    }

    #[test]
    fn timeouts_accept_numbers_and_strings() {
        let from_num: ProviderSettings =
            serde_json::from_value(json!({ "timeout_secs": 12 })).unwrap();
        let from_str: ProviderSettings =
            serde_json::from_value(json!({ "timeout_secs": "12" })).unwrap();
        assert_eq!(from_num.timeout_secs, Some(12));
        assert_eq!(from_str.timeout_secs, Some(12));
        assert!(serde_json::from_value::<ProviderSettings>(json!({ "timeout_secs": "soon" })).is_err());
    }

    #[test]
    fn provider_timeout_overrides_shared_timeout() {
        let cfg = SeekConfig {
            serper: ProviderSettings {
                timeout_secs: Some(5),
                ..Default::default()
            },
            http: HttpSettings {
                timeout_secs: Some(30),
            },
            ..Default::default()
        };
        let resolved = temp_env::with_vars(
            [(SERPER_API_KEY_ENV, None::<&str>), (TAVILY_API_KEY_ENV, None)],
            || cfg.resolve(),
        );
        assert_eq!(resolved.serper.timeout_secs, Some(5));
        assert_eq!(resolved.tavily.timeout_secs, Some(30));
    }
}
