use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::provider::{FormatProvider, Radix};
use crate::encoders::{CodecError, Limits};
use crate::facade::BaseCodec;

/// Name of the per-user and project-local configuration files.
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "basecodec.toml";

/// Provider names to use when the caller does not pick one.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct DefaultProviders {
    #[serde(default)]
    pub base16: Option<String>,
    #[serde(default)]
    pub base32: Option<String>,
    #[serde(default)]
    pub base58: Option<String>,
    #[serde(default)]
    pub base64: Option<String>,
}

impl DefaultProviders {
    pub fn get(&self, radix: Radix) -> Option<&str> {
        match radix {
            Radix::Base16 => self.base16.as_deref(),
            Radix::Base32 => self.base32.as_deref(),
            Radix::Base58 => self.base58.as_deref(),
            Radix::Base64 => self.base64.as_deref(),
        }
    }

    fn merge(&mut self, other: DefaultProviders) {
        let DefaultProviders {
            base16,
            base32,
            base58,
            base64,
        } = other;
        if base16.is_some() {
            self.base16 = base16;
        }
        if base32.is_some() {
            self.base32 = base32;
        }
        if base58.is_some() {
            self.base58 = base58;
        }
        if base64.is_some() {
            self.base64 = base64;
        }
    }
}

/// Output-size limits as written in a config file; unset keys keep the
/// platform maximum.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct LimitsConfig {
    #[serde(default)]
    pub max_encoded_len: Option<usize>,
    #[serde(default)]
    pub max_decoded_len: Option<usize>,
}

/// A custom alphabet defined in TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub radix: Radix,
    pub alphabet: String,
    #[serde(default)]
    pub padded: bool,
}

/// Codec settings loaded from TOML files.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CodecConfig {
    #[serde(default)]
    pub defaults: DefaultProviders,
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Custom providers keyed by name
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

impl CodecConfig {
    /// Parses a configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in configuration bundled with the library.
    pub fn load_default() -> Result<Self, ConfigError> {
        let content = include_str!("../../codec.toml");
        Self::from_toml(content).map_err(|source| ConfigError::Parse {
            path: None,
            source,
        })
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in configuration (from library)
    /// 2. `~/.config/basecodec/config.toml` (user overrides)
    /// 3. `./basecodec.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones key by key. A file that
    /// exists but cannot be read or parsed is skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, ConfigError> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("basecodec").join(CONFIG_FILE_NAME);
            config.merge_optional(&user_config_path);
        }

        config.merge_optional(Path::new(LOCAL_CONFIG_FILE_NAME));

        Ok(config)
    }

    fn merge_optional(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(overrides) => {
                tracing::debug!(path = %path.display(), "loaded configuration overrides");
                self.merge(overrides);
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "ignoring unreadable configuration"
                );
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Values set in `other` replace those in `self`; custom providers with
    /// the same name are replaced wholesale.
    pub fn merge(&mut self, other: CodecConfig) {
        self.defaults.merge(other.defaults);
        if other.limits.max_encoded_len.is_some() {
            self.limits.max_encoded_len = other.limits.max_encoded_len;
        }
        if other.limits.max_decoded_len.is_some() {
            self.limits.max_decoded_len = other.limits.max_decoded_len;
        }
        for (name, provider) in other.providers {
            self.providers.insert(name, provider);
        }
    }

    pub fn limits(&self) -> Limits {
        Limits::new(
            self.limits
                .max_encoded_len
                .unwrap_or(Limits::DEFAULT_MAX_LEN),
            self.limits
                .max_decoded_len
                .unwrap_or(Limits::DEFAULT_MAX_LEN),
        )
    }

    /// Codec enforcing the configured limits.
    pub fn codec(&self) -> BaseCodec {
        BaseCodec::new(self.limits())
    }

    /// Resolves `name` among the custom providers of `radix`, then the
    /// built-in ones.
    ///
    /// Custom providers are validated here so a broken alphabet in a config
    /// file is reported by name.
    pub fn provider(&self, radix: Radix, name: &str) -> Result<FormatProvider, ConfigError> {
        if let Some(custom) = self
            .providers
            .get(name)
            .filter(|custom| custom.radix == radix)
        {
            let provider =
                FormatProvider::custom(name, radix, custom.alphabet.clone(), custom.padded);
            provider.validate().map_err(|source| ConfigError::InvalidProvider {
                name: name.to_string(),
                source,
            })?;
            return Ok(provider);
        }

        FormatProvider::lookup(radix, name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownProvider {
                radix,
                name: name.to_string(),
                suggestion: find_closest_provider(name, &self.provider_names(radix)),
            })
    }

    /// Provider named in `[defaults]` for `radix`, or the library default.
    pub fn default_provider(&self, radix: Radix) -> Result<FormatProvider, ConfigError> {
        match self.defaults.get(radix) {
            Some(name) => self.provider(radix, name),
            None => Ok(radix.default_provider().clone()),
        }
    }

    /// Resolves `name` when given, the configured default otherwise.
    pub fn resolve(&self, radix: Radix, name: Option<&str>) -> Result<FormatProvider, ConfigError> {
        match name {
            Some(name) => self.provider(radix, name),
            None => self.default_provider(radix),
        }
    }

    /// Names usable with `radix`: built-ins first, then custom providers
    /// in sorted order.
    pub fn provider_names(&self, radix: Radix) -> Vec<String> {
        let mut custom: Vec<String> = self
            .providers
            .iter()
            .filter(|(name, p)| p.radix == radix && FormatProvider::lookup(radix, name).is_none())
            .map(|(name, _)| name.clone())
            .collect();
        custom.sort();

        FormatProvider::builtins(radix)
            .iter()
            .map(|p| p.name().to_string())
            .chain(custom)
            .collect()
    }

    /// Checks every custom provider and every configured default.
    ///
    /// A custom provider may not reuse the name of a built-in one of the
    /// same radix.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names: Vec<&String> = self.providers.keys().collect();
        names.sort();
        for name in names {
            let custom = &self.providers[name];
            if let Some(builtin) = FormatProvider::lookup(custom.radix, name) {
                return Err(ConfigError::InvalidProvider {
                    name: name.clone(),
                    source: CodecError::invalid_provider(format!(
                        "name clashes with the built-in {} provider '{}'",
                        custom.radix,
                        builtin.name()
                    )),
                });
            }
            self.provider(custom.radix, name)?;
        }
        for radix in Radix::ALL {
            self.default_provider(radix)?;
        }
        Ok(())
    }
}

/// Errors raised while loading or resolving configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },
    UnknownProvider {
        radix: Radix,
        name: String,
        suggestion: Option<String>,
    },
    InvalidProvider {
        name: String,
        source: CodecError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            ConfigError::Parse {
                path: Some(path),
                source,
            } => write!(f, "invalid configuration in {}: {}", path.display(), source),
            ConfigError::Parse { path: None, source } => {
                write!(f, "invalid built-in configuration: {}", source)
            }
            ConfigError::UnknownProvider {
                radix,
                name,
                suggestion,
            } => {
                write!(f, "{} provider '{}' not found", radix, name)?;
                if let Some(suggestion) = suggestion {
                    write!(f, "; did you mean '{}'?", suggestion)?;
                }
                Ok(())
            }
            ConfigError::InvalidProvider { name, source } => {
                write!(f, "provider '{}' is unusable: {}", name, source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::InvalidProvider { source, .. } => Some(source),
            ConfigError::UnknownProvider { .. } => None,
        }
    }
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching provider name, ignoring ASCII case.
pub fn find_closest_provider(name: &str, available: &[String]) -> Option<String> {
    let wanted = name.to_ascii_lowercase();
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| {
            (
                levenshtein_distance(&wanted, &candidate.to_ascii_lowercase()),
                candidate,
            )
        })
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}
