mod types;

pub use types::*;

use crate::{Result, llm::Provider};
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the YAML config named by `CONFIG_PATH`, or `config.yaml` when present.
/// With neither, the built-in defaults are used.
pub async fn load() -> Result<Config> {
    match env::var("CONFIG_PATH") {
        Ok(config_path) => load_from_path(&config_path).await,
        Err(_) => {
            if tokio::fs::try_exists(DEFAULT_CONFIG_PATH).await? {
                load_from_path(DEFAULT_CONFIG_PATH).await
            } else {
                debug!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
                Ok(Config::default())
            }
        }
    }
}

pub async fn load_from_path(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    File(PathBuf),
    Env(String),
    Placeholder,
}

#[derive(Clone)]
pub struct Credential {
    pub value: String,
    pub source: CredentialSource,
}

/// Resolves a key from `file`, then the env value, then the placeholder.
/// Blank values at either source are skipped.
pub async fn resolve_credential(
    file: &Path,
    env_name: &str,
    env_value: Option<String>,
    placeholder: &str,
) -> Credential {
    match tokio::fs::read_to_string(file).await {
        Ok(contents) if !contents.trim().is_empty() => {
            let value = contents.trim().to_string();
            debug!(
                "Read API key from {} ({} chars)",
                file.display(),
                value.chars().count()
            );
            return Credential {
                value,
                source: CredentialSource::File(file.to_path_buf()),
            };
        }
        Ok(_) => warn!("API key file {} is empty", file.display()),
        Err(e) => debug!("Could not read API key file {}: {}", file.display(), e),
    }

    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return Credential {
            value: value.trim().to_string(),
            source: CredentialSource::Env(env_name.to_string()),
        };
    }

    Credential {
        value: placeholder.to_string(),
        source: CredentialSource::Placeholder,
    }
}

/// Reads the credential for `provider` and merges it with the configured overrides.
pub async fn provider_settings(config: &Config, provider: Provider) -> ProviderSettings {
    let provider_config = config.providers.get(provider);
    let key_file = provider_config
        .api_key_file
        .as_deref()
        .unwrap_or(provider.default_api_key_file());
    let env_name = provider_config
        .api_key_env
        .as_deref()
        .unwrap_or(provider.default_api_key_env());

    if let Ok(cwd) = env::current_dir() {
        debug!("Looking for {} in {}", key_file, cwd.display());
    }

    let credential = resolve_credential(
        Path::new(key_file),
        env_name,
        env::var(env_name).ok(),
        provider.placeholder_api_key(),
    )
    .await;

    match &credential.source {
        CredentialSource::File(path) => info!(
            "{} API key loaded from {}: {}",
            provider,
            path.display(),
            mask_key(&credential.value)
        ),
        CredentialSource::Env(name) => info!(
            "{} API key loaded from ${}: {}",
            provider,
            name,
            mask_key(&credential.value)
        ),
        CredentialSource::Placeholder => warn!(
            "No {} API key found in {} or ${}, requests will be rejected upstream",
            provider, key_file, env_name
        ),
    }

    ProviderSettings::from_config(provider, provider_config, credential.value)
}

/// Keeps a short prefix of a secret for log lines.
pub fn mask_key(key: &str) -> String {
    let prefix: String = key.chars().take(6).collect();
    format!("{}... ({} chars)", prefix, key.chars().count())
}
