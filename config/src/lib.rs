//! Configuration loading for the Q21 evidence barrier policy.
//!
//! The barrier crossing strength and the treatment of a value resting on a
//! barrier are policy choices. They default to the named constants in
//! `q21-types` and can be overridden from a TOML file:
//!
//! ```toml
//! [barrier]
//! crossing_strength = 2
//! contact = "holding"   # or "strict"
//! ```
//!
//! Raw deserialization structs keep `Option` fields; [`Q21Config::barrier_policy`]
//! resolves them into a validated [`BarrierPolicy`] at the parse boundary.

use std::{
    env,
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use q21_types::{
    BARRIER_CROSSING_STRENGTH, BarrierContact, BarrierPolicy, BarrierPolicyError,
    DEFAULT_BARRIER_CONTACT,
};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "Q21_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct Q21Config {
    pub barrier: Option<BarrierConfig>,
}

/// `[barrier]` section. Missing fields fall back to the library defaults.
#[derive(Debug, Default, Deserialize)]
pub struct BarrierConfig {
    /// Minimum evidence magnitude that may cross a barrier. Default: 2.
    pub crossing_strength: Option<u32>,
    /// "holding" (default) or "strict".
    pub contact: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarrierConfigError {
    #[error("unknown barrier contact mode {0:?} (expected \"holding\" or \"strict\")")]
    UnknownContact(String),
    #[error(transparent)]
    Policy(#[from] BarrierPolicyError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid barrier config at {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        source: BarrierConfigError,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path,
        }
    }
}

impl BarrierConfig {
    pub fn resolve(&self) -> Result<BarrierPolicy, BarrierConfigError> {
        let contact = match self.contact.as_deref() {
            Some(raw) => BarrierContact::parse(raw)
                .ok_or_else(|| BarrierConfigError::UnknownContact(raw.to_string()))?,
            None => DEFAULT_BARRIER_CONTACT,
        };
        let strength = self.crossing_strength.unwrap_or(BARRIER_CROSSING_STRENGTH);
        Ok(BarrierPolicy::new(strength, contact)?)
    }
}

impl Q21Config {
    /// Load from the default location. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file; using defaults");
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolve the `[barrier]` section, or the default policy if absent.
    pub fn barrier_policy(&self) -> Result<BarrierPolicy, BarrierConfigError> {
        match &self.barrier {
            Some(barrier) => barrier.resolve(),
            None => Ok(BarrierPolicy::default()),
        }
    }
}

/// Load and resolve the barrier policy from `path`.
///
/// A missing file yields the default policy.
pub fn load_barrier_policy_from(path: &Path) -> Result<BarrierPolicy, ConfigError> {
    let Some(config) = Q21Config::load_from(path)? else {
        return Ok(BarrierPolicy::default());
    };
    let policy = config
        .barrier_policy()
        .map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(
        crossing_strength = policy.crossing_strength(),
        contact = policy.contact().as_str(),
        "Barrier policy loaded"
    );
    Ok(policy)
}

/// Load and resolve the barrier policy from the default location.
pub fn load_barrier_policy() -> Result<BarrierPolicy, ConfigError> {
    match config_path() {
        Some(path) => load_barrier_policy_from(&path),
        None => Ok(BarrierPolicy::default()),
    }
}

/// `$Q21_CONFIG` if set, otherwise `~/.q21/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    resolve_config_path(env::var_os(CONFIG_ENV_VAR), dirs::home_dir())
}

fn resolve_config_path(
    env_override: Option<OsString>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    match env_override {
        Some(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => home.map(|home| home.join(".q21").join("config.toml")),
    }
}


// load_from tests

#[test]
fn load_from_missing_file_is_none() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("config.toml");
    assert!(Q21Config::load_from(&path).unwrap().is_none());
    assert_eq!(
        load_barrier_policy_from(&path).unwrap(),
        BarrierPolicy::default()
    );
}

#[test]
fn load_barrier_policy_from_file() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("config.toml");
    fs::write(
        &path,
        "# tuned for noisy sensors\n[barrier]\ncrossing_strength = 3\ncontact = \"holding\"\n",
    )
    .unwrap();

    let policy = load_barrier_policy_from(&path).unwrap();
    assert_eq!(policy.crossing_strength(), 3);
    assert_eq!(policy.contact(), BarrierContact::Holding);
}

#[test]
fn load_from_reports_parse_errors_with_path() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("config.toml");
    fs::write(&path, "[barrier\n").unwrap();

    let err = Q21Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), path.as_path());
}

#[test]
fn load_barrier_policy_reports_invalid_section_with_path() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("config.toml");
    fs::write(&path, "[barrier]\ncontact = \"sideways\"\n").unwrap();

    let err = load_barrier_policy_from(&path).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            source: BarrierConfigError::UnknownContact(_),
            ..
        }
    ));
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().contains("sideways"));
}
