//! Credential lookup.
//!
//! Keys are resolved in a fixed priority order: a structured secrets file
//! (TOML) first, then the process environment. Values are wrapped in
//! `SecretString` so they never end up in logs or debug output.

use std::path::Path;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Credential key for the question-generation service.
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Resolves credentials from a secrets file and the environment.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    secrets: toml::Table,
}

impl CredentialStore {
    /// A store with no secrets file — environment lookups only.
    pub fn env_only() -> Self {
        Self::default()
    }

    /// Load the secrets file at `path`. A missing file is not an error
    /// (the store falls back to the environment); a malformed one is.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No secrets file, using environment only");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let secrets = raw.parse::<toml::Table>().map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { secrets })
    }

    /// Look up a credential: secrets file first, then environment.
    pub fn lookup(&self, key: &str) -> Option<SecretString> {
        if let Some(value) = self.secrets.get(key).and_then(|v| v.as_str()) {
            if !value.is_empty() {
                return Some(SecretString::from(value.to_string()));
            }
        }
        match std::env::var(key) {
            Ok(value) if !value.is_empty() => Some(SecretString::from(value)),
            _ => {
                tracing::debug!(key, "Credential not found");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_env() {
        let store = CredentialStore::load(Path::new("/nonexistent/secrets.toml")).unwrap();
        assert!(store.lookup("TALENTSCOUT_TEST_ABSENT_KEY").is_none());
    }

    #[test]
    fn secrets_file_takes_priority_over_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "TALENTSCOUT_TEST_PRIORITY_KEY = \"from-file\"").unwrap();
        let store = CredentialStore::load(file.path()).unwrap();

        unsafe { std::env::set_var("TALENTSCOUT_TEST_PRIORITY_KEY", "from-env") };
        let value = store.lookup("TALENTSCOUT_TEST_PRIORITY_KEY").unwrap();
        assert_eq!(value.expose_secret(), "from-file");
        unsafe { std::env::remove_var("TALENTSCOUT_TEST_PRIORITY_KEY") };
    }

    #[test]
    fn env_fallback_when_not_in_file() {
        unsafe { std::env::set_var("TALENTSCOUT_TEST_ENV_ONLY_KEY", "from-env") };
        let store = CredentialStore::env_only();
        let value = store.lookup("TALENTSCOUT_TEST_ENV_ONLY_KEY").unwrap();
        assert_eq!(value.expose_secret(), "from-env");
        unsafe { std::env::remove_var("TALENTSCOUT_TEST_ENV_ONLY_KEY") };
    }

    #[test]
    fn empty_values_count_as_absent() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "TALENTSCOUT_TEST_EMPTY_KEY = \"\"").unwrap();
        let store = CredentialStore::load(file.path()).unwrap();
        assert!(store.lookup("TALENTSCOUT_TEST_EMPTY_KEY").is_none());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();
        let err = CredentialStore::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
