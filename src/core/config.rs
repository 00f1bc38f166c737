use std::env;
use std::path::PathBuf;

pub const RULES_PATH_VAR: &str = "SUMMARY_RULES_PATH";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// JSON rule table replacing the built-in one.
    pub summary_rules_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let summary_rules_path = match env::var(RULES_PATH_VAR) {
            Ok(raw) if raw.trim().is_empty() => {
                return Err(format!("{RULES_PATH_VAR}: set but empty"));
            }
            Ok(raw) => Some(PathBuf::from(raw.trim())),
            Err(env::VarError::NotPresent) => None,
            Err(e) => return Err(format!("{RULES_PATH_VAR}: {e}")),
        };

        Ok(Self { summary_rules_path })
    }
}
