use crate::error::{Result, SegcatError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DIGITS: usize = 9;
pub const DEFAULT_DIR: &str = "/tmp/capture/";
pub const DEFAULT_EXTENSION: &str = "ts";
pub const DEFAULT_LOG_FILE: &str = "/tmp/concat.log";
/// Widest useful index: `u64::MAX` has 20 decimal digits.
pub const MAX_DIGITS: usize = 20;

/// Deployment settings for one capture directory. Missing keys in a config
/// file fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Digits in the zero-padded segment index, e.g. `out-0001.ts` => 4.
    pub digits: usize,
    /// Directory holding the segments.
    pub dir: PathBuf,
    /// Text before the index, e.g. `out-0001.ts` => "out-".
    pub prefix: String,
    /// Extension without the dot.
    pub extension: String,
    /// Append-only run log.
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            dir: PathBuf::from(DEFAULT_DIR),
            prefix: String::new(),
            extension: DEFAULT_EXTENSION.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read(path)
            .map_err(|e| SegcatError::Config(format!("{}: {e}", path.display())))?;
        let cfg: Config = serde_json::from_slice(&raw)
            .map_err(|e| SegcatError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.digits == 0 {
            return Err(SegcatError::Config("digits must be at least 1".into()));
        }
        if self.digits > MAX_DIGITS {
            return Err(SegcatError::Config(format!(
                "digits must be at most {MAX_DIGITS}, got {}",
                self.digits
            )));
        }
        if self.extension.is_empty() {
            return Err(SegcatError::Config("extension must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_capture_layout() {
        let cfg = Config::default();
        assert_eq!(cfg.digits, 9);
        assert_eq!(cfg.dir, PathBuf::from("/tmp/capture/"));
        assert_eq!(cfg.prefix, "");
        assert_eq!(cfg.extension, "ts");
        assert_eq!(cfg.log_file, PathBuf::from("/tmp/concat.log"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn load_fills_missing_keys() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{ "digits": 4, "prefix": "out-" }}"#).unwrap();
        let cfg = Config::load(f.path()).unwrap();
        assert_eq!(cfg.digits, 4);
        assert_eq!(cfg.prefix, "out-");
        assert_eq!(cfg.extension, "ts");
    }

    #[test]
    fn load_rejects_bad_values() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{ "digits": 0 }}"#).unwrap();
        assert!(matches!(Config::load(f.path()), Err(SegcatError::Config(_))));

        let mut g = tempfile::NamedTempFile::new().unwrap();
        write!(g, "not json").unwrap();
        assert!(matches!(Config::load(g.path()), Err(SegcatError::Config(_))));
    }

    #[test]
    fn digits_are_capped() {
        let at_cap = Config {
            digits: MAX_DIGITS,
            ..Default::default()
        };
        assert!(at_cap.validate().is_ok());

        let huge = Config {
            digits: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(huge.validate(), Err(SegcatError::Config(_))));
    }

    #[test]
    fn missing_file_names_the_path() {
        let tmp = tempfile::tempdir().unwrap();
        let p = tmp.path().join("absent.json");
        match Config::load(&p) {
            Err(SegcatError::Config(msg)) => assert!(msg.contains("absent.json"), "{msg}"),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn empty_extension_is_invalid() {
        let cfg = Config {
            extension: String::new(),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
