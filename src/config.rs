// src/config.rs

use std::{env, path::PathBuf, time::Duration};

pub const USER_AGENT: &str = concat!("wikitable/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Operator input that ends the table-name loop.
pub const QUIT_SENTINEL: &str = "-1";

/// Indentation used for every JSON file we write.
pub const JSON_INDENT: &[u8] = b"    ";

/// Environment variable naming the parent of the per-page output directory.
pub const OUT_DIR_ENV: &str = "WIKITABLE_OUT_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the `<page-title>/` folder is created in.
    pub out_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_root: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        match env::var_os(OUT_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self {
                out_root: PathBuf::from(dir),
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_writes_next_to_cwd() {
        assert_eq!(Config::default().out_root, PathBuf::from("."));
    }

    #[test]
    fn indent_is_four_spaces() {
        assert_eq!(JSON_INDENT.len(), 4);
        assert!(JSON_INDENT.iter().all(|b| *b == b' '));
    }
}
