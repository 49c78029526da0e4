// src/cli.rs

use anyhow::{bail, Result};

pub const USAGE: &str = "Usage: wikitable [PAGE_URL [TABLE_NAME ...]]

Without arguments, asks for a page URL and then for table names until -1.
With a URL only, asks for table names. With table names, exports each in turn.
Each table is written to <page title>/<table name>.json.
Set WIKITABLE_OUT_DIR to choose where the page directory is created.";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub url: Option<String>,
    pub tables: Vec<String>,
    pub help: bool,
}

impl Args {
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Args::default();
        for a in args.into_iter().map(Into::into) {
            match a.as_str() {
                "-h" | "--help" => parsed.help = true,
                // Table names may legitimately start with '-', so only flags
                // before the URL are rejected.
                s if s.starts_with("--") && parsed.url.is_none() => {
                    bail!("Unknown arg: {}", s)
                }
                _ if parsed.url.is_none() => parsed.url = Some(a),
                _ => parsed.tables.push(a),
            }
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_is_fully_interactive() -> Result<()> {
        assert_eq!(Args::parse(Vec::<String>::new())?, Args::default());
        Ok(())
    }

    #[test]
    fn url_then_tables() -> Result<()> {
        let a = Args::parse(["https://en.wikipedia.org/wiki/X", "Results", "Medal table"])?;
        assert_eq!(a.url.as_deref(), Some("https://en.wikipedia.org/wiki/X"));
        assert_eq!(a.tables, vec!["Results", "Medal table"]);
        assert!(!a.help);
        Ok(())
    }

    #[test]
    fn help_flag() -> Result<()> {
        assert!(Args::parse(["--help"])?.help);
        assert!(Args::parse(["-h"])?.help);
        Ok(())
    }

    #[test]
    fn unknown_flag_before_url_is_rejected() {
        assert!(Args::parse(["--verbose"]).is_err());
    }

    #[test]
    fn dashed_table_name_after_url_is_kept() -> Result<()> {
        let a = Args::parse(["https://x.org/wiki/Y", "--2020--"])?;
        assert_eq!(a.tables, vec!["--2020--"]);
        Ok(())
    }
}
