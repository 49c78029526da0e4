// src/session.rs

use anyhow::{Context, Result};
use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};
use tracing::{info, instrument, warn};

use crate::config::{Config, QUIT_SENTINEL};
use crate::locate::locate;
use crate::page::Page;
use crate::table::{extract, remove_empty_values};
use crate::write::{page_dir, table_path, write_json};

pub const TABLE_PROMPT: &str = "Enter a table name (-1 to quit): ";

/// Outcome of exporting one table name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Export {
    Written {
        path: PathBuf,
        /// Number of tables found under headings with this name.
        tables: usize,
        /// Records in the table that ended up in the file.
        records: usize,
    },
    Missing,
}

/// One page's worth of exports, all written under the page's directory.
pub struct Session<'p> {
    page: &'p Page,
    dir: PathBuf,
}

impl<'p> Session<'p> {
    /// Resolve the page title and create `<out_root>/<title>/`.
    pub fn open(page: &'p Page, config: &Config) -> Result<Self> {
        let title = page.title()?;
        let dir = page_dir(&config.out_root, &title)?;
        info!(title = %title, dir = %dir.display(), "Output directory ready");
        Ok(Self { page, dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Locate, extract, clean and write the table(s) under heading `name`.
    ///
    /// A name with no heading/table pair is not an error: nothing is written
    /// and `Export::Missing` comes back.
    #[instrument(level = "info", skip(self))]
    pub fn export(&self, name: &str) -> Result<Export> {
        let tables = locate(&self.page.document, name)
            .with_context(|| format!("locating table {:?} in {}", name, self.page.url))?;
        if tables.is_empty() {
            info!("No matching heading");
            return Ok(Export::Missing);
        }
        if tables.len() > 1 {
            warn!(matches = tables.len(), "Several headings match; the last one wins");
        }

        let path = table_path(&self.dir, name);
        let mut records = 0;
        for el in &tables {
            let table = remove_empty_values(
                extract(*el).with_context(|| format!("extracting table {:?}", name))?,
            );
            records = table.len();
            write_json(&path, &table)?;
        }
        info!(path = %path.display(), records, "Table written");
        Ok(Export::Written {
            path,
            tables: tables.len(),
            records,
        })
    }

    /// Export `name` and tell the operator what happened.
    pub fn report<W: Write>(&self, name: &str, out: &mut W) -> Result<Export> {
        let export = self.export(name)?;
        match &export {
            Export::Missing => writeln!(out, "No such table exists in {}", self.page.url)?,
            Export::Written { path, records, .. } => {
                writeln!(out, "Wrote {} records to {}", records, path.display())?
            }
        }
        Ok(export)
    }

    /// Export each name in order.
    pub fn batch<W, I, S>(&self, names: I, out: &mut W) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.report(name.as_ref(), out)?;
        }
        Ok(())
    }

    /// Prompt for table names until the quit sentinel or end of input.
    pub fn interactive<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        while let Some(name) = prompt(input, out, TABLE_PROMPT)? {
            if name.trim() == QUIT_SENTINEL {
                break;
            }
            self.report(&name, out)?;
        }
        Ok(())
    }
}

/// Print `msg`, then read one line without its line ending.
/// `None` at end of input.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, msg: &str) -> Result<Option<String>> {
    write!(out, "{}", msg)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line).context("reading operator input")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(|c| c == '\n' || c == '\r').to_owned()))
}
