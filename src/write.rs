// src/write.rs

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::config::JSON_INDENT;

/// Replace characters that would let a name escape its directory.
pub fn safe_component(name: &str) -> String {
    if matches!(name, "." | "..") {
        return "_".to_owned();
    }
    name.chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect()
}

/// Create (if needed) the output directory for a page titled `title`.
pub fn page_dir(root: &Path, title: &str) -> Result<PathBuf> {
    let dir = root.join(safe_component(title));
    fs::create_dir_all(&dir).with_context(|| format!("creating {:?}", dir))?;
    Ok(dir)
}

/// `<dir>/<table name>.json`
pub fn table_path(dir: &Path, table_name: &str) -> PathBuf {
    dir.join(format!("{}.json", safe_component(table_name)))
}

/// Serialise `value` as indented JSON to `w`, followed by nothing else.
pub fn to_writer_indented<W: Write, T: Serialize + ?Sized>(w: W, value: &T) -> Result<()> {
    let mut ser = Serializer::with_formatter(w, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut ser).context("serialising JSON")?;
    Ok(())
}

/// Write `value` to `path` as indented JSON, replacing any existing file.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {:?}", path))?;
    let mut w = BufWriter::new(file);
    to_writer_indented(&mut w, value)?;
    w.flush().with_context(|| format!("writing {:?}", path))?;
    debug!(path = %path.display(), "Wrote JSON");
    Ok(())
}
