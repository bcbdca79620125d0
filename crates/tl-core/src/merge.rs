//! Merge loader: seeds the table from a previously written LUT file.
//!
//! Only runs in append mode. Parsing is strict: the prefix must be
//! present, the token count must be a whole number of (key + 8 values)
//! groups, and every token must be numeric. Any violation is fatal, since
//! a half-parsed table would corrupt the rewritten output; nothing is
//! seeded and nothing is ever written from a failed parse.

use std::fs;
use std::path::Path;

use tl_common::{CalibrationTable, CalibrationVector, Error, Result, VECTOR_LEN};

use crate::format::PREFIX;

const GROUP_LEN: usize = VECTOR_LEN + 1;

/// Seed `table` from the file at `path`.
///
/// A missing file is created empty and seeds nothing, so the session can
/// still rewrite it at flush time.
pub fn seed_from_file(path: &Path, table: &mut CalibrationTable) -> Result<()> {
    if !path.exists() {
        fs::File::create(path)?;
        return Ok(());
    }

    let content = fs::read_to_string(path)?;
    let entries = parse(path, &content)?;
    let count = entries.len();
    for (key, vector) in entries {
        table.insert(key, vector);
    }
    tracing::debug!(path = %path.display(), entries = count, "existing table merged");
    Ok(())
}

/// Parse the on-disk format into entries, in file order.
pub fn parse(path: &Path, content: &str) -> Result<Vec<(f64, CalibrationVector)>> {
    let content = content.trim_end();
    if content.is_empty() {
        return Ok(Vec::new());
    }

    let body = content.strip_prefix(PREFIX).ok_or_else(|| Error::MalformedTable {
        path: path.to_path_buf(),
        reason: format!("missing `{PREFIX}` prefix"),
    })?;
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let tokens: Vec<&str> = body.split(',').collect();
    if tokens.len() % GROUP_LEN != 0 {
        return Err(Error::MalformedTable {
            path: path.to_path_buf(),
            reason: format!(
                "{} tokens is not a whole number of (key + {VECTOR_LEN} values) groups",
                tokens.len()
            ),
        });
    }

    let mut entries = Vec::with_capacity(tokens.len() / GROUP_LEN);
    for group in tokens.chunks(GROUP_LEN) {
        let key = parse_token(path, group[0])?;
        let mut values = [0.0; VECTOR_LEN];
        for (slot, token) in values.iter_mut().zip(&group[1..]) {
            *slot = parse_token(path, token)?;
        }
        entries.push((key, CalibrationVector::from_raw(values)));
    }
    Ok(entries)
}

fn parse_token(path: &Path, token: &str) -> Result<f64> {
    token.trim().parse::<f64>().map_err(|_| Error::MalformedTable {
        path: path.to_path_buf(),
        reason: format!("non-numeric token `{}`", token.trim()),
    })
}
