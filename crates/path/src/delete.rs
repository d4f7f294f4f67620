//! Tombstone deletion.
//!
//! Deleting a path writes `null` at its location in a copy of the document.
//! Sequence entries are nulled rather than removed so every other index into
//! the same sequence keeps pointing at the same element. A `Document::Drop`
//! marker found at the path moves the write up that many key steps.

use crate::ast::{KeyStep, Path};
use crate::engine;
use crate::error::PathError;
use crate::parser::parse_path;
use dotwalk_types::Document;
use log::{debug, warn};
use std::collections::HashSet;

/// Returns a copy of `document` with the value at `path` replaced by `null`.
///
/// Fails if the path (after applying any drop marker) does not lead to a
/// writable slot. The input is never modified.
pub fn delete(document: &Document, path: &str) -> Result<Document, PathError> {
    let parsed = parse_path(path)?;
    let steps = target_steps(document, &parsed)?;
    write_tombstone(document, &parsed, &steps)
}

/// Deletes several paths in order, skipping repeats and absent values.
///
/// Two paths are repeats when they tokenise to the same write steps
/// (`a[0]` and `a.[0]` are different paths but the same location). A path
/// whose drop marker removes the whole document ends processing early.
pub fn delete_all<I, S>(document: &Document, paths: I) -> Result<Document, PathError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = document.clone();
    let mut seen: HashSet<Vec<KeyStep>> = HashSet::new();
    for path in paths {
        let parsed = parse_path(path.as_ref())?;
        let steps = parsed
            .key_steps()
            .ok_or_else(|| not_addressable(&parsed, &result))?;
        if seen.contains(&steps) {
            debug!("Skipping repeated delete of '{}'", parsed);
            continue;
        }
        if engine::resolve(&result, &parsed).is_none_or(|v| v.is_absent()) {
            warn!("Nothing to delete at '{}', skipping", parsed);
            continue;
        }

        let target = target_steps(&result, &parsed)?;
        if target.is_empty() {
            return Ok(Document::mapping());
        }
        result = write_tombstone(&result, &parsed, &target)?;
        seen.insert(steps);
        seen.insert(target);
    }
    Ok(result)
}

/// The write steps for `path`, shortened by any drop marker stored there.
fn target_steps(document: &Document, path: &Path) -> Result<Vec<KeyStep>, PathError> {
    let mut steps = path
        .key_steps()
        .ok_or_else(|| not_addressable(path, document))?;

    let marker = engine::resolve(document, path).and_then(|v| v.as_drop_level());
    if let Some(level) = marker {
        if level.levels() > steps.len() {
            return Err(PathError::InvalidDropLevel {
                path: path.to_string(),
                level: level.value(),
            });
        }
        steps.truncate(steps.len() - level.levels());
        debug!(
            "Drop marker {} at '{}' redirects delete to {} steps",
            level,
            path,
            steps.len()
        );
    }
    Ok(steps)
}

fn write_tombstone(
    document: &Document,
    path: &Path,
    steps: &[KeyStep],
) -> Result<Document, PathError> {
    let mut copy = document.clone();
    let Some((last, parents)) = steps.split_last() else {
        debug!("Dropping the entire document for '{}'", path);
        return Ok(Document::mapping());
    };

    let mut current = &mut copy;
    for step in parents {
        current = step_into(current, step).map_err(|reason| failure(path, reason, document))?;
    }
    *slot(current, last).map_err(|reason| failure(path, reason, document))? = Document::Null;
    Ok(copy)
}

/// Descends one step, requiring the container and entry to exist.
fn step_into<'d>(current: &'d mut Document, step: &KeyStep) -> Result<&'d mut Document, String> {
    let kind = current.kind();
    match step {
        KeyStep::Field(name) => current
            .as_mapping_mut()
            .ok_or_else(|| format!("cannot read field '{}' from a {}", name, kind))?
            .get_mut(name)
            .ok_or_else(|| format!("field '{}' does not exist", name)),
        KeyStep::Index(index) => sequence_entry(current, *index, kind),
    }
}

/// The slot the tombstone is written into. A missing final field is created.
fn slot<'d>(current: &'d mut Document, step: &KeyStep) -> Result<&'d mut Document, String> {
    let kind = current.kind();
    match step {
        KeyStep::Field(name) => Ok(current
            .as_mapping_mut()
            .ok_or_else(|| format!("cannot write field '{}' into a {}", name, kind))?
            .entry(name.clone())
            .or_default()),
        KeyStep::Index(index) => sequence_entry(current, *index, kind),
    }
}

fn sequence_entry<'d>(
    current: &'d mut Document,
    index: usize,
    kind: &str,
) -> Result<&'d mut Document, String> {
    let items = current
        .as_sequence_mut()
        .ok_or_else(|| format!("cannot index [{}] into a {}", index, kind))?;
    let len = items.len();
    items
        .get_mut(index)
        .ok_or_else(|| format!("index [{}] is out of range for length {}", index, len))
}

fn not_addressable(path: &Path, document: &Document) -> PathError {
    failure(path, "wildcard segments do not address a single location".to_string(), document)
}

fn failure(path: &Path, reason: String, document: &Document) -> PathError {
    PathError::Delete {
        path: path.as_str().to_string(),
        reason,
        document: Box::new(document.clone()),
    }
}
