//! The resolution engine: walks a parsed [`Path`] over a [`Document`].
//!
//! Absence is never an error here. A missing key, an out-of-range index, a
//! type mismatch or an explicit `null` mid-path all resolve to `None`.

use super::ast::{Path, Segment};
use dotwalk_types::Document;
use log::trace;

/// Resolves a single segment against the current value.
///
/// Wildcards return the whole sequence; fanning the rest of the path out over
/// its elements is the job of [`resolve`].
pub fn resolve_segment<'d>(current: &'d Document, segment: &Segment) -> Option<&'d Document> {
    match segment {
        Segment::Key(name) => lookup(current, name),
        Segment::Indexed { name, index } => target(current, name)
            .and_then(Document::as_sequence)
            .and_then(|items| items.get(*index)),
        Segment::Wildcard(name) => target(current, name).filter(|doc| doc.is_sequence()),
    }
}

/// Resolves a full path. Returns `None` when any step is absent.
///
/// The result is cloned out of the borrowed document, so the caller's value
/// is never shared with or mutated through the result.
pub fn resolve(document: &Document, path: &Path) -> Option<Document> {
    resolve_segments(document, path.segments())
}

/// Flattens one level of list-of-lists produced by a trailing wildcard.
///
/// `null` entries are dropped first. The remaining entries are concatenated
/// only if there is at least one and every one of them is a sequence;
/// anything else is returned unchanged.
pub fn flatten_wildcard(result: Document) -> Document {
    let Document::Sequence(items) = result else {
        return result;
    };
    let mut present = items.iter().filter(|item| !item.is_absent()).peekable();
    let flattenable = present.peek().is_some() && present.all(Document::is_sequence);
    if !flattenable {
        return Document::Sequence(items);
    }
    Document::Sequence(
        items
            .into_iter()
            .filter_map(|item| match item {
                Document::Sequence(inner) => Some(inner),
                _ => None,
            })
            .flatten()
            .collect(),
    )
}

fn resolve_segments(document: &Document, segments: &[Segment]) -> Option<Document> {
    let mut current = document;
    for (position, segment) in segments.iter().enumerate() {
        let Some(next) = resolve_segment(current, segment).filter(|doc| !doc.is_absent()) else {
            trace!("Segment '{}' resolved to nothing, stopping", segment);
            return None;
        };

        if let (Segment::Wildcard(_), Document::Sequence(items)) = (segment, next) {
            let rest = &segments[position + 1..];
            let expanded = if rest.is_empty() {
                next.clone()
            } else {
                trace!("Fanning out '{}' over {} items", segment, items.len());
                Document::Sequence(
                    items
                        .iter()
                        .map(|item| resolve_segments(item, rest).unwrap_or_default())
                        .collect(),
                )
            };
            return Some(finish(expanded, segments));
        }
        current = next;
    }
    Some(finish(current.clone(), segments))
}

fn finish(result: Document, segments: &[Segment]) -> Document {
    if segments.last().is_some_and(Segment::is_wildcard) {
        flatten_wildcard(result)
    } else {
        result
    }
}

fn lookup<'d>(current: &'d Document, name: &str) -> Option<&'d Document> {
    current.as_mapping()?.get(name)
}

/// An empty name addresses the current value itself.
fn target<'d>(current: &'d Document, name: &str) -> Option<&'d Document> {
    if name.is_empty() {
        Some(current)
    } else {
        lookup(current, name)
    }
}
