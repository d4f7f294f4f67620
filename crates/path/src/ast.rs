//! Parsed forms of a dotted path.
use std::fmt;

/// One `.`-separated component of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A mapping lookup (e.g., `name`).
    Key(String),
    /// A mapping lookup followed by a sequence index (e.g., `items[2]`).
    /// An empty `name` indexes the current value.
    Indexed { name: String, index: usize },
    /// Fan-out over a sequence (e.g., `items[*]`). An empty `name` expands
    /// the current value.
    Wildcard(String),
}

impl Segment {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(name) => write!(f, "{}", name),
            Segment::Indexed { name, index } => write!(f, "{}[{}]", name, index),
            Segment::Wildcard(name) => write!(f, "{}[*]", name),
        }
    }
}

/// A single addressable step used when writing into a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyStep {
    Field(String),
    Index(usize),
}

impl fmt::Display for KeyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyStep::Field(name) => write!(f, "{}", name),
            KeyStep::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// A parsed dotted path. Always holds at least one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub(crate) raw: String,
    pub(crate) segments: Vec<Segment>,
}

impl Path {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The path text exactly as it was given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn ends_with_wildcard(&self) -> bool {
        self.segments.last().is_some_and(Segment::is_wildcard)
    }

    /// Tokenises the path into write steps, e.g. `a[0].b` -> `a`, `[0]`, `b`.
    ///
    /// Returns `None` when the path contains a wildcard, which has no single
    /// write location.
    pub fn key_steps(&self) -> Option<Vec<KeyStep>> {
        let mut steps = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Key(name) => steps.push(KeyStep::Field(name.clone())),
                Segment::Indexed { name, index } => {
                    if !name.is_empty() {
                        steps.push(KeyStep::Field(name.clone()));
                    }
                    steps.push(KeyStep::Index(*index));
                }
                Segment::Wildcard(_) => return None,
            }
        }
        Some(steps)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
