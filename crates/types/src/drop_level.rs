//! The relative-ancestor marker used to redirect a deletion upwards.

use std::fmt;

/// How many key steps above a located value a deletion should land.
///
/// Always negative: `-1` drops the located value itself, `-2` its parent,
/// and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropLevel(i32);

impl DropLevel {
    pub const THIS_OBJECT: DropLevel = DropLevel(-1);
    pub const PARENT: DropLevel = DropLevel(-2);
    pub const GRANDPARENT: DropLevel = DropLevel(-3);
    pub const GREAT_GRANDPARENT: DropLevel = DropLevel(-4);

    /// Creates a drop level, rejecting zero and positive values.
    pub fn new(level: i32) -> Option<Self> {
        (level < 0).then_some(Self(level))
    }

    /// The raw signed level.
    pub fn value(self) -> i32 {
        self.0
    }

    /// The number of trailing key steps to strip from the write path.
    pub fn levels(self) -> usize {
        self.0.unsigned_abs() as usize
    }
}

impl fmt::Display for DropLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DROP({})", self.0)
    }
}
