//! The eight winnable lines of the 3x3 grid.

use serde::{Deserialize, Serialize};

/// Three board indices that win when uniformly occupied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line(pub [usize; 3]);

impl Line {
    /// The indices making up this line.
    #[inline]
    #[must_use]
    pub const fn cells(self) -> [usize; 3] {
        self.0
    }

    /// Check if a board index is part of this line.
    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// All winnable lines in scan order: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    Line([0, 1, 2]),
    Line([3, 4, 5]),
    Line([6, 7, 8]),
    Line([0, 3, 6]),
    Line([1, 4, 7]),
    Line([2, 5, 8]),
    Line([0, 4, 8]),
    Line([2, 4, 6]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_distinct_and_in_bounds() {
        for (i, a) in LINES.iter().enumerate() {
            assert!(a.cells().iter().all(|&c| c < 9));
            for b in &LINES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_center_is_on_four_lines() {
        assert_eq!(LINES.iter().filter(|l| l.contains(4)).count(), 4);
        assert_eq!(LINES.iter().filter(|l| l.contains(0)).count(), 3);
        assert_eq!(LINES.iter().filter(|l| l.contains(1)).count(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(LINES[6].to_string(), "[0, 4, 8]");
    }
}
