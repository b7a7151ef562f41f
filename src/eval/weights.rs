//! Line weights for the drop-game evaluator

/// Score contributed by an uncontested line, by how many pieces it holds.
///
/// Weights grow super-linearly so one three-in-a-row outweighs any number
/// of scattered singles the board can actually hold.
pub struct LineScore;

impl LineScore {
    /// One piece on an otherwise empty line.
    pub const SINGLE: i32 = 1;
    /// Two pieces, line still open.
    pub const DOUBLE: i32 = 10;
    /// Three pieces, one cell from winning.
    pub const TRIPLE: i32 = 100;

    /// Weight for `count` pieces on an uncontested line.
    #[inline]
    #[must_use]
    pub const fn for_count(count: u32) -> i32 {
        match count {
            1 => Self::SINGLE,
            2 => Self::DOUBLE,
            3 => Self::TRIPLE,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_grow_super_linearly() {
        assert!(LineScore::DOUBLE > LineScore::SINGLE);
        assert!(LineScore::TRIPLE > LineScore::DOUBLE);
        // The catalog holds 69 lines, so one triple beats any board of singles.
        assert!(LineScore::TRIPLE > 69 * LineScore::SINGLE);
    }

    #[test]
    fn test_empty_and_full_lines_carry_no_weight() {
        assert_eq!(LineScore::for_count(0), 0);
        assert_eq!(LineScore::for_count(4), 0);
    }
}
