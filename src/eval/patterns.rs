//! Scoring weights for run patterns
//!
//! A run is a maximal line of consecutive same-stone cells along one of the
//! four axes. Longer runs are worth an order of magnitude more than the
//! next length down, so a single four outweighs any number of twos the
//! opponent can have accumulated at shallow depth.

/// Weights for run lengths, signed by side in the heuristic.
pub struct RunScore;

impl RunScore {
    /// Five in a row: the game is decided.
    pub const FIVE: i32 = 1_000;
    /// Four in a row with room to extend.
    pub const FOUR: i32 = 100;
    /// Three in a row with room to extend.
    pub const THREE: i32 = 10;
    /// Two in a row with room to extend.
    pub const TWO: i32 = 1;

    /// Weight for a run of `len` cells with `open_ends` unblocked ends.
    ///
    /// A run shorter than five that is blocked on both ends can never grow
    /// into a five and scores nothing. Runs of five or more score
    /// regardless of their ends.
    #[inline]
    pub fn for_run(len: usize, open_ends: u8) -> i32 {
        if len >= 5 {
            return Self::FIVE;
        }
        if open_ends == 0 {
            return 0;
        }
        match len {
            4 => Self::FOUR,
            3 => Self::THREE,
            2 => Self::TWO,
            _ => 0,
        }
    }
}
