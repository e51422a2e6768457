//! Evaluation weights
//!
//! Tuned defaults: +10 per net box,
//! -5 per three-sided box, +1 per two-sided box and half a point per
//! one-sided box, truncated after summing.

/// Weights for the static evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    /// Per box of net score (engine minus opponent)
    pub score: i32,
    /// Penalty per box with exactly three sides drawn
    pub three_sides: i32,
    /// Bonus per box with exactly two sides drawn
    pub two_sides: i32,
    /// Numerator of the per-box weight for one-sided boxes
    pub one_side_num: i32,
    /// Denominator of the per-box weight for one-sided boxes (> 0)
    pub one_side_den: i32,
}

impl EvalWeights {
    pub const DEFAULT_SCORE: i32 = 10;
    pub const DEFAULT_THREE_SIDES: i32 = 5;
    pub const DEFAULT_TWO_SIDES: i32 = 1;

    /// Net score plus a flat three-side penalty, nothing else
    #[must_use]
    pub const fn score_only() -> Self {
        Self {
            score: Self::DEFAULT_SCORE,
            three_sides: 1,
            two_sides: 0,
            one_side_num: 0,
            one_side_den: 1,
        }
    }

    /// One-sided contribution for `count` boxes, truncated toward zero
    #[inline]
    #[must_use]
    pub fn one_side_term(&self, count: i32) -> i32 {
        debug_assert!(self.one_side_den > 0, "one_side_den must be positive");
        count * self.one_side_num / self.one_side_den.max(1)
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            score: Self::DEFAULT_SCORE,
            three_sides: Self::DEFAULT_THREE_SIDES,
            two_sides: Self::DEFAULT_TWO_SIDES,
            one_side_num: 1,
            one_side_den: 2,
        }
    }
}
