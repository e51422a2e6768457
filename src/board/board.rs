//! Board structure with box ownership and incremental apply/undo

use super::lineset::LineSet;
use super::{Move, Orientation, Owner, Player, MAX_BOXES};
use crate::error::{Error, Result};

/// Game board: drawn lines, box owners and the score pair.
///
/// `rows` and `columns` count line intersections, so the box grid is
/// `(rows - 1) x (columns - 1)`. Search mutates the board in place through
/// [`Board::apply`] and [`Board::undo`], which must be called in strict
/// LIFO order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// `rows x (columns - 1)`
    horizontal: LineSet,
    /// `(rows - 1) x columns`
    vertical: LineSet,
    /// `(rows - 1) x (columns - 1)`, row-major
    owners: Vec<Owner>,
    engine_score: u32,
    human_score: u32,
}

impl Board {
    /// Create an empty board with the given number of intersections.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows < 2 || columns < 2 {
            return Err(Error::invalid(format!(
                "board needs at least 2x2 intersections, got {rows}x{columns}"
            )));
        }
        if rows - 1 > MAX_BOXES || columns - 1 > MAX_BOXES {
            return Err(Error::invalid(format!(
                "board of {}x{} boxes exceeds the {MAX_BOXES}x{MAX_BOXES} limit",
                rows - 1,
                columns - 1
            )));
        }
        Ok(Self {
            rows,
            columns,
            horizontal: LineSet::new(rows, columns - 1),
            vertical: LineSet::new(rows - 1, columns),
            owners: vec![Owner::Unowned; (rows - 1) * (columns - 1)],
            engine_score: 0,
            human_score: 0,
        })
    }

    /// Create an empty square board of `boxes x boxes` boxes.
    pub fn with_boxes(boxes: usize) -> Result<Self> {
        Self::new(boxes + 1, boxes + 1)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn box_rows(&self) -> usize {
        self.rows - 1
    }

    #[inline]
    pub fn box_cols(&self) -> usize {
        self.columns - 1
    }

    #[inline]
    pub fn total_boxes(&self) -> usize {
        self.box_rows() * self.box_cols()
    }

    /// Total number of lines, drawn or not
    #[inline]
    pub fn total_lines(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    #[inline]
    pub fn horizontal_lines(&self) -> &LineSet {
        &self.horizontal
    }

    #[inline]
    pub fn vertical_lines(&self) -> &LineSet {
        &self.vertical
    }

    /// Check whether a move addresses a line on this board
    pub fn contains(&self, mv: Move) -> bool {
        let (r, c) = (mv.row as usize, mv.col as usize);
        match mv.orientation {
            Orientation::Horizontal => r < self.rows && c < self.columns - 1,
            Orientation::Vertical => r < self.rows - 1 && c < self.columns,
        }
    }

    /// Check if the line is drawn
    #[inline]
    pub fn is_drawn(&self, mv: Move) -> bool {
        match mv.orientation {
            Orientation::Horizontal => self.horizontal.get(mv.row as usize, mv.col as usize),
            Orientation::Vertical => self.vertical.get(mv.row as usize, mv.col as usize),
        }
    }

    /// Draw a line without any box or score processing.
    /// Use `apply` for game moves.
    #[inline]
    pub fn draw_line(&mut self, mv: Move) {
        match mv.orientation {
            Orientation::Horizontal => self.horizontal.set(mv.row as usize, mv.col as usize),
            Orientation::Vertical => self.vertical.set(mv.row as usize, mv.col as usize),
        }
    }

    /// Erase a line without any box or score processing
    #[inline]
    pub fn erase_line(&mut self, mv: Move) {
        match mv.orientation {
            Orientation::Horizontal => self.horizontal.clear(mv.row as usize, mv.col as usize),
            Orientation::Vertical => self.vertical.clear(mv.row as usize, mv.col as usize),
        }
    }

    /// Mark every line drawn and forget box ownership.
    ///
    /// Turn reconstruction starts from here and erases the lines that are
    /// still open.
    pub fn fill_lines(&mut self) {
        self.horizontal.fill();
        self.vertical.fill();
        self.owners.fill(Owner::Unowned);
    }

    /// Count drawn sides of a box.
    ///
    /// Coordinates outside the box grid count as 0 so callers can probe
    /// neighbours without bounds checks.
    pub fn count_sides(&self, box_row: i32, box_col: i32) -> u8 {
        if box_row < 0
            || box_col < 0
            || box_row as usize >= self.box_rows()
            || box_col as usize >= self.box_cols()
        {
            return 0;
        }
        let (r, c) = (box_row as usize, box_col as usize);
        u8::from(self.horizontal.get(r, c))
            + u8::from(self.horizontal.get(r + 1, c))
            + u8::from(self.vertical.get(r, c))
            + u8::from(self.vertical.get(r, c + 1))
    }

    /// Boxes bordered by a line: one on the board edge, two inside.
    ///
    /// The box below (horizontal) or to the right (vertical) comes first.
    pub fn adjacent_boxes(&self, mv: Move) -> [Option<(usize, usize)>; 2] {
        let (r, c) = (mv.row as usize, mv.col as usize);
        match mv.orientation {
            Orientation::Horizontal => [
                (r < self.box_rows()).then_some((r, c)),
                (r > 0).then(|| (r - 1, c)),
            ],
            Orientation::Vertical => [
                (c < self.box_cols()).then_some((r, c)),
                (c > 0).then(|| (r, c - 1)),
            ],
        }
    }

    /// Owner of a box
    #[inline]
    pub fn owner(&self, box_row: usize, box_col: usize) -> Owner {
        self.owners[self.box_index(box_row, box_col)]
    }

    #[inline]
    fn box_index(&self, box_row: usize, box_col: usize) -> usize {
        box_row * self.box_cols() + box_col
    }

    /// Draw a line for `player` and claim every box it closes.
    ///
    /// Returns the number of boxes completed (0, 1 or 2). A positive result
    /// means `player` moves again.
    pub fn apply(&mut self, mv: Move, player: Player) -> u8 {
        debug_assert!(!self.is_drawn(mv), "apply on drawn line {mv:?}");
        self.draw_line(mv);

        let mut completed = 0;
        for (r, c) in self.adjacent_boxes(mv).into_iter().flatten() {
            let idx = self.box_index(r, c);
            if self.count_sides(r as i32, c as i32) == 4 && self.owners[idx] == Owner::Unowned {
                self.owners[idx] = player.into();
                completed += 1;
            }
        }
        if completed > 0 {
            self.add_score(player.into(), u32::from(completed));
        }
        completed
    }

    /// Exact inverse of [`Board::apply`].
    ///
    /// While `mv` is still drawn, a neighbouring box with four sides can only
    /// have been closed by `mv` itself, so its owner is reset and that owner's
    /// score decremented before the line is erased.
    pub fn undo(&mut self, mv: Move) {
        debug_assert!(self.is_drawn(mv), "undo on open line {mv:?}");
        for (r, c) in self.adjacent_boxes(mv).into_iter().flatten() {
            if self.count_sides(r as i32, c as i32) != 4 {
                continue;
            }
            let idx = self.box_index(r, c);
            let owner = std::mem::take(&mut self.owners[idx]);
            self.sub_score(owner, 1);
        }
        self.erase_line(mv);
    }

    #[inline]
    fn add_score(&mut self, owner: Owner, count: u32) {
        match owner {
            Owner::Engine => self.engine_score += count,
            Owner::Human => self.human_score += count,
            Owner::Unowned => {}
        }
        debug_assert!(
            (self.engine_score + self.human_score) as usize <= self.total_boxes(),
            "scores exceed box count"
        );
    }

    #[inline]
    fn sub_score(&mut self, owner: Owner, count: u32) {
        match owner {
            Owner::Engine => {
                debug_assert!(self.engine_score >= count, "engine score underflow");
                self.engine_score = self.engine_score.saturating_sub(count);
            }
            Owner::Human => {
                debug_assert!(self.human_score >= count, "human score underflow");
                self.human_score = self.human_score.saturating_sub(count);
            }
            Owner::Unowned => {}
        }
    }

    /// Score of one side
    #[inline]
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::Engine => self.engine_score,
            Player::Human => self.human_score,
        }
    }

    #[inline]
    pub fn engine_score(&self) -> u32 {
        self.engine_score
    }

    #[inline]
    pub fn human_score(&self) -> u32 {
        self.human_score
    }

    /// Overwrite the score pair (turn reconstruction)
    pub fn set_scores(&mut self, engine: u32, human: u32) -> Result<()> {
        let sum = engine.checked_add(human).map_or(usize::MAX, |s| s as usize);
        if sum > self.total_boxes() {
            return Err(Error::invalid(format!(
                "scores {engine}+{human} exceed {} boxes",
                self.total_boxes()
            )));
        }
        self.engine_score = engine;
        self.human_score = human;
        Ok(())
    }

    /// Exchange the two sides: scores and box owners.
    ///
    /// Lets the engine, which always maximizes for [`Player::Engine`], pick a
    /// move for the human side.
    pub fn swap_sides(&mut self) {
        std::mem::swap(&mut self.engine_score, &mut self.human_score);
        for owner in &mut self.owners {
            *owner = match *owner {
                Owner::Engine => Owner::Human,
                Owner::Human => Owner::Engine,
                Owner::Unowned => Owner::Unowned,
            };
        }
    }

    /// Number of lines not yet drawn
    #[inline]
    pub fn remaining_lines(&self) -> usize {
        self.total_lines() - self.horizontal.count() - self.vertical.count()
    }

    /// Number of boxes with all four sides drawn
    pub fn closed_boxes(&self) -> usize {
        (0..self.box_rows())
            .flat_map(|r| (0..self.box_cols()).map(move |c| (r, c)))
            .filter(|&(r, c)| self.count_sides(r as i32, c as i32) == 4)
            .count()
    }

    /// Game over: every box has been scored
    #[inline]
    pub fn is_terminal(&self) -> bool {
        (self.engine_score + self.human_score) as usize == self.total_boxes()
    }
}
