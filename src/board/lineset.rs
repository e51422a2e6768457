//! Packed bit matrix for drawn lines

/// Row-major bit matrix backed by `u64` words.
///
/// Holds one orientation of lines: `rows x (columns - 1)` horizontal lines
/// or `(rows - 1) x columns` vertical lines. A set bit means the line is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSet {
    rows: usize,
    cols: usize,
    bits: Vec<u64>,
}

impl LineSet {
    /// Create a matrix with every line undrawn
    pub fn new(rows: usize, cols: usize) -> Self {
        let words = (rows * cols).div_ceil(64);
        Self {
            rows,
            cols,
            bits: vec![0; words],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of lines in the matrix
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> (usize, u64) {
        debug_assert!(row < self.rows && col < self.cols, "line ({row}, {col}) out of range");
        let idx = row * self.cols + col;
        (idx / 64, 1u64 << (idx % 64))
    }

    /// Check if line is drawn
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        let (word, mask) = self.index(row, col);
        self.bits[word] & mask != 0
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize) {
        let (word, mask) = self.index(row, col);
        self.bits[word] |= mask;
    }

    #[inline]
    pub fn clear(&mut self, row: usize, col: usize) {
        let (word, mask) = self.index(row, col);
        self.bits[word] &= !mask;
    }

    /// Mark every line drawn
    pub fn fill(&mut self) {
        let len = self.len();
        for (i, word) in self.bits.iter_mut().enumerate() {
            let remaining = len - i * 64;
            *word = if remaining >= 64 {
                u64::MAX
            } else {
                (1u64 << remaining) - 1
            };
        }
    }

    /// Count drawn lines (popcount)
    #[inline]
    pub fn count(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Iterate over undrawn lines in row-major order
    pub fn iter_open(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
            .filter(move |&(r, c)| !self.get(r, c))
    }
}
