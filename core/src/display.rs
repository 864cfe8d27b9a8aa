use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// # Frame Buffer
/// The Chip-8 display surface: 64x32 monochrome cells stored row-major.
///
/// Cells are only ever flipped by `toggle_pixel` (sprite drawing) or reset in bulk by
/// `clear`. Renderers read the cells through `rows`/`cells` and never write them.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    cells: [bool; DISPLAY_WIDTH * DISPLAY_HEIGHT],
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            cells: [false; DISPLAY_WIDTH * DISPLAY_HEIGHT],
        }
    }

    /// Turns every cell off
    pub fn clear(&mut self) {
        self.cells = [false; DISPLAY_WIDTH * DISPLAY_HEIGHT];
    }

    /// XORs the cell at (x, y) and returns whether it was lit before the flip.
    ///
    /// Both coordinates wrap around the edges of the display, so any value (including
    /// negative ones) addresses a cell on screen.
    ///
    /// # Arguments
    /// * `x` the column, wrapped into `0..DISPLAY_WIDTH`
    /// * `y` the row, wrapped into `0..DISPLAY_HEIGHT`
    pub fn toggle_pixel(&mut self, x: isize, y: isize) -> bool {
        let index = FrameBuffer::index(x, y);
        let was_set = self.cells[index];
        self.cells[index] ^= true;
        was_set
    }

    /// Whether the cell at (x, y) is lit; coordinates wrap like `toggle_pixel`
    pub fn pixel(&self, x: isize, y: isize) -> bool {
        self.cells[FrameBuffer::index(x, y)]
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Iterates over the rows of the display from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(DISPLAY_WIDTH)
    }

    /// Number of cells currently lit
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    fn index(x: isize, y: isize) -> usize {
        let x = x.rem_euclid(DISPLAY_WIDTH as isize) as usize;
        let y = y.rem_euclid(DISPLAY_HEIGHT as isize) as usize;
        x + y * DISPLAY_WIDTH
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|&c| if c { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
