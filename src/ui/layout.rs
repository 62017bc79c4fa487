//! Screen geometry: where the grid and the controls sit on the terminal

/// Width of each control button in terminal columns
pub const BUTTON_WIDTH: u16 = 10;
/// Height of each control button in terminal rows
pub const BUTTON_HEIGHT: u16 = 3;
/// Horizontal gap between neighboring buttons
pub const BUTTON_GAP: u16 = 2;
/// Rows reserved below the grid: buttons, a spacer and the status line
pub const CONTROL_ROWS: u16 = BUTTON_HEIGHT + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && (column - self.x) < self.width
            && (row - self.y) < self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    StartStop,
    Save,
    Load,
}

/// What a pointer position lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Button(Button),
    Cell { x: usize, y: usize },
}

/// Geometry for one frame, recomputed whenever the terminal size changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub surface_width: u16,
    pub surface_height: u16,
    pub grid_width_cells: usize,
    pub grid_height_cells: usize,
    pub cell_width: u16,
    pub cell_height: u16,
    pub grid_region: Rect,
    pub start_stop: Rect,
    pub save: Rect,
    pub load: Rect,
    pub status_row: u16,
}

impl Layout {
    pub fn compute(
        surface_width: u16,
        surface_height: u16,
        grid_width_cells: usize,
        grid_height_cells: usize,
    ) -> Self {
        let grid_rows = surface_height.saturating_sub(CONTROL_ROWS);
        let cell_width = scale(surface_width, grid_width_cells);
        let cell_height = scale(grid_rows, grid_height_cells);

        let button_y = surface_height.saturating_sub(BUTTON_HEIGHT + 1);
        let start_x = surface_width.saturating_sub(BUTTON_WIDTH) / 2;
        let save_x = start_x.saturating_sub(BUTTON_WIDTH + BUTTON_GAP);
        let load_x = start_x.saturating_add(BUTTON_WIDTH + BUTTON_GAP);

        Self {
            surface_width,
            surface_height,
            grid_width_cells,
            grid_height_cells,
            cell_width,
            cell_height,
            grid_region: Rect::new(0, 0, surface_width, grid_rows),
            start_stop: Rect::new(start_x, button_y, BUTTON_WIDTH, BUTTON_HEIGHT),
            save: Rect::new(save_x, button_y, BUTTON_WIDTH, BUTTON_HEIGHT),
            load: Rect::new(load_x, button_y, BUTTON_WIDTH, BUTTON_HEIGHT),
            status_row: surface_height.saturating_sub(1),
        }
    }

    pub fn button_rect(&self, button: Button) -> Rect {
        match button {
            Button::StartStop => self.start_stop,
            Button::Save => self.save,
            Button::Load => self.load,
        }
    }

    /// Resolve a pointer position. Buttons win over the grid.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Target> {
        for button in [Button::StartStop, Button::Save, Button::Load] {
            if self.button_rect(button).contains(column, row) {
                return Some(Target::Button(button));
            }
        }

        if !self.grid_region.contains(column, row) {
            return None;
        }
        let x = (column / self.cell_width) as usize;
        let y = (row / self.cell_height) as usize;
        (x < self.grid_width_cells && y < self.grid_height_cells).then_some(Target::Cell { x, y })
    }

    /// Screen rectangle of cell `(x, y)`, clipped to the grid region.
    ///
    /// `None` when the cell falls entirely outside the visible area.
    pub fn cell_rect(&self, x: usize, y: usize) -> Option<Rect> {
        let left = u16::try_from(x).ok()?.checked_mul(self.cell_width)?;
        let top = u16::try_from(y).ok()?.checked_mul(self.cell_height)?;
        if left >= self.grid_region.width || top >= self.grid_region.height {
            return None;
        }
        let width = self.cell_width.min(self.grid_region.width - left);
        let height = self.cell_height.min(self.grid_region.height - top);
        Some(Rect::new(left, top, width, height))
    }
}

/// Terminal cells per grid cell along one axis, never below one
fn scale(available: u16, cells: usize) -> u16 {
    let cells = u16::try_from(cells.max(1)).unwrap_or(u16::MAX);
    (available / cells).max(1)
}
