use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Square-grid sizing derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridSizing {
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub cells_per_row: u32,
    pub cell_width: f32,
}

impl GridSizing {
    pub fn for_viewport(viewport: Viewport, config: &ViewConfig) -> Self {
        let density = config.cell_px_for(viewport.width).max(1);
        let cells_per_row = (viewport.width / density).max(1);
        Self {
            viewport_width: viewport.width,
            viewport_height: viewport.height,
            cells_per_row,
            cell_width: cell_width(viewport.width, cells_per_row),
        }
    }

    /// Adds `delta` cells per row, never going below one.
    #[must_use]
    pub fn adjusted(self, delta: i32) -> Self {
        let cells_per_row = i64::from(self.cells_per_row)
            .saturating_add(i64::from(delta))
            .clamp(1, i64::from(u32::MAX));
        let cells_per_row = u32::try_from(cells_per_row).unwrap_or(1);
        Self {
            cells_per_row,
            cell_width: cell_width(self.viewport_width, cells_per_row),
            ..self
        }
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "pixel widths are far below f32 integer precision"
)]
fn cell_width(viewport_width: u32, cells_per_row: u32) -> f32 {
    viewport_width as f32 / cells_per_row.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizing(width: u32) -> GridSizing {
        GridSizing::for_viewport(
            Viewport {
                width,
                height: 800,
            },
            &ViewConfig::default(),
        )
    }

    #[test]
    fn desktop_width_uses_wide_cells() {
        let grid = sizing(1120);
        assert_eq!(grid.cells_per_row, 20);
        assert!((grid.cell_width - 56.0).abs() < f32::EPSILON);
    }

    #[test]
    fn narrow_width_uses_small_cells() {
        let grid = sizing(474);
        assert_eq!(grid.cells_per_row, 9);
        assert!((grid.cell_width - 474.0 / 9.0).abs() < 1e-4);

        assert_eq!(sizing(475).cells_per_row, 8);
    }

    #[test]
    fn tiny_viewport_keeps_one_cell() {
        let grid = sizing(20);
        assert_eq!(grid.cells_per_row, 1);
        assert!((grid.cell_width - 20.0).abs() < f32::EPSILON);
        assert_eq!(sizing(0).cells_per_row, 1);
    }

    #[test]
    fn density_adjustment_recomputes_width_and_clamps() {
        let grid = sizing(1120).adjusted(1);
        assert_eq!(grid.cells_per_row, 21);
        assert!((grid.cell_width - 1120.0 / 21.0).abs() < 1e-4);

        let grid = sizing(1120).adjusted(-100);
        assert_eq!(grid.cells_per_row, 1);
        assert!((grid.cell_width - 1120.0).abs() < f32::EPSILON);
    }
}
