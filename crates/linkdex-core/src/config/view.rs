use crate::error::Result;

use super::env::{EnvSource, read_env_u32};

const ENV_CELL_PX: &str = "LINKDEX_CELL_PX";
const ENV_NARROW_CELL_PX: &str = "LINKDEX_NARROW_CELL_PX";
const ENV_NARROW_BREAKPOINT_PX: &str = "LINKDEX_NARROW_BREAKPOINT_PX";

const DEFAULT_CELL_PX: u32 = 56;
const DEFAULT_NARROW_CELL_PX: u32 = 50;
const DEFAULT_NARROW_BREAKPOINT_PX: u32 = 475;

/// Grid density constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    pub cell_px: u32,
    pub narrow_cell_px: u32,
    /// Viewports strictly narrower than this use `narrow_cell_px`.
    pub narrow_breakpoint_px: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            cell_px: DEFAULT_CELL_PX,
            narrow_cell_px: DEFAULT_NARROW_CELL_PX,
            narrow_breakpoint_px: DEFAULT_NARROW_BREAKPOINT_PX,
        }
    }
}

impl ViewConfig {
    pub(super) fn from_source(source: EnvSource<'_>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            cell_px: read_env_u32(source, ENV_CELL_PX, defaults.cell_px, 1)?,
            narrow_cell_px: read_env_u32(source, ENV_NARROW_CELL_PX, defaults.narrow_cell_px, 1)?,
            narrow_breakpoint_px: read_env_u32(
                source,
                ENV_NARROW_BREAKPOINT_PX,
                defaults.narrow_breakpoint_px,
                0,
            )?,
        })
    }

    #[must_use]
    pub const fn cell_px_for(&self, viewport_width: u32) -> u32 {
        if viewport_width < self.narrow_breakpoint_px {
            self.narrow_cell_px
        } else {
            self.cell_px
        }
    }
}
