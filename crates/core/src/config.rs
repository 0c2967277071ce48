use crate::types::{
    DEFAULT_COLUMNS, DEFAULT_FPS, DEFAULT_ROWS, DROP_INTERVAL_MS, FAIL_LINE_PERCENT,
};

/// Configuration for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Width of the board in cells
    pub columns: u16,
    /// Height of the board in cells
    pub rows: u16,
    /// Gravity cadence in milliseconds
    pub drop_interval_ms: u32,
    /// Frames per second of the driving loop
    pub fps: u32,
    /// Fail line position as a percentage of `rows`, from the top
    pub fail_line_percent: u16,
    /// Seed for the first game; later games derive theirs from it
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            drop_interval_ms: DROP_INTERVAL_MS,
            fps: DEFAULT_FPS,
            fail_line_percent: FAIL_LINE_PERCENT,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board size
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_drop_interval_ms(mut self, drop_interval_ms: u32) -> Self {
        self.drop_interval_ms = drop_interval_ms;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_fail_line_percent(mut self, percent: u16) -> Self {
        self.fail_line_percent = percent;
        self
    }

    /// Row index of the fail line (always on the board)
    pub fn fail_line_row(&self) -> u16 {
        let row = (self.rows as u32 * self.fail_line_percent as u32 / 100) as u16;
        row.min(self.rows.saturating_sub(1))
    }

    /// Duration of one frame in milliseconds
    pub fn frame_ms(&self) -> u32 {
        1000 / self.fps.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_game() {
        let config = GameConfig::default();
        assert_eq!(config.columns, 20);
        assert_eq!(config.rows, 30);
        assert_eq!(config.drop_interval_ms, 200);
        assert_eq!(config.frame_ms(), 100);
    }

    #[test]
    fn fail_line_is_a_fifth_from_the_top() {
        assert_eq!(GameConfig::default().fail_line_row(), 6);
        assert_eq!(GameConfig::new(10, 12).fail_line_row(), 2);
        assert_eq!(GameConfig::new(10, 12).with_fail_line_percent(0).fail_line_row(), 0);
        assert_eq!(GameConfig::new(10, 12).with_fail_line_percent(150).fail_line_row(), 11);
    }

    #[test]
    fn zero_fps_does_not_divide_by_zero() {
        assert_eq!(GameConfig::default().with_fps(0).frame_ms(), 1000);
    }
}
