use crate::types::{Cell, Color, Coord};

/// Owned copy of everything a front-end draws in one frame.
///
/// Filled by `Engine::snapshot_into` / `Session::snapshot_into`; reuse one value
/// across frames to keep the board allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub columns: u16,
    pub rows: u16,
    /// Locked cells, row-major
    pub board: Vec<Cell>,
    pub active: [Coord; 4],
    pub active_color: Color,
    pub score: u32,
    pub lines: u32,
    pub paused: bool,
    pub game_over: bool,
    /// Row whose occupation ends the session, when a session tracks one
    pub fail_line: Option<u16>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.columns = 0;
        self.rows = 0;
        self.board.clear();
        self.active = [(0, 0); 4];
        self.active_color = Color::Red;
        self.score = 0;
        self.lines = 0;
        self.paused = false;
        self.game_over = false;
        self.fail_line = None;
    }

    /// Locked cell at `(x, y)`, `None` outside the board
    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.columns || y >= self.rows {
            return None;
        }
        self.board
            .get(y as usize * self.columns as usize + x as usize)
            .copied()
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            columns: 0,
            rows: 0,
            board: Vec::new(),
            active: [(0, 0); 4],
            active_color: Color::Red,
            score: 0,
            lines: 0,
            paused: false,
            game_over: false,
            fail_line: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_lookup_is_bounds_checked() {
        let mut snap = GameSnapshot {
            columns: 2,
            rows: 2,
            board: vec![None, Some(Color::Green), None, None],
            ..GameSnapshot::default()
        };
        assert_eq!(snap.cell(1, 0), Some(Some(Color::Green)));
        assert_eq!(snap.cell(0, 1), Some(None));
        assert_eq!(snap.cell(2, 0), None);
        assert_eq!(snap.cell(0, 2), None);

        snap.clear();
        assert_eq!(snap.cell(0, 0), None);
        assert!(snap.playable());
    }
}
