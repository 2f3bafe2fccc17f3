use serde::{Deserialize, Serialize};

/// Background styling of a rendered row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowShade {
    /// Colors disabled
    Plain,
    /// 1st, 3rd, 5th... rendered row
    Odd,
    /// 2nd, 4th, 6th... rendered row
    Even,
}

impl RowShade {
    /// Shade for the row at zero-based `position` in the rendered sequence
    pub fn for_position(position: usize, show_colors: bool) -> Self {
        if !show_colors {
            Self::Plain
        } else if position % 2 == 0 {
            Self::Odd
        } else {
            Self::Even
        }
    }
}
