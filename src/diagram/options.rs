use std::fmt;

/// Layout direction of the generated flowchart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Top-down.
    #[default]
    TopDown,
    TopBottom,
    BottomTop,
    LeftRight,
    RightLeft,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::TopDown => "TD",
            Direction::TopBottom => "TB",
            Direction::BottomTop => "BT",
            Direction::LeftRight => "LR",
            Direction::RightLeft => "RL",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering settings for the diagram compiler.
#[derive(Debug, Clone, Default)]
pub struct DiagramOptions {
    pub direction: Direction,
}

impl DiagramOptions {
    /// The keyword line that opens every diagram.
    pub fn header(&self) -> String {
        format!("flowchart {}", self.direction)
    }
}
