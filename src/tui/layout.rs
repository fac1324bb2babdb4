/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: filter panel stacks above the list
    Compact,
    /// 60-99 cols: side-by-side, short cards
    Normal,
    /// 100+ cols: side-by-side, cards show the introduction line
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    /// Width of the filter sidebar when shown side-by-side
    pub fn sidebar_width(&self) -> u16 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 28,
            Breakpoint::Wide => 34,
        }
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}
