//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header (device name, power, effect, wifi, online badge)
    pub header: Rect,

    /// Tab bar row
    pub tabs: Rect,

    /// Active tab body
    pub body: Rect,

    /// Scene shortcut row
    pub scenes: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let constraints = [
        Constraint::Length(3), // Header (bordered)
        Constraint::Length(1), // Tab bar
        Constraint::Min(5),    // Body
        Constraint::Length(1), // Scene row
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        tabs: chunks[1],
        body: chunks[2],
        scenes: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_partitions_full_height() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.tabs.height, 1);
        assert_eq!(layout.scenes.height, 1);
        assert_eq!(layout.body.height, 24 - 3 - 1 - 1);
        assert_eq!(layout.tabs.y, 3);
        assert_eq!(layout.body.y, 4);
        assert_eq!(layout.scenes.y, 23);
    }

    #[test]
    fn test_layout_survives_tiny_terminal() {
        let area = Rect::new(0, 0, 20, 6);
        let layout = create(area);

        // Body keeps its minimum even when squeezed
        assert!(layout.body.height >= 1);
    }
}
