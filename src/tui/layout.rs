use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Frame regions shared by all views
pub struct AppLayout {
    pub tabs_area: Rect,
    pub body_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create the frame layout:
    /// - Tab bar: 3 rows (top, bordered)
    /// - Body: remaining rows, rendered per active view
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(3),    // Body (at least 3 rows)
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self { tabs_area: chunks[0], body_area: chunks[1], status_area: chunks[2] }
    }
}
