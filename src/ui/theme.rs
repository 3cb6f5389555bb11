use crate::frame::Role;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub highlight: Color, // Yellow
    pub accent: Color,    // Pink
    pub teal: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    highlight: Color::Rgb(249, 226, 175),
    accent: Color::Rgb(245, 194, 231),
    teal: Color::Rgb(148, 226, 213),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),
};

impl Theme {
    /// Foreground color for a highlighted slot
    pub fn role_color(&self, role: Role) -> Color {
        match role {
            Role::Found | Role::Inserted | Role::Visited | Role::Appended => self.success,
            Role::Swap | Role::Rotated | Role::Moved => self.error,
            Role::Compare | Role::Current | Role::Frontier => self.highlight,
            Role::Pivot | Role::Key => self.accent,
            Role::Prev => self.secondary,
            Role::Head | Role::Top | Role::Front => self.primary,
            Role::Tail | Role::Rear | Role::Circular => self.teal,
            Role::Range => self.fg,
        }
    }
}
