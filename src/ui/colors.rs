use ratatui::style::Color;

// Floodlight palette (tuned for dark terminals)
pub const PITCH_GREEN: Color = Color::Rgb(0, 255, 65);
pub const DARK_GREEN: Color = Color::Rgb(0, 100, 0);
pub const BRIGHT_GREEN: Color = Color::Rgb(150, 255, 150);
pub const LIVE_RED: Color = Color::Rgb(255, 60, 60);
pub const UPCOMING_AMBER: Color = Color::Rgb(255, 200, 80);
pub const TEXT_DIM: Color = Color::Rgb(140, 140, 140);
pub const AD_GOLD: Color = Color::Rgb(255, 215, 0);
