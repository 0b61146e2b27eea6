/// Repositories shown before the list is elided.
pub const DISPLAY_REPO_LIMIT: usize = 10;

/// Glyph ramp for the activity sparkline, lowest to highest.
pub const SPARKLINE_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
