use ratatui::style::Color;

pub struct Theme {
    pub background: Color,

    // Header / titles
    pub title_fg: Color,

    // File list
    pub directory_fg: Color,
    pub file_fg: Color,

    // Cursor row
    pub cursor_fg: Color,
    pub cursor_bg: Color,

    // Status line
    pub status_error_fg: Color,
    pub status_error_bg: Color,
    pub status_info_fg: Color,
    pub status_info_bg: Color,

    // Footer / command line
    pub footer_fg: Color,
    pub footer_bg: Color,
    pub command_fg: Color,
    pub command_bg: Color,
    pub hint_fg: Color,
}

// Tokyo Night inspired color palette
pub const THEME: Theme = Theme {
    background: Color::Rgb(26, 27, 38),          // #1a1b26 - dark bg

    title_fg: Color::Rgb(224, 175, 104),         // #e0af68 - muted yellow

    directory_fg: Color::Rgb(122, 162, 247),     // #7aa2f7 - soft blue
    file_fg: Color::Rgb(169, 177, 214),          // #a9b1d6 - light gray

    cursor_fg: Color::Rgb(26, 27, 38),           // #1a1b26 - dark bg
    cursor_bg: Color::Rgb(122, 162, 247),        // #7aa2f7 - soft blue

    status_error_fg: Color::Rgb(247, 118, 142),  // #f7768e - soft red
    status_error_bg: Color::Rgb(26, 27, 38),     // #1a1b26 - dark bg
    status_info_fg: Color::Rgb(224, 175, 104),   // #e0af68 - muted orange
    status_info_bg: Color::Rgb(26, 27, 38),      // #1a1b26 - dark bg

    footer_fg: Color::Rgb(169, 177, 214),        // #a9b1d6 - light gray
    footer_bg: Color::Rgb(36, 40, 59),           // #24283b - slightly lighter bg
    command_fg: Color::Rgb(169, 177, 214),       // #a9b1d6 - light gray
    command_bg: Color::Rgb(41, 46, 66),          // #292e42 - dark highlight
    hint_fg: Color::Rgb(86, 95, 137),            // #565f89 - muted gray
};
