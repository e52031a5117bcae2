// Shared constants and helpers for the browser and the pager

// ============================================================================
// Constants
// ============================================================================

/// Maximum number of characters held by the command line
pub const COMMAND_CAPACITY: usize = 1023;

/// Number of leading bytes sampled to decide text vs binary
pub const BINARY_SAMPLE_LEN: usize = 1024;

/// Longest line (in bytes) the pager keeps in storage
pub const MAX_LINE_LEN: usize = 1023;

/// Rows taken by the pager's title, spacer and position line
pub const PAGER_CHROME_ROWS: u16 = 3;

/// Columns a tab expands to when the pager draws a line
pub const TAB_WIDTH: usize = 4;

// ============================================================================
// Byte Formatting
// ============================================================================

/// Format bytes with long suffixes (e.g., "1.5GB", "250KB")
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    let (value, suffix) = if bytes >= TB {
        (bytes as f64 / TB as f64, "TB")
    } else if bytes >= GB {
        (bytes as f64 / GB as f64, "GB")
    } else if bytes >= MB {
        (bytes as f64 / MB as f64, "MB")
    } else if bytes >= KB {
        (bytes as f64 / KB as f64, "KB")
    } else {
        return format!("{}B", bytes);
    };

    format!("{:.1}{}", value, suffix)
}

// ============================================================================
// String Helpers
// ============================================================================

/// Cut `s` to at most `max` bytes without splitting a character
pub fn truncate_at_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
