use ratatui::style::Color;

use crate::model::champion::ChampionRecord;

pub mod champions;
pub mod menu;
pub mod roles;
pub mod search;
pub mod status;

#[macro_export]
macro_rules! styled_span {
    // Formatted text with color and bold (text, args...; Color::X Bold)
    ($text:literal, $($arg:expr),+; $color:ident Bold) => {
        ratatui::text::Span::styled(
            format!($text, $($arg),+),
            ratatui::style::Style::default()
                .fg(ratatui::style::Color::$color)
                .add_modifier(ratatui::style::Modifier::BOLD)
        )
    };

    // Formatted text with color (text, args...; Color::X)
    ($text:literal, $($arg:expr),+; $color:ident) => {
        ratatui::text::Span::styled(
            format!($text, $($arg),+),
            ratatui::style::Style::default().fg(ratatui::style::Color::$color)
        )
    };

    // Plain text with color and bold (text; Color::X Bold)
    ($text:literal; $color:ident Bold) => {
        ratatui::text::Span::styled(
            $text,
            ratatui::style::Style::default()
                .fg(ratatui::style::Color::$color)
                .add_modifier(ratatui::style::Modifier::BOLD)
        )
    };

    // Plain text with color (text; Color::X)
    ($text:literal; $color:ident) => {
        ratatui::text::Span::styled(
            $text,
            ratatui::style::Style::default().fg(ratatui::style::Color::$color)
        )
    };

    // Formatted text (text, args...)
    ($text:literal, $($arg:expr),+) => {
        ratatui::text::Span::raw(format!($text, $($arg),+))
    };

    // Plain text literal (LAST - most general)
    ($text:literal) => {
        ratatui::text::Span::raw($text)
    };
}

#[macro_export]
macro_rules! styled_line {
    // Empty line
    () => {
        ratatui::text::Line::raw("")
    };

    // Span list
    (LIST [$($args:expr),+ $(,)?]) => {
        ratatui::text::Line::from(vec![$($args),+])
    };

    // Full styled line
    ($($args:tt)+) => {
        ratatui::text::Line::from($crate::styled_span!($($args)+))
    };
}

/// Win-rate coloring: strong picks green, even picks yellow, weak picks red.
/// Champions without a usable win rate stay neutral.
pub fn winrate_color(record: &ChampionRecord) -> Color {
    match &record.winrate {
        None => Color::Cyan,
        Some(value) => match parse_percent(value) {
            Some(winrate) if winrate >= 52.0 => Color::Green,
            Some(winrate) if winrate >= 50.0 => Color::Yellow,
            _ => Color::Red,
        },
    }
}

pub fn role_color(role: &str) -> Color {
    match role.to_lowercase().as_str() {
        "top" => Color::Red,
        "jungle" => Color::Green,
        "mid" => Color::Magenta,
        "adc" => Color::Yellow,
        "support" => Color::Cyan,
        _ => Color::White,
    }
}

fn parse_percent(value: &str) -> Option<f32> {
    value.trim().trim_end_matches('%').parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_winrate(winrate: Option<&str>) -> ChampionRecord {
        ChampionRecord {
            name: "Darius".to_string(),
            winrate: winrate.map(str::to_string),
            pick_rate: None,
            counters: Vec::new(),
        }
    }

    #[test]
    fn winrate_thresholds() {
        assert_eq!(winrate_color(&with_winrate(Some("53%"))), Color::Green);
        assert_eq!(winrate_color(&with_winrate(Some("52%"))), Color::Green);
        assert_eq!(winrate_color(&with_winrate(Some("50.5%"))), Color::Yellow);
        assert_eq!(winrate_color(&with_winrate(Some("49%"))), Color::Red);
        assert_eq!(winrate_color(&with_winrate(Some("garbage"))), Color::Red);
        assert_eq!(winrate_color(&with_winrate(None)), Color::Cyan);
    }

    #[test]
    fn role_colors_fall_back_to_white() {
        assert_eq!(role_color("TOP"), Color::Red);
        assert_eq!(role_color("support"), Color::Cyan);
        assert_eq!(role_color("fill"), Color::White);
    }
}
