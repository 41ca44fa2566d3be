use ratatui::style::Color;

use crate::ui::severity::SeverityBand;

/// Available color schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSchemeId {
    Default,
    Monochrome,
}

impl ColorSchemeId {
    pub fn name(&self) -> &'static str {
        match self {
            ColorSchemeId::Default => "default",
            ColorSchemeId::Monochrome => "monochrome",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Some(ColorSchemeId::Default),
            "monochrome" | "mono" => Some(ColorSchemeId::Monochrome),
            _ => None,
        }
    }
}

/// All color slots used by the dashboard
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub border: Color,

    // Title and footer hint on the border
    pub title_fg: Color,
    pub title_bg: Color,

    pub label: Color,       // core index, "CPU Usage:" and friends
    pub info_value: Color,  // total memory, disk, uptime values
    pub bar_bg: Color,      // empty part of a bar

    pub severity_low: Color,
    pub severity_normal: Color,
    pub severity_high: Color,
}

impl ColorScheme {
    pub fn from_id(id: ColorSchemeId) -> Self {
        match id {
            ColorSchemeId::Default => Self::default_scheme(),
            ColorSchemeId::Monochrome => Self::monochrome(),
        }
    }

    pub fn severity(&self, band: SeverityBand) -> Color {
        match band {
            SeverityBand::Low => self.severity_low,
            SeverityBand::Normal => self.severity_normal,
            SeverityBand::High => self.severity_high,
        }
    }

    /// Classic 8-color palette
    fn default_scheme() -> Self {
        Self {
            border: Color::White,
            title_fg: Color::Black,
            title_bg: Color::White,
            label: Color::Cyan,
            info_value: Color::White,
            bar_bg: Color::DarkGray,
            severity_low: Color::Green,
            severity_normal: Color::Yellow,
            severity_high: Color::Red,
        }
    }

    /// Monochrome (no colors)
    fn monochrome() -> Self {
        Self {
            border: Color::White,
            title_fg: Color::Black,
            title_bg: Color::White,
            label: Color::White,
            info_value: Color::White,
            bar_bg: Color::DarkGray,
            severity_low: Color::White,
            severity_normal: Color::White,
            severity_high: Color::White,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_scheme()
    }
}
