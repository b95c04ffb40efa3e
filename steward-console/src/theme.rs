use iced::widget::container;
use iced::{Background, Border, Color, Theme, theme};

/// Dark console theme with a single accent colour
#[derive(Debug, Clone, Copy)]
pub struct StewardTheme;

impl StewardTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.0, 0.0, 0.0); // #000000
    pub const ACCENT: Color = Color::from_rgb(0.2, 0.6, 1.0); // #3399FF

    pub const CARD_BG: Color = Color::from_rgb(0.1, 0.1, 0.1); // #1A1A1A
    pub const BORDER_COLOR: Color = Color::from_rgb(0.2, 0.2, 0.2); // #333333

    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0); // #FFFFFF
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7); // #B3B3B3
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.5, 0.5, 0.5); // #808080

    pub const SUCCESS: Color = Color::from_rgb(0.0, 0.8, 0.4); // #00CC66
    pub const WARNING: Color = Color::from_rgb(1.0, 0.6, 0.0); // #FF9900
    pub const ERROR: Color = Color::from_rgb(1.0, 0.2, 0.2); // #FF3333

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        Theme::custom("Steward Dark".to_string(), palette)
    }
}

pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(StewardTheme::CARD_BG)),
        border: Border {
            color: StewardTheme::BORDER_COLOR,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Outlined badge that carries the no-admins warning tooltip.
pub fn warning_badge(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: StewardTheme::WARNING,
            width: 1.0,
            radius: 10.0.into(),
        },
        ..container::Style::default()
    }
}
