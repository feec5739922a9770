//! Colors and container styles shared by the profile views.

use iced::widget::container;
use iced::{Background, Border, Color, Theme};

#[derive(Debug, Clone, Copy)]
pub struct ProfileTheme;

impl ProfileTheme {
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.93, 0.93, 0.95);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.65, 0.66, 0.70);
    pub const ERROR: Color = Color::from_rgb(0.94, 0.33, 0.31);
    pub const SUCCESS: Color = Color::from_rgb(0.30, 0.75, 0.45);
    pub const CARD_BACKGROUND: Color = Color::from_rgb(0.12, 0.12, 0.14);
    pub const AVATAR_BACKGROUND: Color = Color::from_rgb(0.25, 0.27, 0.33);
    pub const DIVIDER: Color = Color::from_rgb(0.22, 0.22, 0.25);

    pub fn theme() -> Theme {
        Theme::Dark
    }
}

pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ProfileTheme::CARD_BACKGROUND)),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub fn avatar(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(ProfileTheme::TEXT_PRIMARY),
        background: Some(Background::Color(ProfileTheme::AVATAR_BACKGROUND)),
        border: Border {
            radius: 36.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub fn divider(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ProfileTheme::DIVIDER)),
        ..container::Style::default()
    }
}

pub fn toast(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(Color::WHITE),
        background: Some(Background::Color(ProfileTheme::SUCCESS)),
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
