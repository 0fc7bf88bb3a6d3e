//! Colors for the light and dark themes

use ratatui::style::Color;
use skyplan_core::{CategoryTone, Theme};

/// Page colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub warning: Color,
    pub star: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(239, 246, 255),
    surface: Color::Rgb(255, 255, 255),
    text: Color::Rgb(17, 24, 39),
    muted: Color::Rgb(107, 114, 128),
    accent: Color::Rgb(37, 99, 235),
    border: Color::Rgb(209, 213, 219),
    warning: Color::Rgb(220, 38, 38),
    star: Color::Rgb(202, 138, 4),
};

const DARK: Palette = Palette {
    background: Color::Rgb(17, 24, 39),
    surface: Color::Rgb(31, 41, 55),
    text: Color::Rgb(243, 244, 246),
    muted: Color::Rgb(156, 163, 175),
    accent: Color::Rgb(96, 165, 250),
    border: Color::Rgb(75, 85, 99),
    warning: Color::Rgb(248, 113, 113),
    star: Color::Rgb(250, 204, 21),
};

/// Neutral colors for the skeleton shown before the theme is known
pub const SKELETON: Palette = Palette {
    background: Color::Reset,
    surface: Color::Rgb(55, 65, 81),
    text: Color::Gray,
    muted: Color::DarkGray,
    accent: Color::Gray,
    border: Color::DarkGray,
    warning: Color::Gray,
    star: Color::Gray,
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

/// Badge colors as `(foreground, background)`
///
/// Light theme uses a pale fill with dark text, dark theme the inverse.
pub fn badge_colors(tone: CategoryTone, theme: Theme) -> (Color, Color) {
    // (pale, deep, darkest, soft) per hue
    let (pale, deep, darkest, soft) = match tone {
        CategoryTone::Orange => ((255, 237, 213), (154, 52, 18), (124, 45, 18), (254, 215, 170)),
        CategoryTone::Purple => ((243, 232, 255), (107, 33, 168), (88, 28, 135), (233, 213, 255)),
        CategoryTone::Green => ((220, 252, 231), (22, 101, 52), (20, 83, 45), (187, 247, 208)),
        CategoryTone::Blue => ((219, 234, 254), (30, 64, 175), (30, 58, 138), (191, 219, 254)),
        CategoryTone::Pink => ((252, 231, 243), (157, 23, 77), (131, 24, 67), (251, 207, 232)),
        CategoryTone::Gray => ((243, 244, 246), (31, 41, 55), (17, 24, 39), (229, 231, 235)),
    };
    let rgb = |(r, g, b): (u8, u8, u8)| Color::Rgb(r, g, b);
    match theme {
        Theme::Light => (rgb(deep), rgb(pale)),
        Theme::Dark => (rgb(soft), rgb(darkest)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TONES: [CategoryTone; 6] = [
        CategoryTone::Orange,
        CategoryTone::Purple,
        CategoryTone::Green,
        CategoryTone::Blue,
        CategoryTone::Pink,
        CategoryTone::Gray,
    ];

    #[test]
    fn test_themes_differ() {
        assert_ne!(Palette::for_theme(Theme::Light), Palette::for_theme(Theme::Dark));
    }

    #[test]
    fn test_badge_colors_distinct_per_tone() {
        for theme in [Theme::Light, Theme::Dark] {
            let backgrounds: Vec<_> = TONES.iter().map(|t| badge_colors(*t, theme).1).collect();
            for (i, a) in backgrounds.iter().enumerate() {
                for b in &backgrounds[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_badge_contrast_flips_with_theme() {
        let (light_fg, light_bg) = badge_colors(CategoryTone::Blue, Theme::Light);
        let (dark_fg, dark_bg) = badge_colors(CategoryTone::Blue, Theme::Dark);

        assert_eq!(light_bg, Color::Rgb(219, 234, 254));
        assert_eq!(light_fg, Color::Rgb(30, 64, 175));
        assert_eq!(dark_bg, Color::Rgb(30, 58, 138));
        assert_eq!(dark_fg, Color::Rgb(191, 219, 254));
    }
}
