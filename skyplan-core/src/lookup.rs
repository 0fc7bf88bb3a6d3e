//! Static presentation tables: condition icons and category badge tones

/// Icon used when the condition tag is not one of the known four.
pub const DEFAULT_CONDITION_ICON: &str = "🌤️";

/// Pick the glyph for a weather condition tag (case-insensitive).
pub fn condition_icon(condition: &str) -> &'static str {
    match condition.to_lowercase().as_str() {
        "sunny" => "☀️",
        "cloudy" => "☁️",
        "rainy" => "🌧️",
        "snowy" => "❄️",
        _ => DEFAULT_CONDITION_ICON,
    }
}

/// Badge color family for an activity category.
///
/// The palette decides the concrete terminal color per theme; this only fixes
/// which family a category belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryTone {
    Orange,
    Purple,
    Green,
    Blue,
    Pink,
    Gray,
}

/// Map a category name to its badge tone. Keys match exactly; anything else
/// gets [`CategoryTone::Gray`].
pub fn category_tone(category: &str) -> CategoryTone {
    match category {
        "Adventure" => CategoryTone::Orange,
        "Creative" => CategoryTone::Purple,
        "Food & Drink" => CategoryTone::Green,
        "Culture" => CategoryTone::Blue,
        "Leisure" => CategoryTone::Pink,
        _ => CategoryTone::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_icon_ignores_case() {
        assert_eq!(condition_icon("Sunny"), "☀️");
        assert_eq!(condition_icon("sunny"), "☀️");
        assert_eq!(condition_icon("SUNNY"), "☀️");
        assert_eq!(condition_icon("CLOUDY"), "☁️");
        assert_eq!(condition_icon("Rainy"), "🌧️");
        assert_eq!(condition_icon("snowy"), "❄️");
    }

    #[test]
    fn test_unknown_condition_uses_default_icon() {
        assert_eq!(condition_icon("Foggy"), DEFAULT_CONDITION_ICON);
        assert_eq!(condition_icon(""), DEFAULT_CONDITION_ICON);
        assert_eq!(condition_icon(" sunny"), DEFAULT_CONDITION_ICON);
    }

    #[test]
    fn test_named_categories_have_their_tone() {
        assert_eq!(category_tone("Adventure"), CategoryTone::Orange);
        assert_eq!(category_tone("Creative"), CategoryTone::Purple);
        assert_eq!(category_tone("Food & Drink"), CategoryTone::Green);
        assert_eq!(category_tone("Culture"), CategoryTone::Blue);
        assert_eq!(category_tone("Leisure"), CategoryTone::Pink);
    }

    #[test]
    fn test_unrecognized_category_is_gray() {
        assert_eq!(category_tone("Indoor"), CategoryTone::Gray);
        assert_eq!(category_tone("Outdoor"), CategoryTone::Gray);
        assert_eq!(category_tone("adventure"), CategoryTone::Gray);
    }
}
