//! Profile serializer: flattens a [`StyleProfile`] into the labeled text
//! block embedded in the wardrobe prompt.

use std::fmt::Display;

use atelier_types::profile::{
    StyleProfile, LABEL_AGE, LABEL_AVOIDS, LABEL_BODY_TYPE, LABEL_BUDGET, LABEL_COLOR_PALETTE,
    LABEL_GENDER, LABEL_LIFESTYLE, LABEL_NAME, LABEL_OCCASION, LABEL_STYLE_INSPIRATION,
};

/// Placeholder for an empty multi-select or blank free-text field.
pub const NONE_SPECIFIED: &str = "None specified";

/// Separator between multi-select values.
pub const LIST_SEPARATOR: &str = ", ";

/// Serialize a profile into one `Label: value` line per field.
///
/// Deterministic: the same profile always yields the same text. Empty
/// fields are written as [`NONE_SPECIFIED`], never as a blank join.
pub fn serialize_profile(profile: &StyleProfile) -> String {
    let occasion = profile
        .occasion_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| NONE_SPECIFIED.to_string());

    let lines = [
        format!("{LABEL_NAME}: {}", text_or_placeholder(&profile.name)),
        format!("{LABEL_GENDER}: {}", profile.gender),
        format!("{LABEL_AGE}: {}", profile.age),
        format!("{LABEL_BODY_TYPE}: {}", profile.body_type),
        format!(
            "Sizes: Top {}, Bottom {}",
            profile.top_size,
            text_or_placeholder(&profile.bottom_size)
        ),
        format!(
            "{LABEL_COLOR_PALETTE}: {}",
            join_or_placeholder(&profile.color_palette)
        ),
        format!(
            "{LABEL_STYLE_INSPIRATION}: {}",
            join_or_placeholder(&profile.style_inspiration)
        ),
        format!("{LABEL_AVOIDS}: {}", text_or_placeholder(&profile.avoids)),
        format!("{LABEL_LIFESTYLE}: {}", join_or_placeholder(&profile.lifestyle)),
        format!("{LABEL_BUDGET}: ${}", profile.monthly_budget),
        format!("{LABEL_OCCASION}: {occasion}"),
    ];

    lines.join("\n")
}

/// Join display values with [`LIST_SEPARATOR`], or return the placeholder.
pub fn join_or_placeholder<T: Display>(items: &[T]) -> String {
    if items.is_empty() {
        return NONE_SPECIFIED.to_string();
    }
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

fn text_or_placeholder(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        NONE_SPECIFIED
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_types::profile::{
        BodyType, ColorPalette, Gender, Lifestyle, StyleInspiration, TopSize,
    };
    use chrono::NaiveDate;

    fn empty_profile() -> StyleProfile {
        StyleProfile {
            name: "Alex".to_string(),
            age: 25,
            gender: Gender::PreferNotToSay,
            body_type: BodyType::NoPreference,
            top_size: TopSize::M,
            bottom_size: "28/30".to_string(),
            color_palette: vec![],
            style_inspiration: vec![],
            avoids: String::new(),
            lifestyle: vec![],
            monthly_budget: 200,
            occasion_date: None,
        }
    }

    #[test]
    fn test_empty_fields_use_placeholder() {
        let text = serialize_profile(&empty_profile());
        assert!(text.contains("Color Preferences: None specified"));
        assert!(text.contains("Style Inspiration: None specified"));
        assert!(text.contains("Avoids: None specified"));
        assert!(text.contains("Lifestyle Needs: None specified"));
        assert!(text.contains("Upcoming Occasion: None specified"));
        assert!(!text.contains(": \n"));
        assert!(!text.ends_with(": "));
    }

    #[test]
    fn test_full_profile_lines() {
        let profile = StyleProfile {
            gender: Gender::Female,
            body_type: BodyType::Pear,
            top_size: TopSize::S,
            color_palette: vec![ColorPalette::Neutrals, ColorPalette::Pastels],
            style_inspiration: vec![StyleInspiration::Minimalist],
            avoids: "  wool, polyester ".to_string(),
            lifestyle: vec![Lifestyle::OfficeWork, Lifestyle::Fitness],
            monthly_budget: 350,
            occasion_date: NaiveDate::from_ymd_opt(2026, 11, 2),
            ..empty_profile()
        };
        let text = serialize_profile(&profile);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Full Name: Alex");
        assert_eq!(lines[1], "Gender Identity: Female");
        assert_eq!(lines[4], "Sizes: Top S, Bottom 28/30");
        assert_eq!(
            lines[5],
            "Color Preferences: Neutrals (black, white, beige), Pastels (lavender, mint, blush)"
        );
        assert_eq!(lines[7], "Avoids: wool, polyester");
        assert_eq!(lines[8], "Lifestyle Needs: Office work, Fitness");
        assert_eq!(lines[9], "Monthly Budget: $350");
        assert_eq!(lines[10], "Upcoming Occasion: 2026-11-02");
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let profile = empty_profile();
        assert_eq!(serialize_profile(&profile), serialize_profile(&profile));
    }

    #[test]
    fn test_join_or_placeholder() {
        let empty: [&str; 0] = [];
        assert_eq!(join_or_placeholder(&empty), "None specified");
        assert_eq!(join_or_placeholder(&["a", "b"]), "a, b");
    }
}
