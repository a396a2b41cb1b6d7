//! Visual prompt builder: derives the image-generation prompt.
//!
//! Prefers the `Image Prompt` section of the text response. When that
//! section is missing or blank, a prompt is synthesized from the profile
//! (plus any numbered items found in the wardrobe list). Either way the
//! mandatory constraints are appended, so the result is never empty and
//! always forbids human figures.

use atelier_types::profile::StyleProfile;
use atelier_types::report::{ImagePrompt, PromptSource, Section, SectionedReport};

use super::prompt::collection_descriptor;
use super::sectioner::{extract_items, WardrobeItem};
use super::serializer::LIST_SEPARATOR;

/// Clause present in every image prompt.
pub const NO_HUMAN_FIGURES: &str = "No human figures or models.";

/// Palette term used when the profile selects no colors.
pub const NEUTRAL_PALETTE: &str = "neutral palette";

/// Subject used when no numbered items could be extracted.
pub const GENERIC_ITEMS: &str = "Various clothing items";

/// Builds image prompts with a fixed item count fallback.
#[derive(Debug, Clone)]
pub struct VisualPromptBuilder {
    default_item_count: usize,
}

impl VisualPromptBuilder {
    pub fn new(default_item_count: usize) -> Self {
        Self {
            default_item_count: default_item_count.max(1),
        }
    }

    /// Build the image prompt for one submission.
    ///
    /// `wardrobe_plan` is the raw response; it is only scanned for numbered
    /// items when the report has no `Wardrobe Items` section.
    pub fn build(
        &self,
        report: &SectionedReport,
        wardrobe_plan: &str,
        profile: &StyleProfile,
    ) -> ImagePrompt {
        let item_source = report
            .section(Section::WardrobeItems)
            .unwrap_or(wardrobe_plan);
        let items = extract_items(item_source);
        let item_count = if items.is_empty() {
            self.default_item_count
        } else {
            items.len()
        };
        let constraints = constraint_clause(item_count, profile);

        match report
            .section(Section::ImagePrompt)
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(extracted) => ImagePrompt {
                text: format!("{extracted}\n\n{constraints}"),
                source: PromptSource::Extracted,
            },
            None => ImagePrompt {
                text: fallback_prompt(&items, profile, &constraints),
                source: PromptSource::Fallback,
            },
        }
    }
}

impl Default for VisualPromptBuilder {
    fn default() -> Self {
        Self::new(8)
    }
}

/// Palette terms from the profile, or [`NEUTRAL_PALETTE`].
pub fn palette_terms(profile: &StyleProfile) -> String {
    if profile.color_palette.is_empty() {
        return NEUTRAL_PALETTE.to_string();
    }
    profile
        .color_palette
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

fn constraint_clause(item_count: usize, profile: &StyleProfile) -> String {
    let noun = if item_count == 1 { "item" } else { "items" };
    format!(
        "Show exactly {item_count} clothing {noun} laid flat on a plain neutral background. \
         Colors: {palette}. {NO_HUMAN_FIGURES}",
        palette = palette_terms(profile),
    )
}

fn fallback_prompt(items: &[WardrobeItem], profile: &StyleProfile, constraints: &str) -> String {
    let subject = if items.is_empty() {
        GENERIC_ITEMS.to_string()
    } else {
        items
            .iter()
            .map(WardrobeItem::label)
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR)
    };

    let aesthetic = if profile.style_inspiration.is_empty() {
        String::new()
    } else {
        let styles: Vec<&str> = profile.style_inspiration.iter().map(|s| s.label()).collect();
        format!(" {} aesthetic.", styles.join(LIST_SEPARATOR))
    };

    format!(
        "Professional flat lay of a {descriptor} capsule wardrobe collection showing: \
         {subject}, arranged artistically.{aesthetic} Editorial product photography style, \
         clean lines, perfect lighting, minimalist composition. {constraints}",
        descriptor = collection_descriptor(profile.gender),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_types::profile::{
        BodyType, ColorPalette, Gender, StyleInspiration, TopSize,
    };

    fn profile() -> StyleProfile {
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

    fn report(pairs: &[(&str, &str)]) -> SectionedReport {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_extracted_section_gets_constraints() {
        let report = report(&[("Image Prompt", "Flat lay of linen shirts")]);
        let prompt = VisualPromptBuilder::default().build(&report, "", &profile());
        assert_eq!(prompt.source, PromptSource::Extracted);
        assert!(prompt.text.starts_with("Flat lay of linen shirts"));
        assert!(prompt.text.contains(NO_HUMAN_FIGURES));
        assert!(prompt.text.contains("plain neutral background"));
        assert!(prompt.text.contains("Show exactly 8 clothing items"));
    }

    #[test]
    fn test_missing_section_falls_back_with_neutral_palette() {
        let prompt = VisualPromptBuilder::default().build(&SectionedReport::new(), "", &profile());
        assert_eq!(prompt.source, PromptSource::Fallback);
        assert!(!prompt.text.is_empty());
        assert!(prompt.text.contains(NO_HUMAN_FIGURES));
        assert!(prompt.text.contains("Colors: neutral palette."));
        assert!(prompt.text.contains(GENERIC_ITEMS));
        assert!(prompt.text.contains("gender-neutral capsule wardrobe"));
    }

    #[test]
    fn test_blank_section_counts_as_missing() {
        let report = report(&[("Image Prompt", "   ")]);
        let prompt = VisualPromptBuilder::default().build(&report, "", &profile());
        assert_eq!(prompt.source, PromptSource::Fallback);
    }

    #[test]
    fn test_fallback_uses_items_from_wardrobe_section() {
        let report = report(&[(
            "Wardrobe Items",
            "1. Oxford shirt - white cotton\n2. Chinos - khaki twill",
        )]);
        let styled = StyleProfile {
            gender: Gender::Male,
            color_palette: vec![ColorPalette::EarthTones],
            style_inspiration: vec![StyleInspiration::Minimalist],
            ..profile()
        };
        let prompt = VisualPromptBuilder::default().build(&report, "", &styled);
        assert!(prompt.text.contains("Oxford shirt: white cotton, Chinos: khaki twill"));
        assert!(prompt.text.contains("Show exactly 2 clothing items"));
        assert!(prompt.text.contains("Colors: Earth tones (olive, rust, brown)."));
        assert!(prompt.text.contains("Minimalist aesthetic."));
        assert!(prompt.text.contains("men's capsule wardrobe"));
    }

    #[test]
    fn test_fallback_scans_raw_plan_without_wardrobe_section() {
        let plan = "Here you go:\n1. Tee - white\n2. Jeans - indigo\n3. Coat - camel";
        let prompt = VisualPromptBuilder::new(5).build(&SectionedReport::new(), plan, &profile());
        assert!(prompt.text.contains("Tee: white, Jeans: indigo, Coat: camel"));
        assert!(prompt.text.contains("Show exactly 3 clothing items"));
    }

    #[test]
    fn test_item_count_never_zero() {
        let prompt = VisualPromptBuilder::new(0).build(&SectionedReport::new(), "", &profile());
        assert!(prompt.text.contains("Show exactly 1 clothing item laid flat"));
    }

    #[test]
    fn test_single_extracted_item_is_singular() {
        let report = report(&[
            ("Wardrobe Items", "1. Trench coat - camel gabardine"),
            ("Image Prompt", "Flat lay of a camel trench coat"),
        ]);
        let prompt = VisualPromptBuilder::default().build(&report, "", &profile());
        assert!(prompt.text.contains("Show exactly 1 clothing item laid flat"));
        assert!(!prompt.text.contains("1 clothing items"));
    }
}
