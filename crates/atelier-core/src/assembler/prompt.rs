//! Wardrobe prompt builder.
//!
//! Embeds the serialized profile in a fixed stylist template that mandates
//! one explicit output layout: `### <Title> ###` header lines, in the order
//! of [`Section::ALL`]. The sectioner relies on exactly this scheme.

use atelier_types::profile::Gender;
use atelier_types::report::Section;

/// System instruction sent with every wardrobe request.
pub const STYLIST_SYSTEM_PROMPT: &str =
    "You are a knowledgeable fashion stylist specializing in capsule wardrobes.";

/// Gendered phrasing for the collection, shared with the image prompt.
pub fn collection_descriptor(gender: Gender) -> &'static str {
    match gender {
        Gender::Female => "women's",
        Gender::Male => "men's",
        Gender::NonBinary | Gender::PreferNotToSay => "gender-neutral",
    }
}

/// What each section should contain, keyed by section.
fn section_instruction(section: Section) -> &'static str {
    match section {
        Section::WardrobeItems => {
            "A numbered list, one piece per line, formatted exactly as \
             \"N. Item type - description\". Include 8-10 tops, 5-6 bottoms and \
             3-4 outerwear pieces, each with its color and material."
        }
        Section::Footwear => "4-5 footwear options with colors and materials.",
        Section::Accessories => "Accessory recommendations that tie the pieces together.",
        Section::StyleRules => "Key wardrobe rules for mixing and layering the pieces.",
        Section::StyleSummary => "Two or three sentences describing the overall look.",
        Section::ImagePrompt => {
            "One paragraph describing a flat lay photograph of the key pieces \
             arranged aesthetically on a plain neutral background. Show only \
             clothing, with no human figures or models. Name the exact colors \
             from the client's palette."
        }
    }
}

/// Build the complete wardrobe prompt for a serialized profile.
pub fn build_wardrobe_prompt(profile_text: &str, gender: Gender) -> String {
    let headers: Vec<String> = Section::ALL.iter().map(Section::header).collect();
    let contents: Vec<String> = Section::ALL
        .iter()
        .map(|s| format!("- {}: {}", s.title(), section_instruction(*s)))
        .collect();

    format!(
        "Act as a professional stylist creating a seasonless {descriptor} capsule wardrobe. \
         Client profile:\n\
         \n\
         {profile}\n\
         \n\
         Respond using exactly these section headers, each on its own line, in this order:\n\
         {headers}\n\
         \n\
         Section contents:\n\
         {contents}\n\
         \n\
         Do not add any other headers, and do not rename or reorder these ones.",
        descriptor = collection_descriptor(gender),
        profile = profile_text.trim(),
        headers = headers.join("\n"),
        contents = contents.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_headers_in_canonical_order() {
        let prompt = build_wardrobe_prompt("Full Name: Alex", Gender::Female);
        let positions: Vec<usize> = Section::ALL
            .iter()
            .map(|s| prompt.find(&s.header()).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_prompt_embeds_profile_and_gendered_phrasing() {
        let prompt = build_wardrobe_prompt("  Full Name: Alex\nAge: 30  ", Gender::Male);
        assert!(prompt.contains("seasonless men's capsule wardrobe"));
        assert!(prompt.contains("Full Name: Alex\nAge: 30"));
    }

    #[test]
    fn test_prompt_requests_parseable_items_and_constraints() {
        let prompt = build_wardrobe_prompt("x", Gender::NonBinary);
        assert!(prompt.contains("gender-neutral"));
        assert!(prompt.contains("\"N. Item type - description\""));
        assert!(prompt.contains("no human figures or models"));
    }

    #[test]
    fn test_collection_descriptor() {
        assert_eq!(collection_descriptor(Gender::Female), "women's");
        assert_eq!(collection_descriptor(Gender::PreferNotToSay), "gender-neutral");
    }
}
