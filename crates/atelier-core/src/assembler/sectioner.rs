//! Response sectioner: best-effort extraction of `### Title ###` sections
//! from free-form model output.
//!
//! The text service is free to ignore the requested layout, so nothing here
//! can fail. A header that never appears produces no entry; headers that
//! appear out of order are still found.

use std::sync::LazyLock;

use regex::Regex;

use atelier_types::report::{Section, SectionedReport};

/// Upper bound on numbered items carried into the image prompt.
pub const MAX_IMAGE_ITEMS: usize = 8;

/// `N. Item type - description` lines, as requested under Wardrobe Items.
static NUMBERED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*\d+[.)][ \t]+(.+?)[ \t]+[-\u{2013}\u{2014}][ \t]+(.+?)[ \t]*$")
        .expect("numbered item pattern is valid")
});

/// Splits a response into sections keyed by header title.
pub struct ResponseSectioner {
    headers: Vec<(String, Regex)>,
}

impl ResponseSectioner {
    /// Build a sectioner for the given titles, in their expected order.
    ///
    /// A header line matches when it holds the title between runs of two or
    /// more `#`, ignoring case and surrounding whitespace. The closing run
    /// is optional.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let headers = titles
            .into_iter()
            .map(|title| {
                let title = title.as_ref().trim().to_string();
                let words: Vec<String> = title.split_whitespace().map(regex::escape).collect();
                let pattern = format!(
                    r"(?im)^[ \t]*#{{2,}}[ \t]*{}[ \t]*#*[ \t]*\r?$",
                    words.join(r"[ \t]+")
                );
                let re = Regex::new(&pattern).expect("escaped header pattern is valid");
                (title, re)
            })
            .collect();

        Self { headers }
    }

    /// Sectioner for the canonical wardrobe layout.
    pub fn canonical() -> Self {
        Self::new(Section::titles())
    }

    /// Split `text` into a [`SectionedReport`].
    ///
    /// Each header is searched first from the end of the previously located
    /// header (its expected position), then from the start of the text;
    /// the first match wins. A section's body runs from the end of its
    /// header line to the start of the next located header, or to the end
    /// of the text, and is trimmed.
    pub fn section(&self, text: &str) -> SectionedReport {
        // (header index, header start, header end)
        let mut located: Vec<(usize, usize, usize)> = Vec::with_capacity(self.headers.len());
        let mut cursor = 0;

        for (index, (_, re)) in self.headers.iter().enumerate() {
            let found = re.find_at(text, cursor).or_else(|| re.find(text));
            if let Some(m) = found {
                if m.start() >= cursor {
                    cursor = m.end();
                }
                located.push((index, m.start(), m.end()));
            }
        }

        located.sort_by_key(|&(_, start, _)| start);

        let mut report = SectionedReport::new();
        for (pos, &(index, _, end)) in located.iter().enumerate() {
            let stop = located
                .get(pos + 1)
                .map(|&(_, next_start, _)| next_start)
                .unwrap_or(text.len());
            let body = text.get(end..stop).unwrap_or_default().trim();
            report.insert(self.headers[index].0.clone(), body);
        }

        report
    }
}

/// One piece pulled out of a numbered wardrobe list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WardrobeItem {
    pub kind: String,
    pub description: String,
}

impl WardrobeItem {
    /// `type: description`, the form used in the image prompt.
    pub fn label(&self) -> String {
        format!("{}: {}", self.kind, self.description)
    }
}

/// Extract up to [`MAX_IMAGE_ITEMS`] numbered `N. Type - description` lines.
pub fn extract_items(text: &str) -> Vec<WardrobeItem> {
    NUMBERED_ITEM
        .captures_iter(text)
        .filter_map(|caps| {
            let kind = clean_item_text(caps.get(1)?.as_str());
            let description = clean_item_text(caps.get(2)?.as_str());
            if kind.is_empty() || description.is_empty() {
                return None;
            }
            Some(WardrobeItem {
                kind: kind.to_string(),
                description: description.to_string(),
            })
        })
        .take(MAX_IMAGE_ITEMS)
        .collect()
}

/// Strip markdown emphasis and stray whitespace around an item field.
fn clean_item_text(raw: &str) -> &str {
    raw.trim().trim_matches('*').trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(pairs: &[(&str, &str)]) -> SectionedReport {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_three_header_response() {
        let text = "### Wardrobe Items ###\nItem A\n### Footwear ###\nShoe A\n### Image Prompt ###\nFlat lay of ...";
        let report = ResponseSectioner::canonical().section(text);
        assert_eq!(
            report,
            expected(&[
                ("Wardrobe Items", "Item A"),
                ("Footwear", "Shoe A"),
                ("Image Prompt", "Flat lay of ..."),
            ])
        );
    }

    #[test]
    fn test_missing_image_prompt_header() {
        let text = "### Wardrobe Items ###\nItem A\n### Footwear ###\nShoe A\n";
        let report = ResponseSectioner::canonical().section(text);
        assert!(!report.contains("Image Prompt"));
        assert_eq!(report.get("Footwear"), Some("Shoe A"));
    }

    #[test]
    fn test_no_headers_yields_empty_report() {
        let sectioner = ResponseSectioner::canonical();
        assert!(sectioner.section("").is_empty());
        assert!(sectioner.section("Here is your wardrobe: 1. Tee - white").is_empty());
    }

    #[test]
    fn test_preamble_before_first_header_is_dropped() {
        let text = "Sure! Here's your plan.\n\n### Footwear ###\nLoafers";
        let report = ResponseSectioner::canonical().section(text);
        assert_eq!(report, expected(&[("Footwear", "Loafers")]));
    }

    #[test]
    fn test_header_matching_is_lenient() {
        let text = "  ## wardrobe   items ##  \nTee\n#### FOOTWEAR\nBoots\n";
        let report = ResponseSectioner::canonical().section(text);
        assert_eq!(
            report,
            expected(&[("Wardrobe Items", "Tee"), ("Footwear", "Boots")])
        );
    }

    #[test]
    fn test_header_text_inside_a_line_is_not_a_header() {
        let text = "### Footwear ###\nPair them with the ### Accessories ### you own.\n";
        let report = ResponseSectioner::canonical().section(text);
        assert_eq!(report.len(), 1);
        assert!(report.get("Footwear").unwrap().contains("### Accessories ###"));
    }

    #[test]
    fn test_out_of_order_headers_do_not_panic() {
        let text = "### Image Prompt ###\nFlat lay\n### Wardrobe Items ###\nTee\n### Footwear ###\nBoots";
        let report = ResponseSectioner::canonical().section(text);
        assert_eq!(
            report,
            expected(&[
                ("Image Prompt", "Flat lay"),
                ("Wardrobe Items", "Tee"),
                ("Footwear", "Boots"),
            ])
        );
    }

    #[test]
    fn test_duplicate_header_first_match_after_expected_position_wins() {
        let text = "### Wardrobe Items ###\nTee\n### Footwear ###\nBoots\n### Footwear ###\nSneakers";
        let report = ResponseSectioner::canonical().section(text);
        assert_eq!(report.get("Footwear"), Some("Boots\n### Footwear ###\nSneakers"));
    }

    #[test]
    fn test_empty_section_body_is_present_but_empty() {
        let text = "### Footwear ###\n\n### Accessories ###\nScarf";
        let report = ResponseSectioner::canonical().section(text);
        assert_eq!(report.get("Footwear"), Some(""));
        assert_eq!(report.get("Accessories"), Some("Scarf"));
    }

    #[test]
    fn test_sectioning_is_idempotent() {
        let text = "### Wardrobe Items ###\n1. Tee - white cotton\n### Style Summary ###\nCalm.";
        let sectioner = ResponseSectioner::canonical();
        assert_eq!(sectioner.section(text), sectioner.section(text));
    }

    #[test]
    fn test_keys_are_subset_of_expected_headers() {
        let sectioner = ResponseSectioner::new(["Alpha", "Beta"]);
        let report = sectioner.section("### Beta ###\nb\n### Gamma ###\ng");
        let titles: Vec<&str> = report.titles().collect();
        assert_eq!(titles, vec!["Beta"]);
        assert_eq!(report.get("Beta"), Some("b\n### Gamma ###\ng"));
    }

    #[test]
    fn test_multibyte_text_is_sliced_safely() {
        let text = "### Footwear ###\nBottes en cuir \u{2014} tr\u{e8}s chic \u{1F462}\n### Accessories ###\n\u{00E9}charpe";
        let report = ResponseSectioner::canonical().section(text);
        assert_eq!(report.get("Accessories"), Some("\u{00E9}charpe"));
    }

    #[test]
    fn test_extract_items() {
        let text = "1. Crew-neck tee - white organic cotton\n\
                    2. **Blazer** - navy wool\n\
                    Some prose in between.\n\
                    3. Wide-leg trousers \u{2013} olive linen\n";
        let items = extract_items(text);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].label(), "Crew-neck tee: white organic cotton");
        assert_eq!(items[1].kind, "Blazer");
        assert_eq!(items[2].description, "olive linen");
    }

    #[test]
    fn test_extract_items_caps_at_eight() {
        let text: String = (1..=12)
            .map(|n| format!("{n}. Piece {n} - color {n}\n"))
            .collect();
        assert_eq!(extract_items(&text).len(), MAX_IMAGE_ITEMS);
    }

    #[test]
    fn test_extract_items_none() {
        assert!(extract_items("No list here.").is_empty());
    }
}
