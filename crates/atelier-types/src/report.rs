//! Sectioned wardrobe report and pipeline output types.
//!
//! The text service is asked to delimit its answer with `### <Title> ###`
//! header lines in the order of [`Section::ALL`]. Whatever subset of those
//! headers actually comes back becomes a [`SectionedReport`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::image::ImageResult;

/// The canonical report sections, in the order the prompt requests them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    WardrobeItems,
    Footwear,
    Accessories,
    StyleRules,
    StyleSummary,
    ImagePrompt,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::WardrobeItems,
        Section::Footwear,
        Section::Accessories,
        Section::StyleRules,
        Section::StyleSummary,
        Section::ImagePrompt,
    ];

    /// Header title as it appears between the `###` markers.
    pub fn title(&self) -> &'static str {
        match self {
            Section::WardrobeItems => "Wardrobe Items",
            Section::Footwear => "Footwear",
            Section::Accessories => "Accessories",
            Section::StyleRules => "Style Rules",
            Section::StyleSummary => "Style Summary",
            Section::ImagePrompt => "Image Prompt",
        }
    }

    /// The full header line, e.g. `### Footwear ###`.
    pub fn header(&self) -> String {
        format!("### {} ###", self.title())
    }

    /// Titles of every canonical section, in order.
    pub fn titles() -> Vec<&'static str> {
        Self::ALL.iter().map(Section::title).collect()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Section title → trimmed section body.
///
/// A header missing from the response is simply absent; readers use
/// [`SectionedReport::text_or_empty`] to render it as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionedReport {
    sections: BTreeMap<String, String>,
}

impl SectionedReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.sections.insert(title.into(), body.into());
    }

    pub fn get(&self, title: &str) -> Option<&str> {
        self.sections.get(title).map(String::as_str)
    }

    pub fn section(&self, section: Section) -> Option<&str> {
        self.get(section.title())
    }

    /// Body of a section, or `""` when the header never appeared.
    pub fn text_or_empty(&self, title: &str) -> &str {
        self.get(title).unwrap_or_default()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.sections.contains_key(title)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SectionedReport {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            sections: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Where the image prompt came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptSource {
    /// Taken from the `Image Prompt` section of the text response.
    Extracted,
    /// Synthesized locally from the style profile.
    Fallback,
}

/// The prompt sent to the image service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePrompt {
    pub text: String,
    pub source: PromptSource,
}

/// Result of the image portion of a submission.
///
/// An image failure never discards the text results; it is carried here
/// as a value instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImageOutcome {
    Generated { image: ImageResult },
    Failed { message: String },
}

impl ImageOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, ImageOutcome::Generated { .. })
    }
}

/// Everything one submission produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The serialized profile block embedded in the text prompt.
    pub profile_summary: String,
    pub text_prompt: String,
    /// Raw text returned by the text service.
    pub wardrobe_plan: String,
    pub report: SectionedReport,
    pub image_prompt: ImagePrompt,
    pub image: ImageOutcome,
}
