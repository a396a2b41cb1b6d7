//! Style profile types collected from the wardrobe form.
//!
//! A submission arrives as a [`StyleProfileForm`] (raw strings, nothing
//! trusted) and is turned into an immutable [`StyleProfile`] by
//! [`StyleProfileForm::validate`]. Every problem found is reported in one
//! aggregated [`ValidationError`].

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Age slider bounds.
pub const AGE_RANGE: RangeInclusive<i64> = 18..=80;
pub const DEFAULT_AGE: i64 = 25;

/// Monthly budget slider bounds (USD).
pub const BUDGET_RANGE: RangeInclusive<i64> = 50..=1000;
pub const DEFAULT_BUDGET: i64 = 200;

/// Maximum number of style inspirations a user may pick.
pub const MAX_STYLE_INSPIRATIONS: usize = 3;

// Field labels, shared by validation messages and the serialized profile.
pub const LABEL_NAME: &str = "Full Name";
pub const LABEL_AGE: &str = "Age";
pub const LABEL_GENDER: &str = "Gender Identity";
pub const LABEL_BODY_TYPE: &str = "Body Type";
pub const LABEL_TOP_SIZE: &str = "Top Size";
pub const LABEL_BOTTOM_SIZE: &str = "Bottom Size";
pub const LABEL_COLOR_PALETTE: &str = "Color Preferences";
pub const LABEL_STYLE_INSPIRATION: &str = "Style Inspiration";
pub const LABEL_AVOIDS: &str = "Avoids";
pub const LABEL_LIFESTYLE: &str = "Lifestyle Needs";
pub const LABEL_BUDGET: &str = "Monthly Budget";
pub const LABEL_OCCASION: &str = "Upcoming Occasion";

/// Defines a single-choice form enumeration with a stable API key and a
/// display label. `FromStr` accepts either, case-insensitively.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $variant:ident => ($key:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $name {
            /// Every choice, in form order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable machine key used by the JSON API.
            pub fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            /// Label shown in the form and embedded in prompts.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|c| {
                        c.key().eq_ignore_ascii_case(wanted)
                            || c.label().eq_ignore_ascii_case(wanted)
                    })
                    .ok_or_else(|| format!("invalid {}: '{}'", $kind, wanted))
            }
        }
    };
}

choice_enum! {
    /// Gender identity; drives the gendered phrasing of both prompts.
    Gender, "gender identity" {
        Female => ("female", "Female"),
        Male => ("male", "Male"),
        NonBinary => ("non_binary", "Non-binary"),
        PreferNotToSay => ("prefer_not_to_say", "Prefer not to say"),
    }
}

choice_enum! {
    BodyType, "body type" {
        Hourglass => ("hourglass", "Hourglass"),
        Pear => ("pear", "Pear"),
        Apple => ("apple", "Apple"),
        Rectangle => ("rectangle", "Rectangle"),
        InvertedTriangle => ("inverted_triangle", "Inverted triangle"),
        NoPreference => ("no_preference", "No preference"),
    }
}

choice_enum! {
    TopSize, "top size" {
        Xs => ("xs", "XS"),
        S => ("s", "S"),
        M => ("m", "M"),
        L => ("l", "L"),
        Xl => ("xl", "XL"),
    }
}

choice_enum! {
    /// Color families. Labels carry the concrete color terms used in the
    /// image prompt.
    ColorPalette, "color palette" {
        Neutrals => ("neutrals", "Neutrals (black, white, beige)"),
        EarthTones => ("earth_tones", "Earth tones (olive, rust, brown)"),
        JewelTones => ("jewel_tones", "Jewel tones (emerald, sapphire, ruby)"),
        Pastels => ("pastels", "Pastels (lavender, mint, blush)"),
        Brights => ("brights", "Brights (neon, primary colors)"),
    }
}

choice_enum! {
    StyleInspiration, "style inspiration" {
        Minimalist => ("minimalist", "Minimalist"),
        Bohemian => ("bohemian", "Bohemian"),
        Streetwear => ("streetwear", "Streetwear"),
        BusinessCasual => ("business_casual", "Business Casual"),
        Athleisure => ("athleisure", "Athleisure"),
        Romantic => ("romantic", "Romantic"),
        Edgy => ("edgy", "Edgy"),
        Vintage => ("vintage", "Vintage"),
    }
}

choice_enum! {
    /// Weekly activities the wardrobe has to cover.
    Lifestyle, "weekly activity" {
        OfficeWork => ("office_work", "Office work"),
        CreativeWork => ("creative_work", "Creative work"),
        Parenting => ("parenting", "Parenting"),
        Fitness => ("fitness", "Fitness"),
        SocialEvents => ("social_events", "Social events"),
        OutdoorActivities => ("outdoor_activities", "Outdoor activities"),
        CasualHangouts => ("casual_hangouts", "Casual hangouts"),
    }
}

/// A validated style profile. Immutable and request-scoped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub body_type: BodyType,
    pub top_size: TopSize,
    pub bottom_size: String,
    pub color_palette: Vec<ColorPalette>,
    pub style_inspiration: Vec<StyleInspiration>,
    pub avoids: String,
    pub lifestyle: Vec<Lifestyle>,
    /// Monthly budget for new pieces, in USD.
    pub monthly_budget: u32,
    pub occasion_date: Option<NaiveDate>,
}

/// Raw form submission, exactly as the UI (or a profile file) sends it.
///
/// Choice fields accept either the API key (`"non_binary"`) or the label
/// (`"Non-binary"`). Missing single-choice fields fall back to the form's
/// neutral default; missing sliders fall back to the slider default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleProfileForm {
    pub name: String,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub body_type: Option<String>,
    pub top_size: Option<String>,
    pub bottom_size: String,
    pub color_palette: Vec<String>,
    pub style_inspiration: Vec<String>,
    pub avoids: String,
    pub lifestyle: Vec<String>,
    pub monthly_budget: Option<i64>,
    /// `YYYY-MM-DD`; blank means no occasion.
    pub occasion_date: Option<String>,
}

impl StyleProfileForm {
    /// Validate the submission into a [`StyleProfile`].
    ///
    /// Mandatory fields: name, top size, bottom size. Every blank mandatory
    /// field and every invalid value is collected before failing.
    pub fn validate(&self) -> Result<StyleProfile, ValidationError> {
        let mut missing = Vec::new();
        let mut invalid = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            missing.push(LABEL_NAME.to_string());
        }

        let top_size = match non_blank(self.top_size.as_deref()) {
            None => {
                missing.push(LABEL_TOP_SIZE.to_string());
                None
            }
            Some(raw) => parse_choice::<TopSize>(raw, &mut invalid),
        };

        let bottom_size = self.bottom_size.trim();
        if bottom_size.is_empty() {
            missing.push(LABEL_BOTTOM_SIZE.to_string());
        }

        let gender = match non_blank(self.gender.as_deref()) {
            Some(raw) => parse_choice::<Gender>(raw, &mut invalid),
            None => Some(Gender::PreferNotToSay),
        };
        let body_type = match non_blank(self.body_type.as_deref()) {
            Some(raw) => parse_choice::<BodyType>(raw, &mut invalid),
            None => Some(BodyType::NoPreference),
        };

        let age = self.age.unwrap_or(DEFAULT_AGE);
        if !AGE_RANGE.contains(&age) {
            invalid.push(format!(
                "{LABEL_AGE} must be between {} and {}",
                AGE_RANGE.start(),
                AGE_RANGE.end()
            ));
        }

        let monthly_budget = self.monthly_budget.unwrap_or(DEFAULT_BUDGET);
        if !BUDGET_RANGE.contains(&monthly_budget) {
            invalid.push(format!(
                "{LABEL_BUDGET} must be between ${} and ${}",
                BUDGET_RANGE.start(),
                BUDGET_RANGE.end()
            ));
        }

        let color_palette = parse_multi::<ColorPalette>(&self.color_palette, &mut invalid);
        let style_inspiration =
            parse_multi::<StyleInspiration>(&self.style_inspiration, &mut invalid);
        if style_inspiration.len() > MAX_STYLE_INSPIRATIONS {
            invalid.push(format!(
                "{LABEL_STYLE_INSPIRATION} allows at most {MAX_STYLE_INSPIRATIONS} choices"
            ));
        }
        let lifestyle = parse_multi::<Lifestyle>(&self.lifestyle, &mut invalid);

        let occasion_date = match non_blank(self.occasion_date.as_deref()) {
            None => None,
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    invalid.push(format!("{LABEL_OCCASION} must be a YYYY-MM-DD date"));
                    None
                }
            },
        };

        if let Some(err) = ValidationError::from_problems(missing, invalid) {
            return Err(err);
        }

        // Every None below has already been reported above.
        let (Some(top_size), Some(gender), Some(body_type)) = (top_size, gender, body_type)
        else {
            return Err(ValidationError::missing(LABEL_TOP_SIZE));
        };

        Ok(StyleProfile {
            name: name.to_string(),
            age: age as u8,
            gender,
            body_type,
            top_size,
            bottom_size: bottom_size.to_string(),
            color_palette,
            style_inspiration,
            avoids: self.avoids.trim().to_string(),
            lifestyle,
            monthly_budget: monthly_budget as u32,
            occasion_date,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_choice<T: FromStr<Err = String>>(raw: &str, invalid: &mut Vec<String>) -> Option<T> {
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            invalid.push(e);
            None
        }
    }
}

/// Parse a multi-select, skipping blanks and dropping duplicates while
/// keeping the user's order.
fn parse_multi<T>(raw: &[String], invalid: &mut Vec<String>) -> Vec<T>
where
    T: FromStr<Err = String> + PartialEq,
{
    let mut out: Vec<T> = Vec::with_capacity(raw.len());
    for item in raw.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        if let Some(value) = parse_choice::<T>(item, invalid) {
            if !out.contains(&value) {
                out.push(value);
            }
        }
    }
    out
}

/// One selectable value in a form field.
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Bounds and default for a numeric slider.
#[derive(Debug, Clone, Serialize)]
pub struct NumericBounds {
    pub min: i64,
    pub max: i64,
    pub default: i64,
}

/// Everything the UI needs to render the form.
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub genders: Vec<ChoiceOption>,
    pub body_types: Vec<ChoiceOption>,
    pub top_sizes: Vec<ChoiceOption>,
    pub color_palettes: Vec<ChoiceOption>,
    pub style_inspirations: Vec<ChoiceOption>,
    pub lifestyles: Vec<ChoiceOption>,
    pub age: NumericBounds,
    pub monthly_budget: NumericBounds,
    pub max_style_inspirations: usize,
    /// API field names that must not be blank.
    pub required: Vec<&'static str>,
}

impl FormOptions {
    pub fn current() -> Self {
        Self {
            genders: Gender::ALL.iter().map(|c| option(c.key(), c.label())).collect(),
            body_types: BodyType::ALL.iter().map(|c| option(c.key(), c.label())).collect(),
            top_sizes: TopSize::ALL.iter().map(|c| option(c.key(), c.label())).collect(),
            color_palettes: ColorPalette::ALL
                .iter()
                .map(|c| option(c.key(), c.label()))
                .collect(),
            style_inspirations: StyleInspiration::ALL
                .iter()
                .map(|c| option(c.key(), c.label()))
                .collect(),
            lifestyles: Lifestyle::ALL.iter().map(|c| option(c.key(), c.label())).collect(),
            age: NumericBounds {
                min: *AGE_RANGE.start(),
                max: *AGE_RANGE.end(),
                default: DEFAULT_AGE,
            },
            monthly_budget: NumericBounds {
                min: *BUDGET_RANGE.start(),
                max: *BUDGET_RANGE.end(),
                default: DEFAULT_BUDGET,
            },
            max_style_inspirations: MAX_STYLE_INSPIRATIONS,
            required: vec!["name", "top_size", "bottom_size"],
        }
    }
}

fn option(value: &'static str, label: &'static str) -> ChoiceOption {
    ChoiceOption { value, label }
}
