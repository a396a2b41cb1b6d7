//! RecommendationAssembler -- runs one submission through every stage.
//!
//! The two service calls are strictly sequential: the image prompt is
//! derived from the text response, so the image call can only start once
//! the text call has finished. A text failure aborts the run before any
//! image call is made. An image failure is carried in the result instead.

use tracing::{info_span, Instrument};

use atelier_types::config::{AppConfig, ImageModelConfig, TextModelConfig};
use atelier_types::image::ImageRequest;
use atelier_types::llm::{CompletionRequest, LlmError, Message, StopReason};
use atelier_types::profile::StyleProfile;
use atelier_types::report::{ImageOutcome, Recommendation};

use crate::image::box_provider::BoxImageProvider;
use crate::llm::box_provider::BoxLlmProvider;

use super::prompt::{build_wardrobe_prompt, STYLIST_SYSTEM_PROMPT};
use super::sectioner::ResponseSectioner;
use super::serializer::serialize_profile;
use super::visual::VisualPromptBuilder;

/// Turns a validated profile into a [`Recommendation`].
///
/// Holds no per-submission state; one instance serves every request.
pub struct RecommendationAssembler {
    text: BoxLlmProvider,
    image: BoxImageProvider,
    text_config: TextModelConfig,
    image_config: ImageModelConfig,
    sectioner: ResponseSectioner,
    visual: VisualPromptBuilder,
}

impl RecommendationAssembler {
    pub fn new(text: BoxLlmProvider, image: BoxImageProvider, config: &AppConfig) -> Self {
        Self {
            text,
            image,
            text_config: config.text.clone(),
            image_config: config.image.clone(),
            sectioner: ResponseSectioner::canonical(),
            visual: VisualPromptBuilder::new(config.image.item_count),
        }
    }

    /// Build the text-service request for a serialized profile.
    pub fn text_request(&self, text_prompt: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.text_config.model.clone(),
            messages: vec![
                Message::system(STYLIST_SYSTEM_PROMPT),
                Message::user(text_prompt),
            ],
            max_tokens: self.text_config.max_tokens,
            temperature: Some(self.text_config.temperature),
        }
    }

    /// Build the image-service request for a finished image prompt.
    pub fn image_request(&self, prompt: &str) -> ImageRequest {
        ImageRequest {
            model: self.image_config.model.clone(),
            prompt: prompt.to_string(),
            size: self.image_config.size,
            quality: self.image_config.quality,
            style: self.image_config.style,
        }
    }

    /// Run the full pipeline for one submission.
    ///
    /// Returns `Err` only when the text service fails or withholds its
    /// output; in that case the image service is never called.
    #[tracing::instrument(
        name = "recommend",
        skip(self, profile),
        fields(text_provider = self.text.name(), image_provider = self.image.name())
    )]
    pub async fn recommend(&self, profile: &StyleProfile) -> Result<Recommendation, LlmError> {
        let profile_summary = serialize_profile(profile);
        let text_prompt = build_wardrobe_prompt(&profile_summary, profile.gender);
        let request = self.text_request(&text_prompt);

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.text.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            gen_ai.request.temperature = ?request.temperature,
        );
        let response = match self.text.complete(&request).instrument(span).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "wardrobe plan request failed");
                return Err(e);
            }
        };
        tracing::debug!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            stop_reason = %response.stop_reason,
            "wardrobe plan received"
        );
        // Filtered output is a text-service failure, even when partial.
        if response.stop_reason == StopReason::ContentFilter {
            tracing::error!(model = %response.model, "wardrobe plan withheld by content filter");
            return Err(LlmError::ContentPolicy(
                "wardrobe plan withheld by the provider's content filter".to_string(),
            ));
        }

        let wardrobe_plan = response.content;
        let report = self.sectioner.section(&wardrobe_plan);
        if report.is_empty() {
            tracing::warn!("response contained none of the expected section headers");
        }

        let image_prompt = self.visual.build(&report, &wardrobe_plan, profile);
        tracing::debug!(source = ?image_prompt.source, "image prompt built");

        let request = self.image_request(&image_prompt.text);
        let span = info_span!(
            "gen_ai.image",
            gen_ai.system = self.image.name(),
            gen_ai.request.model = %request.model,
            image.size = %request.size,
        );
        let image = match self.image.generate(&request).instrument(span).await {
            Ok(image) => ImageOutcome::Generated { image },
            Err(e) => {
                tracing::warn!(error = %e, "closet preview generation failed");
                ImageOutcome::Failed {
                    message: format!("Error generating image: {e}"),
                }
            }
        };

        Ok(Recommendation {
            profile_summary,
            text_prompt,
            wardrobe_plan,
            report,
            image_prompt,
            image,
        })
    }
}
