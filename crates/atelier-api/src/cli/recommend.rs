//! `atelier recommend` - run the pipeline for a profile file.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use atelier_infra::config::load_profile_form;
use atelier_types::report::{ImageOutcome, PromptSource, Recommendation, Section};

use crate::state::AppState;

/// Validate the profile, run one recommendation and print it.
///
/// Validation and text-service failures are returned as errors; an image
/// failure is printed alongside the text results.
pub async fn recommend(state: &AppState, profile_path: &Path, json: bool, quiet: bool) -> Result<()> {
    let form = load_profile_form(profile_path).await?;
    let profile = form.validate()?;

    let spinner = if json || quiet {
        ProgressBar::hidden()
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    };
    spinner.set_message(format!("Styling a capsule wardrobe for {}...", profile.name));

    let result = state.assembler.recommend(&profile).await;
    spinner.finish_and_clear();
    let recommendation = result
        .map_err(|e| anyhow::anyhow!("Error generating recommendations: {e}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
        return Ok(());
    }

    print_recommendation(&recommendation);
    Ok(())
}

fn print_recommendation(recommendation: &Recommendation) {
    println!();
    if recommendation.report.is_empty() {
        println!(
            "  {} The response did not follow the expected layout; showing it as-is.",
            style("!").yellow().bold()
        );
        println!();
        println!("{}", recommendation.wardrobe_plan);
    }

    for section in Section::ALL.iter().filter(|s| **s != Section::ImagePrompt) {
        let Some(body) = recommendation.report.section(*section) else {
            continue;
        };
        println!("  {}", style(format!("── {} ──", section.title())).cyan().bold());
        for line in body.lines() {
            println!("  {line}");
        }
        println!();
    }

    println!("  {}", style("── Your Closet ──").cyan().bold());
    match &recommendation.image {
        ImageOutcome::Generated { image } => {
            match (&image.url, &image.b64_json) {
                (Some(url), _) => println!("  {} {}", style("✓").green(), style(url).underlined()),
                (None, Some(_)) => println!(
                    "  {} Image returned inline (use --json to get the base64 payload)",
                    style("✓").green()
                ),
                (None, None) => {}
            }
            if let Some(revised) = &image.revised_prompt {
                println!("  {} {}", style("Rendered as:").dim(), style(revised).dim());
            }
        }
        ImageOutcome::Failed { message } => {
            println!("  {} {}", style("✗").red(), message);
        }
    }

    let source = match recommendation.image_prompt.source {
        PromptSource::Extracted => "from response",
        PromptSource::Fallback => "generated from profile",
    };
    println!(
        "  {} {}",
        style(format!("Image prompt ({source}):")).dim(),
        style(&recommendation.image_prompt.text).dim()
    );
    println!();
}
