//! `atelier options` - print the form vocabulary.

use anyhow::Result;
use console::style;

use atelier_types::profile::{ChoiceOption, FormOptions};

/// Print every choice list and slider bound.
///
/// Values in the first column are the keys accepted in profile files.
pub fn show_options(json: bool) -> Result<()> {
    let options = FormOptions::current();

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    println!();
    print_choices("Gender Identity", &options.genders);
    print_choices("Body Type", &options.body_types);
    print_choices("Top Size", &options.top_sizes);
    print_choices("Color Preferences", &options.color_palettes);
    print_choices(
        &format!("Style Inspiration (up to {})", options.max_style_inspirations),
        &options.style_inspirations,
    );
    print_choices("Lifestyle Needs", &options.lifestyles);

    println!("  {}", style("── Ranges ──").dim());
    println!(
        "  Age:            {}-{} (default {})",
        options.age.min, options.age.max, options.age.default
    );
    println!(
        "  Monthly Budget: ${}-${} (default ${})",
        options.monthly_budget.min, options.monthly_budget.max, options.monthly_budget.default
    );
    println!();
    println!(
        "  {} {}",
        style("Required:").bold(),
        options.required.join(", ")
    );
    println!();

    Ok(())
}

fn print_choices(title: &str, choices: &[ChoiceOption]) {
    println!("  {}", style(format!("── {title} ──")).dim());
    for choice in choices {
        println!(
            "  {:<20} {}",
            style(choice.value).cyan(),
            choice.label
        );
    }
    println!();
}
