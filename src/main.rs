use std::env;
use std::process;

use recipe_genie::{GenerationOutcome, ProviderKind, RecipeGenerator, RecipeIngredient};

const USAGE: &str = "Usage: recipe-genie <query> [options]

Options:
  --available <text>   Pantry ingredients, comma or newline separated
  --servings <n>       Target servings
  --cuisine <name>     Preferred cuisine
  --time <text>        Time preference, e.g. \"under 30 minutes\"
  --provider <name>    google (default), openai or anthropic
  --api-key <key>      API key (otherwise read from config/environment)
  --model <name>       Model identifier override";

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args[0] == "--help" || args[0] == "-h" {
        eprintln!("{}", USAGE);
        process::exit(if args.is_empty() { 1 } else { 0 });
    }

    let mut builder = RecipeGenerator::builder().query(&args[0]);

    let mut iter = args[1..].iter();
    while let Some(flag) = iter.next() {
        let value = match iter.next() {
            Some(v) => v,
            None => {
                eprintln!("Missing value for {}\n\n{}", flag, USAGE);
                process::exit(1);
            }
        };
        builder = match flag.as_str() {
            "--available" => builder.available(value),
            "--servings" => builder.servings(value),
            "--cuisine" => builder.cuisine(value),
            "--time" => builder.time_preference(value),
            "--api-key" => builder.api_key(value),
            "--model" => builder.model(value),
            "--provider" => match value.as_str() {
                "google" => builder.provider(ProviderKind::Google),
                "openai" => builder.provider(ProviderKind::OpenAI),
                "anthropic" => builder.provider(ProviderKind::Anthropic),
                other => {
                    eprintln!("Unknown provider: {}\n\n{}", other, USAGE);
                    process::exit(1);
                }
            },
            other => {
                eprintln!("Unknown option: {}\n\n{}", other, USAGE);
                process::exit(1);
            }
        };
    }

    match builder.build().await {
        Ok(outcome) => print_outcome(&outcome),
        Err(e) => {
            eprintln!("Failed to generate or parse recipe: {}", e);
            process::exit(1);
        }
    }
}

fn print_outcome(outcome: &GenerationOutcome) {
    let recipe = &outcome.recipe;

    println!("{}", recipe.title);
    if let Some(summary) = &recipe.summary {
        println!("{}", summary);
    }
    let mut details = Vec::new();
    if let Some(servings) = recipe.servings {
        details.push(format!("serves {}", servings));
    }
    if let Some(minutes) = recipe.estimated_time_minutes {
        details.push(format!("~{} min", minutes));
    }
    if let Some(cuisine) = &recipe.cuisine {
        details.push(cuisine.clone());
    }
    if !details.is_empty() {
        println!("({})", details.join(", "));
    }

    println!("\nIngredients:");
    for item in &recipe.ingredients {
        println!("  - {}", format_ingredient(item));
    }

    println!("\nSteps:");
    for (i, step) in recipe.steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    if !recipe.tips.is_empty() {
        println!("\nTips:");
        for tip in &recipe.tips {
            println!("  - {}", tip);
        }
    }

    println!("\nAlready have:");
    if outcome.have_list.is_empty() {
        println!("  (nothing from your pantry)");
    }
    for item in &outcome.have_list {
        println!("  - {}", item.name);
    }

    println!("\nShopping list:");
    if outcome.shopping_list.is_empty() {
        println!("  (nothing to buy)");
    }
    for item in &outcome.shopping_list {
        println!("  - {}", format_ingredient(item));
    }
}

fn format_ingredient(item: &RecipeIngredient) -> String {
    let mut line = String::new();
    if let Some(quantity) = &item.quantity {
        line.push_str(quantity);
        line.push(' ');
    }
    if let Some(unit) = &item.unit {
        line.push_str(unit);
        line.push(' ');
    }
    line.push_str(&item.name);
    if let Some(note) = &item.note {
        line.push_str(" (");
        line.push_str(note);
        line.push(')');
    }
    line
}
