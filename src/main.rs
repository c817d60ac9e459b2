use anyhow::{Context, Result};
use recipe_assist::cli::{parse_args, Command};
use recipe_assist::commands::{describe_samples, scale_file, suggest, SuggestionOrigin};
use recipe_assist::config::Settings;
use recipe_assist::recipe::Recipe;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_recipe(recipe: &Recipe) -> Result<()> {
    let json = serde_json::to_string_pretty(recipe).context("Failed to serialize recipe")?;
    println!("{}", json);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok(); // Load .env before the filter reads RUST_LOG
    init_logging();

    let cli_args = parse_args();

    match cli_args.command {
        Command::Scale {
            recipe_file,
            servings,
            output,
        } => {
            let scaled = scale_file(&recipe_file, servings, output.as_deref())?;
            match output {
                Some(path) => println!("Scaled '{}' to {} servings -> {}", scaled.name, servings, path.display()),
                None => print_recipe(&scaled)?,
            }
        }
        Command::Samples { query, goal } => {
            let lines = describe_samples(query.as_deref(), &goal);
            if lines.is_empty() {
                println!("No sample recipes match.");
            }
            for line in lines {
                println!("{}", line);
            }
        }
        Command::Suggest {
            query,
            servings,
            goal,
            offline,
        } => {
            let settings = Settings::from_env().context("Invalid configuration")?;
            let (recipe, origin) = suggest(&settings, &query, &goal, servings, offline).await?;
            if origin == SuggestionOrigin::Catalog {
                eprintln!("Using a sample recipe (model not consulted or unavailable).");
            }
            print_recipe(&recipe)?;
        }
    }

    Ok(())
}
