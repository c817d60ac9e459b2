use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{DEFAULT_SERVINGS, MAX_SERVINGS, MIN_SERVINGS};
use crate::preferences::NutritionGoal;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rescale a recipe JSON file to a new number of servings
    Scale {
        /// Path to the recipe JSON file
        #[arg(short, long)]
        recipe_file: PathBuf,
        /// Target number of servings
        #[arg(short, long, value_parser = servings_parser())]
        servings: u32,
        /// Write the scaled recipe here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the built-in sample recipes
    Samples {
        /// Keywords to search for in recipe and ingredient names
        #[arg(short, long)]
        query: Option<String>,
        /// Only show recipes meeting these nutrition goals
        #[arg(short, long, value_enum)]
        goal: Vec<NutritionGoal>,
    },
    /// Suggest a recipe for a natural-language request
    Suggest {
        /// What you would like to cook
        #[arg(short, long)]
        query: String,
        #[arg(short, long, default_value_t = DEFAULT_SERVINGS, value_parser = servings_parser())]
        servings: u32,
        #[arg(short, long, value_enum)]
        goal: Vec<NutritionGoal>,
        /// Only use the sample recipes, never call the model
        #[arg(long)]
        offline: bool,
    },
}

fn servings_parser() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(i64::from(MIN_SERVINGS)..=i64::from(MAX_SERVINGS))
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
