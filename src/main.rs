use anyhow::Result;
use clap::{Parser, Subcommand};
use potluck::{
    cli::{self, MealSource},
    config::{Config, OutputFormat},
};

/// potluck - Weekly meal planning and shopping lists
#[derive(Parser)]
#[command(name = "potluck")]
#[command(about = "Plan the week's meals and build the shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the aggregated shopping list for a week
    ShoppingList {
        /// Planned meals file (overrides config file)
        #[arg(long)]
        plan: Option<String>,

        /// Any day of the week to show, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Output format (overrides config file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print the week's menu, one line per planned meal
    Menu {
        #[arg(long)]
        plan: Option<String>,

        #[arg(long)]
        date: Option<String>,
    },
    /// Export a week of planned meals as JSON
    Export {
        #[arg(long)]
        plan: Option<String>,

        #[arg(long)]
        date: Option<String>,

        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
    /// Add a recipe or a custom meal to the plan
    Add {
        #[arg(long)]
        plan: Option<String>,

        /// Day to plan the meal on, YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Recipe id to plan
        #[arg(long, conflicts_with = "name", required_unless_present = "name")]
        recipe: Option<String>,

        /// Recipes file (overrides config file)
        #[arg(long)]
        recipes: Option<String>,

        /// Name of a custom meal without a recipe
        #[arg(long)]
        name: Option<String>,

        /// Servings to plan (defaults to the recipe's servings, or 1)
        #[arg(long)]
        servings: Option<f64>,
    },
    /// Remove a planned meal
    Remove {
        #[arg(long)]
        plan: Option<String>,

        /// Planned meal id
        #[arg(long)]
        id: String,
    },
    /// Show a recipe's ingredients for a number of servings
    Scale {
        #[arg(long)]
        recipes: Option<String>,

        /// Recipe id
        #[arg(long)]
        id: String,

        #[arg(long)]
        servings: f64,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    potluck::observability::init_observability(
        "potluck",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let plan_path = |plan: Option<String>| plan.unwrap_or_else(|| config.plan.plan_path.clone());
    let recipes_path =
        |recipes: Option<String>| recipes.unwrap_or_else(|| config.plan.recipes_path.clone());

    let output = match cli.command {
        Commands::ShoppingList { plan, date, format } => cli::shopping_list(
            &config,
            &plan_path(plan),
            date.as_deref(),
            format.unwrap_or(config.display.format),
        )?,
        Commands::Menu { plan, date } => cli::menu(&config, &plan_path(plan), date.as_deref())?,
        Commands::Export { plan, date, output } => cli::export(
            &config,
            &plan_path(plan),
            date.as_deref(),
            output.as_deref(),
        )?,
        Commands::Add {
            plan,
            date,
            recipe,
            recipes,
            name,
            servings,
        } => {
            let source = match (recipe, name) {
                (Some(id), _) => MealSource::Recipe {
                    id,
                    recipes_path: recipes_path(recipes),
                },
                (None, Some(name)) => MealSource::Custom { name },
                (None, None) => anyhow::bail!("either --recipe or --name is required"),
            };
            cli::add_meal(&plan_path(plan), &date, source, servings)?
        }
        Commands::Remove { plan, id } => cli::remove_meal(&plan_path(plan), &id)?,
        Commands::Scale {
            recipes,
            id,
            servings,
            format,
        } => cli::scale(
            &recipes_path(recipes),
            &id,
            servings,
            format.unwrap_or(config.display.format),
        )?,
    };

    println!("{}", output.trim_end());

    Ok(())
}
