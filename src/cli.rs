use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::plan_request::{Allergy, DietType, HealthGoal, PlanDuration, PlanRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a personalized meal plan and grocery list", long_about = None)]
pub struct Cli {
    /// Number of people the plan feeds (1-12)
    #[arg(short, long)]
    pub family_members: u32,

    /// City and country, e.g. "Pune, India"
    #[arg(short, long)]
    pub location: String,

    /// Weekly budget in rupees (500-5000, steps of 100)
    #[arg(short, long, default_value_t = 2000)]
    pub budget: u32,

    /// any, vegetarian, non-vegetarian, vegan or jain
    #[arg(short, long)]
    pub diet: DietType,

    /// Allergen to avoid; repeat for several. "nothing" clears the others.
    #[arg(short, long = "allergy")]
    pub allergies: Vec<Allergy>,

    /// Health condition to account for; repeat for several
    #[arg(short, long = "condition")]
    pub conditions: Vec<String>,

    /// weight-loss, weight-gain, cholesterol-control, muscle-gain, boost-immunity or reduce-disease-risk
    #[arg(short, long)]
    pub goal: HealthGoal,

    /// 1-week, 2-weeks or 1-month
    #[arg(short = 'p', long, default_value = "1-week")]
    pub duration: PlanDuration,

    /// Skip the remote generator and build the offline plan directly
    #[arg(long)]
    pub offline: bool,

    /// Override the generateContent endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Write the rendered plan here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the grocery list as CSV
    #[arg(long)]
    pub grocery_csv: Option<PathBuf>,
}

impl Cli {
    pub fn to_request(&self) -> PlanRequest {
        PlanRequest {
            family_members: self.family_members,
            location: self.location.clone(),
            budget: self.budget,
            diet_type: self.diet,
            allergies: self.allergies.clone(),
            diseases: self.conditions.clone(),
            health_goal: self.goal,
            plan_duration: self.duration,
        }
        .normalized()
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
