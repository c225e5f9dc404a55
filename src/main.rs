use anyhow::{Context, Result};
use meal_planner::api_connection::Provider;
use meal_planner::cli::{parse_args, OutputFormat};
use meal_planner::config::GeminiConfig;
use meal_planner::export::{render_json, render_markdown, write_grocery_csv};
use meal_planner::planner::{generate_meal_plan, offline_plan, PlanSource};
use tokio::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok(); // Load .env file for API keys
    init_tracing();

    let cli_args = parse_args();
    let request = cli_args.to_request();
    request.check().context("Invalid meal plan request")?;

    info!(
        location = %request.location,
        diet = %request.diet_type,
        duration = %request.plan_duration,
        "generating meal plan"
    );

    let generated = if cli_args.offline {
        offline_plan(&request)
    } else {
        let config = GeminiConfig::from_env().with_endpoint(cli_args.endpoint.clone());
        generate_meal_plan(&Provider::gemini(config), &request).await
    };

    if generated.source == PlanSource::Fallback && !cli_args.offline {
        eprintln!("Could not reach the meal plan generator; showing an offline plan instead.");
    }

    let rendered = match cli_args.format {
        OutputFormat::Markdown => render_markdown(&generated.plan, &request, generated.source),
        OutputFormat::Json => render_json(&generated.plan).context("Failed to serialize meal plan")?,
    };

    match &cli_args.output {
        Some(path) => {
            fs::write(path, rendered)
                .await
                .with_context(|| format!("Failed to write meal plan to '{}'", path.display()))?;
            info!(path = %path.display(), "meal plan written");
        }
        None => println!("{}", rendered),
    }

    if let Some(path) = &cli_args.grocery_csv {
        let mut buffer = Vec::new();
        write_grocery_csv(&generated.plan.grocery_list, &mut buffer).context("Failed to build grocery CSV")?;
        fs::write(path, buffer)
            .await
            .with_context(|| format!("Failed to write grocery list to '{}'", path.display()))?;
        info!(path = %path.display(), items = generated.plan.grocery_list.len(), "grocery list written");
    }

    Ok(())
}
