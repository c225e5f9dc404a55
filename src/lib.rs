pub mod api_connection;
pub mod cli;
pub mod config;
pub mod export;
pub mod fallback;
pub mod meal_plan;
pub mod plan_fetcher;
pub mod plan_request;
pub mod planner;
pub mod prompt_builder;
