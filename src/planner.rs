use std::fmt;
use tracing::{info, warn};

use crate::api_connection::Provider;
use crate::fallback::synthesize_plan;
use crate::meal_plan::MealPlan;
use crate::plan_fetcher::fetch_remote_plan;
use crate::plan_request::PlanRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    Remote,
    Fallback,
}

impl fmt::Display for PlanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanSource::Remote => f.write_str("AI-generated"),
            PlanSource::Fallback => f.write_str("offline fallback"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub plan: MealPlan,
    pub source: PlanSource,
}

/// Asks the remote generator first and substitutes the synthesized plan on any failure.
pub async fn generate_meal_plan(provider: &Provider, request: &PlanRequest) -> GeneratedPlan {
    match fetch_remote_plan(provider, request).await {
        Ok(plan) => {
            info!(days = plan.day_count(), "received meal plan from remote generator");
            GeneratedPlan {
                plan,
                source: PlanSource::Remote,
            }
        }
        Err(e) => {
            warn!(error = %e, endpoint = provider.endpoint(), "remote plan generation failed, using fallback plan");
            offline_plan(request)
        }
    }
}

pub fn offline_plan(request: &PlanRequest) -> GeneratedPlan {
    GeneratedPlan {
        plan: synthesize_plan(request),
        source: PlanSource::Fallback,
    }
}
