use tracing::debug;

use super::catalog::Menu;
use super::grocery::build_grocery_list;
use crate::meal_plan::{DayMeals, DayPlan, Meal, MealPlan, MealSlot, Nutrition};
use crate::plan_request::PlanRequest;

/// Per-slot presentation values: a base nutrition profile that grows linearly
/// with the day index, and the slot's share of the weekly budget.
struct SlotProfile {
    description: &'static str,
    base: [u32; 4],
    step: [u32; 4],
    budget_share: f64,
}

impl SlotProfile {
    fn for_slot(slot: MealSlot) -> Self {
        match slot {
            MealSlot::Breakfast => SlotProfile {
                description: "Nutritious breakfast with local ingredients",
                base: [300, 45, 8, 12],
                step: [10, 2, 1, 1],
                budget_share: 0.15,
            },
            MealSlot::Lunch => SlotProfile {
                description: "Balanced lunch with protein and carbs",
                base: [450, 65, 18, 8],
                step: [15, 3, 2, 1],
                budget_share: 0.4,
            },
            MealSlot::Dinner => SlotProfile {
                description: "Healthy dinner option",
                base: [520, 48, 25, 22],
                step: [20, 2, 2, 1],
                budget_share: 0.35,
            },
            MealSlot::Snack => SlotProfile {
                description: "Healthy snack option",
                base: [150, 20, 5, 6],
                step: [5, 1, 1, 1],
                budget_share: 0.1,
            },
        }
    }

    fn nutrition(&self, day_index: usize) -> Nutrition {
        let at = |field: usize| (self.base[field] as usize + day_index * self.step[field] as usize) as f64;
        Nutrition {
            calories: at(0),
            carbs: at(1),
            protein: at(2),
            fat: at(3),
        }
    }

    /// Same for every day: the slot's share of a single day out of the weekly budget.
    fn cost(&self, weekly_budget: u32) -> f64 {
        (weekly_budget as f64 * self.budget_share / 7.0).round()
    }
}

fn build_meal(menu: &Menu, slot: MealSlot, day_index: usize, weekly_budget: u32) -> Meal {
    let template = menu.pick(slot, day_index);
    let profile = SlotProfile::for_slot(slot);
    Meal {
        dish: template.dish.to_string(),
        description: profile.description.to_string(),
        nutrition: profile.nutrition(day_index),
        cost: profile.cost(weekly_budget),
        ingredients: Some(template.ingredients.iter().map(|i| i.to_string()).collect()),
    }
}

/// Builds the offline plan used whenever the remote generator is unavailable.
///
/// Output depends only on the request: same request, same plan.
pub fn synthesize_plan(request: &PlanRequest) -> MealPlan {
    let day_count = request.plan_duration.days();
    let menu = Menu::select(request.is_indian_locale(), request.diet_type.is_vegetarian());
    debug!(
        day_count,
        indian = request.is_indian_locale(),
        vegetarian = request.diet_type.is_vegetarian(),
        "synthesizing fallback plan"
    );

    let days: Vec<DayPlan> = (0..day_count)
        .map(|i| DayPlan {
            day: i as u32 + 1,
            meals: DayMeals {
                breakfast: build_meal(&menu, MealSlot::Breakfast, i, request.budget),
                lunch: build_meal(&menu, MealSlot::Lunch, i, request.budget),
                dinner: build_meal(&menu, MealSlot::Dinner, i, request.budget),
                snack: Some(build_meal(&menu, MealSlot::Snack, i, request.budget)),
            },
        })
        .collect();

    let grocery_list = build_grocery_list(&days);

    MealPlan {
        days,
        total_cost: request.budget as f64,
        grocery_list,
    }
}
