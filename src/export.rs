use std::fmt;
use std::io;

use crate::meal_plan::{GroceryItem, MealPlan};
use crate::plan_request::{capitalize, PlanRequest};
use crate::planner::PlanSource;

fn list_or_none(items: Vec<String>) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

/// Printable summary of a plan: request details, each day's meals, the grocery list
/// and the weekly cost line.
pub fn render_markdown(plan: &MealPlan, request: &PlanRequest, source: PlanSource) -> String {
    MarkdownReport { plan, request, source }.to_string()
}

struct MarkdownReport<'a> {
    plan: &'a MealPlan,
    request: &'a PlanRequest,
    source: PlanSource,
}

impl fmt::Display for MarkdownReport<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let MarkdownReport { plan, request, source } = *self;
        writeln!(out, "# Your Personalized Meal Plan\n")?;
        writeln!(out, "_Source: {}_\n", source)?;
        writeln!(out, "- Location: {}", request.location)?;
        writeln!(out, "- Family members: {}", request.family_members)?;
        writeln!(out, "- Weekly budget: ₹{}", request.budget)?;
        writeln!(out, "- Diet type: {}", request.diet_type)?;
        writeln!(out, "- Health goal: {}", request.health_goal)?;
        writeln!(
            out,
            "- Duration: {} ({} days)",
            request.plan_duration,
            request.plan_duration.days()
        )?;
        writeln!(
            out,
            "- Allergies: {}",
            list_or_none(request.allergies.iter().map(|a| a.label()).collect())
        )?;
        writeln!(out, "- Health conditions: {}", list_or_none(request.diseases.clone()))?;

        for day in &plan.days {
            writeln!(out, "\n## Day {}", day.day)?;
            for (slot, meal) in day.meals.iter() {
                writeln!(out, "\n### {}\n", capitalize(slot.as_str()))?;
                writeln!(out, "**{}**", meal.dish)?;
                if !meal.description.is_empty() {
                    writeln!(out, "{}", meal.description)?;
                }
                writeln!(
                    out,
                    "\nCalories: {} | Carbs: {}g | Protein: {}g | Fat: {}g | Cost: ₹{}",
                    meal.nutrition.calories,
                    meal.nutrition.carbs,
                    meal.nutrition.protein,
                    meal.nutrition.fat,
                    meal.cost
                )?;
                if let Some(ingredients) = meal.ingredients.as_ref().filter(|i| !i.is_empty()) {
                    writeln!(out, "\nIngredients: {}", ingredients.join(", "))?;
                }
            }
            writeln!(
                out,
                "\n_Day total: {} kcal, ₹{}_",
                day.total_calories(),
                day.total_cost()
            )?;
        }

        writeln!(out, "\n## Grocery List\n")?;
        for item in &plan.grocery_list {
            writeln!(out, "- {} ({}): ₹{}", item.item, item.quantity, item.price)?;
        }
        if !plan.grocery_list.is_empty() {
            writeln!(out, "\nGrocery estimate: ₹{}", plan.grocery_total())?;
        }
        writeln!(out, "\n**Weekly Estimated Cost: ₹{}**", plan.total_cost)
    }
}

pub fn render_json(plan: &MealPlan) -> serde_json::Result<String> {
    serde_json::to_string_pretty(plan)
}

/// `item,quantity,price` with a header row, even for an empty list.
pub fn write_grocery_csv<W: io::Write>(items: &[GroceryItem], writer: W) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(["item", "quantity", "price"])?;
    for item in items {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}
