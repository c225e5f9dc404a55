use std::collections::HashMap;

use crate::meal_plan::{DayPlan, GroceryItem};
use crate::plan_request::capitalize;

pub const DEFAULT_UNIT_PRICE: f64 = 50.0;

/// Keyword buckets with a flat unit price, in INR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceCategory {
    Fruit,
    Cheese,
    Meat,
    Dairy,
    Spice,
    Fat,
    Vegetable,
    Protein,
    Grain,
}

impl PriceCategory {
    /// Precedence order: the first category whose keyword occurs in the name wins.
    pub const PRECEDENCE: [PriceCategory; 9] = [
        PriceCategory::Fruit,
        PriceCategory::Cheese,
        PriceCategory::Meat,
        PriceCategory::Dairy,
        PriceCategory::Spice,
        PriceCategory::Fat,
        PriceCategory::Vegetable,
        PriceCategory::Protein,
        PriceCategory::Grain,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            PriceCategory::Fruit => &["fruits", "banana", "apple"],
            PriceCategory::Cheese => &["paneer", "cheese"],
            PriceCategory::Meat => &["chicken", "fish", "meat"],
            PriceCategory::Dairy => &["milk", "curd", "yogurt"],
            PriceCategory::Spice => &["spices", "turmeric", "cumin"],
            PriceCategory::Fat => &["oil", "ghee", "butter"],
            PriceCategory::Vegetable => &["vegetables", "onions", "tomatoes"],
            PriceCategory::Protein => &["dal", "lentils", "beans"],
            PriceCategory::Grain => &["rice", "wheat flour", "oats"],
        }
    }

    pub fn unit_price(&self) -> f64 {
        match self {
            PriceCategory::Fruit => 80.0,
            PriceCategory::Cheese => 180.0,
            PriceCategory::Meat => 200.0,
            PriceCategory::Dairy => 60.0,
            PriceCategory::Spice => 30.0,
            PriceCategory::Fat => 150.0,
            PriceCategory::Vegetable => 40.0,
            PriceCategory::Protein => 120.0,
            PriceCategory::Grain => 60.0,
        }
    }

    /// `name` is expected to be lowercased already.
    pub fn classify(name: &str) -> Option<PriceCategory> {
        Self::PRECEDENCE
            .into_iter()
            .find(|category| category.keywords().iter().any(|k| name.contains(k)))
    }
}

pub fn estimate_unit_price(ingredient_key: &str) -> f64 {
    PriceCategory::classify(ingredient_key)
        .map(|category| category.unit_price())
        .unwrap_or(DEFAULT_UNIT_PRICE)
}

/// More than three inclusions switch to kilograms (a third of the count, rounded up);
/// otherwise 250 g per inclusion.
pub fn format_quantity(inclusions: u32) -> String {
    if inclusions > 3 {
        format!("{}kg", inclusions.div_ceil(3))
    } else {
        format!("{}g", inclusions * 250)
    }
}

struct IngredientTally {
    key: String,
    inclusions: u32,
    price: f64,
}

/// Consolidates every meal ingredient across the plan, keyed by lowercased name.
///
/// Items keep the order in which they were first seen. The price is fixed on
/// first sight; later inclusions only bump the count.
pub fn build_grocery_list(days: &[DayPlan]) -> Vec<GroceryItem> {
    let mut tallies: Vec<IngredientTally> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for day in days {
        for (_, meal) in day.meals.iter() {
            let Some(ingredients) = &meal.ingredients else {
                continue;
            };
            for ingredient in ingredients {
                let key = ingredient.to_lowercase();
                match positions.get(&key).copied() {
                    Some(idx) => tallies[idx].inclusions += 1,
                    None => {
                        positions.insert(key.clone(), tallies.len());
                        tallies.push(IngredientTally {
                            price: estimate_unit_price(&key),
                            key,
                            inclusions: 1,
                        });
                    }
                }
            }
        }
    }

    tallies
        .into_iter()
        .map(|tally| GroceryItem {
            item: capitalize(&tally.key),
            quantity: format_quantity(tally.inclusions),
            price: tally.price,
        })
        .collect()
}
