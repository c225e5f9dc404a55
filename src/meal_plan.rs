use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct Nutrition {
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Meal {
    pub dish: String,
    #[serde(default)]
    pub description: String,
    pub nutrition: Nutrition,
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayMeals {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snack: Option<Meal>,
}

impl DayMeals {
    /// Meals in serving order; the snack is skipped when absent.
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &Meal)> {
        [
            (MealSlot::Breakfast, Some(&self.breakfast)),
            (MealSlot::Lunch, Some(&self.lunch)),
            (MealSlot::Dinner, Some(&self.dinner)),
            (MealSlot::Snack, self.snack.as_ref()),
        ]
        .into_iter()
        .filter_map(|(slot, meal)| meal.map(|m| (slot, m)))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayPlan {
    pub day: u32,
    pub meals: DayMeals,
}

impl DayPlan {
    pub fn total_calories(&self) -> f64 {
        self.meals.iter().map(|(_, meal)| meal.nutrition.calories).sum()
    }

    pub fn total_cost(&self) -> f64 {
        self.meals.iter().map(|(_, meal)| meal.cost).sum()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GroceryItem {
    pub item: String,
    pub quantity: String,
    pub price: f64,
}

/// Wire shape shared by the remote reply and the fallback synthesizer.
///
/// `total_cost` is the user's weekly budget echoed back, not the sum of
/// meal costs or grocery prices.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub days: Vec<DayPlan>,
    pub total_cost: f64,
    #[serde(default)]
    pub grocery_list: Vec<GroceryItem>,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanValidationError {
    #[error("plan contains no days")]
    NoDays,
    #[error("day at position {position} is numbered {found}, expected {expected}")]
    DayOutOfSequence {
        position: usize,
        expected: u32,
        found: u32,
    },
    #[error("day {day} {slot} has an empty dish name")]
    EmptyDish { day: u32, slot: MealSlot },
    #[error("day {day} {slot} has an invalid {field} value {value}")]
    InvalidNumber {
        day: u32,
        slot: MealSlot,
        field: &'static str,
        value: f64,
    },
    #[error("grocery item at position {0} has an empty name")]
    EmptyGroceryItem(usize),
    #[error("grocery item '{item}' has an invalid price {price}")]
    InvalidGroceryPrice { item: String, price: f64 },
    #[error("total cost {0} is invalid")]
    InvalidTotalCost(f64),
}

fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl MealPlan {
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn grocery_total(&self) -> f64 {
        self.grocery_list.iter().map(|g| g.price).sum()
    }

    /// Field-by-field check applied to any plan that did not come from the
    /// local synthesizer.
    pub fn validate(&self) -> Result<(), PlanValidationError> {
        if self.days.is_empty() {
            return Err(PlanValidationError::NoDays);
        }
        if !is_valid_amount(self.total_cost) {
            return Err(PlanValidationError::InvalidTotalCost(self.total_cost));
        }

        for (position, day) in self.days.iter().enumerate() {
            let expected = position as u32 + 1;
            if day.day != expected {
                return Err(PlanValidationError::DayOutOfSequence {
                    position,
                    expected,
                    found: day.day,
                });
            }

            for (slot, meal) in day.meals.iter() {
                if meal.dish.trim().is_empty() {
                    return Err(PlanValidationError::EmptyDish { day: day.day, slot });
                }
                let fields = [
                    ("calories", meal.nutrition.calories),
                    ("carbs", meal.nutrition.carbs),
                    ("protein", meal.nutrition.protein),
                    ("fat", meal.nutrition.fat),
                    ("cost", meal.cost),
                ];
                if let Some((field, value)) = fields.into_iter().find(|(_, v)| !is_valid_amount(*v)) {
                    return Err(PlanValidationError::InvalidNumber {
                        day: day.day,
                        slot,
                        field,
                        value,
                    });
                }
            }
        }

        for (position, grocery) in self.grocery_list.iter().enumerate() {
            if grocery.item.trim().is_empty() {
                return Err(PlanValidationError::EmptyGroceryItem(position));
            }
            if !is_valid_amount(grocery.price) {
                return Err(PlanValidationError::InvalidGroceryPrice {
                    item: grocery.item.clone(),
                    price: grocery.price,
                });
            }
        }

        Ok(())
    }
}
