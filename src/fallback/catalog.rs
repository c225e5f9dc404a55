use crate::meal_plan::MealSlot;

/// Dish names containing any of these are dropped from lunch and dinner for vegetarian diets.
pub const MEAT_KEYWORDS: &[&str] = &["chicken", "fish", "beef", "turkey", "salmon"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DishTemplate {
    pub dish: &'static str,
    pub ingredients: &'static [&'static str],
}

macro_rules! dishes {
    ($($dish:literal => [$($ingredient:literal),* $(,)?]),+ $(,)?) => {
        &[$(DishTemplate { dish: $dish, ingredients: &[$($ingredient),*] }),+]
    };
}

const INDIAN_BREAKFAST: &[DishTemplate] = dishes![
    "Vegetable Poha" => ["Poha", "Onions", "Green chilies", "Turmeric", "Oil"],
    "Oats Upma" => ["Oats", "Vegetables", "Mustard seeds", "Curry leaves"],
    "Idli Sambar" => ["Rice", "Urad dal", "Sambar powder", "Vegetables"],
    "Paratha with Curd" => ["Wheat flour", "Curd", "Oil", "Salt"],
    "Dosa with Chutney" => ["Rice", "Urad dal", "Coconut", "Green chilies"],
    "Daliya Khichdi" => ["Daliya", "Moong dal", "Vegetables", "Turmeric"],
    "Besan Chilla" => ["Besan", "Onions", "Tomatoes", "Green chilies"],
];

const WESTERN_BREAKFAST: &[DishTemplate] = dishes![
    "Oatmeal with Fruits" => ["Oats", "Banana", "Apple", "Milk", "Honey"],
    "Scrambled Eggs Toast" => ["Eggs", "Bread", "Butter", "Salt", "Pepper"],
    "Greek Yogurt Bowl" => ["Greek yogurt", "Berries", "Granola", "Honey"],
    "Avocado Toast" => ["Bread", "Avocado", "Tomato", "Salt", "Pepper"],
    "Smoothie Bowl" => ["Banana", "Berries", "Yogurt", "Granola"],
    "Pancakes" => ["Flour", "Eggs", "Milk", "Maple syrup"],
    "Cereal with Milk" => ["Cereal", "Milk", "Banana"],
];

const INDIAN_LUNCH: &[DishTemplate] = dishes![
    "Dal Rice with Vegetables" => ["Rice", "Toor dal", "Mixed vegetables", "Turmeric", "Oil"],
    "Rajma Chawal" => ["Rajma", "Rice", "Onions", "Tomatoes", "Spices"],
    "Chole Bhature" => ["Chickpeas", "Flour", "Oil", "Spices"],
    "Vegetable Biryani" => ["Basmati rice", "Mixed vegetables", "Spices", "Ghee"],
    "Paneer Curry with Roti" => ["Paneer", "Wheat flour", "Onions", "Tomatoes"],
    "Sambar Rice" => ["Rice", "Toor dal", "Vegetables", "Sambar powder"],
    "Aloo Gobi with Chapati" => ["Potatoes", "Cauliflower", "Wheat flour", "Spices"],
];

const WESTERN_LUNCH: &[DishTemplate] = dishes![
    "Grilled Chicken Rice" => ["Chicken", "Rice", "Vegetables", "Olive oil"],
    "Pasta with Vegetables" => ["Pasta", "Mixed vegetables", "Olive oil", "Herbs"],
    "Quinoa Salad" => ["Quinoa", "Vegetables", "Olive oil", "Lemon"],
    "Chicken Caesar Salad" => ["Chicken", "Lettuce", "Caesar dressing", "Croutons"],
    "Rice Bowl" => ["Rice", "Beans", "Vegetables", "Sauce"],
    "Sandwich with Soup" => ["Bread", "Vegetables", "Soup mix"],
    "Stir-fry with Rice" => ["Rice", "Mixed vegetables", "Soy sauce", "Oil"],
];

const INDIAN_DINNER: &[DishTemplate] = dishes![
    "Roti with Paneer Curry" => ["Wheat flour", "Paneer", "Onions", "Tomatoes", "Spices"],
    "Khichdi with Papad" => ["Rice", "Moong dal", "Turmeric", "Papad"],
    "Vegetable Pulao" => ["Basmati rice", "Mixed vegetables", "Whole spices"],
    "Dal Tadka with Rice" => ["Moong dal", "Rice", "Cumin", "Garlic"],
    "Stuffed Paratha" => ["Wheat flour", "Potatoes", "Ghee", "Curd"],
    "Mixed Vegetable Curry" => ["Mixed vegetables", "Coconut", "Spices"],
    "Jeera Rice with Dal" => ["Rice", "Cumin", "Toor dal", "Turmeric"],
];

const WESTERN_DINNER: &[DishTemplate] = dishes![
    "Grilled Fish with Vegetables" => ["Fish", "Broccoli", "Carrots", "Olive oil"],
    "Chicken Stir-fry" => ["Chicken", "Bell peppers", "Onions", "Soy sauce"],
    "Vegetable Pasta" => ["Pasta", "Zucchini", "Tomatoes", "Herbs"],
    "Beef with Rice" => ["Beef", "Rice", "Vegetables", "Sauce"],
    "Salmon with Quinoa" => ["Salmon", "Quinoa", "Asparagus", "Lemon"],
    "Turkey Wrap" => ["Turkey", "Tortilla", "Lettuce", "Tomato"],
    "Lentil Soup with Bread" => ["Lentils", "Vegetables", "Bread", "Herbs"],
];

const INDIAN_SNACKS: &[DishTemplate] = dishes![
    "Mixed Nuts" => ["Almonds", "Cashews", "Walnuts"],
    "Fruit Chaat" => ["Seasonal fruits", "Chaat masala", "Lemon"],
    "Roasted Chana" => ["Chickpeas", "Spices"],
    "Buttermilk" => ["Curd", "Water", "Salt", "Cumin"],
    "Banana with Peanut Butter" => ["Banana", "Peanut butter"],
    "Green Tea with Biscuits" => ["Green tea", "Whole wheat biscuits"],
    "Sprouts Salad" => ["Mixed sprouts", "Onions", "Tomatoes", "Lemon"],
];

const WESTERN_SNACKS: &[DishTemplate] = dishes![
    "Greek Yogurt with Berries" => ["Greek yogurt", "Mixed berries"],
    "Apple with Almond Butter" => ["Apple", "Almond butter"],
    "Trail Mix" => ["Nuts", "Dried fruits", "Seeds"],
    "Hummus with Carrots" => ["Hummus", "Carrots"],
    "Protein Smoothie" => ["Protein powder", "Banana", "Milk"],
    "Cheese and Crackers" => ["Cheese", "Whole grain crackers"],
    "Energy Balls" => ["Dates", "Nuts", "Coconut"],
];

pub fn is_meat_dish(dish: &str) -> bool {
    let lowered = dish.to_lowercase();
    MEAT_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Dish pools for one request, already filtered for the diet.
///
/// Every pool is non-empty for all four locale/diet combinations, so
/// `pick` can cycle with a plain modulo.
#[derive(Debug, Clone)]
pub struct Menu {
    pub breakfast: Vec<DishTemplate>,
    pub lunch: Vec<DishTemplate>,
    pub dinner: Vec<DishTemplate>,
    pub snacks: Vec<DishTemplate>,
}

impl Menu {
    pub fn select(indian: bool, vegetarian: bool) -> Self {
        let (breakfast, lunch, dinner, snacks) = if indian {
            (INDIAN_BREAKFAST, INDIAN_LUNCH, INDIAN_DINNER, INDIAN_SNACKS)
        } else {
            (WESTERN_BREAKFAST, WESTERN_LUNCH, WESTERN_DINNER, WESTERN_SNACKS)
        };

        let mut menu = Menu {
            breakfast: breakfast.to_vec(),
            lunch: lunch.to_vec(),
            dinner: dinner.to_vec(),
            snacks: snacks.to_vec(),
        };

        if vegetarian {
            menu.lunch.retain(|d| !is_meat_dish(d.dish));
            menu.dinner.retain(|d| !is_meat_dish(d.dish));
        }
        menu
    }

    pub fn pool(&self, slot: MealSlot) -> &[DishTemplate] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snack => &self.snacks,
        }
    }

    /// Pools shorter than the plan repeat cyclically.
    pub fn pick(&self, slot: MealSlot, day_index: usize) -> &DishTemplate {
        let pool = self.pool(slot);
        &pool[day_index % pool.len()]
    }
}
