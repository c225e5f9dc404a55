use crate::plan_request::{Allergy, PlanDuration, PlanRequest};

fn duration_phrase(duration: PlanDuration) -> String {
    format!("{} days", duration.days())
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

fn allergy_labels(allergies: &[Allergy]) -> Vec<String> {
    allergies.iter().map(|a| a.label()).collect()
}

/// Dietitian instruction asking for a JSON-only reply in the `MealPlan` wire shape.
pub fn build_plan_prompt(request: &PlanRequest) -> String {
    let budget = request.budget;
    let location = &request.location;
    let goal = request.health_goal;
    let duration = request.plan_duration;
    let days = duration_phrase(duration);
    let conditions = join_or_none(&request.diseases);
    let allergies = join_or_none(&allergy_labels(&request.allergies));

    format!(
        "You are a professional dietitian and nutritionist. Generate a detailed meal plan based on these user inputs:

**User Details:**
- Location: {location}
- Weekly Budget: ₹{budget}
- Diet Type: {diet}
- Number of Family Members: {members}
- Health Conditions: {conditions}
- Allergies: {allergies}
- Health Goal: {goal}
- Duration: {duration}

**Instructions:**
1. Create a daily plan for {days} with:
   - Breakfast, Lunch, Dinner, and optional healthy snacks
   - Different meals each day (no repetition)
   - Nutrition per meal (Calories, Protein, Carbs, Fat)
   - Estimated cost per meal in INR
   - List of ingredients for each meal
   - Use foods common to {location}

2. Respect diet type, allergies, and health conditions
3. Support the health goal: {goal}
4. Stay within budget of ₹{budget} per week
5. Provide a consolidated grocery list with total quantities needed

Return ONLY a valid JSON object in this exact format:
{{
  \"days\": [
    {{
      \"day\": 1,
      \"meals\": {{
        \"breakfast\": {{
          \"dish\": \"Dish Name\",
          \"description\": \"Brief description\",
          \"nutrition\": {{\"calories\": 300, \"carbs\": 45, \"protein\": 12, \"fat\": 8}},
          \"cost\": 25,
          \"ingredients\": [\"ingredient1\", \"ingredient2\"]
        }},
        \"lunch\": {{
          \"dish\": \"Different Dish Name\",
          \"description\": \"Brief description\",
          \"nutrition\": {{\"calories\": 450, \"carbs\": 65, \"protein\": 18, \"fat\": 12}},
          \"cost\": 40,
          \"ingredients\": [\"ingredient3\", \"ingredient4\"]
        }},
        \"dinner\": {{
          \"dish\": \"Another Different Dish\",
          \"description\": \"Brief description\",
          \"nutrition\": {{\"calories\": 400, \"carbs\": 50, \"protein\": 20, \"fat\": 15}},
          \"cost\": 50,
          \"ingredients\": [\"ingredient5\", \"ingredient6\"]
        }},
        \"snack\": {{
          \"dish\": \"Healthy Snack\",
          \"description\": \"Optional healthy snack\",
          \"nutrition\": {{\"calories\": 150, \"carbs\": 20, \"protein\": 5, \"fat\": 6}},
          \"cost\": 15,
          \"ingredients\": [\"snack ingredient\"]
        }}
      }}
    }}
  ],
  \"totalCost\": {budget},
  \"groceryList\": [
    {{\"item\": \"Rice\", \"quantity\": \"2kg\", \"price\": 120}},
    {{\"item\": \"Lentils\", \"quantity\": \"1kg\", \"price\": 180}}
  ]
}}
",
        diet = request.diet_type,
        members = request.family_members,
    )
}
