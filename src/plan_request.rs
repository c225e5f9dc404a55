use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Budget slider granularity, in rupees.
pub const BUDGET_STEP: u32 = 100;

#[derive(Debug, Error, Clone, PartialEq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownTagError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid plan request: {0}")]
    Invalid(#[from] ValidationErrors),
    #[error("location must not be blank")]
    BlankLocation,
    #[error("budget {0} is not a multiple of 100")]
    BudgetStep(u32),
}

// Kebab-case tag enums shared by the CLI, the prompt and the wire format.
macro_rules! tag_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $tag)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownTagError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str() == normalized)
                    .ok_or_else(|| UnknownTagError {
                        kind: stringify!($name),
                        value: s.to_string(),
                        expected: $name::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

tag_enum!(
    DietType {
        Any => "any",
        Vegetarian => "vegetarian",
        NonVegetarian => "non-vegetarian",
        Vegan => "vegan",
        Jain => "jain",
    }
);

tag_enum!(
    Allergy {
        Nuts => "nuts",
        Dairy => "dairy",
        Eggs => "eggs",
        Soy => "soy",
        Gluten => "gluten",
        Shellfish => "shellfish",
        Fish => "fish",
        Sesame => "sesame",
        Peanuts => "peanuts",
        TreeNuts => "tree-nuts",
        Nothing => "nothing",
    }
);

tag_enum!(
    HealthGoal {
        WeightLoss => "weight-loss",
        WeightGain => "weight-gain",
        CholesterolControl => "cholesterol-control",
        MuscleGain => "muscle-gain",
        BoostImmunity => "boost-immunity",
        ReduceDiseaseRisk => "reduce-disease-risk",
    }
);

tag_enum!(
    /// Horizon the user picked; see [`PlanDuration::days`].
    PlanDuration {
        OneWeek => "1-week",
        TwoWeeks => "2-weeks",
        OneMonth => "1-month",
    }
);

impl DietType {
    /// Only vegetarian and vegan drop meat dishes; jain is treated like any other diet.
    pub fn is_vegetarian(&self) -> bool {
        matches!(self, DietType::Vegetarian | DietType::Vegan)
    }
}

impl Allergy {
    /// Display label matching the allergen chips of the form ("Tree Nuts").
    pub fn label(&self) -> String {
        self.as_str()
            .split('-')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl PlanDuration {
    pub fn days(&self) -> usize {
        match self {
            PlanDuration::OneWeek => 7,
            PlanDuration::TwoWeeks => 14,
            PlanDuration::OneMonth => 30,
        }
    }
}

/// Everything the form collects. Built once per submission and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    #[validate(range(min = 1, max = 12))]
    pub family_members: u32,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(range(min = 500, max = 5000))]
    pub budget: u32,
    pub diet_type: DietType,
    pub allergies: Vec<Allergy>,
    pub diseases: Vec<String>,
    pub health_goal: HealthGoal,
    pub plan_duration: PlanDuration,
}

impl PlanRequest {
    /// Applies the form's list semantics to allergies and health conditions.
    pub fn normalized(mut self) -> Self {
        self.location = self.location.trim().to_string();
        self.allergies = normalize_allergies(&self.allergies);
        self.diseases = normalize_diseases(&self.diseases);
        self
    }

    /// Bounds from the form: 1-12 members, non-blank location, budget 500-5000 in steps of 100.
    pub fn check(&self) -> Result<(), RequestError> {
        Validate::validate(self)?;
        if self.location.trim().is_empty() {
            return Err(RequestError::BlankLocation);
        }
        if self.budget % BUDGET_STEP != 0 {
            return Err(RequestError::BudgetStep(self.budget));
        }
        Ok(())
    }

    pub fn is_indian_locale(&self) -> bool {
        self.location.to_lowercase().contains("india")
    }
}

/// "nothing" is exclusive: picking it clears the rest, picking anything else drops it.
pub fn normalize_allergies(selected: &[Allergy]) -> Vec<Allergy> {
    let mut allergies: Vec<Allergy> = Vec::new();
    for allergy in selected {
        if *allergy == Allergy::Nothing {
            allergies = vec![Allergy::Nothing];
        } else if !allergies.contains(allergy) {
            allergies.retain(|a| *a != Allergy::Nothing);
            allergies.push(*allergy);
        }
    }
    allergies
}

pub fn normalize_diseases(entries: &[String]) -> Vec<String> {
    let mut diseases: Vec<String> = Vec::new();
    for entry in entries {
        let trimmed = entry.trim();
        if !trimmed.is_empty() && !diseases.iter().any(|d| d == trimmed) {
            diseases.push(trimmed.to_string());
        }
    }
    diseases
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> PlanRequest {
        PlanRequest {
            family_members: 4,
            location: "Pune, India".to_string(),
            budget: 2000,
            diet_type: DietType::Vegetarian,
            allergies: vec![],
            diseases: vec![],
            health_goal: HealthGoal::WeightLoss,
            plan_duration: PlanDuration::OneWeek,
        }
    }

    #[test]
    fn test_duration_day_counts() {
        assert_eq!(PlanDuration::OneWeek.days(), 7);
        assert_eq!(PlanDuration::TwoWeeks.days(), 14);
        assert_eq!(PlanDuration::OneMonth.days(), 30);
    }

    #[test]
    fn test_tags_parse_case_insensitively() {
        assert_eq!("Non-Vegetarian".parse::<DietType>().unwrap(), DietType::NonVegetarian);
        assert_eq!(" 2-weeks ".parse::<PlanDuration>().unwrap(), PlanDuration::TwoWeeks);
        assert_eq!("tree-nuts".parse::<Allergy>().unwrap(), Allergy::TreeNuts);

        let err = "paleo".parse::<DietType>().unwrap_err();
        assert_eq!(err.kind, "DietType");
        assert!(err.expected.contains("vegan"));
    }

    #[test]
    fn test_only_vegetarian_and_vegan_count_as_vegetarian() {
        assert!(DietType::Vegetarian.is_vegetarian());
        assert!(DietType::Vegan.is_vegetarian());
        assert!(!DietType::Jain.is_vegetarian());
        assert!(!DietType::Any.is_vegetarian());
    }

    #[test]
    fn test_nothing_allergy_is_exclusive() {
        let picked = normalize_allergies(&[Allergy::Nuts, Allergy::Nothing]);
        assert_eq!(picked, vec![Allergy::Nothing]);

        let picked = normalize_allergies(&[Allergy::Nothing, Allergy::Soy, Allergy::Soy, Allergy::Fish]);
        assert_eq!(picked, vec![Allergy::Soy, Allergy::Fish]);
    }

    #[test]
    fn test_diseases_trimmed_and_deduplicated() {
        let entries = vec![" Diabetes ".to_string(), "".to_string(), "Diabetes".to_string(), "Hypertension".to_string()];
        assert_eq!(normalize_diseases(&entries), vec!["Diabetes", "Hypertension"]);
    }

    #[test]
    fn test_check_accepts_form_defaults() {
        assert!(sample_request().check().is_ok());
    }

    #[test]
    fn test_check_rejects_out_of_range_values() {
        let too_many = PlanRequest { family_members: 13, ..sample_request() };
        assert!(matches!(too_many.check(), Err(RequestError::Invalid(_))));

        let too_cheap = PlanRequest { budget: 400, ..sample_request() };
        assert!(matches!(too_cheap.check(), Err(RequestError::Invalid(_))));

        let off_step = PlanRequest { budget: 2050, ..sample_request() };
        assert!(matches!(off_step.check(), Err(RequestError::BudgetStep(2050))));

        let blank = PlanRequest { location: "   ".to_string(), ..sample_request() };
        assert!(matches!(blank.check(), Err(RequestError::BlankLocation)));
    }

    #[test]
    fn test_indian_locale_detection() {
        assert!(sample_request().is_indian_locale());
        let elsewhere = PlanRequest { location: "Berlin, Germany".to_string(), ..sample_request() };
        assert!(!elsewhere.is_indian_locale());
    }

    #[test]
    fn test_allergy_label() {
        assert_eq!(Allergy::TreeNuts.label(), "Tree Nuts");
        assert_eq!(Allergy::Dairy.label(), "Dairy");
    }
}
