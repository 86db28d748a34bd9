//! BMI classification
//!
//! Maps a BMI value and gender to a weight category and an advisory tip. Each
//! gender has its own threshold ladder splitting the number line into four
//! half-open intervals; a value equal to a cutoff belongs to the higher category.

use serde::{Deserialize, Serialize};

/// Gender used to pick a threshold ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    fn ladder(&self) -> &'static ThresholdLadder {
        match self {
            Gender::Male => &MALE_LADDER,
            Gender::Female => &FEMALE_LADDER,
        }
    }
}

/// Weight category, in ascending BMI order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl Category {
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Healthy => "Healthy",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }
}

/// Lower bounds of the Healthy, Overweight and Obese intervals
#[derive(Debug, Clone, Copy)]
pub struct ThresholdLadder {
    pub healthy_from: f64,
    pub overweight_from: f64,
    pub obese_from: f64,
}

impl ThresholdLadder {
    pub fn category_for(&self, bmi: f64) -> Category {
        if bmi < self.healthy_from {
            Category::Underweight
        } else if bmi < self.overweight_from {
            Category::Healthy
        } else if bmi < self.obese_from {
            Category::Overweight
        } else {
            Category::Obese
        }
    }
}

pub const MALE_LADDER: ThresholdLadder = ThresholdLadder {
    healthy_from: 18.5,
    overweight_from: 25.0,
    obese_from: 30.0,
};

pub const FEMALE_LADDER: ThresholdLadder = ThresholdLadder {
    healthy_from: 18.0,
    overweight_from: 24.0,
    obese_from: 29.0,
};

/// Advisory text for a category
pub fn tip_for(gender: Gender, category: Category) -> &'static str {
    match (gender, category) {
        (Gender::Male, Category::Underweight) => "Increase calorie intake with a balanced diet.",
        (Gender::Male, Category::Healthy) => "Maintain a balanced diet and regular exercise.",
        (Gender::Male, Category::Overweight) => "Increase physical activity and monitor diet.",
        (Gender::Male, Category::Obese) => "Consult a doctor for a personalized health plan.",
        (Gender::Female, Category::Underweight) => "Ensure proper nutrition and calorie intake.",
        (Gender::Female, Category::Healthy) => "Maintain your diet and stay active.",
        (Gender::Female, Category::Overweight) => {
            "Increase physical activity and monitor calorie intake."
        }
        (Gender::Female, Category::Obese) => "Seek medical advice for a structured health plan.",
    }
}

/// Outcome of classifying a BMI value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub category: Category,
    pub gender: Gender,
    pub tip: &'static str,
}

impl Classification {
    /// Label such as "Healthy (Male)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.category.display_name(), self.gender.display_name())
    }
}

/// Classify a BMI value for the given gender
pub fn classify(bmi: f64, gender: Gender) -> Classification {
    let category = gender.ladder().category_for(bmi);
    tracing::debug!(bmi, gender = gender.as_str(), ?category, "classified bmi");

    Classification {
        category,
        gender,
        tip: tip_for(gender, category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(bmi: f64, gender: Gender) -> Category {
        classify(bmi, gender).category
    }

    #[test]
    fn test_male_boundaries() {
        assert_eq!(category(18.49999, Gender::Male), Category::Underweight);
        assert_eq!(category(18.5, Gender::Male), Category::Healthy);
        assert_eq!(category(24.99999, Gender::Male), Category::Healthy);
        assert_eq!(category(25.0, Gender::Male), Category::Overweight);
        assert_eq!(category(29.99999, Gender::Male), Category::Overweight);
        assert_eq!(category(30.0, Gender::Male), Category::Obese);
    }

    #[test]
    fn test_female_boundaries() {
        assert_eq!(category(17.99, Gender::Female), Category::Underweight);
        assert_eq!(category(18.0, Gender::Female), Category::Healthy);
        assert_eq!(category(23.99, Gender::Female), Category::Healthy);
        assert_eq!(category(24.0, Gender::Female), Category::Overweight);
        assert_eq!(category(28.99, Gender::Female), Category::Overweight);
        assert_eq!(category(29.0, Gender::Female), Category::Obese);
    }

    #[test]
    fn test_same_value_differs_by_gender() {
        // 24.5 sits on different rungs of the two ladders
        assert_eq!(category(24.5, Gender::Male), Category::Healthy);
        assert_eq!(category(24.5, Gender::Female), Category::Overweight);
    }

    #[test]
    fn test_ladder_is_ordered() {
        let mut previous = Category::Underweight;
        for tenth in 100..450 {
            let current = category(tenth as f64 / 10.0, Gender::Female);
            assert!(current >= previous);
            previous = current;
        }
        assert_eq!(previous, Category::Obese);
    }

    #[test]
    fn test_label_and_tip() {
        let c = classify(24.69, Gender::Male);
        assert_eq!(c.label(), "Healthy (Male)");
        assert_eq!(c.tip, "Maintain a balanced diet and regular exercise.");

        let c = classify(29.29, Gender::Female);
        assert_eq!(c.label(), "Obese (Female)");
        assert_eq!(c.tip, "Seek medical advice for a structured health plan.");
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::from_str("Male"), Some(Gender::Male));
        assert_eq!(Gender::from_str("female"), Some(Gender::Female));
        assert_eq!(Gender::from_str(""), None);
        assert_eq!(Gender::from_str("other"), None);
    }
}
