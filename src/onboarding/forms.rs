// ABOUTME: Raw form input for each wizard step and its validation into typed step data
// ABOUTME: Blank fields block with the onboarding notices; malformed values are rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use calorie_craft_core::constants::{limits, messages};
use calorie_craft_core::errors::{AppError, AppResult};
use calorie_craft_core::models::profile::{validate_age, validate_positive};
use calorie_craft_core::models::{ActivityLevel, Goal, Sex};
use serde::{Deserialize, Serialize};

/// Individual editable field of the onboarding form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    /// Age in years
    Age,
    /// Biological sex
    Sex,
    /// Height in centimeters
    Height,
    /// Weight in kilograms
    Weight,
    /// Activity level
    ActivityLevel,
    /// Weight goal
    Goal,
}

impl FormField {
    /// Fields collected on the personal information step
    pub const PERSONAL: [Self; 4] = [Self::Age, Self::Sex, Self::Height, Self::Weight];
    /// Fields collected on the goals step
    pub const GOALS: [Self; 2] = [Self::ActivityLevel, Self::Goal];

    /// Prompt label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Sex => "Sex",
            Self::Height => "Height (cm)",
            Self::Weight => "Weight (kg)",
            Self::ActivityLevel => "Activity Level",
            Self::Goal => "Primary Goal",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw text of the personal information step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfoForm {
    /// Age as typed
    pub age: String,
    /// Sex as selected
    pub sex: String,
    /// Height as typed
    pub height: String,
    /// Weight as typed
    pub weight: String,
}

/// Validated personal information
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonalDetails {
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
}

impl PersonalInfoForm {
    /// Current text of a personal field
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Age => Some(&self.age),
            FormField::Sex => Some(&self.sex),
            FormField::Height => Some(&self.height),
            FormField::Weight => Some(&self.weight),
            FormField::ActivityLevel | FormField::Goal => None,
        }
    }

    /// Replace the text of a personal field
    ///
    /// Returns `false` if the field does not belong to this step.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> bool {
        let slot = match field {
            FormField::Age => &mut self.age,
            FormField::Sex => &mut self.sex,
            FormField::Height => &mut self.height,
            FormField::Weight => &mut self.weight,
            FormField::ActivityLevel | FormField::Goal => return false,
        };
        *slot = value.into();
        true
    }

    /// Validate the step
    ///
    /// # Errors
    ///
    /// `MissingRequiredField` if any field is blank, otherwise `InvalidInput` /
    /// `ValueOutOfRange` for values that do not parse or fall outside sane bounds
    pub fn validate(&self) -> AppResult<PersonalDetails> {
        if [&self.age, &self.sex, &self.height, &self.weight]
            .iter()
            .any(|v| v.trim().is_empty())
        {
            return Err(AppError::missing_field(messages::MISSING_PERSONAL_INFO));
        }

        let age: u32 = self
            .age
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_input("Age must be a whole number of years"))?;
        validate_age(age)?;

        let sex: Sex = self.sex.parse()?;
        let height_cm = parse_measurement("Height", &self.height)?;
        validate_positive("Height", height_cm, limits::MAX_HEIGHT_CM, "cm")?;
        let weight_kg = parse_measurement("Weight", &self.weight)?;
        validate_positive("Weight", weight_kg, limits::MAX_WEIGHT_KG, "kg")?;

        Ok(PersonalDetails {
            age,
            sex,
            height_cm,
            weight_kg,
        })
    }
}

/// Parse a height or weight as a decimal number
///
/// Fractions are kept rather than truncated to whole units, so `72.5` kg estimates
/// from 72.5 kg and not 72 kg.
fn parse_measurement(name: &str, raw: &str) -> AppResult<f64> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::invalid_input(format!("{name} must be a number")))
}

/// Raw selections of the goals step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalsForm {
    /// Activity level as selected
    pub activity_level: String,
    /// Goal as selected
    pub goal: String,
}

/// Validated goals step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalSelection {
    /// Activity level (may be `Unrecognized`)
    pub activity_level: ActivityLevel,
    /// Weight goal (may be `Unrecognized`)
    pub goal: Goal,
}

impl GoalsForm {
    /// Current text of a goals field
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::ActivityLevel => Some(&self.activity_level),
            FormField::Goal => Some(&self.goal),
            _ => None,
        }
    }

    /// Replace the text of a goals field
    ///
    /// Returns `false` if the field does not belong to this step.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> bool {
        let slot = match field {
            FormField::ActivityLevel => &mut self.activity_level,
            FormField::Goal => &mut self.goal,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    /// Validate the step
    ///
    /// Only presence is checked; values outside the known lists become `Unrecognized`
    /// and receive the estimator's fallback multipliers.
    ///
    /// # Errors
    ///
    /// `MissingRequiredField` if either selection is blank
    pub fn validate(&self) -> AppResult<GoalSelection> {
        if self.activity_level.trim().is_empty() || self.goal.trim().is_empty() {
            return Err(AppError::missing_field(messages::MISSING_GOALS));
        }

        Ok(GoalSelection {
            activity_level: ActivityLevel::from_str_lossy(&self.activity_level),
            goal: Goal::from_str_lossy(&self.goal),
        })
    }
}
