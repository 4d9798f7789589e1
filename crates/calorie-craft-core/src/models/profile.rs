// ABOUTME: Onboarding profile models: biometrics, activity level, and goal
// ABOUTME: Profile is immutable and only constructible from validated values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::limits;
use crate::errors::{AppError, AppResult};

/// Biological sex as collected by the onboarding form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

impl Sex {
    /// All selectable values, in display order
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Sex must be 'male' or 'female', got '{other}'"
            ))),
        }
    }
}

/// Self-reported activity level
///
/// `Unrecognized` is what lossy parsing yields for values outside the list; the estimator
/// applies its fallback multiplier to it instead of failing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    VeryActive,
    /// Any value outside the known list
    #[serde(other)]
    Unrecognized,
}

impl ActivityLevel {
    /// All selectable values, in display order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Parse activity level from string, mapping unknown values to `Unrecognized`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "sedentary" => Self::Sedentary,
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "active" => Self::Active,
            "very_active" => Self::VeryActive,
            _ => Self::Unrecognized,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Option label shown when selecting an activity level
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary (little/no exercise)",
            Self::Light => "Light (light exercise 1-3 days/week)",
            Self::Moderate => "Moderate (moderate exercise 3-5 days/week)",
            Self::Active => "Active (hard exercise 6-7 days/week)",
            Self::VeryActive => "Very Active (very hard exercise, physical job)",
            Self::Unrecognized => "Unrecognized",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary weight goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
    /// Any value outside the known list
    #[serde(other)]
    Unrecognized,
}

impl Goal {
    /// All selectable values, in display order
    pub const ALL: [Self; 3] = [Self::Lose, Self::Maintain, Self::Gain];

    /// Parse goal from string, mapping unknown values to `Unrecognized`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "lose" => Self::Lose,
            "maintain" => Self::Maintain,
            "gain" => Self::Gain,
            _ => Self::Unrecognized,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Option label shown when selecting a goal
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lose => "Lose Weight",
            Self::Maintain => "Maintain Weight",
            Self::Gain => "Gain Weight",
            Self::Unrecognized => "Unrecognized",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire shape of a profile, before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Weight goal
    pub goal: Goal,
}

/// Completed onboarding profile
///
/// Age, sex and height are collected and carried but do not feed the nutrition estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfilePayload", into = "ProfilePayload")]
pub struct Profile {
    age: u32,
    sex: Sex,
    height_cm: f64,
    weight_kg: f64,
    activity_level: ActivityLevel,
    goal: Goal,
}

impl Profile {
    /// Build a profile, validating every biometric
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput`/`ValueOutOfRange` when age, height or weight is not a
    /// positive value within sane bounds
    pub fn new(
        age: u32,
        sex: Sex,
        height_cm: f64,
        weight_kg: f64,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> AppResult<Self> {
        validate_age(age)?;
        validate_positive("Height", height_cm, limits::MAX_HEIGHT_CM, "cm")?;
        validate_positive("Weight", weight_kg, limits::MAX_WEIGHT_KG, "kg")?;

        Ok(Self {
            age,
            sex,
            height_cm,
            weight_kg,
            activity_level,
            goal,
        })
    }

    /// Age in years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Biological sex
    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.sex
    }

    /// Height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Activity level
    #[must_use]
    pub const fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    /// Weight goal
    #[must_use]
    pub const fn goal(&self) -> Goal {
        self.goal
    }
}

impl TryFrom<ProfilePayload> for Profile {
    type Error = AppError;

    fn try_from(payload: ProfilePayload) -> Result<Self, Self::Error> {
        Self::new(
            payload.age,
            payload.sex,
            payload.height,
            payload.weight,
            payload.activity_level,
            payload.goal,
        )
    }
}

impl From<Profile> for ProfilePayload {
    fn from(profile: Profile) -> Self {
        Self {
            age: profile.age,
            sex: profile.sex,
            height: profile.height_cm,
            weight: profile.weight_kg,
            activity_level: profile.activity_level,
            goal: profile.goal,
        }
    }
}

/// Validate an age in years
///
/// # Errors
///
/// Returns an error when the age is zero or above the accepted maximum
pub fn validate_age(age: u32) -> AppResult<()> {
    if age == 0 {
        return Err(AppError::invalid_input("Age must be a positive number of years"));
    }
    if age > limits::MAX_AGE_YEARS {
        return Err(AppError::out_of_range(format!(
            "Age must be at most {} years",
            limits::MAX_AGE_YEARS
        )));
    }
    Ok(())
}

/// Validate a strictly positive, finite measurement with an upper bound
///
/// # Errors
///
/// Returns an error when the value is non-finite, not positive, or above `max`
pub fn validate_positive(name: &str, value: f64, max: f64, unit: &str) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "{name} must be a positive number"
        )));
    }
    if value > max {
        return Err(AppError::out_of_range(format!(
            "{name} must be at most {max} {unit}"
        )));
    }
    Ok(())
}
