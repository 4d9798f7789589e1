// ABOUTME: Three-step onboarding wizard modelled as an explicit state machine
// ABOUTME: Personal info, then goals, then review with computed targets; back keeps entered data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Onboarding wizard
//!
//! The wizard only advances when the current step validates. Each state owns the typed
//! data it has accepted so far plus the raw drafts of the other steps, so moving back
//! and forth never loses what the user typed.

use std::fmt;

use calorie_craft_core::constants::wizard;
use calorie_craft_core::errors::{AppError, AppResult};
use calorie_craft_core::models::{NutritionTargets, Profile};
use calorie_craft_intelligence::{estimate_for_profile, NutritionConfig};
use tracing::debug;

use super::forms::{FormField, GoalsForm, PersonalDetails, PersonalInfoForm};

/// Wizard step as presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    /// Age, sex, height, weight
    PersonalInfo,
    /// Activity level and goal
    Goals,
    /// Computed targets and profile summary
    Review,
}

impl WizardStep {
    /// 1-based step number
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::PersonalInfo => 1,
            Self::Goals => 2,
            Self::Review => 3,
        }
    }

    /// Step heading
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::Goals => "Goals & Activity Level",
            Self::Review => "Your Personalized Plan",
        }
    }

    /// Step subheading
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Basic information to calculate your nutritional needs",
            Self::Goals => "Tell us about your fitness goals and activity level",
            Self::Review => "Review your nutritional requirements and confirm",
        }
    }

    /// Completion percentage, rounded half-up (33, 67, 100)
    #[must_use]
    pub fn progress_percent(self) -> u8 {
        let total = u32::from(wizard::TOTAL_STEPS);
        let scaled = u32::from(self.number()) * 200 + total;
        let percent = scaled / (2 * total);
        u8::try_from(percent).unwrap_or(100)
    }

    /// Fields edited on this step
    #[must_use]
    pub const fn fields(self) -> &'static [FormField] {
        match self {
            Self::PersonalInfo => &FormField::PERSONAL,
            Self::Goals => &FormField::GOALS,
            Self::Review => &[],
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Step {} of {}: {}",
            self.number(),
            wizard::TOTAL_STEPS,
            self.title()
        )
    }
}

/// Accepted profile and its targets, shown on the review step
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewData {
    /// Immutable profile built from both validated steps
    pub profile: Profile,
    /// Targets computed from the profile
    pub targets: NutritionTargets,
}

/// Wizard state
#[derive(Debug, Clone, PartialEq)]
pub enum WizardState {
    /// Step 1 is being edited
    CollectingPersonal {
        /// Personal info being edited
        form: PersonalInfoForm,
        /// Goals entered earlier, kept across back navigation
        goals_draft: GoalsForm,
    },
    /// Step 2 is being edited
    CollectingGoals {
        /// Accepted personal details
        personal: PersonalDetails,
        /// Raw personal input, restored on back
        personal_form: PersonalInfoForm,
        /// Goals being edited
        form: GoalsForm,
    },
    /// Step 3, ready to submit
    ReviewAndSubmit {
        /// Raw personal input, restored on back
        personal_form: PersonalInfoForm,
        /// Raw goals input, restored on back
        goals_form: GoalsForm,
        /// Accepted personal details
        personal: PersonalDetails,
        /// Profile and computed targets
        review: ReviewData,
    },
}

impl Default for WizardState {
    fn default() -> Self {
        Self::CollectingPersonal {
            form: PersonalInfoForm::default(),
            goals_draft: GoalsForm::default(),
        }
    }
}

impl WizardState {
    /// Step this state corresponds to
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        match self {
            Self::CollectingPersonal { .. } => WizardStep::PersonalInfo,
            Self::CollectingGoals { .. } => WizardStep::Goals,
            Self::ReviewAndSubmit { .. } => WizardStep::Review,
        }
    }
}

/// Onboarding wizard driving the three steps
#[derive(Debug, Clone)]
pub struct OnboardingWizard {
    state: WizardState,
    config: NutritionConfig,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    /// Start a wizard using the global nutrition configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(NutritionConfig::global().clone())
    }

    /// Start a wizard with an explicit nutrition configuration
    #[must_use]
    pub fn with_config(config: NutritionConfig) -> Self {
        Self {
            state: WizardState::default(),
            config,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &WizardState {
        &self.state
    }

    /// Current step
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.state.step()
    }

    /// Completion percentage of the current step
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        self.step().progress_percent()
    }

    /// Current raw value of a field on the active step
    #[must_use]
    pub fn field_value(&self, field: FormField) -> Option<&str> {
        match &self.state {
            WizardState::CollectingPersonal { form, .. } => form.get(field),
            WizardState::CollectingGoals { form, .. } => form.get(field),
            WizardState::ReviewAndSubmit { .. } => None,
        }
    }

    /// Update a field on the active step
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the field is not editable on the current step
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> AppResult<()> {
        let accepted = match &mut self.state {
            WizardState::CollectingPersonal { form, .. } => form.set(field, value),
            WizardState::CollectingGoals { form, .. } => form.set(field, value),
            WizardState::ReviewAndSubmit { .. } => false,
        };

        if accepted {
            Ok(())
        } else {
            Err(AppError::invalid_input(format!(
                "{field} cannot be edited on {}",
                self.step().title()
            )))
        }
    }

    /// Validate the active step and advance
    ///
    /// # Errors
    ///
    /// Returns the validation error of the current step, leaving the wizard where it is.
    /// Calling this on the review step is an `InvalidInput` error.
    pub fn next(&mut self) -> AppResult<WizardStep> {
        let next_state = match &self.state {
            WizardState::CollectingPersonal { form, goals_draft } => {
                let personal = form.validate()?;
                WizardState::CollectingGoals {
                    personal,
                    personal_form: form.clone(),
                    form: goals_draft.clone(),
                }
            }
            WizardState::CollectingGoals {
                personal,
                personal_form,
                form,
            } => {
                let selection = form.validate()?;
                let profile = Profile::new(
                    personal.age,
                    personal.sex,
                    personal.height_cm,
                    personal.weight_kg,
                    selection.activity_level,
                    selection.goal,
                )?;
                let targets = estimate_for_profile(&profile, &self.config)?;
                WizardState::ReviewAndSubmit {
                    personal_form: personal_form.clone(),
                    goals_form: form.clone(),
                    personal: *personal,
                    review: ReviewData { profile, targets },
                }
            }
            WizardState::ReviewAndSubmit { .. } => {
                return Err(AppError::invalid_input(
                    "Already on the final step; submit the profile or go back",
                ));
            }
        };

        self.state = next_state;
        debug!(step = self.step().number(), "Onboarding wizard advanced");
        Ok(self.step())
    }

    /// Return to the previous step, keeping everything entered
    ///
    /// On the first step this is a no-op.
    pub fn back(&mut self) -> WizardStep {
        let previous = match &self.state {
            WizardState::CollectingPersonal { .. } => return self.step(),
            WizardState::CollectingGoals {
                personal_form,
                form,
                ..
            } => WizardState::CollectingPersonal {
                form: personal_form.clone(),
                goals_draft: form.clone(),
            },
            WizardState::ReviewAndSubmit {
                personal_form,
                goals_form,
                personal,
                ..
            } => WizardState::CollectingGoals {
                personal: *personal,
                personal_form: personal_form.clone(),
                form: goals_form.clone(),
            },
        };

        self.state = previous;
        debug!(step = self.step().number(), "Onboarding wizard went back");
        self.step()
    }

    /// Profile and targets, available on the review step
    #[must_use]
    pub const fn review(&self) -> Option<&ReviewData> {
        match &self.state {
            WizardState::ReviewAndSubmit { review, .. } => Some(review),
            _ => None,
        }
    }

    /// Consume the wizard, yielding the reviewed profile and targets
    #[must_use]
    pub fn into_review(self) -> Option<ReviewData> {
        match self.state {
            WizardState::ReviewAndSubmit { review, .. } => Some(review),
            _ => None,
        }
    }
}

/// Human-readable profile summary lines shown on the review step
#[must_use]
pub fn profile_summary(profile: &Profile) -> Vec<String> {
    vec![
        format!("Age: {} years", profile.age()),
        format!("Sex: {}", profile.sex()),
        format!("Height: {} cm", profile.height_cm()),
        format!("Weight: {} kg", profile.weight_kg()),
        format!("Activity: {}", profile.activity_level()),
        format!("Goal: {} weight", profile.goal()),
    ]
}

/// Target lines shown on the review step and by the estimate command
#[must_use]
pub fn target_lines(targets: &NutritionTargets) -> Vec<String> {
    let mut lines = vec![
        format!("Daily Calories: {}", targets.daily_calories),
        format!("Protein: {}g", targets.daily_protein),
        format!("Carbohydrates: {}g", targets.daily_carbs),
        format!("Fat: {}g", targets.daily_fat),
    ];
    if targets.has_carb_deficit() {
        lines.push(
            "Warning: protein and fat already exceed the calorie target, so carbohydrates are negative"
                .to_owned(),
        );
    }
    lines
}
