// ABOUTME: Onboarding flow: raw form parsing, the three-step wizard, and the interactive session
// ABOUTME: Produces an immutable Profile plus computed targets ready for submission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Onboarding
//!
//! - [`forms`]: raw text for each step and its validation
//! - [`wizard`]: the state machine `CollectingPersonal -> CollectingGoals -> ReviewAndSubmit`
//! - [`session`]: prompt loop used by the `onboard` command

/// Raw step input and validation
pub mod forms;
/// Interactive prompt loop
pub mod session;
/// Wizard state machine
pub mod wizard;

pub use forms::{FormField, GoalSelection, GoalsForm, PersonalDetails, PersonalInfoForm};
pub use session::{OnboardingSession, SessionOutcome};
pub use wizard::{
    profile_summary, target_lines, OnboardingWizard, ReviewData, WizardState, WizardStep,
};
