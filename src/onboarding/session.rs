// ABOUTME: Line-oriented interactive driver for the onboarding wizard
// ABOUTME: Prompts each field, supports back navigation, shows the review and submits the profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{self, BufRead, Write};

use calorie_craft_core::constants::{messages, wizard as wizard_constants};
use calorie_craft_core::errors::{AppError, AppResult};
use calorie_craft_core::models::{
    ActivityLevel, Goal, NutritionTargets, Profile, ProfileReceipt, Sex,
};
use tracing::{info, warn};

use super::forms::FormField;
use super::wizard::{profile_summary, target_lines, OnboardingWizard, WizardStep};
use crate::submission::ProfileSubmitter;

const SUBMIT_KEYWORD: &str = "submit";

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// Profile accepted by the profile service
    Submitted(ProfileReceipt),
    /// Wizard finished without a submitter (dry run)
    Completed {
        /// Reviewed profile
        profile: Profile,
        /// Targets computed locally
        targets: NutritionTargets,
    },
    /// Input ended before the profile was submitted
    Aborted,
}

enum Line {
    Text(String),
    Back,
    Eof,
}

/// Interactive onboarding session over any line reader and writer
pub struct OnboardingSession<R, W> {
    input: R,
    output: W,
    wizard: OnboardingWizard,
}

impl<R: BufRead, W: Write> OnboardingSession<R, W> {
    /// Create a session around a wizard
    pub const fn new(input: R, output: W, wizard: OnboardingWizard) -> Self {
        Self {
            input,
            output,
            wizard,
        }
    }

    /// Borrow the underlying wizard
    pub const fn wizard(&self) -> &OnboardingWizard {
        &self.wizard
    }

    /// Drive the wizard until the profile is submitted or input ends
    ///
    /// Validation errors are shown and the step is repeated. Submission failures are
    /// shown and the review step is offered again.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails
    pub async fn run(
        mut self,
        submitter: Option<&dyn ProfileSubmitter>,
    ) -> AppResult<SessionOutcome> {
        loop {
            self.write_header()?;

            let step = self.wizard.step();
            if step == WizardStep::Review {
                if let Some(outcome) = self.review_step(submitter).await? {
                    return Ok(outcome);
                }
                continue;
            }

            if !self.collect_fields(step)? {
                return Ok(SessionOutcome::Aborted);
            }
        }
    }

    /// Prompt every field of a data step, then try to advance
    ///
    /// Returns `false` when input is exhausted.
    fn collect_fields(&mut self, step: WizardStep) -> AppResult<bool> {
        for &field in step.fields() {
            let current = self.wizard.field_value(field).unwrap_or_default().to_owned();
            self.write_options(field)?;
            let prompt = if current.is_empty() {
                format!("{field}: ")
            } else {
                format!("{field} [{current}]: ")
            };

            match self.prompt(&prompt)? {
                Line::Eof => return Ok(false),
                Line::Back => {
                    self.wizard.back();
                    return Ok(true);
                }
                Line::Text(text) if text.is_empty() => {}
                Line::Text(text) => {
                    let value = resolve_choice(field, &text);
                    self.wizard.set_field(field, value)?;
                }
            }
        }

        if let Err(e) = self.wizard.next() {
            self.write_line(&format!("! {}", e.message))?;
        }
        Ok(true)
    }

    async fn review_step(
        &mut self,
        submitter: Option<&dyn ProfileSubmitter>,
    ) -> AppResult<Option<SessionOutcome>> {
        let Some(review) = self.wizard.review().cloned() else {
            return Err(AppError::internal("Review step reached without a profile"));
        };

        self.write_line(messages::TARGETS_EXPLAINER)?;
        self.write_line("")?;
        for line in target_lines(&review.targets) {
            self.write_line(&format!("  {line}"))?;
        }
        self.write_line("")?;
        self.write_line("Your Profile Summary:")?;
        for line in profile_summary(&review.profile) {
            self.write_line(&format!("  {line}"))?;
        }
        self.write_line("")?;

        let prompt = format!(
            "Type '{SUBMIT_KEYWORD}' to complete setup or '{}' to make changes: ",
            wizard_constants::BACK_KEYWORD
        );
        let text = match self.prompt(&prompt)? {
            Line::Eof => return Ok(Some(SessionOutcome::Aborted)),
            Line::Back => {
                self.wizard.back();
                return Ok(None);
            }
            Line::Text(text) => text,
        };

        if !text.eq_ignore_ascii_case(SUBMIT_KEYWORD) {
            self.write_line(&format!("! Unknown command '{text}'"))?;
            return Ok(None);
        }

        let Some(submitter) = submitter else {
            return Ok(Some(SessionOutcome::Completed {
                profile: review.profile,
                targets: review.targets,
            }));
        };

        self.write_line("Creating Profile...")?;
        match submitter.submit(&review.profile).await {
            Ok(receipt) => {
                info!(profile_id = %receipt.profile_id, "Profile submitted");
                self.write_line(&receipt.message)?;
                Ok(Some(SessionOutcome::Submitted(receipt)))
            }
            Err(e) => {
                warn!(error = %e, "Profile submission failed");
                self.write_line(&format!("! {e}"))?;
                Ok(None)
            }
        }
    }

    fn write_header(&mut self) -> AppResult<()> {
        let step = self.wizard.step();
        self.write_line("")?;
        self.write_line(&step.to_string())?;
        self.write_line(step.description())?;
        self.write_line(&format!("{}% Complete", step.progress_percent()))?;
        if step != WizardStep::PersonalInfo {
            self.write_line(&format!(
                "(type '{}' to return to the previous step)",
                wizard_constants::BACK_KEYWORD
            ))?;
        }
        Ok(())
    }

    fn write_options(&mut self, field: FormField) -> AppResult<()> {
        for (index, (_, label)) in choices(field).iter().enumerate() {
            self.write_line(&format!("  {}) {label}", index + 1))?;
        }
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> AppResult<Line> {
        write!(self.output, "{prompt}").map_err(terminal_error)?;
        self.output.flush().map_err(terminal_error)?;

        let mut buf = String::new();
        let read = self.input.read_line(&mut buf).map_err(terminal_error)?;
        if read == 0 {
            return Ok(Line::Eof);
        }

        let text = buf.trim();
        if text.eq_ignore_ascii_case(wizard_constants::BACK_KEYWORD) {
            Ok(Line::Back)
        } else {
            Ok(Line::Text(text.to_owned()))
        }
    }

    fn write_line(&mut self, line: &str) -> AppResult<()> {
        writeln!(self.output, "{line}").map_err(terminal_error)
    }
}

fn terminal_error(e: io::Error) -> AppError {
    AppError::internal("Terminal I/O failed").with_source(e)
}

/// Selectable `(value, label)` pairs for choice fields
fn choices(field: FormField) -> Vec<(&'static str, &'static str)> {
    match field {
        FormField::Sex => Sex::ALL.iter().map(|s| (s.as_str(), s.as_str())).collect(),
        FormField::ActivityLevel => ActivityLevel::ALL
            .iter()
            .map(|a| (a.as_str(), a.label()))
            .collect(),
        FormField::Goal => Goal::ALL.iter().map(|g| (g.as_str(), g.label())).collect(),
        FormField::Age | FormField::Height | FormField::Weight => Vec::new(),
    }
}

/// Map an option number to its value; anything else is kept verbatim
fn resolve_choice(field: FormField, text: &str) -> String {
    let options = choices(field);
    text.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i))
        .map_or_else(|| text.to_owned(), |(value, _)| (*value).to_owned())
}
