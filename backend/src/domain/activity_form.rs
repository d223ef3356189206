//! Activity form domain logic for the calorie tracker.
//!
//! This module contains the business rules behind the add/edit activity form:
//! building drafts, parsing calorie input, validation, category-dependent
//! field labels and turning a valid draft into a store action. The UI only
//! renders the draft and forwards input here.

use shared::{
    Activity, ActivityCategory, ActivityDraft, ActivityFormConfig, ActivityFormValidation,
    ActivityValidationError, NameFieldProps,
};

use crate::domain::commands::activities::ActivityAction;
use crate::domain::commands::form::FormCommand;
use crate::domain::models::ActivityState;

/// Activity form service that handles all form-related business logic
#[derive(Debug, Clone, Default)]
pub struct ActivityFormService {
    config: ActivityFormConfig,
}

impl ActivityFormService {
    pub fn new() -> Self {
        Self {
            config: ActivityFormConfig::default(),
        }
    }

    pub fn with_config(config: ActivityFormConfig) -> Self {
        Self { config }
    }

    /// Create an empty draft with a fresh ID
    pub fn new_draft(&self) -> ActivityDraft {
        ActivityDraft {
            id: Activity::generate_id(),
            category: self.config.default_category,
            name: String::new(),
            calories: 0,
        }
    }

    /// Draft for the currently selected activity, or a fresh draft when the
    /// selection is empty or no longer resolves
    pub fn draft_for_edit(&self, state: &ActivityState) -> ActivityDraft {
        match state.selected_activity() {
            Some(activity) => ActivityDraft::from(activity),
            None => self.new_draft(),
        }
    }

    /// Switch category; the name is cleared since it belonged to the old category
    pub fn change_category(&self, draft: &mut ActivityDraft, category: ActivityCategory) {
        draft.category = category;
        draft.name.clear();
    }

    pub fn change_name(&self, draft: &mut ActivityDraft, input: &str) {
        draft.name = input.to_string();
    }

    /// Parse calorie input into the draft. On error the draft is left untouched.
    pub fn change_calories(
        &self,
        draft: &mut ActivityDraft,
        input: &str,
    ) -> Result<(), ActivityValidationError> {
        draft.calories = self.parse_calories(input)?;
        Ok(())
    }

    /// Parse a calorie input string. An empty field counts as zero.
    pub fn parse_calories(&self, input: &str) -> Result<u32, ActivityValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }

        let value = trimmed
            .parse::<i64>()
            .map_err(|e| ActivityValidationError::InvalidCaloriesFormat(e.to_string()))?;

        if value < 0 {
            return Err(ActivityValidationError::NegativeCalories);
        }

        u32::try_from(value)
            .map_err(|_| ActivityValidationError::InvalidCaloriesFormat(format!("{} is too large", value)))
    }

    /// Validate the draft the same way the store will
    pub fn validate(&self, draft: &ActivityDraft) -> ActivityFormValidation {
        let mut errors = Vec::new();

        if draft.name.trim().is_empty() {
            errors.push(ActivityValidationError::EmptyName);
        }
        if draft.calories == 0 {
            errors.push(ActivityValidationError::CaloriesNotPositive);
        }

        ActivityFormValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// User-facing text for a validation error
    pub fn error_message(&self, error: &ActivityValidationError) -> String {
        match error {
            ActivityValidationError::EmptyName => "Name is required".to_string(),
            ActivityValidationError::CaloriesNotPositive => "Calories must be greater than 0".to_string(),
            ActivityValidationError::NegativeCalories => self.config.negative_calories_message.clone(),
            ActivityValidationError::InvalidCaloriesFormat(detail) => {
                format!("Calories must be a whole number ({})", detail)
            }
        }
    }

    /// Label and placeholder for the name field
    pub fn name_field_props(&self, category: ActivityCategory) -> NameFieldProps {
        match category {
            ActivityCategory::Food => NameFieldProps {
                label: "What food?".to_string(),
                placeholder: "e.g. Orange Juice, Salad, etc.".to_string(),
            },
            ActivityCategory::Exercise => NameFieldProps {
                label: "Activity".to_string(),
                placeholder: "e.g. Weights, Biking, Running, etc.".to_string(),
            },
        }
    }

    /// Turn a valid draft into the save action and its confirmation message
    pub fn submit(
        &self,
        draft: &ActivityDraft,
        is_editing: bool,
    ) -> Result<FormCommand, ActivityFormValidation> {
        let validation = self.validate(draft);
        let activity = match draft.to_activity() {
            Some(activity) if validation.is_valid => activity,
            _ => return Err(validation),
        };

        let message = if is_editing {
            "Activity edited successfully"
        } else {
            "Activity added successfully"
        };

        Ok(FormCommand {
            action: ActivityAction::save(activity),
            message: message.to_string(),
        })
    }

    /// Leave edit mode without saving
    pub fn cancel_edit(&self) -> FormCommand {
        FormCommand {
            action: ActivityAction::clear_selection(),
            message: "Editing canceled".to_string(),
        }
    }
}
