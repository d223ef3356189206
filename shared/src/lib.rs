use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single logged food intake or exercise entry.
///
/// Serialized as `{"id", "category", "name", "calories"}` with the category
/// stored as its integer code, which is the persisted layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Opaque identifier, generated once and never changed
    pub id: String,
    /// Whether the entry adds (food) or removes (exercise) calories
    pub category: ActivityCategory,
    /// Human-readable label, e.g. "Salad" or "Running"
    pub name: String,
    /// Calorie amount, must be greater than zero
    pub calories: u32,
}

/// Category of an activity, persisted as its numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ActivityCategory {
    /// Calories consumed (code 1)
    Food,
    /// Calories burned (code 2)
    Exercise,
}

/// Selector entry for the category picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: u8,
    pub name: String,
}

/// Aggregate calorie totals derived from the current activity list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalorieSummary {
    /// Sum of calories over food activities
    pub calories_consumed: i64,
    /// Sum of calories over exercise activities
    pub calories_burned: i64,
    /// Consumed minus burned, negative when more was burned
    pub net_calories: i64,
}

/// Series values for the consumed vs. burned bar chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieChartData {
    pub consumed: i64,
    pub burned: i64,
}

/// Work-in-progress activity as edited in the add/edit form.
///
/// Unlike [`Activity`] a draft may be invalid (empty name, zero calories).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDraft {
    pub id: String,
    pub category: ActivityCategory,
    pub name: String,
    pub calories: u32,
}

/// Validation result for the activity form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFormValidation {
    pub is_valid: bool,
    pub errors: Vec<ActivityValidationError>,
}

/// Specific activity form validation errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityValidationError {
    EmptyName,
    CaloriesNotPositive,
    NegativeCalories,
    InvalidCaloriesFormat(String),
}

/// Label and placeholder for the name input, which depend on the category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameFieldProps {
    pub label: String,
    pub placeholder: String,
}

/// Configuration for the activity form rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityFormConfig {
    /// Category preselected on a fresh draft
    pub default_category: ActivityCategory,
    /// Message shown when a negative calorie value is typed
    pub negative_calories_message: String,
}

impl Default for ActivityFormConfig {
    fn default() -> Self {
        Self {
            default_category: ActivityCategory::Food,
            negative_calories_message: "Calories cannot be negative.".to_string(),
        }
    }
}

impl Activity {
    /// Create a new activity with a freshly generated ID
    pub fn new(category: ActivityCategory, name: impl Into<String>, calories: u32) -> Self {
        Self {
            id: Self::generate_id(),
            category,
            name: name.into(),
            calories,
        }
    }

    /// Generate a new unique activity ID (UUID v4)
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// An activity is admissible when its trimmed name is non-empty and it carries calories
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.calories > 0
    }
}

impl ActivityCategory {
    /// Integer code used in persisted data
    pub fn code(self) -> u8 {
        match self {
            ActivityCategory::Food => 1,
            ActivityCategory::Exercise => 2,
        }
    }

    /// Display name of the category
    pub fn label(self) -> &'static str {
        match self {
            ActivityCategory::Food => "Food",
            ActivityCategory::Exercise => "Exercise",
        }
    }

    /// Single-letter badge for list avatars
    pub fn initial(self) -> &'static str {
        match self {
            ActivityCategory::Food => "F",
            ActivityCategory::Exercise => "E",
        }
    }

    pub fn is_food(self) -> bool {
        self == ActivityCategory::Food
    }

    pub fn is_exercise(self) -> bool {
        self == ActivityCategory::Exercise
    }

    /// All categories in selector order
    pub fn all() -> [ActivityCategory; 2] {
        [ActivityCategory::Food, ActivityCategory::Exercise]
    }
}

/// Category options for selectors, in display order
pub fn categories() -> Vec<CategoryInfo> {
    ActivityCategory::all()
        .into_iter()
        .map(|category| CategoryInfo {
            id: category.code(),
            name: category.label().to_string(),
        })
        .collect()
}

impl From<ActivityCategory> for u8 {
    fn from(category: ActivityCategory) -> Self {
        category.code()
    }
}

impl TryFrom<u8> for ActivityCategory {
    type Error = CategoryCodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(ActivityCategory::Food),
            2 => Ok(ActivityCategory::Exercise),
            other => Err(CategoryCodeError::Unknown(other)),
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryCodeError {
    Unknown(u8),
}

impl fmt::Display for CategoryCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryCodeError::Unknown(code) => write!(f, "Unknown activity category code: {}", code),
        }
    }
}

impl std::error::Error for CategoryCodeError {}

impl CalorieSummary {
    /// Captions used for the three summary cards
    pub const CONSUMED_CAPTION: &'static str = "Consumed";
    pub const BURNED_CAPTION: &'static str = "Exercise";
    pub const NET_CAPTION: &'static str = "Difference";
}

impl ActivityDraft {
    /// Convert into an activity, returning `None` when the draft is not yet valid
    pub fn to_activity(&self) -> Option<Activity> {
        let activity = Activity {
            id: self.id.clone(),
            category: self.category,
            name: self.name.trim().to_string(),
            calories: self.calories,
        };
        activity.is_valid().then_some(activity)
    }
}

impl From<&Activity> for ActivityDraft {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id.clone(),
            category: activity.category,
            name: activity.name.clone(),
            calories: activity.calories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_activity_id_is_unique() {
        let first = Activity::generate_id();
        let second = Activity::generate_id();
        assert_ne!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
    }

    #[test]
    fn test_category_codes() {
        assert_eq!(ActivityCategory::Food.code(), 1);
        assert_eq!(ActivityCategory::Exercise.code(), 2);
        assert_eq!(ActivityCategory::try_from(1), Ok(ActivityCategory::Food));
        assert_eq!(ActivityCategory::try_from(2), Ok(ActivityCategory::Exercise));
        assert_eq!(ActivityCategory::try_from(0), Err(CategoryCodeError::Unknown(0)));
        assert_eq!(ActivityCategory::try_from(3), Err(CategoryCodeError::Unknown(3)));
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(ActivityCategory::Food.label(), "Food");
        assert_eq!(ActivityCategory::Exercise.label(), "Exercise");
        assert_eq!(ActivityCategory::Food.initial(), "F");
        assert_eq!(ActivityCategory::Exercise.initial(), "E");
        assert_eq!(ActivityCategory::Exercise.to_string(), "Exercise");
    }

    #[test]
    fn test_categories_list() {
        let list = categories();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], CategoryInfo { id: 1, name: "Food".to_string() });
        assert_eq!(list[1], CategoryInfo { id: 2, name: "Exercise".to_string() });
    }

    #[test]
    fn test_activity_serializes_to_persisted_layout() {
        let activity = Activity {
            id: "a".to_string(),
            category: ActivityCategory::Food,
            name: "Salad".to_string(),
            calories: 300,
        };

        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "a", "category": 1, "name": "Salad", "calories": 300})
        );
    }

    #[test]
    fn test_activity_rejects_unknown_category_code() {
        let result: Result<Activity, _> =
            serde_json::from_str(r#"{"id":"x","category":7,"name":"Nap","calories":10}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_activity_is_valid() {
        assert!(Activity::new(ActivityCategory::Food, "Salad", 300).is_valid());
        assert!(!Activity::new(ActivityCategory::Food, "   ", 300).is_valid());
        assert!(!Activity::new(ActivityCategory::Exercise, "Running", 0).is_valid());
    }

    #[test]
    fn test_draft_to_activity_trims_name() {
        let draft = ActivityDraft {
            id: "d".to_string(),
            category: ActivityCategory::Exercise,
            name: "  Biking ".to_string(),
            calories: 250,
        };
        let activity = draft.to_activity().unwrap();
        assert_eq!(activity.name, "Biking");
        assert_eq!(activity.id, "d");

        let empty = ActivityDraft { name: String::new(), ..draft };
        assert!(empty.to_activity().is_none());
    }
}
