use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lunch value that requires a school lunch option.
pub const SCHOOL_LUNCH: &str = "School lunch";

/// What one student picked for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub snack: String,
    pub lunch: String,
    pub school_lunch_option: Option<String>,
    pub milk: bool,
}

/// A roster entry joined with its choice for a day. Every field but
/// `student` is null when nothing was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentChoice {
    pub student: String,
    pub snack: Option<String>,
    pub lunch: Option<String>,
    pub school_lunch_option: Option<String>,
    pub milk: Option<bool>,
}

impl StudentChoice {
    pub fn new(student: impl Into<String>, choice: Option<Choice>) -> Self {
        let student = student.into();
        match choice {
            Some(choice) => Self {
                student,
                snack: Some(choice.snack),
                lunch: Some(choice.lunch),
                school_lunch_option: choice.school_lunch_option,
                milk: Some(choice.milk),
            },
            None => Self {
                student,
                snack: None,
                lunch: None,
                school_lunch_option: None,
                milk: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_uses_camel_case_on_the_wire() {
        let choice = Choice {
            snack: "Apple".to_string(),
            lunch: SCHOOL_LUNCH.to_string(),
            school_lunch_option: Some("Meat".to_string()),
            milk: true,
        };

        let json = serde_json::to_value(&choice).unwrap();
        assert_eq!(json["schoolLunchOption"], "Meat");
        assert_eq!(json["milk"], true);
    }

    #[test]
    fn test_student_without_choice_has_null_fields() {
        let json = serde_json::to_value(StudentChoice::new("Ava", None)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "student": "Ava",
                "snack": null,
                "lunch": null,
                "schoolLunchOption": null,
                "milk": null
            })
        );
    }
}
