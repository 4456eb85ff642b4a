use crate::domain::{choice::entities::StudentChoice, menu::value_objects::DateKey};

#[derive(Debug, Clone)]
pub struct SaveChoiceInput {
    pub date: DateKey,
    pub student: String,
    pub snack: String,
    pub lunch: String,
    pub school_lunch_option: Option<String>,
    pub milk: bool,
}

/// Every roster student with the choice stored for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayChoices {
    pub date: DateKey,
    pub choices: Vec<StudentChoice>,
}
