use std::future::Future;

use crate::domain::{
    choice::{
        entities::{Choice, StudentChoice},
        value_objects::{DayChoices, SaveChoiceInput},
    },
    common::entities::app_errors::CoreError,
    menu::value_objects::DateKey,
};

/// Repository trait for daily choices
#[cfg_attr(test, mockall::automock)]
pub trait ChoiceRepository: Send + Sync {
    /// Every roster student, ordered as the roster is, with the choice stored for `date`.
    fn get_choices_for_date(
        &self,
        date: DateKey,
    ) -> impl Future<Output = Result<Vec<StudentChoice>, CoreError>> + Send;

    /// Upserts the choice of `student` for `date`, adding the student to the
    /// roster when unknown.
    fn save_choice(
        &self,
        date: DateKey,
        student: String,
        choice: Choice,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait ChoiceService: Send + Sync {
    fn get_choices(
        &self,
        date: DateKey,
    ) -> impl Future<Output = Result<DayChoices, CoreError>> + Send;

    fn save_choice(
        &self,
        input: SaveChoiceInput,
    ) -> impl Future<Output = Result<Choice, CoreError>> + Send;
}
