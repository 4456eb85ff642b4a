use tracing::{info, instrument};

use crate::domain::{
    choice::{
        entities::Choice,
        policies::normalize_choice,
        ports::{ChoiceRepository, ChoiceService},
        value_objects::{DayChoices, SaveChoiceInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    menu::{
        ports::{MenuRepository, PageFetcher},
        value_objects::DateKey,
    },
    student::ports::StudentRepository,
};

impl<M, S, C, F, HC> ChoiceService for Service<M, S, C, F, HC>
where
    M: MenuRepository,
    S: StudentRepository,
    C: ChoiceRepository,
    F: PageFetcher,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self), fields(date = %date))]
    async fn get_choices(&self, date: DateKey) -> Result<DayChoices, CoreError> {
        let choices = self.choice_repository.get_choices_for_date(date).await?;

        Ok(DayChoices { date, choices })
    }

    #[instrument(skip(self, input), fields(date = %input.date))]
    async fn save_choice(&self, input: SaveChoiceInput) -> Result<Choice, CoreError> {
        let (date, student, choice) = normalize_choice(input)?;

        self.choice_repository
            .save_choice(date, student.clone(), choice.clone())
            .await?;

        info!(student = %student, lunch = %choice.lunch, "choice saved");
        Ok(choice)
    }
}
