use tracing::instrument;

use crate::domain::{
    choice::ports::ChoiceRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    menu::ports::{MenuRepository, PageFetcher},
    student::{
        entities::seed_roster,
        ports::{StudentRepository, StudentService},
    },
};

impl<M, S, C, F, HC> StudentService for Service<M, S, C, F, HC>
where
    M: MenuRepository,
    S: StudentRepository,
    C: ChoiceRepository,
    F: PageFetcher,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_students(&self) -> Result<Vec<String>, CoreError> {
        let students = self.student_repository.list_students().await?;
        if students.is_empty() {
            return Ok(seed_roster());
        }

        Ok(students)
    }
}
