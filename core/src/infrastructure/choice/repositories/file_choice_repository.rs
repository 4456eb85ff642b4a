use std::collections::BTreeMap;

use crate::{
    domain::{
        choice::{
            entities::{Choice, StudentChoice},
            ports::ChoiceRepository,
        },
        common::entities::app_errors::CoreError,
        menu::value_objects::DateKey,
    },
    infrastructure::{
        file::JsonFileStore,
        student::repositories::file_student_repository::{STUDENTS_FILE, read_roster},
    },
};

const CHOICES_FILE: &str = "choices.json";

/// `{ "YYYY-MM-DD": { "<student>": Choice } }`
type ChoiceFile = BTreeMap<String, BTreeMap<String, Choice>>;

#[derive(Debug, Clone)]
pub struct FileChoiceRepository {
    files: JsonFileStore,
}

impl FileChoiceRepository {
    pub fn new(files: JsonFileStore) -> Self {
        Self { files }
    }
}

impl ChoiceRepository for FileChoiceRepository {
    async fn get_choices_for_date(&self, date: DateKey) -> Result<Vec<StudentChoice>, CoreError> {
        let _guard = self.files.lock().await;
        let students = read_roster(&self.files).await;
        let mut day = self
            .files
            .read::<ChoiceFile>(CHOICES_FILE)
            .await
            .and_then(|mut all| all.remove(&date.to_string()))
            .unwrap_or_default();

        Ok(students
            .into_iter()
            .map(|student| {
                let choice = day.remove(&student);
                StudentChoice::new(student, choice)
            })
            .collect())
    }

    async fn save_choice(
        &self,
        date: DateKey,
        student: String,
        choice: Choice,
    ) -> Result<(), CoreError> {
        let _guard = self.files.lock().await;

        let mut students = read_roster(&self.files).await;
        if !students.contains(&student) {
            students.push(student.clone());
            self.files.write(STUDENTS_FILE, &students).await?;
        }

        let mut all: ChoiceFile = self
            .files
            .read_for_update(CHOICES_FILE)
            .await?
            .unwrap_or_default();
        all.entry(date.to_string())
            .or_default()
            .insert(student, choice);

        self.files.write(CHOICES_FILE, &all).await
    }
}
