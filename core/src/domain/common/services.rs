use crate::domain::{
    choice::ports::ChoiceRepository,
    common::MenuConfig,
    health::ports::HealthCheckRepository,
    menu::ports::{MenuRepository, PageFetcher},
    student::ports::StudentRepository,
};

#[derive(Clone)]
pub struct Service<M, S, C, F, HC>
where
    M: MenuRepository,
    S: StudentRepository,
    C: ChoiceRepository,
    F: PageFetcher,
    HC: HealthCheckRepository,
{
    pub(crate) menu_repository: M,
    pub(crate) student_repository: S,
    pub(crate) choice_repository: C,
    pub(crate) page_fetcher: F,
    pub(crate) health_check_repository: HC,
    pub(crate) config: MenuConfig,
}

impl<M, S, C, F, HC> Service<M, S, C, F, HC>
where
    M: MenuRepository,
    S: StudentRepository,
    C: ChoiceRepository,
    F: PageFetcher,
    HC: HealthCheckRepository,
{
    pub fn new(
        menu_repository: M,
        student_repository: S,
        choice_repository: C,
        page_fetcher: F,
        health_check_repository: HC,
        config: MenuConfig,
    ) -> Self {
        Self {
            menu_repository,
            student_repository,
            choice_repository,
            page_fetcher,
            health_check_repository,
            config,
        }
    }
}

#[cfg(test)]
pub(crate) mod mocks {
    use super::*;
    use crate::domain::{
        choice::ports::MockChoiceRepository, health::ports::MockHealthCheckRepository,
        menu::ports::{MockMenuRepository, MockPageFetcher},
        student::ports::MockStudentRepository,
    };

    pub(crate) type MockService = Service<
        MockMenuRepository,
        MockStudentRepository,
        MockChoiceRepository,
        MockPageFetcher,
        MockHealthCheckRepository,
    >;

    /// One mock per port; set expectations on the fields, then build.
    #[derive(Default)]
    pub(crate) struct Mocks {
        pub menus: MockMenuRepository,
        pub students: MockStudentRepository,
        pub choices: MockChoiceRepository,
        pub fetcher: MockPageFetcher,
        pub health: MockHealthCheckRepository,
    }

    impl Mocks {
        pub(crate) fn into_service(self, config: MenuConfig) -> MockService {
            Service::new(
                self.menus,
                self.students,
                self.choices,
                self.fetcher,
                self.health,
                config,
            )
        }
    }
}
