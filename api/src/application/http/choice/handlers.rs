pub mod get_choices;
pub mod save_choice;
