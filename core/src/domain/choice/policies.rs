use crate::domain::{
    choice::{
        entities::{Choice, SCHOOL_LUNCH},
        value_objects::SaveChoiceInput,
    },
    common::entities::app_errors::CoreError,
    menu::value_objects::DateKey,
};

fn required(value: String) -> Result<String, CoreError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(CoreError::InvalidInput("Missing required fields".to_string()));
    }
    Ok(value)
}

/// Checks a submission and returns the date, student and choice to store.
///
/// The school lunch option is required for `School lunch` and dropped for
/// any other lunch.
pub fn normalize_choice(input: SaveChoiceInput) -> Result<(DateKey, String, Choice), CoreError> {
    let student = required(input.student)?;
    let snack = required(input.snack)?;
    let lunch = required(input.lunch)?;

    let school_lunch_option = if lunch == SCHOOL_LUNCH {
        let option = input
            .school_lunch_option
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .ok_or_else(|| {
                CoreError::InvalidInput(
                    "School lunch option is required when choosing School lunch".to_string(),
                )
            })?;
        Some(option)
    } else {
        None
    };

    Ok((
        input.date,
        student,
        Choice {
            snack,
            lunch,
            school_lunch_option,
            milk: input.milk,
        },
    ))
}
