/// Roster served until storage holds students of its own.
pub const SEED_STUDENTS: [&str; 20] = [
    "Ava", "Liam", "Mia", "Noah", "Emma", "Oliver", "Sophia", "Elijah", "Isabella", "Lucas",
    "Amelia", "Mason", "Harper", "Logan", "Evelyn", "James", "Abigail", "Benjamin", "Emily",
    "Henry",
];

pub fn seed_roster() -> Vec<String> {
    SEED_STUDENTS.iter().map(|name| name.to_string()).collect()
}
