/// An unset or empty admin PIN leaves manual saves open.
pub fn pin_matches(required: Option<&str>, supplied: Option<&str>) -> bool {
    match required {
        None | Some("") => true,
        Some(required) => supplied == Some(required),
    }
}
