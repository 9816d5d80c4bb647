/// Custom actions for the profile holder beyond field patches.
#[derive(Debug, Clone)]
pub enum ProfileAction {
    /// Resets every field to an empty string in a single commit.
    ClearUserData,
}

/// Results from ProfileActions - variants match 1:1 with ProfileAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileActionResult {
    ClearUserData,
}
