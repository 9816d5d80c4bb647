/// Onboarding profile of the current user. Lives only in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Payload for changing profile fields. `None` leaves a field as it is.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// Where the user is in the profile flow.
///
/// Transitions are driven from outside (navigation events); the profile
/// holder never changes stage by itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileStage {
    #[default]
    Onboarding,
    Profile,
}

impl ProfileStage {
    pub fn register(self) -> Self {
        ProfileStage::Profile
    }

    /// Stage after logging out. Callers clear the profile alongside this.
    pub fn log_out(self) -> Self {
        ProfileStage::Onboarding
    }
}
