use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{ProfilePatch, UserProfile};
use super::actions::{ProfileAction, ProfileActionResult};

impl Entity for UserProfile {
    type Patch = ProfilePatch;
    type Action = ProfileAction;
    type ActionResult = ProfileActionResult;

    /// Overwrites every field present in the patch. No validation is applied,
    /// an empty or malformed email is stored as typed.
    fn on_update(&mut self, patch: ProfilePatch) -> Result<(), FrameworkError> {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: ProfileAction) -> Result<ProfileActionResult, FrameworkError> {
        match action {
            ProfileAction::ClearUserData => {
                *self = UserProfile::default();
                Ok(ProfileActionResult::ClearUserData)
            }
        }
    }
}
