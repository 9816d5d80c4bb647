use tokio::sync::watch;
use tracing::{debug, info, instrument};
use crate::actor_framework::StateClient;
use crate::domain::{ProfilePatch, ProfileStage, UserProfile};
use crate::profile_actor::{ProfileAction, ProfileError};

/// Client for the profile holder. Field updates and `clear_user_data` are the
/// only ways to change the profile.
#[derive(Clone)]
pub struct ProfileClient {
    inner: StateClient<UserProfile>,
}

impl_client_new!(ProfileClient, UserProfile);
impl_field_updates!(ProfileClient, ProfilePatch, ProfileError, first_name, last_name, email);

impl ProfileClient {
    #[instrument(skip(self))]
    pub async fn profile(&self) -> Result<UserProfile, ProfileError> {
        debug!("Sending request");
        Ok(self.inner.get().await?)
    }

    #[instrument(skip(self))]
    pub async fn clear_user_data(&self) -> Result<(), ProfileError> {
        debug!("Sending request");
        self.inner.perform_action(ProfileAction::ClearUserData).await?;
        Ok(())
    }

    /// Clears the profile and hands back the stage the user returns to.
    #[instrument(skip(self))]
    pub async fn log_out(&self) -> Result<ProfileStage, ProfileError> {
        self.clear_user_data().await?;
        info!("User logged out");
        Ok(ProfileStage::Profile.log_out())
    }

    #[allow(dead_code)]
    pub fn subscribe(&self) -> watch::Receiver<UserProfile> {
        self.inner.subscribe()
    }

    pub async fn shutdown(&self) -> Result<(), ProfileError> {
        Ok(self.inner.shutdown().await?)
    }
}
