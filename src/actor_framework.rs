use std::fmt::Debug;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION (State owned by exactly one actor)
// =============================================================================

/// Trait for any piece of state managed by a [`StateActor`].
///
/// Patches and actions are the only way to mutate the state. A hook that
/// returns an error leaves the committed state untouched.
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    type Patch: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    fn on_update(&mut self, patch: Self::Patch) -> Result<(), FrameworkError>;

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, FrameworkError>;
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
    #[allow(dead_code)]
    #[error("Rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum StateRequest<T: Entity> {
    Get {
        respond_to: Response<T>,
    },
    Update {
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Shutdown,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct StateActor<T: Entity> {
    receiver: mpsc::Receiver<StateRequest<T>>,
    state: T,
    snapshots: watch::Sender<T>,
}

impl<T: Entity> StateActor<T> {
    pub fn new(buffer_size: usize, initial: T) -> (Self, StateClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (snapshots, snapshot_rx) = watch::channel(initial.clone());
        let actor = Self {
            receiver,
            state: initial,
            snapshots,
        };
        let client = StateClient::new(sender, snapshot_rx);
        (actor, client)
    }

    pub async fn run(mut self) {
        info!(entity = std::any::type_name::<T>(), "StateActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Get { respond_to } => {
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                StateRequest::Update { patch, respond_to } => {
                    debug!(?patch, "Applying patch");
                    let mut next = self.state.clone();
                    match next.on_update(patch) {
                        Ok(()) => {
                            self.commit(next);
                            let _ = respond_to.send(Ok(self.state.clone()));
                        }
                        Err(e) => {
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                StateRequest::Action { action, respond_to } => {
                    debug!(?action, "Handling action");
                    let mut next = self.state.clone();
                    match next.handle_action(action) {
                        Ok(result) => {
                            self.commit(next);
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                StateRequest::Shutdown => {
                    info!("StateActor shutting down");
                    break;
                }
            }
        }
        info!(entity = std::any::type_name::<T>(), "StateActor stopped");
    }

    // Observers must see the new value before the caller gets its reply.
    fn commit(&mut self, next: T) {
        self.state = next;
        self.snapshots.send_replace(self.state.clone());
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct StateClient<T: Entity> {
    sender: mpsc::Sender<StateRequest<T>>,
    snapshots: watch::Receiver<T>,
}

impl<T: Entity> StateClient<T> {
    pub(crate) fn new(sender: mpsc::Sender<StateRequest<T>>, snapshots: watch::Receiver<T>) -> Self {
        Self { sender, snapshots }
    }

    pub async fn get(&self) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Get { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, patch: T::Patch) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Update { patch, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(&self, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Action { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn shutdown(&self) -> Result<(), FrameworkError> {
        self.sender
            .send(StateRequest::Shutdown)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }

    /// Receiver that always holds the latest committed state.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.snapshots.clone()
    }

    /// Last committed state, without a round trip to the actor.
    #[allow(dead_code)]
    pub fn current(&self) -> T {
        self.snapshots.borrow().clone()
    }
}
