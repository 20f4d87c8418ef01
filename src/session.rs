//! Wiring for one task board session.

use std::sync::Arc;

use mockable::DefaultClock;

use crate::{
    auth::{adapters::simulated::SimulatedAuthenticator, services::AuthService},
    config::BoardConfig,
    task::{
        adapters::memory::InMemoryTaskRepository,
        services::{TaskStore, TaskStoreResult},
    },
};

/// Task store type used by a session.
pub type SessionTaskStore = TaskStore<InMemoryTaskRepository, DefaultClock>;

/// Authentication service type used by a session.
pub type SessionAuthService = AuthService<SimulatedAuthenticator>;

/// Everything a presentation layer needs for one session: the task store and
/// the mock authentication flow. Nothing outlives the session.
#[derive(Clone)]
pub struct BoardSession {
    tasks: SessionTaskStore,
    auth: SessionAuthService,
}

impl BoardSession {
    /// Starts a session, seeding the store when configured to.
    ///
    /// # Errors
    ///
    /// Returns [`crate::task::services::TaskStoreError`] when seeding fails.
    pub fn start(config: &BoardConfig) -> TaskStoreResult<Self> {
        let repository = Arc::new(InMemoryTaskRepository::new());
        let clock = Arc::new(DefaultClock);
        let tasks = if config.seed_on_start {
            TaskStore::seeded(repository, clock)?
        } else {
            TaskStore::new(repository, clock)
        };
        let authenticator = SimulatedAuthenticator::new(config.auth.clone());
        let auth = AuthService::new(Arc::new(authenticator));
        tracing::info!(seeded = config.seed_on_start, "board session started");
        Ok(Self { tasks, auth })
    }

    /// Returns the task store.
    #[must_use]
    pub const fn tasks(&self) -> &SessionTaskStore {
        &self.tasks
    }

    /// Returns the authentication service.
    #[must_use]
    pub const fn auth(&self) -> &SessionAuthService {
        &self.auth
    }
}
