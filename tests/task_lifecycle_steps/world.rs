//! Shared world state for task lifecycle BDD scenarios.

use crate::test_helpers::{SteppingClock, in_memory_service};
use chrono::{DateTime, Utc};
use rstest::fixture;
use taskflow::task::{adapters::memory::InMemoryTaskRepository, domain::Task, services::TaskService};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, SteppingClock>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    /// Service under test.
    pub service: TestTaskService,
    /// Most recently returned task.
    pub last_task: Option<Task>,
    /// Modification time of the task before the latest update.
    pub previous_updated_at: Option<DateTime<Utc>>,
    /// Whether the latest update returned a task.
    pub last_update_found: Option<bool>,
    /// Result of the latest delete.
    pub last_delete: Option<bool>,
}

impl TaskLifecycleWorld {
    /// Creates a world with empty scenario state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: in_memory_service(),
            last_task: None,
            previous_updated_at: None,
            last_update_found: None,
            last_delete: None,
        }
    }

    /// Returns the most recent task or fails the step.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been recorded yet.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.last_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
