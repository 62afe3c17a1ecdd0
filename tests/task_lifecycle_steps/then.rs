//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use rstest_bdd_macros::then;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let actual = world.task()?.status().as_str();
    eyre::ensure!(actual == status, "expected status {status}, found {actual}");
    Ok(())
}

#[then(r#"the task priority is "{priority}""#)]
fn task_priority_is(world: &TaskLifecycleWorld, priority: String) -> Result<(), eyre::Report> {
    let actual = world.task()?.priority().as_str();
    eyre::ensure!(actual == priority, "expected priority {priority}, found {actual}");
    Ok(())
}

#[then("the task has no description")]
fn task_has_no_description(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let description = world.task()?.description();
    eyre::ensure!(description.is_none(), "unexpected description {description:?}");
    Ok(())
}

#[then("the task modification time has advanced")]
fn modification_time_advanced(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let previous = world
        .previous_updated_at
        .ok_or_else(|| eyre::eyre!("missing previous modification time"))?;
    let task = world.task()?;
    eyre::ensure!(
        task.updated_at() > previous,
        "updatedAt did not advance past {previous}"
    );
    eyre::ensure!(
        task.created_at() <= previous,
        "createdAt moved to {}",
        task.created_at()
    );
    Ok(())
}

#[then("the deletion removed a record")]
fn deletion_removed_a_record(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.last_delete == Some(true), "expected delete to return true");
    Ok(())
}

#[then("the task can no longer be found")]
fn task_can_no_longer_be_found(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.task()?.id().to_string();
    let found = run_async(world.service.find_by_id(&id))?;
    eyre::ensure!(found.is_none(), "task {id} is still present");
    Ok(())
}

#[then("no task is returned")]
fn no_task_is_returned(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_update_found == Some(false),
        "expected the update to report absence"
    );
    Ok(())
}
