//! Scenarios that go through the task page, the actions, and a mocked server

use chrono::NaiveDate;

use taskcal::action::{ActionOutcome, TaskAction};
use taskcal::calendar::CalendarDate;
use taskcal::clock::FixedClock;
use taskcal::error::TaskActionError;
use taskcal::mock::MockTaskServer;
use taskcal::mock_behaviour::MockBehaviour;
use taskcal::page::{Command, Effect, TaskPage};
use taskcal::recurrence::Recurrence;
use taskcal::task::{Priority, TaskId};
use taskcal::traits::TaskActions;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A server that believes today is March 10th, 2024
fn server() -> MockTaskServer<FixedClock> {
    MockTaskServer::new(FixedClock(CalendarDate::new(2024, 2, 10).unwrap()))
}

/// Dispatch a command, and run the action it leads to (if any) against `server`
async fn run_command(page: &mut TaskPage, server: &MockTaskServer<FixedClock>, command: Command) -> Effect {
    match page.dispatch(command) {
        Effect::Perform(action) => {
            let result = action.perform(server).await;
            page.complete(action, result)
        },
        other => other,
    }
}

#[tokio::test]
async fn test_toggle_and_priority() {
    let _ = env_logger::builder().is_test(true).try_init();

    let server = server();
    let id = server.add_task("Buy milk", ymd(2024, 3, 10), Priority::default(), None);

    assert!(server.toggle_task(id).await.unwrap());
    assert!(server.task(id).unwrap().completed());
    assert!(server.toggle_task(id).await.unwrap() == false);

    server.update_task_priority(id, Priority::High).await.unwrap();
    assert_eq!(server.task(id).unwrap().priority(), Priority::High);
}

#[tokio::test]
async fn test_move_tomorrow_uses_server_today() {
    let server = server();
    // Even a task planned long ago is moved to the day after today
    let id = server.add_task("Call the bank", ymd(2024, 1, 2), Priority::Low, None);
    server.move_task_tomorrow(id).await.unwrap();
    assert_eq!(server.task(id).unwrap().date(), ymd(2024, 3, 11));
    assert_eq!(server.tasks_on(ymd(2024, 3, 11)).len(), 1);
}

#[tokio::test]
async fn test_delete_recurring_series() {
    let server = server();
    let first = server.add_task("Standup", ymd(2024, 3, 4), Priority::Medium, Some(Recurrence::Weekly));
    let unrelated = server.add_task("Dentist", ymd(2024, 3, 20), Priority::Medium, None);
    assert_eq!(server.len(), 1 + 52 + 1);

    // Delete from the third occurrence on
    let third = server.tasks_on(ymd(2024, 3, 18))[0].id();
    server.delete_task_completely(third).await.unwrap();

    assert!(server.task(first).is_some());
    assert_eq!(server.tasks_on(ymd(2024, 3, 11)).len(), 1);
    assert!(server.tasks_on(ymd(2024, 3, 18)).is_empty());
    assert!(server.tasks_on(ymd(2024, 3, 25)).is_empty());
    assert!(server.task(unrelated).is_some());
    assert_eq!(server.len(), 2 + 1);

    server.delete_task_completely(unrelated).await.unwrap();
    assert_eq!(server.len(), 2);
}

#[tokio::test]
async fn test_unknown_task() {
    let server = server();
    let missing = TaskId::new(1234);
    assert!(matches!(server.toggle_task(missing).await, Err(TaskActionError::UnknownTask(id)) if id == missing));
    assert!(matches!(server.delete_task_completely(missing).await, Err(TaskActionError::UnknownTask(_))));
}

#[tokio::test]
async fn test_page_flow() {
    let _ = env_logger::builder().is_test(true).try_init();

    let server = server();
    let id = server.add_task("Write report", ymd(2024, 3, 10), Priority::Medium, None);
    let mut page = TaskPage::new();

    page.dispatch(Command::ShowTaskMenu(id));
    let effect = run_command(&mut page, &server, Command::Request(TaskAction::Toggle(id))).await;
    assert_eq!(effect, Effect::MarkCompleted { id, completed: true });

    let effect = run_command(&mut page, &server, Command::Request(TaskAction::UpdatePriority(id, Priority::Low))).await;
    assert_eq!(effect, Effect::Refresh);
    assert_eq!(page.open_menu(), None);
    assert_eq!(server.task(id).unwrap().priority(), Priority::Low);

    let effect = run_command(&mut page, &server, Command::Request(TaskAction::DeleteCompletely(id))).await;
    assert_eq!(effect, Effect::AskConfirmation(id));
    assert!(server.task(id).is_some());
    let effect = run_command(&mut page, &server, Command::ConfirmDelete(true)).await;
    assert_eq!(effect, Effect::Refresh);
    assert!(server.is_empty());
}

#[tokio::test]
async fn test_failures_are_shown() {
    let _ = env_logger::builder().is_test(true).try_init();

    let server = server();
    let id = server.add_task("Renew passport", ymd(2024, 3, 12), Priority::High, None);
    server.set_behaviour(MockBehaviour {
        move_tomorrow_behaviour: (0, 1),
        ..MockBehaviour::default()
    });

    let mut page = TaskPage::new();
    page.dispatch(Command::ShowTaskMenu(id));
    let effect = run_command(&mut page, &server, Command::Request(TaskAction::MoveTomorrow(id))).await;
    assert!(matches!(effect, Effect::ShowError(_)));
    assert!(page.error().is_some());
    // The task did not move, and its menu is still open
    assert_eq!(server.task(id).unwrap().date(), ymd(2024, 3, 12));
    assert_eq!(page.open_menu(), Some(id));

    // Second try goes through
    let effect = run_command(&mut page, &server, Command::Request(TaskAction::MoveTomorrow(id))).await;
    assert_eq!(effect, Effect::Refresh);
    assert_eq!(page.error(), None);
    assert_eq!(server.task(id).unwrap().date(), ymd(2024, 3, 11));
}

#[tokio::test]
async fn test_every_action_can_fail() {
    let server = MockTaskServer::with_behaviour(
        FixedClock(CalendarDate::new(2024, 2, 10).unwrap()),
        MockBehaviour::fail_now(1),
    );
    let id = server.add_task("Taxes", ymd(2024, 4, 15), Priority::High, None);

    for action in [
        TaskAction::Toggle(id),
        TaskAction::UpdatePriority(id, Priority::Low),
        TaskAction::MoveTomorrow(id),
        TaskAction::DeleteCompletely(id),
    ].iter() {
        assert!(matches!(action.perform(&server).await, Err(TaskActionError::Mocked(_))));
    }
    assert_eq!(TaskAction::Toggle(id).perform(&server).await.unwrap(), ActionOutcome::Toggled { completed: true });
}
