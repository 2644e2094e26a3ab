//! Rendered task list: heading, overdue warnings and one card per task.
//!
//! The board is computed from whatever task representation the caller
//! holds (database row or API payload) through [`BoardTask`], so the
//! server and the client render identically.

use serde::{Deserialize, Serialize};

use crate::deadline::{is_overdue, DueLabel};
use crate::status::TaskStatus;
use crate::types::{DbId, Deadline};

/// Shown instead of the card grid when a project has no tasks.
pub const EMPTY_NOTICE: &str = "There are no tasks.";

/// Read access to the task fields the board needs.
pub trait BoardTask {
    fn id(&self) -> DbId;
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn status(&self) -> TaskStatus;
    fn deadline(&self) -> Deadline;
    fn author_name(&self) -> &str;
    fn author_avatar(&self) -> Option<&str>;
}

/// Banner raised for an in-progress task whose deadline has passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueWarning {
    pub task_id: DbId,
    pub message: String,
}

impl OverdueWarning {
    fn for_task(task: &impl BoardTask) -> Self {
        Self {
            task_id: task.id(),
            message: format!(
                "Important: Task \"{}\" is overdue. You can change the deadline.",
                task.name()
            ),
        }
    }
}

/// One card in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCard {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub deadline: Deadline,
    pub due_label: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
}

impl TaskCard {
    pub fn build(task: &impl BoardTask, today: Deadline) -> Self {
        Self {
            id: task.id(),
            name: task.name().to_string(),
            description: task.description().map(str::to_string),
            status: task.status(),
            deadline: task.deadline(),
            due_label: DueLabel::for_task(task.status(), task.deadline(), today).to_string(),
            author_name: task.author_name().to_string(),
            author_avatar: task.author_avatar().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBoard {
    pub heading: String,
    pub overdue_warnings: Vec<OverdueWarning>,
    pub cards: Vec<TaskCard>,
    pub empty_notice: Option<String>,
}

impl TaskBoard {
    /// Render `tasks` as of `today`, keeping list order.
    pub fn build<T: BoardTask>(tasks: &[T], today: Deadline) -> Self {
        let overdue_warnings = tasks
            .iter()
            .filter(|t| t.status() == TaskStatus::InProgress && is_overdue(t.deadline(), today))
            .map(OverdueWarning::for_task)
            .collect();

        let cards = tasks.iter().map(|t| TaskCard::build(t, today)).collect();

        Self {
            heading: format!("Recent Tasks ({})", tasks.len()),
            overdue_warnings,
            cards,
            empty_notice: tasks.is_empty().then(|| EMPTY_NOTICE.to_string()),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::NaiveDate;

    use super::*;

    /// Minimal task used by the board and list tests.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct StubTask {
        pub id: DbId,
        pub name: String,
        pub status: TaskStatus,
        pub deadline: Deadline,
    }

    impl StubTask {
        pub(crate) fn new(id: DbId, status: TaskStatus, deadline: Deadline) -> Self {
            Self {
                id,
                name: format!("Task {id}"),
                status,
                deadline,
            }
        }
    }

    impl BoardTask for StubTask {
        fn id(&self) -> DbId {
            self.id
        }
        fn name(&self) -> &str {
            &self.name
        }
        fn description(&self) -> Option<&str> {
            None
        }
        fn status(&self) -> TaskStatus {
            self.status
        }
        fn deadline(&self) -> Deadline {
            self.deadline
        }
        fn author_name(&self) -> &str {
            "ada"
        }
        fn author_avatar(&self) -> Option<&str> {
            None
        }
    }

    pub(crate) fn day(d: u32) -> Deadline {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn empty_board_has_notice_and_zero_heading() {
        let board = TaskBoard::build::<StubTask>(&[], day(10));
        assert_eq!(board.heading, "Recent Tasks (0)");
        assert!(board.cards.is_empty());
        assert!(board.overdue_warnings.is_empty());
        assert_eq!(board.empty_notice.as_deref(), Some(EMPTY_NOTICE));
    }

    #[test]
    fn warnings_only_for_overdue_in_progress_tasks() {
        let tasks = vec![
            StubTask::new(1, TaskStatus::InProgress, day(5)),
            StubTask::new(2, TaskStatus::Completed, day(5)),
            StubTask::new(3, TaskStatus::InProgress, day(10)),
            StubTask::new(4, TaskStatus::InProgress, day(20)),
            StubTask::new(5, TaskStatus::InProgress, day(9)),
        ];
        let board = TaskBoard::build(&tasks, day(10));

        let ids: Vec<DbId> = board.overdue_warnings.iter().map(|w| w.task_id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert_eq!(
            board.overdue_warnings[0].message,
            "Important: Task \"Task 1\" is overdue. You can change the deadline."
        );
    }

    #[test]
    fn cards_keep_order_and_carry_labels() {
        let tasks = vec![
            StubTask::new(7, TaskStatus::InProgress, day(11)),
            StubTask::new(3, TaskStatus::Completed, day(1)),
            StubTask::new(9, TaskStatus::InProgress, day(10)),
            StubTask::new(4, TaskStatus::InProgress, day(2)),
        ];
        let board = TaskBoard::build(&tasks, day(10));

        assert_eq!(board.heading, "Recent Tasks (4)");
        assert_eq!(board.empty_notice, None);
        let labels: Vec<(DbId, &str)> = board
            .cards
            .iter()
            .map(|c| (c.id, c.due_label.as_str()))
            .collect();
        assert_eq!(
            labels,
            vec![
                (7, "Due in 1 day"),
                (3, "Completed"),
                (9, "Due is Today"),
                (4, "Overdue"),
            ]
        );
    }

    #[test]
    fn board_serializes_camel_case() {
        let tasks = vec![StubTask::new(1, TaskStatus::InProgress, day(1))];
        let json = serde_json::to_value(TaskBoard::build(&tasks, day(10))).unwrap();
        assert_eq!(json["overdueWarnings"][0]["taskId"], 1);
        assert_eq!(json["cards"][0]["dueLabel"], "Overdue");
        assert_eq!(json["cards"][0]["status"], "IN_PROGRESS");
        assert!(json["emptyNotice"].is_null());
    }
}
