//! Checklist Operations
//!
//! Pure operations on the in-memory task list. Every operation returns a
//! new snapshot; the component layer stores the result in a signal, so
//! children only ever see immutable copies.

use crate::models::Task;

/// Append a new task with a timestamp-derived id.
///
/// Whitespace-only text is rejected and the snapshot is returned unchanged.
/// The candidate id is bumped past any id already taken, so two adds within
/// the same millisecond still get distinct ids.
pub fn add_task(tasks: &[Task], text: &str, now_ms: u64) -> Vec<Task> {
    if text.trim().is_empty() {
        return tasks.to_vec();
    }

    let mut id = now_ms;
    while tasks.iter().any(|t| t.id == id) {
        id += 1;
    }

    let mut next = tasks.to_vec();
    next.push(Task {
        id,
        text: text.to_string(),
        done: false,
    });
    next
}

/// Flip `done` on the matching task; no-op when the id is absent.
pub fn toggle_task(tasks: &[Task], id: u64) -> Vec<Task> {
    tasks
        .iter()
        .map(|t| {
            if t.id == id {
                Task {
                    done: !t.done,
                    ..t.clone()
                }
            } else {
                t.clone()
            }
        })
        .collect()
}

/// Remove the matching task; no-op when the id is absent.
pub fn delete_task(tasks: &[Task], id: u64) -> Vec<Task> {
    tasks.iter().filter(|t| t.id != id).cloned().collect()
}

/// Header line: "{done} / {total}"
pub fn completed_summary(tasks: &[Task]) -> String {
    let done = tasks.iter().filter(|t| t.done).count();
    format!("{} / {}", done, tasks.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_blank_text() {
        let tasks = add_task(&[], "", 100);
        assert!(tasks.is_empty());
        let tasks = add_task(&[], "   ", 100);
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_add_keeps_raw_text() {
        let tasks = add_task(&[], " x ", 100);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, " x ");
        assert!(!tasks[0].done);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let tasks = add_task(&[], "first", 100);
        let tasks = add_task(&tasks, "second", 200);
        assert_eq!(tasks[0].text, "first");
        assert_eq!(tasks[1].text, "second");
    }

    #[test]
    fn test_add_bumps_colliding_ids() {
        let tasks = add_task(&[], "a", 100);
        let tasks = add_task(&tasks, "b", 100);
        let tasks = add_task(&tasks, "c", 100);
        let mut ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_toggle_is_involution() {
        let tasks = add_task(&[], "a", 100);
        let id = tasks[0].id;
        let once = toggle_task(&tasks, id);
        assert!(once[0].done);
        let twice = toggle_task(&once, id);
        assert_eq!(twice, tasks);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let tasks = add_task(&[], "a", 100);
        assert_eq!(toggle_task(&tasks, 999), tasks);
    }

    #[test]
    fn test_delete_then_toggle_is_noop() {
        let tasks = add_task(&[], "a", 100);
        let id = tasks[0].id;
        let tasks = delete_task(&tasks, id);
        assert!(tasks.is_empty());
        assert!(toggle_task(&tasks, id).is_empty());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let tasks = add_task(&[], "a", 100);
        assert_eq!(delete_task(&tasks, 999), tasks);
    }

    #[test]
    fn test_buy_milk_scenario() {
        let tasks = add_task(&[], "Buy milk", 100);
        assert_eq!(completed_summary(&tasks), "0 / 1");

        let id = tasks[0].id;
        let tasks = toggle_task(&tasks, id);
        assert_eq!(completed_summary(&tasks), "1 / 1");

        let tasks = delete_task(&tasks, id);
        assert!(tasks.is_empty());
        assert_eq!(completed_summary(&tasks), "0 / 0");
    }
}
