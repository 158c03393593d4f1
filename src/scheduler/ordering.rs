//! Ordering policies over task snapshots.
//!
//! Two fixed orderings cover the engine: chronological for timeline views and
//! the conflict scan, priority-then-duration for budget selection. Both are
//! stable, so the snapshot's own order is the final tie-break and repeated
//! calls on the same input agree.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 14
//! (priority dispatching)

use std::cmp::Reverse;

use crate::models::Task;

/// Orders tasks by scheduled time, earliest first.
///
/// Unscheduled tasks sort after every scheduled one, keeping their relative
/// order. Equal times keep input order.
pub fn order_by_time<'a>(tasks: &[&'a Task]) -> Vec<&'a Task> {
    let mut ordered = tasks.to_vec();
    ordered.sort_by_key(|t| (t.scheduled_time.is_none(), t.scheduled_time));
    ordered
}

/// Orders tasks for budget selection: priority descending, then duration
/// ascending.
///
/// Shortest-first within a priority level lets a budget satisfy more tasks of
/// that level. Ties on both keys keep input order.
pub fn order_by_priority<'a>(tasks: &[&'a Task]) -> Vec<&'a Task> {
    let mut ordered = tasks.to_vec();
    ordered.sort_by_key(|t| (Reverse(t.priority), t.duration_minutes));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskCategory;
    use chrono::NaiveDate;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()
    }

    fn make_task(id: &str, priority: u8, duration: u32) -> Task {
        Task::new(id, id, TaskCategory::Walk, duration, due()).with_priority(priority)
    }

    fn ids<'a>(tasks: &[&'a Task]) -> Vec<&'a str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_order_by_time_chronological() {
        let noon = make_task("noon", 3, 10).with_scheduled_time(12 * 60);
        let dawn = make_task("dawn", 3, 10).with_scheduled_time(6 * 60);
        let dusk = make_task("dusk", 3, 10).with_scheduled_time(18 * 60);

        let snapshot = vec![&noon, &dusk, &dawn];
        assert_eq!(ids(&order_by_time(&snapshot)), ["dawn", "noon", "dusk"]);
    }

    #[test]
    fn test_order_by_time_unscheduled_sort_last() {
        let free_a = make_task("free-a", 3, 10);
        let timed = make_task("timed", 3, 10).with_scheduled_time(9 * 60);
        let free_b = make_task("free-b", 3, 10);

        let snapshot = vec![&free_a, &timed, &free_b];
        // Unscheduled tasks trail in their original relative order
        assert_eq!(ids(&order_by_time(&snapshot)), ["timed", "free-a", "free-b"]);
    }

    #[test]
    fn test_order_by_time_stable_for_equal_times() {
        let first = make_task("first", 3, 10).with_scheduled_time(480);
        let second = make_task("second", 3, 10).with_scheduled_time(480);

        let snapshot = vec![&first, &second];
        assert_eq!(ids(&order_by_time(&snapshot)), ["first", "second"]);
    }

    #[test]
    fn test_order_by_priority_highest_first() {
        let low = make_task("low", 1, 10);
        let high = make_task("high", 5, 10);
        let mid = make_task("mid", 3, 10);

        let snapshot = vec![&low, &high, &mid];
        assert_eq!(ids(&order_by_priority(&snapshot)), ["high", "mid", "low"]);
    }

    #[test]
    fn test_order_by_priority_shorter_breaks_ties() {
        let long = make_task("long", 4, 45);
        let short = make_task("short", 4, 5);
        let medium = make_task("medium", 4, 20);

        let snapshot = vec![&long, &short, &medium];
        assert_eq!(ids(&order_by_priority(&snapshot)), ["short", "medium", "long"]);
    }

    #[test]
    fn test_order_by_priority_stable_on_full_tie() {
        let a = make_task("a", 2, 15);
        let b = make_task("b", 2, 15);
        let c = make_task("c", 2, 15);

        let snapshot = vec![&a, &b, &c];
        assert_eq!(ids(&order_by_priority(&snapshot)), ["a", "b", "c"]);
    }

    #[test]
    fn test_orderings_handle_empty_snapshot() {
        let snapshot: Vec<&Task> = Vec::new();
        assert!(order_by_time(&snapshot).is_empty());
        assert!(order_by_priority(&snapshot).is_empty());
    }
}
