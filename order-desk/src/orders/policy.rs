//! Course unlocking policy
//!
//! Whether a course may currently be fired depends on the courses before it.
//! The rule is a strategy the store queries on every read; it is never
//! cached because group contents change with every command.
//!
//! A locked course still accepts new lines, they just default to hold.

use std::fmt;
use std::str::FromStr;

use shared::order::OrderGroup;

/// Course gating strategy
pub trait CourseGate: fmt::Debug + Send + Sync {
    /// Whether `group_id` is editable given the groups in display order.
    /// Unknown ids are never editable.
    fn can_edit(&self, groups: &[OrderGroup], group_id: &str) -> bool;

    /// Strategy name (for logs)
    fn name(&self) -> &'static str;
}

/// Groups before `group_id`, or None if the id is unknown
fn preceding<'a>(groups: &'a [OrderGroup], group_id: &str) -> Option<&'a [OrderGroup]> {
    groups
        .iter()
        .position(|g| g.id == group_id)
        .map(|index| &groups[..index])
}

/// Every preceding non-empty course must be fully fulfilled
///
/// Empty courses are skipped and never block.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialCourses;

impl CourseGate for SequentialCourses {
    fn can_edit(&self, groups: &[OrderGroup], group_id: &str) -> bool {
        let Some(before) = preceding(groups, group_id) else {
            return false;
        };
        before
            .iter()
            .filter(|g| !g.items.is_empty())
            .all(|g| g.items.iter().all(|i| i.has_been_fired))
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}

/// Every preceding course must have sent lines, all of them fulfilled
///
/// Unsent lines are ignored; a course with nothing sent blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictCourses;

impl CourseGate for StrictCourses {
    fn can_edit(&self, groups: &[OrderGroup], group_id: &str) -> bool {
        let Some(before) = preceding(groups, group_id) else {
            return false;
        };
        before.iter().all(|g| {
            let mut sent = g.items.iter().filter(|i| i.is_sent).peekable();
            sent.peek().is_some() && sent.all(|i| i.has_been_fired)
        })
    }

    fn name(&self) -> &'static str {
        "strict"
    }
}

/// No gating: every existing course is editable
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenCourses;

impl CourseGate for OpenCourses {
    fn can_edit(&self, groups: &[OrderGroup], group_id: &str) -> bool {
        groups.iter().any(|g| g.id == group_id)
    }

    fn name(&self) -> &'static str {
        "open"
    }
}

/// Configured gate selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateKind {
    #[default]
    Sequential,
    Strict,
    Open,
}

impl GateKind {
    pub fn build(self) -> Box<dyn CourseGate> {
        match self {
            GateKind::Sequential => Box::new(SequentialCourses),
            GateKind::Strict => Box::new(StrictCourses),
            GateKind::Open => Box::new(OpenCourses),
        }
    }
}

impl FromStr for GateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(GateKind::Sequential),
            "strict" => Ok(GateKind::Strict),
            "open" | "none" => Ok(GateKind::Open),
            other => Err(format!("unknown course gate: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::{OrderItem, ProductInput};

    fn line(id: &str, is_sent: bool, has_been_fired: bool) -> OrderItem {
        let mut item =
            OrderItem::from_input(id.to_string(), &ProductInput::new("p", "Item", 10), true);
        item.is_sent = is_sent;
        item.has_been_fired = has_been_fired;
        item
    }

    fn group(id: &str, items: Vec<OrderItem>) -> OrderGroup {
        let mut group = OrderGroup::new(id, id);
        group.items = items;
        group
    }

    #[test]
    fn test_first_group_always_editable() {
        let groups = vec![group("g1", vec![line("a", false, false)])];
        assert!(SequentialCourses.can_edit(&groups, "g1"));
        assert!(StrictCourses.can_edit(&groups, "g1"));
        assert!(OpenCourses.can_edit(&groups, "g1"));
    }

    #[test]
    fn test_unknown_group_is_locked() {
        let groups = vec![group("g1", vec![])];
        assert!(!SequentialCourses.can_edit(&groups, "nope"));
        assert!(!StrictCourses.can_edit(&groups, "nope"));
        assert!(!OpenCourses.can_edit(&groups, "nope"));
    }

    #[test]
    fn test_sequential_gating_scenario() {
        // G1: one fulfilled, one queued-hold; G2 empty; G3 after them
        let groups = vec![
            group("g1", vec![line("a", true, true), line("b", true, false)]),
            group("g2", vec![]),
            group("g3", vec![]),
        ];
        // g2 is preceded by a non-empty, not fully fulfilled g1
        assert!(!SequentialCourses.can_edit(&groups, "g2"));
        assert!(!SequentialCourses.can_edit(&groups, "g3"));

        // Empty groups don't block
        let groups = vec![group("g1", vec![]), group("g2", vec![])];
        assert!(SequentialCourses.can_edit(&groups, "g2"));
    }

    #[test]
    fn test_sequential_unlocks_after_fulfilment() {
        let groups = vec![
            group("g1", vec![line("a", true, true), line("b", true, true)]),
            group("g2", vec![]),
            group("g3", vec![line("c", false, false)]),
        ];
        assert!(SequentialCourses.can_edit(&groups, "g2"));
        assert!(SequentialCourses.can_edit(&groups, "g3"));
    }

    #[test]
    fn test_sequential_unsent_line_blocks() {
        let groups = vec![
            group("g1", vec![line("a", true, true), line("b", false, false)]),
            group("g2", vec![]),
        ];
        assert!(!SequentialCourses.can_edit(&groups, "g2"));
    }

    #[test]
    fn test_strict_requires_sent_lines() {
        let groups = vec![group("g1", vec![]), group("g2", vec![])];
        assert!(!StrictCourses.can_edit(&groups, "g2"));

        // Unsent lines are ignored
        let groups = vec![
            group("g1", vec![line("a", true, true), line("b", false, false)]),
            group("g2", vec![]),
        ];
        assert!(StrictCourses.can_edit(&groups, "g2"));

        let groups = vec![
            group("g1", vec![line("a", true, true), line("b", true, false)]),
            group("g2", vec![]),
        ];
        assert!(!StrictCourses.can_edit(&groups, "g2"));
    }

    #[test]
    fn test_open_courses_never_lock() {
        let groups = vec![
            group("g1", vec![line("a", false, false)]),
            group("g2", vec![]),
        ];
        assert!(OpenCourses.can_edit(&groups, "g2"));
    }

    #[test]
    fn test_gate_kind_parsing() {
        assert_eq!("Sequential".parse::<GateKind>(), Ok(GateKind::Sequential));
        assert_eq!(" strict ".parse::<GateKind>(), Ok(GateKind::Strict));
        assert_eq!("none".parse::<GateKind>(), Ok(GateKind::Open));
        assert!("lenient".parse::<GateKind>().is_err());
        assert_eq!(GateKind::Strict.build().name(), "strict");
    }
}
