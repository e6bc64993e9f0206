//! Course layout - how groups come into existence
//!
//! - `Dynamic`: a group is created on the first add to its category and
//!   pruned once it becomes empty
//! - `Fixed`: the three house courses are seeded (pinned) up front and
//!   unknown categories land in the main course

use std::str::FromStr;

use shared::models::{CourseRef, HOUSE_COURSES, category};
use shared::order::OrderGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseLayout {
    #[default]
    Dynamic,
    Fixed,
}

impl CourseLayout {
    /// Groups present before the first command
    pub fn seed_groups(self) -> Vec<OrderGroup> {
        match self {
            CourseLayout::Dynamic => Vec::new(),
            CourseLayout::Fixed => HOUSE_COURSES
                .iter()
                .map(|c| OrderGroup::pinned(c.id, c.name))
                .collect(),
        }
    }

    /// Resolve a category label to its target group
    pub fn resolve(self, label: &str) -> CourseRef {
        match self {
            CourseLayout::Dynamic => category::resolve_course(label),
            CourseLayout::Fixed => category::house_course(label)
                .unwrap_or(category::MAIN)
                .into(),
        }
    }
}

impl FromStr for CourseLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dynamic" => Ok(CourseLayout::Dynamic),
            "fixed" | "seeded" => Ok(CourseLayout::Fixed),
            other => Err(format!("unknown course layout: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_layout_seeds_pinned_house_courses() {
        let groups = CourseLayout::Fixed.seed_groups();
        let ids: Vec<_> = groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, ["appetizer", "main", "dessert"]);
        assert!(groups.iter().all(|g| g.pinned && g.items.is_empty()));
        assert!(CourseLayout::Dynamic.seed_groups().is_empty());
    }

    #[test]
    fn test_fixed_layout_falls_back_to_main() {
        assert_eq!(CourseLayout::Fixed.resolve("Drinks").id, "main");
        assert_eq!(CourseLayout::Fixed.resolve("Desserts").id, "dessert");
        assert_eq!(CourseLayout::Dynamic.resolve("Drinks").id, "drinks");
    }

    #[test]
    fn test_layout_parsing() {
        assert_eq!("Fixed".parse::<CourseLayout>(), Ok(CourseLayout::Fixed));
        assert_eq!("dynamic".parse::<CourseLayout>(), Ok(CourseLayout::Dynamic));
        assert!("grid".parse::<CourseLayout>().is_err());
    }
}
