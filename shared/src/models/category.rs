//! Category Model
//!
//! Menu category labels resolve to course groups. The three house courses
//! have fixed ids; any other label derives its id from a slug.

use serde::{Deserialize, Serialize};

/// Fixed course: appetizers
pub const APPETIZER: CourseCategory = CourseCategory::fixed("appetizer", "Appetizer");
/// Fixed course: mains
pub const MAIN: CourseCategory = CourseCategory::fixed("main", "Main Course");
/// Fixed course: desserts
pub const DESSERT: CourseCategory = CourseCategory::fixed("dessert", "Desserts");

/// House courses in service order
pub const HOUSE_COURSES: [CourseCategory; 3] = [APPETIZER, MAIN, DESSERT];

/// Fixed course id/name pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseCategory {
    pub id: &'static str,
    pub name: &'static str,
}

impl CourseCategory {
    const fn fixed(id: &'static str, name: &'static str) -> Self {
        Self { id, name }
    }
}

/// Resolved group reference for a category label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseRef {
    pub id: String,
    pub name: String,
    /// True when the label matched one of the house courses
    pub is_house_course: bool,
}

impl From<CourseCategory> for CourseRef {
    fn from(course: CourseCategory) -> Self {
        Self {
            id: course.id.to_string(),
            name: course.name.to_string(),
            is_house_course: true,
        }
    }
}

/// Match a label against the house courses (case-insensitive substring)
pub fn house_course(label: &str) -> Option<CourseCategory> {
    let lower = label.to_lowercase();
    if lower.contains("appetizer") {
        Some(APPETIZER)
    } else if lower.contains("main") {
        Some(MAIN)
    } else if lower.contains("dessert") {
        Some(DESSERT)
    } else {
        None
    }
}

/// Resolve a category label to a course group reference
///
/// Unknown labels get a slug id and a capitalized display name. Labels
/// without any alphanumeric character fall back to the main course.
pub fn resolve_course(label: &str) -> CourseRef {
    if let Some(course) = house_course(label) {
        return course.into();
    }
    let id = slugify(label);
    if id.is_empty() {
        return MAIN.into();
    }
    CourseRef {
        id,
        name: capitalize(label.trim()),
        is_house_course: false,
    }
}

/// Lowercased alphanumerics (any script), other runs collapsed to a single `-`
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_dash = false;
    for ch in label.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
