//! Fixed instructional personas keyed by course category.

use lcommon::CourseCategory;

/// Total mapping from category to the persona clause. Every category has a
/// fixed role; [`CourseCategory::Other`] carries the generic tutor.
pub fn persona(category: CourseCategory) -> &'static str {
    match category {
        CourseCategory::Math => {
            "You are a Mathematics Professor. USE LaTeX FORMAT $$...$$ for complex formulas."
        }
        CourseCategory::Programming => {
            "You are a Senior Developer Mentor. \
             1. For theory questions, offer choices with {{Option A|Option B}}. \
             2. When you ask the student to write code, end with {{CODE_REQUEST}}."
        }
        CourseCategory::Letters => {
            "You are a Literature Professor. Quote passages with > at line start."
        }
        CourseCategory::Other => "You are an expert tutor.",
    }
}
