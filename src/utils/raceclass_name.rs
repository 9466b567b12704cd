//! Race class naming and presentation ordering
//!
//! Race class names are short codes derived from ageclass labels, e.g.
//! `"G 12 år"` becomes `"G12"`. Merged classes carry names such as `"G15/16"`.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::Raceclass;

/// Substring replacements applied after spaces are stripped, in order
const NAME_REPLACEMENTS: &[(&str, &str)] = &[
    ("Menn", "M"),
    ("Kvinner", "K"),
    ("junior", "J"),
    ("Junior", "J"),
    ("Felles", "F"),
    ("år", ""),
];

/// `<prefix><digits>[/<digits>]`
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<prefix>\D*)(?P<number>\d+)?(?:/(?P<upper>\d+))?")
        .expect("race class name pattern is valid")
});

/// Derive the canonical race class name for an ageclass label
pub fn derive_name(ageclass: &str) -> String {
    let compact: String = ageclass.chars().filter(|c| *c != ' ').collect();
    NAME_REPLACEMENTS
        .iter()
        .fold(compact, |name, (from, to)| name.replace(from, to))
}

/// Sort key extracted from a race class name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NameSortKey {
    /// Value of the first digit run; 0 when the name has none, saturating
    /// at `u64::MAX` for runs too long to represent
    pub number: u64,
    /// Leading non-digit characters
    pub prefix: String,
}

impl NameSortKey {
    pub fn parse(name: &str) -> Self {
        let Some(caps) = NAME_PATTERN.captures(name) else {
            return Self { number: 0, prefix: name.to_string() };
        };

        let prefix = caps
            .name("prefix")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let number = caps
            .name("number")
            .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
            .unwrap_or(0);

        Self { number, prefix }
    }
}

/// Presentation comparator: descending by number, then by prefix
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NameSortKey::parse(b).cmp(&NameSortKey::parse(a))
}

/// Stable sort of race classes into presentation order
pub fn sort_for_presentation(raceclasses: &mut [Raceclass]) {
    raceclasses.sort_by(|a, b| compare_names(&a.name, &b.name));
}
