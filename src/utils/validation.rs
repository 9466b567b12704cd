//! Input validation utilities

use std::collections::HashSet;

use crate::constants::{MAX_AGECLASS_LENGTH, MAX_EVENT_NAME_LENGTH, MAX_RACECLASS_NAME_LENGTH};

/// Validate an event name
pub fn validate_event_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Event name cannot be empty");
    }
    if trimmed.chars().count() > MAX_EVENT_NAME_LENGTH {
        return Err("Event name is too long");
    }
    Ok(())
}

/// Validate an ageclass label
pub fn validate_ageclass(ageclass: &str) -> Result<(), &'static str> {
    let trimmed = ageclass.trim();
    if trimmed.is_empty() {
        return Err("Ageclass cannot be empty");
    }
    if trimmed.chars().count() > MAX_AGECLASS_LENGTH {
        return Err("Ageclass is too long");
    }
    Ok(())
}

/// Validate a race class name
pub fn validate_raceclass_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Race class name cannot be empty");
    }
    if name.chars().count() > MAX_RACECLASS_NAME_LENGTH {
        return Err("Race class name is too long");
    }
    Ok(())
}

/// Validate the ageclass set of a race class
pub fn validate_ageclasses(ageclasses: &[String]) -> Result<(), &'static str> {
    if ageclasses.is_empty() {
        return Err("A race class must contain at least one ageclass");
    }
    let mut seen = HashSet::new();
    for ageclass in ageclasses {
        validate_ageclass(ageclass)?;
        if !seen.insert(ageclass.as_str()) {
            return Err("Duplicate ageclass in race class");
        }
    }
    Ok(())
}

/// Validate an optional group or order value
pub fn validate_position(value: Option<i32>) -> Result<(), &'static str> {
    match value {
        Some(v) if v < 1 => Err("Group and order must be positive"),
        _ => Ok(()),
    }
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}
