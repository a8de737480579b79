//! Rendering and naming helpers for dependency cycles.

/// Format a cycle as "a -> b -> c -> a"
///
/// The witness path does not repeat its first element, so the loop is
/// closed here for display.
pub fn format_cycle(cycle: &[String]) -> String {
    match cycle.first() {
        None => "no cycle".to_string(),
        Some(first) => {
            let mut closed: Vec<&str> = cycle.iter().map(String::as_str).collect();
            closed.push(first);
            closed.join(" -> ")
        },
    }
}

/// Check if a string is usable as a service identifier
///
/// Identifiers must be non-empty and free of whitespace.
pub fn is_valid_service_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(char::is_whitespace)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn formatted_cycle_is_closed(cycle in prop::collection::vec("[a-z]{1,6}", 1..8)) {
            let rendered = format_cycle(&cycle);
            let parts: Vec<&str> = rendered.split(" -> ").collect();

            prop_assert_eq!(parts.len(), cycle.len() + 1);
            prop_assert_eq!(parts.first(), parts.last());
            prop_assert_eq!(parts[0], cycle[0].as_str());
        }
    }
}
