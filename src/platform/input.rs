//! Keyboard mapping
//!
//! Accepts both the standard `KeyboardEvent.key` names and the legacy
//! ones older browsers report.

use crate::sim::Direction;

/// Map a `KeyboardEvent.key` value to a movement direction
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "Up" => Some(Direction::Up),
        "ArrowDown" | "Down" => Some(Direction::Down),
        "ArrowLeft" | "Left" => Some(Direction::Left),
        "ArrowRight" | "Right" => Some(Direction::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(direction_for_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(direction_for_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(direction_for_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(direction_for_key("ArrowRight"), Some(Direction::Right));
    }

    #[test]
    fn test_legacy_names() {
        assert_eq!(direction_for_key("Left"), Some(Direction::Left));
        assert_eq!(direction_for_key("Right"), Some(Direction::Right));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(direction_for_key(" "), None);
        assert_eq!(direction_for_key("w"), None);
        assert_eq!(direction_for_key("arrowup"), None);
    }
}
