//! Character kinematic state
//!
//! [`CharacterState`] models the on-screen character as a position, a
//! heading, and the path it has traced so far. The coordinate system
//! follows screen conventions: positive X is East, positive Y is South,
//! heading 0 is North and 90 is East.
//!
//! All transforms are pure: they take `&self` and return a new state.
//! The heading is always normalized into `[0, 360)` after a turn.

use crate::math::{approx_eq, degrees_to_radians, wrap};

/// One line segment drawn by the character while moving with the pen down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Immutable position/heading/path state of the character.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterState {
    /// Horizontal position; positive is East.
    pub x_pos: f64,
    /// Vertical position; positive is South.
    pub y_pos: f64,
    /// Heading in degrees, normalized to `[0, 360)`; 0 is North, 90 is East.
    pub direction_degrees: f64,
    /// Segments drawn so far, in draw order.
    pub path: Vec<PathSegment>,
}

impl CharacterState {
    pub fn new(x_pos: f64, y_pos: f64, direction_degrees: f64, path: Vec<PathSegment>) -> Self {
        CharacterState {
            x_pos,
            y_pos,
            direction_degrees,
            path,
        }
    }

    /// Move `distance` units along the current heading.
    ///
    /// When `drawing_enabled` is set, the returned state's path gains one
    /// segment from the old position to the new one; otherwise the path is
    /// carried forward unchanged.
    pub fn forward(&self, distance: f64, drawing_enabled: bool) -> CharacterState {
        let heading = degrees_to_radians(self.direction_degrees);
        let x_offset = heading.sin() * distance;
        let y_offset = heading.cos() * distance;

        let x_pos = self.x_pos + x_offset;
        // Y grows downward (South), so moving North subtracts.
        let y_pos = self.y_pos - y_offset;

        let mut path = self.path.clone();
        if drawing_enabled {
            path.push(PathSegment {
                x1: self.x_pos,
                y1: self.y_pos,
                x2: x_pos,
                y2: y_pos,
            });
        }

        CharacterState {
            x_pos,
            y_pos,
            direction_degrees: self.direction_degrees,
            path,
        }
    }

    /// Turn counterclockwise by `amount_degrees`; position and path unchanged.
    pub fn turn_left(&self, amount_degrees: f64) -> CharacterState {
        CharacterState {
            x_pos: self.x_pos,
            y_pos: self.y_pos,
            direction_degrees: wrap(0.0, 360.0, self.direction_degrees - amount_degrees),
            path: self.path.clone(),
        }
    }

    /// Turn clockwise by `amount_degrees`; position and path unchanged.
    pub fn turn_right(&self, amount_degrees: f64) -> CharacterState {
        CharacterState {
            x_pos: self.x_pos,
            y_pos: self.y_pos,
            direction_degrees: wrap(0.0, 360.0, self.direction_degrees + amount_degrees),
            path: self.path.clone(),
        }
    }

    /// Compare this state's path to `other` segment by segment, with
    /// per-coordinate tolerance `epsilon`. Lengths must match exactly.
    pub fn path_equals(&self, other: &[PathSegment], epsilon: f64) -> bool {
        if self.path.len() != other.len() {
            return false;
        }
        self.path.iter().zip(other.iter()).all(|(a, b)| {
            approx_eq(a.x1, b.x1, epsilon)
                && approx_eq(a.y1, b.y1, epsilon)
                && approx_eq(a.x2, b.x2, epsilon)
                && approx_eq(a.y2, b.y2, epsilon)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.0000001;

    #[test]
    fn test_forward_north() {
        let state = CharacterState::new(0.0, 0.0, 0.0, vec![]);
        let moved = state.forward(100.0, true);

        assert!(approx_eq(moved.x_pos, 0.0, EPSILON));
        assert!(approx_eq(moved.y_pos, -100.0, EPSILON));
        assert_eq!(moved.direction_degrees, 0.0);
        assert!(moved.path_equals(
            &[PathSegment {
                x1: 0.0,
                y1: 0.0,
                x2: 0.0,
                y2: -100.0,
            }],
            EPSILON
        ));
        // The starting state is untouched
        assert_eq!(state.path.len(), 0);
    }

    #[test]
    fn test_forward_east() {
        let state = CharacterState::new(0.0, 0.0, 90.0, vec![]);
        let moved = state.forward(50.0, true);

        assert!(approx_eq(moved.x_pos, 50.0, EPSILON));
        assert!(approx_eq(moved.y_pos, 0.0, EPSILON));
    }

    #[test]
    fn test_forward_without_drawing_keeps_path() {
        let path = vec![PathSegment {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
        }];
        let state = CharacterState::new(1.0, 1.0, 180.0, path.clone());
        let moved = state.forward(10.0, false);

        assert!(approx_eq(moved.y_pos, 11.0, EPSILON));
        assert!(moved.path_equals(&path, EPSILON));
    }

    #[test]
    fn test_turn_left_wraps() {
        let state = CharacterState::new(0.0, 0.0, 90.0, vec![]);
        assert_eq!(state.turn_left(180.0).direction_degrees, 270.0);
        assert_eq!(state.turn_left(90.0).direction_degrees, 0.0);
    }

    #[test]
    fn test_turn_right_wraps() {
        let state = CharacterState::new(0.0, 0.0, 270.0, vec![]);
        assert_eq!(state.turn_right(180.0).direction_degrees, 90.0);
        assert_eq!(state.turn_right(90.0).direction_degrees, 0.0);
    }

    #[test]
    fn test_turn_does_not_move_or_draw() {
        let state = CharacterState::new(3.0, 4.0, 0.0, vec![]);
        let turned = state.turn_right(45.0);

        assert_eq!(turned.x_pos, 3.0);
        assert_eq!(turned.y_pos, 4.0);
        assert_eq!(turned.path.len(), 0);
    }

    #[test]
    fn test_path_equals_length_mismatch() {
        let state = CharacterState::new(0.0, 0.0, 0.0, vec![]);
        assert!(!state.path_equals(
            &[PathSegment {
                x1: 0.0,
                y1: 0.0,
                x2: 0.0,
                y2: 0.0,
            }],
            EPSILON
        ));
    }
}
