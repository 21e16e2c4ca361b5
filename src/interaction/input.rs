//! Keyboard sources for ship movement: arrow keys and WASD, polled each frame.
use bevy::prelude::*;

/// (arrow key, WASD key, unit direction)
pub const MOVEMENT_BINDINGS: [(KeyCode, KeyCode, Vec2); 4] = [
    (KeyCode::ArrowUp, KeyCode::KeyW, Vec2::Y),
    (KeyCode::ArrowLeft, KeyCode::KeyA, Vec2::NEG_X),
    (KeyCode::ArrowDown, KeyCode::KeyS, Vec2::NEG_Y),
    (KeyCode::ArrowRight, KeyCode::KeyD, Vec2::X),
];

/// Unit-length direction from held keys, or zero. Both sources for the same
/// direction count once; opposite directions cancel.
pub fn movement_direction(keys: &ButtonInput<KeyCode>) -> Vec2 {
    MOVEMENT_BINDINGS
        .iter()
        .filter(|(arrow, wasd, _)| keys.pressed(*arrow) || keys.pressed(*wasd))
        .map(|(_, _, dir)| *dir)
        .sum::<Vec2>()
        .normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(codes: &[KeyCode]) -> ButtonInput<KeyCode> {
        let mut input = ButtonInput::<KeyCode>::default();
        for c in codes {
            input.press(*c);
        }
        input
    }

    #[test]
    fn arrows_and_wasd_are_equivalent() {
        for (arrow, wasd, dir) in MOVEMENT_BINDINGS {
            assert_eq!(movement_direction(&held(&[arrow])), dir);
            assert_eq!(movement_direction(&held(&[wasd])), dir);
        }
    }

    #[test]
    fn no_keys_no_motion() {
        assert_eq!(movement_direction(&held(&[])), Vec2::ZERO);
    }

    #[test]
    fn same_direction_from_both_sources_counts_once() {
        assert_eq!(
            movement_direction(&held(&[KeyCode::ArrowLeft, KeyCode::KeyA])),
            Vec2::NEG_X
        );
    }

    #[test]
    fn opposites_cancel() {
        assert_eq!(
            movement_direction(&held(&[KeyCode::KeyA, KeyCode::ArrowRight])),
            Vec2::ZERO
        );
    }

    #[test]
    fn diagonal_is_normalized() {
        let d = movement_direction(&held(&[KeyCode::KeyW, KeyCode::KeyD]));
        assert!((d.length() - 1.0).abs() < 1e-6);
        assert!(d.x > 0.0 && d.y > 0.0);
    }
}
