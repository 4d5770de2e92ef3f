//! Sensor-to-display coordinate mapping.

use crate::frame::{Displacement, Rotation};

/// Rotate a sensor-space displacement into display space.
///
/// The camera reports how far the display is rotated clockwise relative
/// to the sensor; applying that rotation to the matched vector makes the
/// reported motion agree with what the user sees on screen.
pub fn rotate_displacement(d: Displacement, rotation: Rotation) -> Displacement {
    match rotation {
        Rotation::Deg0 => d,
        Rotation::Deg90 => Displacement::new(d.dy, -d.dx),
        Rotation::Deg180 => Displacement::new(-d.dx, -d.dy),
        Rotation::Deg270 => Displacement::new(-d.dy, d.dx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROTATIONS: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// The 8 compound unit directions.
    const DIRECTIONS: [(i32, i32); 8] = [
        (1, 0),
        (1, 1),
        (0, 1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
        (0, -1),
        (1, -1),
    ];

    #[test]
    fn test_mapping_per_angle() {
        let d = Displacement::new(3, -7);
        assert_eq!(rotate_displacement(d, Rotation::Deg0), Displacement::new(3, -7));
        assert_eq!(rotate_displacement(d, Rotation::Deg90), Displacement::new(-7, -3));
        assert_eq!(rotate_displacement(d, Rotation::Deg180), Displacement::new(-3, 7));
        assert_eq!(rotate_displacement(d, Rotation::Deg270), Displacement::new(7, 3));
    }

    #[test]
    fn test_round_trip_restores_vector() {
        for rotation in ALL_ROTATIONS {
            for (dx, dy) in DIRECTIONS {
                let d = Displacement::new(dx, dy);
                let forward = rotate_displacement(d, rotation);
                let back = rotate_displacement(forward, rotation.inverse());
                assert_eq!(back, d, "round trip failed for {rotation:?}");
            }
        }
    }

    #[test]
    fn test_bijection_on_compound_directions() {
        for rotation in ALL_ROTATIONS {
            let mut images: Vec<Displacement> = DIRECTIONS
                .iter()
                .map(|&(dx, dy)| rotate_displacement(Displacement::new(dx, dy), rotation))
                .collect();
            images.sort_by_key(|d| (d.dx, d.dy));
            images.dedup();
            assert_eq!(images.len(), DIRECTIONS.len(), "not a bijection for {rotation:?}");
            for image in &images {
                assert!(
                    DIRECTIONS.contains(&(image.dx, image.dy)),
                    "image {image:?} left the direction set for {rotation:?}"
                );
            }
        }
    }

    #[test]
    fn test_quarter_turns_compose_to_half_turn() {
        let d = Displacement::new(2, 5);
        let twice = rotate_displacement(rotate_displacement(d, Rotation::Deg90), Rotation::Deg90);
        assert_eq!(twice, rotate_displacement(d, Rotation::Deg180));
    }
}
