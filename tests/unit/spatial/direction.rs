//! Tests for compass directions, direction codes and lattice steps

#[cfg(test)]
mod tests {
    use tileplane::PlaneError;
    use tileplane::spatial::direction::{Direction, Position, parse_directions};

    // Tests opposite is four steps around the cycle and an involution
    // Verified by using a three step offset in opposite
    #[test]
    fn test_opposite_pairs() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::NorthWest.opposite(), Direction::SouthEast);

        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    // Tests the offset table orientation: north grows y, east grows x
    // Verified by swapping the North and South offsets
    #[test]
    fn test_step_offsets() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::North), Some(Position::new(0, 1)));
        assert_eq!(origin.step(Direction::NorthEast), Some(Position::new(1, 1)));
        assert_eq!(origin.step(Direction::East), Some(Position::new(1, 0)));
        assert_eq!(origin.step(Direction::SouthEast), Some(Position::new(1, -1)));
        assert_eq!(origin.step(Direction::South), Some(Position::new(0, -1)));
        assert_eq!(origin.step(Direction::SouthWest), Some(Position::new(-1, -1)));
        assert_eq!(origin.step(Direction::West), Some(Position::new(-1, 0)));
        assert_eq!(origin.step(Direction::NorthWest), Some(Position::new(-1, 1)));
    }

    // Tests stepping forth and back returns to the start
    #[test]
    fn test_step_then_opposite_returns() {
        let start = Position::new(-7, 12);
        for direction in Direction::ALL {
            let back = start
                .step(direction)
                .and_then(|next| next.step(direction.opposite()));
            assert_eq!(back, Some(start));
        }
    }

    // Tests steps off the i32 lattice are refused instead of wrapping
    // Verified by using wrapping_add in step
    #[test]
    fn test_step_at_lattice_edge() {
        let east_edge = Position::new(i32::MAX, 0);
        assert_eq!(east_edge.step(Direction::East), None);
        assert_eq!(east_edge.step(Direction::NorthEast), None);
        assert_eq!(
            east_edge.step(Direction::West),
            Some(Position::new(i32::MAX - 1, 0))
        );

        let corner = Position::new(i32::MIN, i32::MIN);
        assert_eq!(corner.step(Direction::SouthWest), None);
        assert_eq!(corner.step(Direction::South), None);
        assert_eq!(
            corner.step(Direction::NorthEast),
            Some(Position::new(i32::MIN + 1, i32::MIN + 1))
        );
    }

    // Tests edge positions only list neighbors that exist on the lattice
    #[test]
    fn test_neighbors_at_lattice_edge() {
        let ring: Vec<Direction> = Position::new(i32::MAX, i32::MIN)
            .neighbors()
            .map(|(direction, _)| direction)
            .collect();
        assert_eq!(
            ring,
            vec![Direction::North, Direction::West, Direction::NorthWest]
        );
    }

    // Tests neighbors yields eight distinct positions in cyclic order
    #[test]
    fn test_neighbors_cover_ring() {
        let ring: Vec<(Direction, Position)> = Position::new(2, 2).neighbors().collect();
        assert_eq!(ring.len(), Direction::COUNT);
        assert_eq!(ring.first(), Some(&(Direction::North, Position::new(2, 3))));
        assert_eq!(ring.last(), Some(&(Direction::NorthWest, Position::new(1, 3))));
        assert!(ring.iter().all(|(_, position)| *position != Position::new(2, 2)));
    }

    // Tests cycle indices match slot order and wrap
    #[test]
    fn test_index_round_trip() {
        for (index, direction) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(direction.index(), index);
            assert_eq!(Direction::from_index(index), direction);
            assert_eq!(Direction::from_index(index + Direction::COUNT), direction);
        }
    }

    // Tests every code in the table parses back to its direction
    // Verified by mapping "SO" to South
    #[test]
    fn test_codes_parse() {
        let expected = [
            ("NN", Direction::North),
            ("NE", Direction::NorthEast),
            ("EE", Direction::East),
            ("SE", Direction::SouthEast),
            ("SS", Direction::South),
            ("SO", Direction::SouthWest),
            ("OO", Direction::West),
            ("NO", Direction::NorthWest),
        ];
        for (code, direction) in expected {
            assert_eq!(code.parse::<Direction>().ok(), Some(direction));
            assert_eq!(direction.code(), code);
            assert_eq!(direction.to_string(), code);
        }
    }

    // Tests unknown codes are rejected rather than defaulted
    // Verified by falling back to North on unknown codes
    #[test]
    fn test_unknown_code_is_error() {
        for code in ["XX", "nn", "N", "SW", ""] {
            match code.parse::<Direction>() {
                Err(PlaneError::InvalidDirection { code: rejected }) => assert_eq!(rejected, code),
                other => unreachable!("Expected InvalidDirection for {code:?}, got {other:?}"),
            }
        }
    }

    // Tests comma-separated path tokens keep order and reject any bad code
    #[test]
    fn test_parse_directions() {
        let parsed = parse_directions("NN,EE,SO").ok();
        assert_eq!(
            parsed,
            Some(vec![Direction::North, Direction::East, Direction::SouthWest])
        );

        assert!(parse_directions("NN,,EE").is_err());
        assert!(parse_directions("NN,ZZ").is_err());
        assert!(parse_directions("EE,").is_err());
    }

    // Tests positions print as "x y"
    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, -4).to_string(), "3 -4");
    }
}
