//! Tests for the session facade over plane and rules

#[cfg(test)]
mod tests {
    use tileplane::Session;
    use tileplane::algorithm::propagation::Propagation;
    use tileplane::algorithm::rules::Requirement;
    use tileplane::spatial::{Direction, Position};

    fn at(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    // Tests the full color, rule, propagate, query cycle
    #[test]
    fn test_end_to_end_scenario() {
        let mut session = Session::new();
        session.color(at(0, 0), "red", 1);
        session.color(at(1, 0), "red", 1);
        session.add_rule(vec![Requirement::new("red", 1)], "blue");

        let histogram = session.neighbor_histogram(at(0, -1));
        assert_eq!(histogram.count("red"), 2);

        let outcome = session.propagate(at(0, -1));
        assert!(matches!(outcome, Propagation::Created { .. }));
        assert_eq!(session.state(at(0, -1)), Some(("blue", 1)));
        assert_eq!(session.rules().first().map(|rule| rule.hits()), Some(1));

        assert_eq!(session.block_intensity(at(0, 0), false), 3);
        assert_eq!(session.block_intensity(at(0, 0), true), 2);
        assert_eq!(session.shortest_path_length(at(0, -1), at(1, 0)), Some(1));
        assert_eq!(
            session
                .walk_path(at(0, 0), &[Direction::East, Direction::SouthWest])
                .map(|path| path.len()),
            Some(3)
        );
    }

    // Tests querying a rule does not count a hit
    #[test]
    fn test_first_applicable_rule_is_read_only() {
        let mut session = Session::new();
        session.color(at(0, 0), "red", 1);
        session.add_rule(vec![Requirement::new("red", 1)], "blue");

        let histogram = session.neighbor_histogram(at(1, 0));
        assert_eq!(
            session.first_applicable_rule(&histogram).map(|rule| rule.result()),
            Some("blue")
        );
        assert_eq!(session.rules().first().map(|rule| rule.hits()), Some(0));
    }

    // Tests switching off empties the position and its links
    #[test]
    fn test_switch_off() {
        let mut session = Session::new();
        session.color(at(0, 0), "red", 1);
        session.color(at(0, 1), "red", 1);

        assert!(session.switch_off(at(0, 0)).is_some());
        assert!(session.switch_off(at(0, 0)).is_none());
        assert_eq!(session.state(at(0, 0)), None);
        assert_eq!(session.block_intensity(at(0, 1), false), 1);
        assert!(session.plane().check_consistency().is_ok());
    }

    // Tests reordering through the session moves unused rules forward
    #[test]
    fn test_reorder_rules() {
        let mut session = Session::new();
        session.color(at(0, 0), "red", 1);
        session.add_rule(Vec::new(), "first");
        session.add_rule(Vec::new(), "second");

        session.propagate(at(0, 0));
        session.reorder_rules();

        let order: Vec<&str> = session.rules().iter().map(|rule| rule.result()).collect();
        assert_eq!(order, vec!["second", "first"]);
    }

    // Tests block propagation reports through the session
    #[test]
    fn test_propagate_block() {
        let mut session = Session::new();
        session.color(at(0, 0), "red", 1);
        session.color(at(1, 1), "red", 1);
        session.add_rule(vec![Requirement::new("red", 1)], "blue");

        let summary = session.propagate_block(at(1, 1));

        assert_eq!(summary.tiles_updated, 2);
        assert_eq!(session.state(at(0, 0)), Some(("blue", 1)));
        assert_eq!(session.state(at(1, 1)), Some(("blue", 1)));
    }
}
