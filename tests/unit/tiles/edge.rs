//! Tests for directional edge matching

#[cfg(test)]
mod tests {
    use edgetile::Edge;

    // Tests an edge without a match list matches only itself
    // Verified by matching everything when the list is empty
    #[test]
    fn test_default_edge_matches_itself_only() {
        let wall = Edge::new("wall");
        let floor = Edge::new("floor");

        assert!(wall.matches(&Edge::new("wall")));
        assert!(!wall.matches(&floor));
    }

    // Tests an explicit match list does not imply self-matching
    // Verified by adding the edge's own name to every list
    #[test]
    fn test_explicit_list_excludes_self() {
        let door = Edge::with_matches("door", ["hallway"]);
        let hallway = Edge::new("hallway");

        assert!(door.matches(&hallway));
        assert!(!door.matches(&Edge::with_matches("door", ["hallway"])));
    }

    // Tests matching is directional: declarations on one edge say nothing about the other
    // Verified by making matches symmetric
    #[test]
    fn test_matching_is_asymmetric() {
        let door = Edge::with_matches("door", ["hallway", "door"]);
        let hallway = Edge::new("hallway");

        assert!(door.matches(&hallway));
        assert!(!hallway.matches(&door));
        assert!(door.matches(&door));
    }

    // Tests an empty explicit list falls back to self-matching
    // Verified by treating an empty list as matching nothing
    #[test]
    fn test_empty_list_falls_back_to_self() {
        let river = Edge::with_matches("river", []);
        assert!(river.matches(&Edge::new("river")));
        assert_eq!(river.accepted_names().count(), 0);
    }

    // Tests equality ignores the match list and uses the name
    // Verified by including the match list in equality
    #[test]
    fn test_edges_equal_by_name() {
        let a = Edge::with_matches("gate", ["road"]);
        let b = Edge::new("gate");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "gate");
        assert_eq!(a.accepted_names().collect::<Vec<_>>(), vec!["road"]);
    }
}
