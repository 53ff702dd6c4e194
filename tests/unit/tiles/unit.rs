//! Tests for unit identity

#[cfg(test)]
mod tests {
    use edgetile::Unit;
    use std::collections::HashSet;

    // Tests units compare and hash by name
    // Verified by comparing allocation identity instead of names
    #[test]
    fn test_units_equal_by_name() {
        let a = Unit::new("water");
        let b = Unit::new("water");
        let c = Unit::new("sand");

        assert_eq!(a, b);
        assert_ne!(a, c);
        let set: HashSet<Unit> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    // Tests display prints the bare name
    // Verified by deriving the debug output for display
    #[test]
    fn test_unit_display() {
        let unit = Unit::new("lava");
        assert_eq!(unit.to_string(), "lava");
        assert_eq!(unit.name(), "lava");
    }
}
