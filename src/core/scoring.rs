use crate::models::ReferencePoint;

/// Calculate a match score (10-100) for a candidate against the current user
///
/// Scoring formula:
/// ```text
/// score = age_proximity (10..=50, tiered by |age - reference.age|)
///       + city_match    (50 if same city, case-insensitive, else 0)
/// ```
///
/// The score is computed once at fetch time and stored on the profile; it is
/// never supplied by the remote source.
pub fn match_score(age: u8, city: &str, reference: &ReferencePoint) -> u8 {
    age_proximity_score(age, reference.age) + city_match_score(city, &reference.city)
}

/// Age proximity component, tiered by absolute age difference
///
/// Tiers are closed on both ends: 0-2 -> 50, 3-5 -> 40, 6-10 -> 30,
/// 11-15 -> 20, 16+ -> 10.
#[inline]
fn age_proximity_score(age: u8, reference_age: u8) -> u8 {
    match (i16::from(age) - i16::from(reference_age)).abs() {
        0..=2 => 50,
        3..=5 => 40,
        6..=10 => 30,
        11..=15 => 20,
        _ => 10,
    }
}

/// City component: full bonus on a case-insensitive match, nothing otherwise
///
/// Unicode-aware: the remote source returns non-ASCII city names.
#[inline]
fn city_match_score(city: &str, reference_city: &str) -> u8 {
    if city.to_lowercase() == reference_city.to_lowercase() {
        50
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ReferencePoint {
        ReferencePoint {
            age: 28,
            city: "Mumbai".to_string(),
        }
    }

    #[test]
    fn test_age_tiers() {
        // (candidate age, expected component) around a reference of 28
        let cases = [
            (28, 50),
            (26, 50),
            (30, 50),
            (25, 40),
            (31, 40),
            (33, 40),
            (22, 30),
            (34, 30),
            (38, 30),
            (17, 20),
            (39, 20),
            (43, 20),
            (12, 10),
            (44, 10),
            (80, 10),
        ];

        for (age, expected) in cases {
            assert_eq!(
                age_proximity_score(age, 28),
                expected,
                "age {} should score {}",
                age,
                expected
            );
        }
    }

    #[test]
    fn test_tier_boundaries_are_closed() {
        // Both ends of each tier belong to that tier
        assert_eq!(age_proximity_score(28, 28), 50); // diff 0
        assert_eq!(age_proximity_score(30, 28), 50); // diff 2
        assert_eq!(age_proximity_score(31, 28), 40); // diff 3
        assert_eq!(age_proximity_score(33, 28), 40); // diff 5
        assert_eq!(age_proximity_score(34, 28), 30); // diff 6
        assert_eq!(age_proximity_score(38, 28), 30); // diff 10
        assert_eq!(age_proximity_score(39, 28), 20); // diff 11
        assert_eq!(age_proximity_score(43, 28), 20); // diff 15
        assert_eq!(age_proximity_score(44, 28), 10); // diff 16
    }

    #[test]
    fn test_city_match_case_insensitive() {
        assert_eq!(city_match_score("Mumbai", "Mumbai"), 50);
        assert_eq!(city_match_score("mumbai", "Mumbai"), 50);
        assert_eq!(city_match_score("MUMBAI", "mumbai"), 50);
        assert_eq!(city_match_score("Pune", "Mumbai"), 0);
    }

    #[test]
    fn test_city_match_non_ascii_case_insensitive() {
        assert_eq!(city_match_score("ærøskøbing", "Ærøskøbing"), 50);
        assert_eq!(city_match_score("MÜNCHEN", "münchen"), 50);
        assert_eq!(city_match_score("Århus", "Aarhus"), 0);

        let reference = ReferencePoint {
            age: 28,
            city: "Ærøskøbing".to_string(),
        };
        assert_eq!(match_score(28, "ærøskøbing", &reference), 100);
    }

    #[test]
    fn test_score_range() {
        let reference = reference();
        for age in 0..=120u8 {
            for city in ["Mumbai", "Pune", ""] {
                let score = match_score(age, city, &reference);
                assert!((10..=100).contains(&score), "score {} out of range", score);
            }
        }
    }

    #[test]
    fn test_perfect_score_requires_city_and_close_age() {
        let reference = reference();
        assert_eq!(match_score(28, "mumbai", &reference), 100);
        assert_eq!(match_score(30, "Mumbai", &reference), 100);
        // Close age alone is not enough
        assert_eq!(match_score(28, "Delhi", &reference), 50);
        // City alone is not enough
        assert_eq!(match_score(50, "Mumbai", &reference), 60);
    }

    #[test]
    fn test_worst_score() {
        let reference = reference();
        assert_eq!(match_score(60, "Delhi", &reference), 10);
    }
}
