//! Unit tests for tk-core primitives.

#[cfg(test)]
mod geo {
    use crate::Coord;

    #[test]
    fn zero_distance() {
        let p = Coord::new(30.694, -88.043);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn symmetric() {
        let a = Coord::new(30.694, -88.043);
        let b = Coord::new(30.228, -87.700);
        assert!((a.distance_km(b) - b.distance_km(a)).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = Coord::new(30.0, -88.0);
        let b = Coord::new(31.0, -88.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn triangle_inequality() {
        let a = Coord::new(30.0, -88.0);
        let b = Coord::new(30.5, -87.5);
        let c = Coord::new(31.0, -88.2);
        let direct = a.distance_km(c);
        let via_b = a.distance_km(b) + b.distance_km(c);
        assert!(direct <= via_b + 1e-6);
    }

    #[test]
    fn lerp_endpoints_exact() {
        let a = Coord::new(30.694, -88.043);
        let b = Coord::new(30.228, -87.700);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint() {
        let a = Coord::new(30.0, -88.0);
        let b = Coord::new(31.0, -87.0);
        let mid = a.lerp(b, 0.5);
        assert!((mid.lat - 30.5).abs() < 1e-9);
        assert!((mid.lon - -87.5).abs() < 1e-9);
    }
}

#[cfg(test)]
mod transport {
    use crate::{CoreError, TravelMode};

    #[test]
    fn speed_table() {
        assert_eq!(TravelMode::Driving.speed_kmh(), 40.0);
        assert_eq!(TravelMode::Cycling.speed_kmh(), 15.0);
        assert_eq!(TravelMode::Walking.speed_kmh(), 5.0);
    }

    #[test]
    fn minutes_for_km() {
        // 5 km at walking pace (5 km/h) is exactly one hour.
        assert!((TravelMode::Walking.minutes_for_km(5.0) - 60.0).abs() < 1e-9);
        // 40 km driving at 40 km/h is also one hour.
        assert!((TravelMode::Driving.minutes_for_km(40.0) - 60.0).abs() < 1e-9);
        assert_eq!(TravelMode::Cycling.minutes_for_km(0.0), 0.0);
    }

    #[test]
    fn token_round_trip() {
        for mode in [TravelMode::Driving, TravelMode::Cycling, TravelMode::Walking] {
            assert_eq!(TravelMode::from_token(mode.as_str()).unwrap(), mode);
        }
    }

    #[test]
    fn token_trims_whitespace() {
        assert_eq!(TravelMode::from_token(" walking ").unwrap(), TravelMode::Walking);
    }

    #[test]
    fn unknown_token_rejected() {
        let err = TravelMode::from_token("teleport").unwrap_err();
        assert!(matches!(err, CoreError::InvalidMode(ref t) if t == "teleport"));
        // No silent default: capitalized variants are rejected too.
        assert!(TravelMode::from_token("Driving").is_err());
        assert!(TravelMode::from_token("").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(TravelMode::Walking.to_string(), "walking");
        assert_eq!("cycling".parse::<TravelMode>().unwrap(), TravelMode::Cycling);
    }
}

#[cfg(test)]
mod place {
    use crate::{Coord, Place};

    #[test]
    fn construction() {
        let p = Place::new("cathedral", "Cathedral Basilica", Coord::new(30.689, -88.044));
        assert_eq!(p.id, "cathedral");
        assert_eq!(p.category, None);
    }

    #[test]
    fn with_category() {
        let p = Place::new("fort", "Fort Condé", Coord::new(30.687, -88.039))
            .with_category("historic site");
        assert_eq!(p.category.as_deref(), Some("historic site"));
    }
}
