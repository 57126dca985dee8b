//! Property tests for numeric sanitizing and config overlays.

use careerlens_core::sanitize::{finite_or_zero, round_to};
use careerlens_core::CareerConfig;
use proptest::prelude::*;

proptest! {
    #[test]
    fn sanitized_values_are_always_finite(bits in any::<u64>(), places in 0i32..6) {
        let value = f64::from_bits(bits);
        prop_assert!(finite_or_zero(value).is_finite());
        prop_assert!(round_to(value, places).is_finite());
    }

    #[test]
    fn rounding_stays_within_half_a_unit(value in -1.0e9f64..1.0e9, places in 0i32..4) {
        let rounded = round_to(value, places);
        let unit = 10f64.powi(-places);
        prop_assert!((rounded - value).abs() <= unit / 2.0 + 1e-6);
    }

    #[test]
    fn numeric_ttl_overrides_round_trip(ttl in 1u64..1_000_000) {
        let mut config = CareerConfig::default();
        let value = ttl.to_string();
        config
            .apply_overrides_from(|key| (key == "CAREERLENS_CACHE_TTL_SECS").then(|| value.clone()))
            .unwrap();
        prop_assert_eq!(config.cache.ttl_secs, ttl);
        prop_assert!(config.validate().is_ok());
    }
}
