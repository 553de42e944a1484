use emergence_core::config::AppConfig;
use emergence_core::interaction::InteractionState;
use emergence_core::lifecycle;
use emergence_core::noise::NoiseField;
use emergence_core::spatial_hash::SpatialHash;
use emergence_core::system::ParticleSystem;
use emergence_core::BehaviorKind;
use proptest::prelude::*;

prop_compose! {
    fn arb_position()(
        x in -200.0f64..1500.0,
        y in -200.0f64..900.0
    ) -> (f64, f64) {
        (x, y)
    }
}

fn arb_mode() -> impl Strategy<Value = BehaviorKind> {
    prop::sample::select(BehaviorKind::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_wrap_stays_in_extent(value in -1e9f64..1e9, extent in 1.0f64..5000.0) {
        let wrapped = lifecycle::wrap(value, extent);
        prop_assert!(wrapped >= 0.0 && wrapped < extent,
            "wrap({}, {}) = {}", value, extent, wrapped);
    }

    #[test]
    fn test_clamp_speed_bound(
        vx in -1e6f64..1e6,
        vy in -1e6f64..1e6,
        max_speed in 0.1f64..50.0
    ) {
        let (cx, cy) = lifecycle::clamp_speed(vx, vy, max_speed);
        prop_assert!((cx * cx + cy * cy).sqrt() <= max_speed + 1e-9);
        // Direction is preserved.
        prop_assert!(cx * vx >= 0.0 && cy * vy >= 0.0);
    }

    #[test]
    fn test_query_is_superset(
        points in prop::collection::vec(arb_position(), 1..80),
        (qx, qy) in arb_position(),
        radius in 0.0f64..300.0,
        cell_size in 5.0f64..120.0
    ) {
        let mut sh = SpatialHash::new(cell_size);
        sh.build(&points);
        let found = sh.query(qx, qy, radius);
        for (i, &(x, y)) in points.iter().enumerate() {
            let d = ((x - qx).powi(2) + (y - qy).powi(2)).sqrt();
            if d <= radius {
                prop_assert!(found.contains(&i),
                    "point {} at distance {} missing from radius {} query", i, d, radius);
            }
        }
    }

    #[test]
    fn test_clear_and_reinsert_is_idempotent(
        points in prop::collection::vec(arb_position(), 0..60),
        (qx, qy) in arb_position()
    ) {
        let mut once = SpatialHash::new(40.0);
        once.build(&points);
        let mut twice = SpatialHash::new(40.0);
        twice.build(&points);
        twice.build(&points);

        let mut a = once.query(qx, qy, 100.0);
        let mut b = twice.query(qx, qy, 100.0);
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
        prop_assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn test_noise_range_and_continuity(
        seed in any::<u64>(),
        x in -1000.0f64..1000.0,
        y in -1000.0f64..1000.0
    ) {
        let noise = NoiseField::new(seed);
        let v = noise.sample(x, y);
        prop_assert!((-1.0..=1.0).contains(&v));
        let nearby = noise.sample(x + 1e-6, y + 1e-6);
        prop_assert!((v - nearby).abs() < 1e-3, "jump {} -> {}", v, nearby);
    }

    #[test]
    fn test_step_keeps_invariants(
        seed in any::<u64>(),
        mode in arb_mode(),
        count in 0usize..120,
        (px, py) in arb_position(),
        pressed in any::<bool>()
    ) {
        let mut config = AppConfig::default();
        config.mode = mode;
        config.particles.count = count;
        let mut system = ParticleSystem::with_seed(config, seed);
        let mut input = InteractionState::default();
        if pressed {
            system.on_pointer_down(&mut input, px, py);
        } else {
            input.pointer_move(px, py);
        }

        for _ in 0..5 {
            system.step(&input);
        }

        let (w, h) = (system.config().world.width, system.config().world.height);
        let max = system.config().motion.max_speed;
        for p in system.particles() {
            prop_assert!(p.x >= 0.0 && p.x < w && p.y >= 0.0 && p.y < h);
            prop_assert!(p.speed() <= max + 1e-9);
            prop_assert!((0.0..=1.0).contains(&p.energy));
            prop_assert!(p.display_radius.is_finite());
        }
    }
}
