/// Asserts every particle's speed is within the configured maximum.
#[macro_export]
macro_rules! assert_speed_bounded {
    ($system:expr) => {
        let max = $system.config().motion.max_speed;
        for p in $system.particles() {
            assert!(
                p.speed() <= max + 1e-9,
                "Particle {} speed {} exceeds max_speed {}",
                p.id,
                p.speed(),
                max
            );
        }
    };
}

/// Asserts every particle lies inside `[0, width) x [0, height)`.
#[macro_export]
macro_rules! assert_in_field {
    ($system:expr) => {
        let width = $system.config().world.width;
        let height = $system.config().world.height;
        for p in $system.particles() {
            assert!(
                p.x >= 0.0 && p.x < width && p.y >= 0.0 && p.y < height,
                "Particle {} at ({}, {}) is outside {}x{}",
                p.id,
                p.x,
                p.y,
                width,
                height
            );
        }
    };
}

/// Asserts position and velocity of every particle are finite.
#[macro_export]
macro_rules! assert_all_finite {
    ($system:expr) => {
        for p in $system.particles() {
            assert!(
                p.x.is_finite() && p.y.is_finite() && p.vx.is_finite() && p.vy.is_finite(),
                "Particle {} has non-finite state {:?}",
                p.id,
                p
            );
        }
    };
}

/// Asserts the population count matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($system:expr, $count:expr) => {
        assert_eq!($system.len(), $count, "Population count mismatch");
    };
}
