mod common;

use common::SystemBuilder;
use emergence_core::config::{AppConfig, ConfigPatch, PARTICLE_HARD_CAP};
use emergence_lib::model::data::BehaviorKind;
use emergence_lib::model::interaction::InteractionState;

#[test]
fn test_patch_clamps_instead_of_failing() {
    let mut system = SystemBuilder::new().with_random_particles(20).build();
    let adjustments = system.set_config(&ConfigPatch {
        friction: Some(0.0),
        max_speed: Some(-4.0),
        separation_radius: Some(f64::NAN),
        attraction_strength: Some(f64::INFINITY),
        ..ConfigPatch::default()
    });

    assert_eq!(adjustments.len(), 4, "{adjustments:?}");
    let config = system.config();
    assert!(config.motion.friction > 0.0 && config.motion.friction <= 1.0);
    assert!(config.motion.max_speed > 0.0);
    assert_eq!(
        config.flocking.separation_radius,
        AppConfig::default().flocking.separation_radius
    );
    assert!(config.interaction.attraction_strength.is_finite());
    assert!(config.validate().is_ok());

    system.step(&InteractionState::default());
    assert_all_finite!(system);
}

#[test]
fn test_negative_particle_count_empties_field() {
    let mut system = SystemBuilder::new().with_random_particles(20).build();
    system.set_config(&ConfigPatch {
        particle_count: Some(-100),
        ..ConfigPatch::default()
    });
    assert_population!(system, 0);
    system.step(&InteractionState::default());
    assert_eq!(system.stats().connection_count, 0);
    assert!(system.connections().is_empty());
}

#[test]
fn test_absurd_particle_count_clamps_to_max() {
    let mut system = SystemBuilder::new()
        .with_config(|c| c.particles.max_count = 300)
        .build();
    system.set_config(&ConfigPatch {
        particle_count: Some(i64::MAX),
        ..ConfigPatch::default()
    });
    assert_population!(system, 300);
}

#[test]
fn test_max_count_respects_hard_cap() {
    let mut config = AppConfig::default();
    config.particles.max_count = usize::MAX;
    config.sanitize();
    assert_eq!(config.particles.max_count, PARTICLE_HARD_CAP);
}

#[test]
fn test_toml_with_bad_values_loads_sanitized() {
    let config = AppConfig::from_toml(
        r#"
mode = "chaos"

[motion]
friction = 7.5
max_speed = 0.0

[flocking]
cohesion_radius = -10.0
"#,
    )
    .unwrap();
    assert_eq!(config.mode, BehaviorKind::Chaos);
    assert!(config.validate().is_ok());
    assert_eq!(config.motion.friction, 1.0);
}

#[test]
fn test_toml_syntax_error_is_reported() {
    assert!(AppConfig::from_toml("[motion\nfriction = ").is_err());
}

#[test]
fn test_patch_mode_switch_recolors() {
    let mut system = SystemBuilder::new().with_random_particles(30).build();
    system.set_config(&ConfigPatch {
        mode: Some(BehaviorKind::Gravity),
        ..ConfigPatch::default()
    });
    let palette = emergence_core::palette::palette(BehaviorKind::Gravity);
    assert!(system.particles().iter().all(|p| palette.contains(&p.color)));
}
