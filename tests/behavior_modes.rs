mod common;

use common::SystemBuilder;
use emergence_lib::model::data::BehaviorKind;
use emergence_lib::model::interaction::InteractionState;

fn mean_spacing(system: &emergence_lib::model::system::ParticleSystem) -> f64 {
    let ps = system.particles();
    let mut total = 0.0;
    let mut pairs = 0.0;
    for (i, a) in ps.iter().enumerate() {
        for b in &ps[i + 1..] {
            total += ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
            pairs += 1.0;
        }
    }
    total / pairs
}

#[test]
fn test_every_mode_runs_stably() {
    for mode in BehaviorKind::ALL {
        let mut system = SystemBuilder::new()
            .with_mode(mode)
            .with_random_particles(200)
            .build();
        let mut input = InteractionState::default();
        for frame in 0..120 {
            if frame == 30 {
                system.on_pointer_down(&mut input, 640.0, 360.0);
            }
            if frame == 40 {
                input.pointer_up();
            }
            system.step(&input);
        }
        assert_all_finite!(system);
        assert_in_field!(system);
        assert_speed_bounded!(system);
    }
}

#[test]
fn test_neural_cluster_contracts() {
    // A loose ring of particles, all within neural range of each other.
    let mut builder = SystemBuilder::new().quiet().with_mode(BehaviorKind::Neural);
    for i in 0..12 {
        let angle = f64::from(i) / 12.0 * std::f64::consts::TAU;
        builder = builder.with_particle(640.0 + 50.0 * angle.cos(), 360.0 + 50.0 * angle.sin());
    }
    let mut system = builder.build();
    let before = mean_spacing(&system);
    for _ in 0..30 {
        system.step(&InteractionState::default());
    }
    assert!(mean_spacing(&system) < before);
}

#[test]
fn test_gravity_pair_attracts() {
    let mut system = SystemBuilder::new()
        .quiet()
        .with_mode(BehaviorKind::Gravity)
        .with_particle(600.0, 360.0)
        .with_particle(640.0, 360.0)
        .build();
    system.step(&InteractionState::default());
    assert!(system.particles()[0].vx > 0.0);
    assert!(system.particles()[1].vx < 0.0);
}

#[test]
fn test_gravity_center_pull_gathers() {
    let mut system = SystemBuilder::new()
        .with_mode(BehaviorKind::Gravity)
        .with_particle(100.0, 100.0)
        .build();
    let start = ((100.0f64 - 640.0).powi(2) + (100.0f64 - 360.0).powi(2)).sqrt();
    for _ in 0..50 {
        system.step(&InteractionState::default());
    }
    let p = &system.particles()[0];
    let now = ((p.x - 640.0).powi(2) + (p.y - 360.0).powi(2)).sqrt();
    assert!(now < start);
}

#[test]
fn test_chaos_moves_resting_particles() {
    let mut system = SystemBuilder::new()
        .with_mode(BehaviorKind::Chaos)
        .with_particle(300.0, 300.0)
        .with_particle(900.0, 500.0)
        .build();
    system.step(&InteractionState::default());
    assert!(system.particles().iter().all(|p| p.speed() > 0.0));
}

#[test]
fn test_emergent_flock_aligns() {
    let mut system = SystemBuilder::new()
        .quiet()
        .with_mode(BehaviorKind::Emergent)
        .with_moving_particle(600.0, 360.0, 2.0, 0.0)
        .with_moving_particle(640.0, 360.0, 0.0, 2.0)
        .build();
    let heading_gap = |s: &emergence_lib::model::system::ParticleSystem| {
        let a = &s.particles()[0];
        let b = &s.particles()[1];
        ((a.vx - b.vx).powi(2) + (a.vy - b.vy).powi(2)).sqrt()
    };
    let before = heading_gap(&system);
    system.step(&InteractionState::default());
    assert!(heading_gap(&system) < before);
}

#[test]
fn test_mode_switch_damps_velocity() {
    let mut system = SystemBuilder::new()
        .with_moving_particle(100.0, 100.0, 3.0, 0.0)
        .build();
    system.set_mode(BehaviorKind::Chaos);
    assert_eq!(system.particles()[0].vx, 1.5);
    assert_eq!(system.mode(), BehaviorKind::Chaos);
}
