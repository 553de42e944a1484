//! Read-only outputs for renderers and hosts.

use super::ParticleSystem;
use crate::spatial_hash::SpatialHash;
use emergence_data::{
    Connection, Particle, Shockwave, ShockwaveView, SimulationSnapshot, SimulationStats,
};

impl ParticleSystem {
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn shockwaves(&self) -> &[Shockwave] {
        self.shockwaves.live()
    }

    /// Counters for display.
    ///
    /// `connection_count` sums the whole-cell neighbor counts from the
    /// spatial index without filtering by distance, so it overestimates.
    /// Nothing in the force computation reads it.
    pub fn stats(&self) -> SimulationStats {
        let radius = self.config.flocking.connection_radius;
        let touching: usize = self
            .particles
            .iter()
            .map(|p| self.index.count_nearby(p.x, p.y, radius).saturating_sub(1))
            .sum();
        SimulationStats {
            frame: self.frame,
            particle_count: self.particles.len(),
            connection_count: touching / 2,
            shockwave_count: self.shockwaves.len(),
            mode: self.config.mode,
        }
    }

    /// Exact particle pairs closer than `connection_radius`, each listed
    /// once, at most `connection_cap` of them.
    ///
    /// `strength` fades linearly from 1 at contact to 0 at the radius.
    pub fn connections(&self) -> Vec<Connection> {
        let radius = self.config.flocking.connection_radius;
        let cap = self.config.connection_cap;
        let mut connections = Vec::new();
        if cap == 0 || self.particles.len() < 2 {
            return connections;
        }

        let mut grid = SpatialHash::new(radius);
        let positions: Vec<(f64, f64)> = self.particles.iter().map(|p| (p.x, p.y)).collect();
        grid.build(&positions);

        let radius_sq = radius * radius;
        let mut nearby = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            grid.query_into(a.x, a.y, radius, &mut nearby);
            nearby.sort_unstable();
            for &j in nearby.iter().filter(|&&j| j > i) {
                let b = &self.particles[j];
                let dist_sq = a.distance_sq_to(b.x, b.y);
                if dist_sq >= radius_sq {
                    continue;
                }
                connections.push(Connection {
                    a: a.id,
                    b: b.id,
                    strength: 1.0 - dist_sq.sqrt() / radius,
                });
                if connections.len() >= cap {
                    return connections;
                }
            }
        }
        connections
    }

    /// Everything a renderer needs for one frame.
    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            frame: self.frame,
            width: self.config.world.width,
            height: self.config.world.height,
            mode: self.config.mode,
            particles: self.particles.iter().map(Into::into).collect(),
            shockwaves: self.shockwaves().iter().map(ShockwaveView::from).collect(),
            connections: self.connections(),
            stats: self.stats(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::AppConfig;
    use crate::interaction::InteractionState;
    use crate::system::ParticleSystem;
    use emergence_data::{BehaviorKind, Particle};

    fn system_with(positions: &[(f64, f64)]) -> ParticleSystem {
        let mut config = AppConfig::default();
        config.particles.count = 0;
        let mut system = ParticleSystem::with_seed(config, 2);
        for (i, &(x, y)) in positions.iter().enumerate() {
            system.particles.push(Particle::at(i as u64, x, y));
        }
        system.rebuild_index();
        system
    }

    #[test]
    fn test_connections_are_exact_and_unique() {
        let system = system_with(&[(100.0, 100.0), (150.0, 100.0), (260.0, 100.0)]);
        let connections = system.connections();
        // 0-1 is 50 apart; 1-2 is 110 apart, beyond the 100 radius.
        assert_eq!(connections.len(), 1);
        assert_eq!((connections[0].a, connections[0].b), (0, 1));
        assert!((connections[0].strength - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_connections_respect_cap() {
        let positions: Vec<(f64, f64)> = (0..10).map(|i| (100.0 + f64::from(i), 100.0)).collect();
        let mut system = system_with(&positions);
        system.config.connection_cap = 7;
        assert_eq!(system.connections().len(), 7);
    }

    #[test]
    fn test_stats_overestimates_connections() {
        let system = system_with(&[(100.0, 100.0), (150.0, 100.0), (260.0, 100.0)]);
        let stats = system.stats();
        assert_eq!(stats.particle_count, 3);
        assert!(stats.connection_count >= system.connections().len());
    }

    #[test]
    fn test_stats_counts_pair_joined_across_wrap() {
        let mut system = system_with(&[(1279.0, 300.0), (10.0, 300.0)]);
        system.config.mode = BehaviorKind::Gravity;
        system.config.behavior.gravity_center_pull = 0.0;
        system.config.behavior.gravity_strength = 0.0;
        system.particles[0].vx = 3.0;

        system.step(&InteractionState::default());

        assert!(system.particles[0].x < 5.0);
        let exact = system.connections().len();
        assert_eq!(exact, 1);
        assert!(system.stats().connection_count >= exact);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut system = system_with(&[(10.0, 20.0), (30.0, 40.0)]);
        system.spawn_shockwave(5.0, 5.0);
        let snapshot = system.snapshot();
        assert_eq!(snapshot.particles.len(), 2);
        assert_eq!(snapshot.particles[1].x, 30.0);
        assert_eq!(snapshot.shockwaves.len(), 1);
        assert_eq!(snapshot.stats.shockwave_count, 1);
        assert_eq!(snapshot.width, 1280.0);
    }
}
