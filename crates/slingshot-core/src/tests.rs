#[cfg(test)]
mod tests {
    use crate::commands::SimCommand;
    use crate::components::{Attractor, GravityLaw, Projectile, ProjectileId};
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::state::SimSnapshot;
    use crate::types::{angle_between, distance, Point, SimTime, WorldBounds};

    fn law(constant: f64) -> GravityLaw {
        GravityLaw {
            constant,
            min_distance: 1e-3,
        }
    }

    /// Verify distance and angle calculations.
    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-12);
        assert!((distance(b, a) - 5.0).abs() < 1e-12);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn test_angle_between() {
        let origin = Point::new(0.0, 0.0);
        assert!(angle_between(origin, Point::new(10.0, 0.0)).abs() < 1e-12);
        // Screen y grows downward, so +y is a quarter turn clockwise on screen.
        let down = angle_between(origin, Point::new(0.0, 10.0));
        assert!((down - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        let left = angle_between(origin, Point::new(-10.0, 0.0));
        assert!((left - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_default_and_center() {
        let bounds = WorldBounds::default();
        assert_eq!(bounds.width, 800.0);
        assert_eq!(bounds.height, 600.0);
        assert_eq!(bounds.center(), Point::new(400.0, 300.0));
        assert!(bounds.contains(Point::new(0.0, 600.0)));
        assert!(!bounds.contains(Point::new(-0.5, 10.0)));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(time.tick, 30);
    }

    /// One step from (400,100) at (5,0) toward a mass-100 attractor at (400,300), G=5.
    #[test]
    fn test_step_matches_closed_form_euler() {
        let attractor = Attractor::new(Point::new(400.0, 300.0), 100.0);
        let mut p = Projectile::new(Point::new(400.0, 100.0), Point::new(5.0, 0.0), 5.0);

        p.step(&attractor, &law(5.0));

        // d = 200, a = 5 * 100 / 200^2 = 0.0125, pointing straight down (+y).
        let a = 5.0 * 100.0 / (200.0f64 * 200.0);
        let angle = std::f64::consts::FRAC_PI_2;
        let vx = 5.0 + a * angle.cos();
        let vy = a * angle.sin();
        assert!((p.velocity.x - vx).abs() < 1e-12);
        assert!((p.velocity.y - vy).abs() < 1e-12);
        assert!((p.position.x - (400.0 + vx)).abs() < 1e-12);
        assert!((p.position.y - (100.0 + vy)).abs() < 1e-12);
        assert!((p.velocity.y - 0.0125).abs() < 1e-12);
    }

    #[test]
    fn test_acceleration_independent_of_projectile_mass() {
        let attractor = Attractor::new(Point::new(400.0, 300.0), 100.0);
        let start = Point::new(250.0, 180.0);
        let d = distance(start, attractor.position());
        let expected = 5.0 * 100.0 / (d * d);

        for mass in [0.01, 1.0, 5.0, 250.0, 1e6] {
            let mut p = Projectile::new(start, Point::ZERO, mass);
            p.step(&attractor, &law(5.0));
            assert!(
                (p.velocity.length() - expected).abs() < 1e-12,
                "mass {mass} gave acceleration {}",
                p.velocity.length()
            );
            assert_eq!(p.mass(), mass);
        }
    }

    #[test]
    fn test_acceleration_points_toward_attractor() {
        let attractor = Attractor::new(Point::new(400.0, 300.0), 100.0);
        let mut p = Projectile::new(Point::new(100.0, 500.0), Point::ZERO, 5.0);
        let to_attractor = attractor.position() - p.position;

        p.step(&attractor, &law(5.0));
        assert!(p.velocity.dot(to_attractor) > 0.0);
        assert!((p.velocity.normalize() - to_attractor.normalize()).length() < 1e-12);
    }

    #[test]
    fn test_inverse_square_law() {
        let attractor = Attractor::new(Point::new(0.0, 0.0), 100.0);
        let mut near = Projectile::new(Point::new(100.0, 0.0), Point::ZERO, 1.0);
        let mut far = Projectile::new(Point::new(200.0, 0.0), Point::ZERO, 1.0);
        near.step(&attractor, &law(5.0));
        far.step(&attractor, &law(5.0));

        let ratio = near.velocity.length() / far.velocity.length();
        assert!((ratio - 4.0).abs() < 1e-9, "Expected 4x, got {ratio}");
    }

    #[test]
    fn test_step_at_zero_distance_only_drifts() {
        let attractor = Attractor::new(Point::new(400.0, 300.0), 100.0);
        let mut p = Projectile::new(attractor.position(), Point::new(0.5, -0.25), 5.0);

        p.step(&attractor, &law(5.0));
        assert!(p.position.is_finite());
        assert_eq!(p.velocity, Point::new(0.5, -0.25));
        assert_eq!(p.position, Point::new(400.5, 299.75));
    }

    #[test]
    fn test_step_just_outside_min_distance_is_finite() {
        let attractor = Attractor::new(Point::new(400.0, 300.0), 100.0);
        let mut p = Projectile::new(Point::new(400.002, 300.0), Point::ZERO, 5.0);

        p.step(&attractor, &law(5.0));
        assert!(p.velocity.is_finite());
        assert!(p.velocity.x < 0.0, "pull must point back toward the attractor");
    }

    #[test]
    fn test_out_of_bounds_edges() {
        let at = |x, y| Projectile::new(Point::new(x, y), Point::ZERO, 1.0);
        assert!(!at(0.0, 0.0).is_out_of_bounds(800.0, 600.0));
        assert!(!at(800.0, 600.0).is_out_of_bounds(800.0, 600.0));
        assert!(at(-0.01, 300.0).is_out_of_bounds(800.0, 600.0));
        assert!(at(800.01, 300.0).is_out_of_bounds(800.0, 600.0));
        assert!(at(400.0, -0.01).is_out_of_bounds(800.0, 600.0));
        assert!(at(400.0, 600.01).is_out_of_bounds(800.0, 600.0));
    }

    #[test]
    fn test_collision_radius_is_inclusive() {
        let attractor = Attractor::new(Point::new(400.0, 300.0), 100.0);
        let on_edge = Projectile::new(Point::new(450.0, 300.0), Point::ZERO, 1.0);
        let outside = Projectile::new(Point::new(450.001, 300.0), Point::ZERO, 1.0);
        assert!(on_edge.is_collided(&attractor, 50.0));
        assert!(!outside.is_collided(&attractor, 50.0));
    }

    /// Verify SimCommand round-trips through serde (tagged union).
    #[test]
    fn test_sim_command_serde() {
        let commands = vec![
            SimCommand::Launch {
                anchor: Point::new(100.0, 100.0),
                release: Point::new(200.0, 300.0),
            },
            SimCommand::Clear,
            SimCommand::Pause,
            SimCommand::Resume,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: SimCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
    }

    #[test]
    fn test_sim_event_serde() {
        let event = SimEvent::ProjectileRemoved {
            id: ProjectileId(7),
            reason: RemovalReason::Collided,
            position: Point::new(410.0, 290.0),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"ProjectileRemoved\""));
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    /// Verify SimSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = SimSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SimSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
        assert_eq!(back.phase, SimPhase::Running);
        assert!(
            json.len() < 512,
            "Empty snapshot should be small, was {} bytes",
            json.len()
        );
    }
}
