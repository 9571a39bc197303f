//! Unit tests for lcm-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        assert_eq!(AgentId(42).index(), 42);
    }

    #[test]
    fn range_is_ascending() {
        let ids: Vec<_> = AgentId::range(3).collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2)]);
        assert_eq!(AgentId::range(0).count(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod lattice {
    use crate::{Direction, LatticePoint, MAX_COORD};

    #[test]
    fn checked_add_inside_range() {
        let a = LatticePoint::new(1, -2);
        assert_eq!(a.checked_add(LatticePoint::new(3, 5)), Some(LatticePoint::new(4, 3)));
    }

    #[test]
    fn checked_add_refuses_to_leave_range() {
        let edge = LatticePoint::new(MAX_COORD, 0);
        assert_eq!(edge.checked_add(LatticePoint::new(1, 0)), None);
        assert_eq!(LatticePoint::new(0, MAX_COORD).checked_step(Direction::Up), None);

        // -MAX_COORD - 1 fits in i32 but is i32::MIN, which is excluded.
        let low = LatticePoint::new(-MAX_COORD, 3);
        assert_eq!(low.checked_step(Direction::Left), None);
        assert_eq!(low.checked_step(Direction::Right), Some(LatticePoint::new(-MAX_COORD + 1, 3)));
    }

    #[test]
    fn in_bounds_excludes_only_i32_min() {
        assert!(LatticePoint::new(MAX_COORD, -MAX_COORD).in_bounds());
        assert!(!LatticePoint::new(i32::MIN, 0).in_bounds());
        assert!(!LatticePoint::new(0, i32::MIN).in_bounds());
    }

    #[test]
    fn chebyshev_counts_diagonals_as_one() {
        let o = LatticePoint::ORIGIN;
        assert_eq!(o.chebyshev(LatticePoint::new(1, 1)), 1);
        assert_eq!(o.chebyshev(LatticePoint::new(-1, 0)), 1);
        assert_eq!(o.chebyshev(LatticePoint::new(3, -7)), 7);
        assert_eq!(o.chebyshev(o), 0);
        let far = LatticePoint::new(MAX_COORD, 0).chebyshev(LatticePoint::new(-MAX_COORD, 0));
        assert_eq!(far, u32::MAX - 1);
    }

    #[test]
    fn signum() {
        assert_eq!(LatticePoint::new(5, -3).signum(), LatticePoint::new(1, -1));
        assert_eq!(LatticePoint::new(0, 9).signum(), LatticePoint::new(0, 1));
    }

    #[test]
    fn steps_follow_axis_convention() {
        let p = LatticePoint::new(2, 2);
        assert_eq!(p.checked_step(Direction::Up), Some(LatticePoint::new(2, 3)));
        assert_eq!(p.checked_step(Direction::Down), Some(LatticePoint::new(2, 1)));
        assert_eq!(p.checked_step(Direction::Left), Some(LatticePoint::new(1, 2)));
        assert_eq!(p.checked_step(Direction::Right), Some(LatticePoint::new(3, 2)));
    }

    #[test]
    fn direction_from_sign() {
        assert_eq!(Direction::horizontal(4), Direction::Right);
        assert_eq!(Direction::horizontal(-4), Direction::Left);
        assert_eq!(Direction::vertical(1), Direction::Up);
        assert_eq!(Direction::vertical(-1), Direction::Down);
    }

    #[test]
    fn display() {
        assert_eq!(LatticePoint::new(-3, 2).to_string(), "(-3, 2)");
        assert_eq!(Direction::Left.to_string(), "left");
    }
}

#[cfg(test)]
mod orientation {
    use crate::{LatticePoint, MAX_COORD, Orientation};

    fn sample_points() -> Vec<LatticePoint> {
        let mut pts = Vec::new();
        for x in -4..=4 {
            for y in -4..=4 {
                pts.push(LatticePoint::new(x * 7, y * 3));
            }
        }
        pts.push(LatticePoint::new(MAX_COORD, -MAX_COORD));
        pts.push(LatticePoint::new(-MAX_COORD, MAX_COORD));
        pts
    }

    #[test]
    fn reflect_is_involution() {
        for o in [Orientation::Aligned, Orientation::Mirrored] {
            for p in sample_points() {
                assert_eq!(o.reflect(o.reflect(p)), p, "{o} {p}");
            }
        }
    }

    #[test]
    fn mirrored_flips_only_x() {
        let p = LatticePoint::new(3, -2);
        assert_eq!(Orientation::Mirrored.reflect(p), LatticePoint::new(-3, -2));
        assert_eq!(Orientation::Aligned.reflect(p), p);
    }

    #[test]
    fn local_global_roundtrip() {
        let local = LatticePoint::new(5, 1);
        let o = Orientation::Mirrored;
        assert_eq!(o.to_local(o.to_global(local)), local);
    }

    #[test]
    fn reflect_all_preserves_order() {
        let pts = vec![LatticePoint::new(1, 0), LatticePoint::new(-2, 4)];
        assert_eq!(
            Orientation::Mirrored.reflect_all(&pts),
            vec![LatticePoint::new(-1, 0), LatticePoint::new(2, 4)],
        );
        assert_eq!(Orientation::Aligned.reflect_all(&pts), pts);
    }

    #[test]
    fn from_flag() {
        assert_eq!(Orientation::from_aligned(true), Orientation::Aligned);
        assert_eq!(Orientation::from_aligned(false), Orientation::Mirrored);
    }

    #[test]
    fn mirroring_in_bounds_points_stays_in_bounds() {
        for p in sample_points() {
            assert!(Orientation::Mirrored.reflect(p).in_bounds(), "{p}");
        }
    }

    #[test]
    fn mirroring_i32_min_saturates() {
        let p = LatticePoint::new(i32::MIN, 4);
        assert_eq!(Orientation::Mirrored.reflect(p), LatticePoint::new(i32::MAX, 4));
    }
}

#[cfg(test)]
mod time {
    use crate::{CoreError, LcmConfig, Tick};

    #[test]
    fn tick_next_and_display() {
        assert_eq!(Tick(3).next(), Tick(4));
        assert_eq!(Tick::ZERO.to_string(), "T0");
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = LcmConfig::default();
        assert_eq!(cfg.ticks_per_step, 1);
        assert!(cfg.error_on_collision);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_ticks_per_step_rejected() {
        let cfg = LcmConfig { ticks_per_step: 0, ..LcmConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: i32 = r1.gen_range(-10..10);
            let b: i32 = r2.gen_range(-10..10);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: Vec<u64> = (0..4).map(|_| r0.gen_range(0..u64::MAX)).collect();
        let b: Vec<u64> = (0..4).map(|_| r1.gen_range(0..u64::MAX)).collect();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn for_agents_matches_individual_seeding() {
        let mut all = AgentRng::for_agents(9, 3);
        assert_eq!(all.len(), 3);
        let mut single = AgentRng::new(9, AgentId(2));
        let a: u64 = all[2].gen_range(0..u64::MAX);
        let b: u64 = single.gen_range(0..u64::MAX);
        assert_eq!(a, b);
    }

    #[test]
    fn sim_rng_children_are_reproducible() {
        let mut a = SimRng::new(5).child(1);
        let mut b = SimRng::new(5).child(1);
        let x: i32 = a.gen_range(0..1000);
        let y: i32 = b.gen_range(0..1000);
        assert_eq!(x, y);
    }
}
