//! Unit tests for ring-core primitives.

#[cfg(test)]
mod config {
    use crate::{CoreError, CycleConfig, EngineConfig};

    #[test]
    fn default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn population_of_one_rejected() {
        let cfg = EngineConfig { population: 1, ..EngineConfig::default() };
        assert!(matches!(
            cfg.validate(),
            Err(CoreError::PopulationTooSmall { got: 1 })
        ));
    }

    #[test]
    fn bad_speeds_rejected() {
        for speed in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let cfg = EngineConfig { speed, ..EngineConfig::default() };
            assert!(matches!(cfg.validate(), Err(CoreError::InvalidSpeed { .. })), "speed {speed}");
        }
    }

    #[test]
    fn bad_cycle_windows_rejected() {
        let cfg = EngineConfig {
            cycle: Some(CycleConfig { wait: -0.1, runtime: 1.0 }),
            ..EngineConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(CoreError::InvalidCycleWindow { .. })));

        let cfg = EngineConfig {
            cycle: Some(CycleConfig { wait: 0.1, runtime: 0.0 }),
            ..EngineConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(CoreError::InvalidCycleWindow { .. })));
    }

    #[test]
    fn no_cycle_is_valid() {
        let cfg = EngineConfig { cycle: None, ..EngineConfig::default() };
        assert!(cfg.validate().is_ok());
    }
}

#[cfg(test)]
mod cycle {
    use crate::CycleConfig;

    const CYCLE: CycleConfig = CycleConfig { wait: 0.8, runtime: 1.0 };

    #[test]
    fn total_length() {
        assert!((CYCLE.total() - 2.6).abs() < 1e-12);
    }

    #[test]
    fn warm_up_window() {
        assert!(CYCLE.in_hold(0.0));
        assert!(CYCLE.in_hold(0.8)); // inclusive upper edge, as the reference behaves
        assert!(!CYCLE.in_hold(0.81));
    }

    #[test]
    fn run_window_is_open() {
        assert!(!CYCLE.in_hold(1.0));
        assert!(!CYCLE.in_hold(1.7999));
    }

    #[test]
    fn cool_down_window() {
        assert!(CYCLE.in_hold(1.8));
        assert!(CYCLE.in_hold(2.5999));
        assert!(!CYCLE.in_hold(2.6)); // past the cycle end: reset territory
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..32 {
            let x: f64 = a.gen_range(0.0..1.0);
            let y: f64 = b.gen_range(0.0..1.0);
            assert_eq!(x, y);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let xs: Vec<f64> = (0..8).map(|_| a.gen_range(0.0..1.0)).collect();
        let ys: Vec<f64> = (0..8).map(|_| b.gen_range(0.0..1.0)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn gen_range_in_unit_interval() {
        let mut rng = SimRng::new(99);
        for _ in 0..256 {
            let x: f64 = rng.gen_range(0.0..1.0);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn gen_bool_clamps_probability() {
        let mut rng = SimRng::new(3);
        assert!(rng.gen_bool(2.0));
        assert!(!rng.gen_bool(-1.0));
    }
}
