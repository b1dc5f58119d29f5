use proptest::prelude::*;
use trng_engines::dist::{Beta, Continuous, Distribution, Normal, Tent};
use trng_engines::*;

proptest! {
    #[test]
    fn lcg64_shift_discard_matches_stepping(seed: u64, n in 0u64 .. 2000) {
        let mut a = Lcg64Shift::new(seed);
        let mut b = a;
        a.discard(n);
        for _ in 0 .. n { b.next(); }
        prop_assert_eq!(a.next(), b.next());
    }

    #[test]
    fn mrg5s_discard_matches_stepping(seed: u64, n in 0u64 .. 2000) {
        let mut a = Mrg5s::new(seed);
        let mut b = a;
        a.discard(n);
        for _ in 0 .. n { b.next(); }
        prop_assert_eq!(a.next(), b.next());
    }

    #[test]
    fn engines_round_trip_through_text(seed: u64, steps in 0usize .. 100) {
        let mut lcg = Lcg64Shift::new(seed);
        let mut mrg = Mrg5s::new(seed);
        let mut minstd = Minstd::new(seed);
        for _ in 0 .. steps {
            lcg.next();
            mrg.next();
            minstd.next();
        }
        prop_assert_eq!(lcg.to_text().parse::<Lcg64Shift>().unwrap(), lcg);
        prop_assert_eq!(mrg.to_text().parse::<Mrg5s>().unwrap(), mrg);
        prop_assert_eq!(minstd.to_text().parse::<Minstd>().unwrap(), minstd);
    }

    #[test]
    fn outputs_stay_in_range(seed: u64) {
        let mut mrg = Mrg5s::new(seed);
        let mut minstd = Minstd::new(seed);
        for _ in 0 .. 100 {
            let x = mrg.next();
            prop_assert!(x >= Mrg5s::MIN && x <= Mrg5s::MAX);
            let x = minstd.next();
            prop_assert!(x >= Minstd::MIN && x <= Minstd::MAX);
        }
    }

    #[test]
    fn canonical_intervals(seed: u64) {
        let mut rng = Mrg5s::new(seed);
        for _ in 0 .. 100 {
            let x: f64 = uniformco(&mut rng);
            prop_assert!((0.0 .. 1.0).contains(&x));
            let x: f64 = uniformoo(&mut rng);
            prop_assert!(x > 0.0 && x < 1.0);
            let x: f32 = uniformoc(&mut rng);
            prop_assert!(x > 0.0 && x <= 1.0);
            let x: f64 = generate_canonical(&mut rng);
            prop_assert!(x > 0.0 && x < 1.0);
        }
    }

    #[test]
    fn distributions_round_trip_through_text(mu in -1e6f64 .. 1e6, sigma in 1e-6f64 .. 1e6, alpha in 0.01f64 .. 100.0) {
        let d = Normal::new(mu, sigma).unwrap();
        prop_assert_eq!(d.to_text().parse::<Normal>().unwrap(), d);
        let d = Beta::new(alpha, sigma).unwrap();
        prop_assert_eq!(d.to_text().parse::<Beta>().unwrap(), d);
    }

    #[test]
    fn tent_samples_inside_support(seed: u64, m in -100.0f64 .. 100.0, w in 0.01f64 .. 10.0) {
        let d = Tent::new(m, w).unwrap();
        let mut rng = Lcg64Shift::new(seed);
        for _ in 0 .. 100 {
            let x = d.sample(&mut rng);
            prop_assert!(x >= d.min() - 1e-12 && x <= d.max() + 1e-12);
            prop_assert!(d.pdf(x) >= 0.0);
        }
    }
}
