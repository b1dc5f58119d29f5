use approx::assert_abs_diff_eq;
use trng_engines::dist::*;
use trng_engines::*;

/// Kolmogorov-Smirnov statistic of n samples against the law's cdf.
fn ks_statistic<D: Continuous, E: Engine>(d: &D, engine: &mut E, n: usize) -> f64 {
    let mut x: Vec<f64> = (0 .. n).map(|_| d.sample(engine)).collect();
    x.sort_by(|a, b| a.total_cmp(b));
    let n = n as f64;
    x.iter().enumerate().fold(0.0, |worst, (i, &x)| {
        let f = d.cdf(x);
        worst.max((i as f64 + 1.0) / n - f).max(f - i as f64 / n)
    })
}

/// Critical value at significance 0.01.
fn ks_limit(n: usize) -> f64 {
    1.63 / (n as f64).sqrt()
}

#[test]
fn normal_symmetry_and_median() {
    let d = Normal::new(0.0, 1.0).unwrap();
    assert_eq!(d.pdf(-1.5), d.pdf(1.5));
    assert_abs_diff_eq!(d.cdf(0.0), 0.5, epsilon = 1e-10);
}

#[test]
fn beta_endpoints() {
    let d = Beta::new(2.0, 5.0).unwrap();
    assert_eq!(d.cdf(0.0), 0.0);
    assert_eq!(d.cdf(1.0), 1.0);
    assert_eq!(d.icdf(0.0), 0.0);
    assert_eq!(d.icdf(1.0), 1.0);
    assert_abs_diff_eq!(d.icdf(d.cdf(0.3)), 0.3, epsilon = 1e-8);
}

#[test]
fn samples_follow_their_law() {
    let n = 100_000;
    assert!(ks_statistic(&Normal::new(1.0, 2.0).unwrap(), &mut Lcg64Shift::new(1), n) < ks_limit(n));
    assert!(ks_statistic(&Beta::new(2.0, 5.0).unwrap(), &mut Lcg64Shift::new(3), n) < ks_limit(n));
    assert!(ks_statistic(&StudentT::new(4).unwrap(), &mut Lcg64Shift::new(5), n) < ks_limit(n));
    assert!(ks_statistic(&Exponential::new(0.5).unwrap(), &mut Lcg64Shift::new(6), n) < ks_limit(n));
    assert!(ks_statistic(&Lognormal::new(0.0, 0.5).unwrap(), &mut Mrg5s::new(2), n) < ks_limit(n));
    assert!(ks_statistic(&Gamma::new(2.5, 1.5).unwrap(), &mut Mrg3::default(), n) < ks_limit(n));
}

#[test]
fn inverse_round_trip() {
    fn check<D: Continuous>(d: D) {
        for &u in [0.01, 0.1, 0.5, 0.9, 0.99].iter() {
            assert_abs_diff_eq!(d.cdf(d.icdf(u)), u, epsilon = 1e-9);
        }
    }
    check(Normal::default());
    check(Beta::new(0.7, 3.0).unwrap());
    check(StudentT::new(3).unwrap());
    check(Cauchy::default());
    check(Exponential::default());
    check(Gamma::new(0.5, 2.0).unwrap());
    check(ChiSquare::new(7).unwrap());
    check(SnedecorF::new(3, 8).unwrap());
    check(ExtremeValue::default());
    check(Logistic::default());
    check(Lognormal::default());
    check(Maxwell::default());
    check(Pareto::default());
    check(Powerlaw::default());
    check(Rayleigh::default());
    check(Tent::default());
    check(Uniform::default());
    check(Uniform01);
    check(Weibull::new(1.0, 2.5).unwrap());
}

#[test]
fn bernoulli_masses_sum_to_one() {
    for &p in [0.0, 0.25, 0.5, 0.999, 1.0].iter() {
        let d = Bernoulli::new(p, "head", "tail").unwrap();
        assert_abs_diff_eq!(d.pdf(&"head") + d.pdf(&"tail"), 1.0, epsilon = 1e-15);
    }
}

#[test]
fn parameter_blocks_swap() {
    let mut d = Normal::default();
    let p = NormalParam::new(5.0, 0.1).unwrap();
    d.set_param(p);
    assert_eq!(d.param(), p);
    assert_eq!(d, Normal::new(5.0, 0.1).unwrap());
    assert_eq!(d.to_text(), "[normal (5.0 0.1)]");
}

#[test]
fn domain_errors_raise_the_flag() {
    domain::clear();
    assert!(Exponential::default().icdf(2.0).is_nan());
    assert_eq!(domain::last_error(), Some(domain::MathError::Domain));
    domain::clear();
    assert_eq!(domain::last_error(), None);
    assert!(!Normal::default().icdf(0.3).is_nan());
    assert_eq!(domain::last_error(), None);
}
