use trng_engines::*;

#[test]
fn lcg64_shift_determinism() {
    let mut a = Lcg64Shift::new(0x5eed);
    let mut b = Lcg64Shift::new(0x5eed);
    for _ in 0 .. 1000 {
        assert_eq!(a.next(), b.next());
    }

    // Save and restore mid-stream.
    let text = a.to_text();
    let mut c: Lcg64Shift = text.parse().unwrap();
    assert_eq!(c, a);
    for _ in 0 .. 1000 {
        assert_eq!(a.next(), c.next());
    }

    // Reading into an existing engine replaces both blocks.
    let mut d = Lcg64Shift::with_parameter(Lcg64ShiftParameter::LECUYER2);
    let mut reader = TextReader::new(&text);
    d.read_into(&mut reader).unwrap();
    assert_eq!(d, b);
}

#[test]
fn mrg5s_seed5_sum_of_coefficients() {
    let mut rng = Mrg5s::default();
    rng.seed5(1, 1, 1, 1, 1);
    let m = MRG5S_MODULUS;
    let sum = rng.parameter().coefficients().iter().map(|&a| a as i64).sum::<i64>() % m;
    assert_eq!(rng.next() as i64, sum);

    let mut rng = Mrg5s::with_parameter(Mrg5sParameter::TRNG1);
    rng.seed5(1, 1, 1, 1, 1);
    let sum = Mrg5sParameter::TRNG1.coefficients().iter().map(|&a| a as i64).sum::<i64>() % m;
    assert_eq!(rng.next() as i64, sum);
}

#[test]
fn lagfib_text_clone_agrees() {
    let mut rng = presets::lagfib2plus_64_168_521();
    rng.seed_from(&mut Minstd::new(42));
    let mut copy: LagFib2Plus<u64> = rng.to_text().parse().unwrap();
    assert_eq!(copy, rng);
    for _ in 0 .. 1_000_000 {
        assert_eq!(rng.next(), copy.next());
    }
}

#[test]
fn lagfib4xor_zero_ring_is_fixed() {
    let taps = [471, 1586, 6988, 9689];
    let mut rng = LagFib4Xor::<u32>::from_state(&taps, 0, vec![0; 16384]).unwrap();
    for _ in 0 .. 50000 {
        assert_eq!(rng.next(), 0);
    }
    assert!(rng.ring().iter().all(|&x| x == 0));
}

#[test]
fn leapfrog_streams_interleave() {
    fn check<E: Parallel + Clone>(rng: E, streams: u32)
    where E::Output: PartialEq + std::fmt::Debug {
        let mut base = rng.clone();
        let sequence: Vec<E::Output> = (0 .. streams * 32).map(|_| base.next()).collect();
        let mut leaves: Vec<E> = (0 .. streams).map(|n| {
            let mut leaf = rng.clone();
            leaf.split(streams, n).unwrap();
            leaf
        }).collect();
        for (i, x) in sequence.iter().enumerate() {
            let leaf = &mut leaves[i % streams as usize];
            assert_eq!(&leaf.next(), x);
        }
    }
    for streams in 1 .. 6 {
        check(Lcg64Shift::new(17), streams);
        check(Mrg5s::new(17), streams);
    }
    check(Lcg64Shift::with_parameter(Lcg64ShiftParameter::LECUYER3), 7);
    check(Mrg5s::with_parameter(Mrg5sParameter::TRNG1), 7);
}

#[test]
fn block_splitting_by_jump() {
    let mut a = Mrg5s::new(3);
    let mut b = a;
    a.jump(1 << 20);
    for _ in 0 .. 1 << 20 {
        b.next();
    }
    assert_eq!(a, b);

    let mut a = Lcg64Shift::new(3);
    let mut b = a;
    a.jump2(20);
    b.discard(1 << 20);
    assert_eq!(a, b);
}

#[test]
fn invalid_split_is_rejected() {
    let mut rng = Lcg64Shift::new(1);
    assert_eq!(rng.split(0, 0), Err(EngineError::InvalidSplit { streams: 0, index: 0 }));
    assert_eq!(rng.split(3, 3), Err(EngineError::InvalidSplit { streams: 3, index: 3 }));
    assert_eq!(rng, Lcg64Shift::new(1));
}

#[test]
fn rand_core_integration() {
    assert_eq!(Lcg64Shift::seed_from_u64(7), Lcg64Shift::new(7));
    assert_eq!(Mrg5s::seed_from_u64(7), Mrg5s::new(7));
    assert_eq!(Minstd::seed_from_u64(7), Minstd::new(7));

    let mut rng = Lcg64Shift::new(99);
    let mut copy = rng;
    let mut bytes = [0u8; 12];
    rng.fill_bytes(&mut bytes);
    let x = copy.next().to_le_bytes();
    let y = copy.next().to_le_bytes();
    assert_eq!(bytes[.. 8], x);
    assert_eq!(bytes[8 ..], y[.. 4]);

    // Narrow engines contribute 16 bits per draw.
    let mut rng = Minstd::new(1);
    let mut copy = rng;
    let hi = (copy.next() - 1) & 0xffff;
    let lo = (copy.next() - 1) & 0xffff;
    assert_eq!(rng.next_u32(), hi << 16 | lo);
}

#[test]
fn engine_text_is_validated() {
    assert!("[lcg64_shift (1 2) (3)]".parse::<Lcg64Shift>().is_ok());
    assert!("[lcg64_shift (1 2) (3)".parse::<Lcg64Shift>().is_err());
    assert!("[lcg64_shift (1 2) (3)] x".parse::<Lcg64Shift>().is_err());
    assert!("[minstd (0)]".parse::<Minstd>().is_err());
    assert!("[minstd (16807)]".parse::<Minstd>().is_ok());
    assert!(matches!("[mrg5s (1 2 3)]".parse::<Mrg5s>(), Err(ParseError::Expected { .. })));
}
