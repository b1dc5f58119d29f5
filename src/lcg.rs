use wrapping_arithmetic::wrappit;

// This module contains utility functions for jumping around in
// 64-bit LCGs (linear congruential generators).

/// LCG iteration is state <- state * m + p (mod 2**64).
/// Returns the (m, p) pair that iterates by n steps at once.
#[wrappit]
pub fn get_jump(m: u64, p: u64, n: u64) -> (u64, u64) {
    // Algorithm from Brown, F. B., "Random Number Generation with Arbitrary Stride",
    // Transactions of the American Nuclear Society, 1994.
    let mut unit_m = m;
    let mut unit_p = p;
    let mut jump_m: u64 = 1;
    let mut jump_p: u64 = 0;
    let mut delta = n;

    while delta > 0 {
        if delta & 1 == 1 {
            jump_m = jump_m * unit_m;
            jump_p = jump_p * unit_m + unit_p;
        }
        unit_p = (unit_m + 1) * unit_p;
        unit_m *= unit_m;
        delta >>= 1;
    }
    (jump_m, jump_p)
}

/// LCG iteration is state <- state * m + p (mod 2**64).
/// Returns state after the specified number of iterations from the origin state.
/// With a full period (m, p), iterations = 2**64 - 1 steps one back.
#[wrappit]
pub fn get_state(m: u64, p: u64, origin: u64, iterations: u64) -> u64 {
    let mut jump_m = m;
    let mut jump_p = p;
    let mut state = origin;
    let mut ordinal = iterations;

    while ordinal > 0 {
        if ordinal & 1 == 1 {
            state = state * jump_m + jump_p;
        }
        jump_p = (jump_m + 1) * jump_p;
        jump_m *= jump_m;
        ordinal >>= 1;
    }
    state
}

/// Returns sum(a**i, i = 0 .. s) (mod 2**64),
/// the increment factor of s steps of an LCG with multiplier a.
pub fn geometric_sum(a: u64, s: u64) -> u64 {
    get_jump(a, 1, s).1
}

#[cfg(test)] mod tests {
    use super::*;
    use crate::LCG_M64_1;

    #[test] pub fn run_tests() {

        let mut r: u64 = 0;
        let mut rnd = || -> u64 { r = r.wrapping_mul(LCG_M64_1).wrapping_add(0xffff); r };

        for _ in 0 .. 1<<12 {

            let m = rnd() | 1;
            let p = rnd() | 1;
            let origin = rnd();

            assert_eq!(origin.wrapping_mul(m).wrapping_add(p), get_state(m, p, origin, 1));

            // Stepping n times one by one agrees with a single jump.
            let n = rnd() & 0xff;
            let mut state = origin;
            for _ in 0 .. n { state = state.wrapping_mul(m).wrapping_add(p); }
            assert_eq!(state, get_state(m, p, origin, n));

            let (m_total, p_total) = get_jump(m, p, n);
            assert_eq!(origin.wrapping_mul(m_total).wrapping_add(p_total), state);

            // Jumps compose.
            let h = rnd();
            let k = rnd();
            assert_eq!(get_state(m, p, get_state(m, p, origin, h), k), get_state(m, p, origin, h.wrapping_add(k)));
        }

        // A full period map returns to the start after 2**64 steps,
        // so 2**64 - 1 steps undo one step.
        let a = crate::LCG64_DEFAULT_A;
        let x: u64 = 0x0123_4567_89ab_cdef;
        let y = x.wrapping_mul(a).wrapping_add(1);
        assert_eq!(get_state(a, 1, y, u64::MAX), x);

        let mut sum: u64 = 0;
        let mut power: u64 = 1;
        for _ in 0 .. 37 { sum = sum.wrapping_add(power); power = power.wrapping_mul(a); }
        assert_eq!(geometric_sum(a, 37), sum);
        assert_eq!(geometric_sum(a, 0), 0);
    }
}
