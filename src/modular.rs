use crate::error::EngineError;

// Arithmetic modulo primes below 2**31, used by multiple recursive generators.
// All operands are reduced residues in [0, m), so products fit in 63 bits.

/// Square matrix of residues, row major.
pub type Matrix<const K: usize> = [[i64; K]; K];

/// Reduces x modulo 2**31 - 21069 without division.
/// Uses 2**31 = 21069 (mod m) twice, then one conditional subtraction.
#[inline]
pub fn reduce_2147462579(x: u64) -> u64 {
    const M: u64 = 2147462579;
    let x = (x & 0x7fff_ffff) + (x >> 31) * 21069;
    let x = (x & 0x7fff_ffff) + (x >> 31) * 21069;
    if x >= M { x - M } else { x }
}

/// Reduces x modulo the Mersenne prime 2**31 - 1 using 2**31 = 1 (mod m).
#[inline]
pub fn reduce_2147483647(x: u64) -> u64 {
    const M: u64 = 2147483647;
    let x = (x & 0x7fff_ffff) + (x >> 31);
    let x = (x & 0x7fff_ffff) + (x >> 31);
    if x >= M { x - M } else { x }
}

/// Maps any integer into [0, m).
#[inline]
pub fn residue(x: i64, m: i64) -> i64 {
    x.rem_euclid(m)
}

#[inline]
pub fn mul_mod(a: i64, b: i64, m: i64) -> i64 {
    (a * b) % m
}

#[inline]
pub fn add_mod(a: i64, b: i64, m: i64) -> i64 {
    let t = a + b;
    if t >= m { t - m } else { t }
}

#[inline]
pub fn sub_mod(a: i64, b: i64, m: i64) -> i64 {
    let t = a - b;
    if t < 0 { t + m } else { t }
}

/// Multiplicative inverse of a modulo m by the extended Euclidean algorithm.
pub fn modulo_inverse(a: i64, m: i64) -> Result<i64, EngineError> {
    let a = residue(a, m);
    if a == 0 || m <= 1 {
        return Err(EngineError::NoInverse(a, m));
    }
    let (mut r0, mut r1) = (m, a);
    let (mut f0, mut f1) = (0i64, 1i64);
    while r1 > 1 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (f0, f1) = (f1, f0 - q * f1);
    }
    if r1 == 0 {
        return Err(EngineError::NoInverse(a, m));
    }
    Ok(residue(f1, m))
}

pub fn identity<const K: usize>() -> Matrix<K> {
    let mut c = [[0; K]; K];
    for (i, row) in c.iter_mut().enumerate() {
        row[i] = 1;
    }
    c
}

/// Matrix product a * b modulo m.
pub fn matrix_mult<const K: usize>(a: &Matrix<K>, b: &Matrix<K>, m: i64) -> Matrix<K> {
    let mut c = [[0; K]; K];
    for i in 0 .. K {
        for j in 0 .. K {
            let mut t = 0;
            for k in 0 .. K {
                t = add_mod(t, mul_mod(a[i][k], b[k][j], m), m);
            }
            c[i][j] = t;
        }
    }
    c
}

/// Matrix-vector product a * v modulo m.
pub fn matrix_vec_mult<const K: usize>(a: &Matrix<K>, v: &[i64; K], m: i64) -> [i64; K] {
    let mut c = [0; K];
    for (row, out) in a.iter().zip(c.iter_mut()) {
        let mut t = 0;
        for (x, y) in row.iter().zip(v.iter()) {
            t = add_mod(t, mul_mod(*x, *y, m), m);
        }
        *out = t;
    }
    c
}

/// a**n modulo m by repeated squaring.
pub fn matrix_pow<const K: usize>(a: &Matrix<K>, n: u64, m: i64) -> Matrix<K> {
    let mut result = identity::<K>();
    let mut unit = *a;
    let mut n = n;
    while n > 0 {
        if n & 1 == 1 {
            result = matrix_mult(&result, &unit, m);
        }
        n >>= 1;
        if n > 0 {
            unit = matrix_mult(&unit, &unit, m);
        }
    }
    result
}

/// Solves a * x = b modulo the prime m by Gauss-Jordan elimination.
pub fn gauss<const K: usize>(a: &Matrix<K>, b: &[i64; K], m: i64) -> Result<[i64; K], EngineError> {
    let mut a = *a;
    let mut b = *b;
    for col in 0 .. K {
        let pivot = (col .. K).find(|&row| a[row][col] != 0).ok_or(EngineError::SingularSystem(m))?;
        a.swap(col, pivot);
        b.swap(col, pivot);
        let inverse = modulo_inverse(a[col][col], m)?;
        for j in col .. K {
            a[col][j] = mul_mod(a[col][j], inverse, m);
        }
        b[col] = mul_mod(b[col], inverse, m);
        for row in 0 .. K {
            let factor = a[row][col];
            if row == col || factor == 0 {
                continue;
            }
            for j in col .. K {
                a[row][j] = sub_mod(a[row][j], mul_mod(factor, a[col][j], m), m);
            }
            b[row] = sub_mod(b[row], mul_mod(factor, b[col], m), m);
        }
    }
    Ok(b)
}

#[cfg(test)] mod tests {
    use super::*;

    const M: i64 = 2147462579;

    #[test] pub fn run_tests() {
        let mut r: u64 = 1;
        let mut rnd = || -> u64 { r = r.wrapping_mul(crate::LCG_M64_2).wrapping_add(0xffff); r };

        for _ in 0 .. 1<<12 {
            let x = rnd();
            assert_eq!(reduce_2147462579(x), x % M as u64);
            let a = (rnd() % M as u64) as i64;
            if a != 0 {
                let inverse = modulo_inverse(a, M).unwrap();
                assert_eq!(mul_mod(a, inverse, M), 1);
            }
        }
        assert_eq!(reduce_2147462579(u64::MAX), u64::MAX % M as u64);
        assert_eq!(reduce_2147462579(M as u64), 0);
        const P: u64 = 2147483647;
        for _ in 0 .. 1<<12 {
            let x = rnd();
            assert_eq!(reduce_2147483647(x), x % P);
            let y = (x >> 33) * (x & 0x7fff_ffff);
            assert_eq!(reduce_2147483647(y), y % P);
        }
        assert_eq!(reduce_2147483647(u64::MAX), u64::MAX % P);
        assert_eq!(reduce_2147483647(P), 0);
        assert_eq!(reduce_2147483647(2 * P - 1), P - 1);
        assert_eq!(modulo_inverse(0, M), Err(EngineError::NoInverse(0, M)));
        assert_eq!(modulo_inverse(6, 9), Err(EngineError::NoInverse(6, 9)));
        assert_eq!(residue(-1, M), M - 1);

        // Powers compose.
        let a: Matrix<3> = [[5, 7, 11], [1, 0, 0], [0, 1, 0]];
        let a5 = matrix_pow(&a, 5, M);
        let a2 = matrix_pow(&a, 2, M);
        let a3 = matrix_pow(&a, 3, M);
        assert_eq!(a5, matrix_mult(&a2, &a3, M));
        assert_eq!(matrix_pow(&a, 0, M), identity());

        // Solve and verify.
        let a: Matrix<3> = [[0, 2, 3], [4, 5, 6], [7, 8, 10]];
        let b = [13, 32, 53];
        let x = gauss(&a, &b, M).unwrap();
        assert_eq!(matrix_vec_mult(&a, &x, M), b);
        assert_eq!(x, [1, 2, 3]);

        let singular: Matrix<2> = [[1, 2], [2, 4]];
        assert_eq!(gauss(&singular, &[1, 2], M), Err(EngineError::SingularSystem(M)));
    }
}
