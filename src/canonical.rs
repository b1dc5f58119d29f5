use num_traits::{AsPrimitive, Float};
use crate::bits::Word;
use crate::engine::Engine;

// Conversion of engine words to uniform floating point numbers.
// All variants take exactly one engine draw.

/// Offset draw v = next - min and range d = max - min.
#[inline]
fn draw<E: Engine>(engine: &mut E) -> (u64, u64) {
    let min = E::MIN.to_u64();
    (engine.next().to_u64() - min, E::MAX.to_u64() - min)
}

/// Resolution of one draw in F: the larger of machine epsilon and 1 / d.
#[inline]
fn resolution<F: Float>(d: F) -> F {
    F::epsilon().max(F::one() / d)
}

/// Uniform number in [0, 1].
pub fn uniformcc<F: Float + 'static, E: Engine>(engine: &mut E) -> F
where u64: AsPrimitive<F> {
    let (v, d) = draw(engine);
    let v: F = v.as_();
    let d: F = d.as_();
    v / d
}

/// Uniform number in [0, 1).
pub fn uniformco<F: Float + 'static, E: Engine>(engine: &mut E) -> F
where u64: AsPrimitive<F> {
    let (v, d) = draw(engine);
    let v: F = v.as_();
    let d: F = d.as_();
    v * (F::one() - resolution(d)) / d
}

/// Uniform number in (0, 1].
pub fn uniformoc<F: Float + 'static, E: Engine>(engine: &mut E) -> F
where u64: AsPrimitive<F> {
    F::one() - uniformco::<F, E>(engine)
}

/// Uniform number in (0, 1).
pub fn uniformoo<F: Float + 'static, E: Engine>(engine: &mut E) -> F
where u64: AsPrimitive<F> {
    let (v, d) = draw(engine);
    let v: F = v.as_();
    let d: F = d.as_();
    let eps = resolution(d);
    v * (F::one() - eps - eps) / d + eps
}

/// Types that `generate_canonical` can produce.
pub trait Canonical: Sized {
    fn canonical<E: Engine>(engine: &mut E) -> Self;
}

/// (v + 1) / (d + 2) strictly inside (0, 1). Numerator and denominator
/// are exact in 128 bits; a quotient that rounds up to 1 is pulled back.
fn open_unit<F: Float + 'static, E: Engine>(engine: &mut E) -> F
where u128: AsPrimitive<F> {
    let min = E::MIN.to_u64() as u128;
    let v = engine.next().to_u64() as u128 - min + 1;
    let d = E::MAX.to_u64() as u128 - min + 2;
    let v: F = v.as_();
    let d: F = d.as_();
    let x = v / d;
    if x < F::one() { x } else { F::one() - F::epsilon() / (F::one() + F::one()) }
}

impl Canonical for f32 {
    fn canonical<E: Engine>(engine: &mut E) -> Self {
        open_unit::<f32, E>(engine)
    }
}

impl Canonical for f64 {
    fn canonical<E: Engine>(engine: &mut E) -> Self {
        open_unit::<f64, E>(engine)
    }
}

macro_rules! impl_canonical_int {
    ($($t:ty),+) => {
        $(
            impl Canonical for $t {
                /// floor(u * n) with n the smaller of the engine range and the
                /// number of non-negative values of the type.
                fn canonical<E: Engine>(engine: &mut E) -> Self {
                    let n = int_range::<E>(<$t>::MAX as u128 + 1);
                    let u = open_unit::<f64, E>(engine);
                    ((u * n as f64) as u128).min(n - 1) as $t
                }
            }
        )+
    };
}

/// Number of values an integer draw may take: max - min + 1 of the engine,
/// capped at the type's count of non-negative values.
#[inline]
fn int_range<E: Engine>(type_range: u128) -> u128 {
    let engine_range = (E::MAX.to_u64() - E::MIN.to_u64()) as u128 + 1;
    engine_range.min(type_range)
}

impl_canonical_int!(u8, u16, u32, u64, usize, i32, i64);

/// Uniform value of type T from one engine draw: a number in (0, 1) for
/// floating point T, an integer in [0, max - min] for integer T. When the
/// engine range is wider than T, integers cover [0, T::MAX] instead.
#[inline]
pub fn generate_canonical<T: Canonical, E: Engine>(engine: &mut E) -> T {
    T::canonical(engine)
}
