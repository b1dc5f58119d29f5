use std::io::{ErrorKind, Write};
use rand_core::{RngCore, SeedableRng};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use trng_engines::*;

// Streams raw engine output to stdout for external test batteries:
//
//   trng_stream lcg64_shift 42 | RNG_test stdin64
//
// Arguments: engine name (lcg64, lcg64_shift, minstd, mrg2 ... mrg4,
// mrg5s, yarn2 ... yarn4, mt19937_64 or any lagged Fibonacci preset),
// optional seed, optional `reverse` to bit-reverse
// every 64-bit word. Set RUST_LOG=debug for diagnostics on stderr.

fn open_engine(name: &str, seed: u64) -> Result<Box<dyn RngCore + Send>, ParseError> {
    match name {
        "lcg64" => Ok(Box::new(Lcg64::new(seed))),
        "lcg64_shift" => Ok(Box::new(Lcg64Shift::new(seed))),
        "minstd" => Ok(Box::new(Minstd::new(seed))),
        "mrg2" => Ok(Box::new(Mrg2::seed_from_u64(seed))),
        "mrg3" => Ok(Box::new(Mrg3::seed_from_u64(seed))),
        "mrg4" => Ok(Box::new(Mrg4::seed_from_u64(seed))),
        "mrg5s" => Ok(Box::new(Mrg5s::new(seed))),
        "yarn2" => Ok(Box::new(Yarn2::seed_from_u64(seed))),
        "yarn3" => Ok(Box::new(Yarn3::seed_from_u64(seed))),
        "yarn4" => Ok(Box::new(Yarn4::seed_from_u64(seed))),
        "mt19937_64" => Ok(Box::new(Mt19937_64::new(seed))),
        _ => presets::by_name(name, seed).ok_or_else(|| ParseError::UnknownName(name.to_string())),
    }
}

/// Output bytes of one 64-bit word, optionally bit-reversed.
/// Always use Little-Endian.
#[inline]
fn word_bytes(x: u64, reverse: bool) -> [u8; 8] {
    let z = if reverse { x.reverse_bits() } else { x };
    z.to_le_bytes()
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "lcg64_shift".to_string());
    let seed: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => 0,
    };
    let reverse = matches!(args.next().as_deref(), Some("reverse"));

    let mut rnd = open_engine(&name, seed)?;
    info!(engine = %name, seed, reverse, "streaming");

    let mut stdout = std::io::stdout().lock();
    let mut v: Vec<u8> = Vec::with_capacity(0x10000);
    let mut bytes: u64 = 0;

    loop {
        v.extend_from_slice(&word_bytes(rnd.next_u64(), reverse));

        if v.len() >= 0x10000 {
            match stdout.write_all(v.as_slice()) {
                Ok(()) => {}
                // The consumer hanging up is the normal way to stop.
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!(bytes, "consumer closed the stream");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            }
            bytes += v.len() as u64;
            v.clear();
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!(error = %e, "trng_stream failed");
        std::process::exit(1);
    }
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] pub fn run_tests() {
        assert_eq!(word_bytes(0x0102_0304_0506_0708, false), [8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(word_bytes(1, true), [0, 0, 0, 0, 0, 0, 0, 0x80]);
        assert_eq!(word_bytes(0x80, true), [0, 0, 0, 0, 0, 0, 0, 1]);

        let mut a = open_engine("minstd", 3).unwrap();
        let mut b = Minstd::new(3);
        assert_eq!(a.next_u64(), b.next_u64());
        assert!(open_engine("r250_32", 3).is_ok());

        let mut a = open_engine("mrg3", 5).unwrap();
        let mut b = Mrg3::default();
        b.seed(5);
        assert_eq!(a.next_u64(), b.next_u64());
        let mut a = open_engine("mt19937_64", 0).unwrap();
        assert_eq!(a.next_u64(), Mt19937_64::new(0).next_u64());
        for name in ["lcg64", "mrg2", "mrg4", "yarn2", "yarn3", "yarn4"] {
            assert!(open_engine(name, 1).is_ok(), "{}", name);
        }
        assert_eq!(open_engine("nope", 3).err(), Some(ParseError::UnknownName("nope".to_string())));
    }
}
