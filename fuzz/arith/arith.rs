#![no_main]

use libfuzzer_sys::fuzz_target;
use vastnum::{BigDouble, Quad};

fuzz_target!(|data: (f64, f64, i64, i64)| {
    let (af, bf, ae, be) = data;

    let a: BigDouble = format!("{af}E{}", ae % 9_000_000_000_000_000).parse().unwrap_or_default();
    let b: BigDouble = format!("{bf}E{}", be % 9_000_000_000_000_000).parse().unwrap_or_default();
    _ = (a + b).to_f64();
    _ = (a - b).to_f64();
    _ = (a * b).to_f64();
    _ = (a / b).to_f64();
    _ = a.pow(bf).to_f64();
    _ = a.sqrt().to_f64();
    _ = a.factorial().to_f64();

    let qa = Quad::from_f64(af) << (ae % 4096);
    let qb = Quad::from_f64(bf) << (be % 4096);
    _ = (qa + qb).to_f64();
    _ = (qa - qb).to_f64();
    _ = (qa * qb).to_f64();
    _ = (qa / qb).to_f64();
    _ = qa.pow(bf).to_f64();
    _ = qa.sqrt().to_f64();
    _ = qa.factorial().to_f64();
    _ = qa.partial_cmp(&qb);
});
