#![no_main]

use libfuzzer_sys::fuzz_target;
use vastnum::{BigDouble, Quad};

fuzz_target!(|data: &str| {
    if let Ok(v) = data.parse::<BigDouble>() {
        _ = v.to_string();
        _ = v.to_f64();
    }
    if let Ok(v) = data.parse::<Quad>() {
        _ = v.to_string();
        _ = v.to_f64();
        _ = v.to_hex_exponential();
    }
});
