#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(value) = text.parse::<e2ee_bignum::BigInteger>() {
            let reparsed: e2ee_bignum::BigInteger = value.to_string().parse().unwrap();
            assert_eq!(reparsed, value);
        }
    }
});
