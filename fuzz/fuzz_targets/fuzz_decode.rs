#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = e2ee_bignum::BigInteger::from_bytes(data) {
        assert_eq!(value.to_bytes().unwrap(), data);
    }
});
