//! Integration tests for the e2ee workspace.
//! Cross-crate parse, arithmetic, codec and key-exchange round trips.

#[cfg(test)]
mod laws;

#[cfg(test)]
mod tests {
    use e2ee_bignum::{BigInteger, Decoder, Encoder};
    use e2ee_engine::{Engine, EngineConfig};
    use e2ee_types::{CryptoError, LiteralError};

    fn bn(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    // -------------------------------------------------------
    // 1. Parse, square, divide back
    // -------------------------------------------------------
    #[test]
    fn test_square_and_divide_back() {
        let n = bn("123456789012345678901234567890");
        let square = &n * &n;
        assert_eq!(
            square.to_string(),
            "15241578753238836750495351562536198787501905199875019052100"
        );
        let (q, r) = square.div_rem(&n).unwrap();
        assert_eq!(q, n);
        assert!(r.is_zero());
    }

    // -------------------------------------------------------
    // 2. Literal forms agree with each other
    // -------------------------------------------------------
    #[test]
    fn test_literal_forms_agree() {
        let dec = bn("-1311768467294899696");
        let hex = bn("-0x1234567890ABCDF0");
        let oct = bn("-0110642547422052746760");
        let bin = bn("-0b1001000110100010101100111100010010000101010111100110111110000");
        assert_eq!(dec, hex);
        assert_eq!(dec, oct);
        assert_eq!(dec, bin);
        assert_eq!(dec.to_truncated::<i64>(), -0x1234567890ABCDF0);
    }

    #[test]
    fn test_malformed_literals() {
        for text in ["", "-", "0xg", "12a", "0b", "0x", "019", " 1", "1 "] {
            assert!(
                matches!(
                    text.parse::<BigInteger>(),
                    Err(CryptoError::BnMalformedLiteral { .. })
                ),
                "{text:?} should be rejected"
            );
        }
        assert_eq!(
            "-".parse::<BigInteger>(),
            Err(CryptoError::BnMalformedLiteral {
                reason: LiteralError::BareSign
            })
        );
    }

    // -------------------------------------------------------
    // 3. Codec round trips inside a composite record
    // -------------------------------------------------------
    #[test]
    fn test_codec_composite_record() {
        let values = [
            BigInteger::zero(),
            bn("200"),
            bn("-200"),
            bn("0x0102030405"),
            bn("-0x0102030405"),
        ];

        let mut enc = Encoder::new();
        enc.write_len(values.len()).unwrap();
        for (i, v) in values.iter().enumerate() {
            enc.write_str(&format!("v{i}"))
                .unwrap()
                .write_bignum(v)
                .unwrap();
        }
        let data = enc.finish();

        let mut dec = Decoder::new(&data);
        let count = dec.read_len().unwrap();
        assert_eq!(count, values.len());
        for (i, v) in values.iter().enumerate() {
            assert_eq!(dec.read_str().unwrap(), format!("v{i}"));
            assert_eq!(&dec.read_bignum().unwrap(), v);
        }
        dec.finish().unwrap();
    }

    #[test]
    fn test_codec_fixture() {
        let n = bn("-0x0102030405");
        assert_eq!(hex::encode(n.to_bytes().unwrap()), "01050000000504030201");
    }

    // -------------------------------------------------------
    // 4. Multiplication around the native-word split
    // -------------------------------------------------------
    #[test]
    fn test_split_boundary_against_repeated_addition() {
        let below = BigInteger::from(u64::MAX);
        let straddle = BigInteger::from(u64::MAX as u128 + 1) + BigInteger::from(0xABu8);

        for operand in [&below, &straddle] {
            let mut sum = BigInteger::zero();
            for k in 1..=300u32 {
                sum += operand;
                assert_eq!(operand * &BigInteger::from(k), sum);
            }
        }
        assert_eq!(
            &below * &below,
            BigInteger::from(u64::MAX as u128 * u64::MAX as u128)
        );
    }

    // -------------------------------------------------------
    // 5. Key exchange on the default 3072-bit group
    // -------------------------------------------------------
    #[test]
    fn test_default_group_key_exchange_and_persistence() {
        let mut engine = Engine::new(EngineConfig::default());
        engine.prepare_to_pair_with("user1").unwrap();
        engine.prepare_to_pair_with("user2").unwrap();

        let key1 = engine.key_to_send("user1").unwrap();
        let key2 = engine.key_to_send("user2").unwrap();
        engine.set_received_key("user1", &key2).unwrap();
        engine.set_received_key("user2", &key1).unwrap();

        let hash1 = engine.shared_secret("user1").cloned().unwrap();
        let hash2 = engine.shared_secret("user2").cloned().unwrap();
        assert_eq!(hash1, hash2);

        let data = engine.serialize().unwrap();
        let mut restored = Engine::new(EngineConfig::default());
        restored.deserialize(&data).unwrap();
        assert_eq!(restored.shared_secret("user1"), Some(&hash1));
        assert_eq!(restored.shared_secret("user2"), Some(&hash2));
    }

    #[test]
    fn test_engine_secret_matches_direct_computation() {
        let prime = bn("0xFFFFFFFFFFFFFFC5");
        let config = EngineConfig::builder()
            .prime(prime.clone())
            .generator(BigInteger::from(3))
            .build()
            .unwrap();
        let mut engine = Engine::new(config);
        engine.prepare_to_pair_with("peer").unwrap();

        let peer_exponent = BigInteger::from(77);
        let peer_public = BigInteger::from(3).mod_pow(&peer_exponent, &prime).unwrap();
        let ours = engine.key_to_send("peer").unwrap();
        engine.set_received_key("peer", &peer_public).unwrap();

        let expected = ours.mod_pow(&peer_exponent, &prime).unwrap();
        assert_eq!(engine.shared_secret("peer"), Some(&expected));
    }
}
