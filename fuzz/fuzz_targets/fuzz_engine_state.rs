#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut engine = e2ee_engine::Engine::new(e2ee_engine::EngineConfig::default());
    if engine.deserialize(data).is_ok() {
        assert_eq!(engine.serialize().unwrap(), data);
    }
});
