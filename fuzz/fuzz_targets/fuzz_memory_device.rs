#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Raw DMI structures are at most a few hundred bytes
    if data.len() > 4096 {
        return;
    }
    if let Ok(decoded) = hwinfo_smbios::decode_memory_device(data) {
        let _ = serde_json::to_string(&decoded.descriptor);
    }
});
