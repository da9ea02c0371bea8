#![no_main]

use hwinfo_smbios::StringTable;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let table = StringTable::new(data);
    for index in 0..=u8::MAX {
        let _ = table.resolve(index);
    }
});
