//! Builder for synthetic memory device (type 17) structures.

#![allow(dead_code)]

/// Formatted area length of an SMBIOS 3.3+ memory device
pub const LENGTH: u8 = 0x5C;

pub struct MemoryDeviceBuilder {
    pub size: u16,
    pub extended_size: Option<u32>,
    pub total_width: u16,
    pub data_width: u16,
    pub speed: u16,
    pub extended_speed: Option<u32>,
    pub memory_type: u8,
    pub device_locator: Option<&'static str>,
    pub bank_locator: Option<&'static str>,
    pub manufacturer: Option<&'static str>,
    pub part_number: Option<&'static str>,
}

impl Default for MemoryDeviceBuilder {
    fn default() -> Self {
        Self {
            size: 8192,
            extended_size: None,
            total_width: 72,
            data_width: 64,
            speed: 3200,
            extended_speed: None,
            memory_type: 0x1A,
            device_locator: Some("DIMM 0"),
            bank_locator: Some("BANK 0"),
            manufacturer: Some("Acme Corp"),
            part_number: Some("1234-5678"),
        }
    }
}

impl MemoryDeviceBuilder {
    pub fn build(&self) -> Vec<u8> {
        let mut raw = vec![0u8; usize::from(LENGTH)];
        raw[0x00] = 17;
        raw[0x01] = LENGTH;
        raw[0x02..0x04].copy_from_slice(&0x0040u16.to_le_bytes());

        raw[0x08..0x0A].copy_from_slice(&self.total_width.to_le_bytes());
        raw[0x0A..0x0C].copy_from_slice(&self.data_width.to_le_bytes());

        match self.extended_size {
            Some(extended) => {
                raw[0x0C..0x0E].copy_from_slice(&0x7FFFu16.to_le_bytes());
                raw[0x1C..0x20].copy_from_slice(&extended.to_le_bytes());
            }
            None => raw[0x0C..0x0E].copy_from_slice(&self.size.to_le_bytes()),
        }

        raw[0x12] = self.memory_type;

        match self.extended_speed {
            Some(extended) => {
                raw[0x15..0x17].copy_from_slice(&0xFFFFu16.to_le_bytes());
                raw[0x54..0x58].copy_from_slice(&extended.to_le_bytes());
            }
            None => raw[0x15..0x17].copy_from_slice(&self.speed.to_le_bytes()),
        }

        let mut strings = Vec::new();
        let mut next_index = 1u8;
        for (offset, value) in [
            (0x10, self.device_locator),
            (0x11, self.bank_locator),
            (0x17, self.manufacturer),
            (0x1A, self.part_number),
        ] {
            if let Some(value) = value {
                strings.extend_from_slice(value.as_bytes());
                strings.push(0);
                raw[offset] = next_index;
                next_index += 1;
            }
        }
        if strings.is_empty() {
            strings.push(0);
        }
        strings.push(0);

        raw.extend_from_slice(&strings);
        raw
    }
}
