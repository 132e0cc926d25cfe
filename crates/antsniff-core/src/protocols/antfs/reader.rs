use super::error::AntFsError;
use crate::protocols::common::{self, Truncated};

/// Field reader over an ANT-FS payload (channel header already stripped).
///
/// Every read names the field it decodes so a truncation error points at
/// the first field the payload could not supply.
pub struct AntFsReader<'a> {
    payload: &'a [u8],
}

impl<'a> AntFsReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn read_u8(&self, field: &'static str, offset: usize) -> Result<u8, AntFsError> {
        common::read_u8(self.payload, offset).map_err(|err| truncated(field, err))
    }

    pub fn read_u16_le(&self, field: &'static str, offset: usize) -> Result<u16, AntFsError> {
        common::read_u16_le(self.payload, offset).map_err(|err| truncated(field, err))
    }

    pub fn read_u32_le(&self, field: &'static str, offset: usize) -> Result<u32, AntFsError> {
        common::read_u32_le(self.payload, offset).map_err(|err| truncated(field, err))
    }

    pub fn read_hex(&self) -> String {
        common::to_hex(self.payload)
    }
}

fn truncated(field: &'static str, err: Truncated) -> AntFsError {
    AntFsError::TruncatedField {
        field,
        needed: err.needed,
        actual: err.actual,
    }
}

#[cfg(test)]
mod tests {
    use super::AntFsReader;
    use crate::protocols::antfs::AntFsError;

    #[test]
    fn truncation_names_the_field() {
        let reader = AntFsReader::new(&[0x02, 0x10, 0x01, 0xaa]);
        let err = reader.read_u32_le("host_serial", 3).unwrap_err();
        assert_eq!(
            err,
            AntFsError::TruncatedField {
                field: "host_serial",
                needed: 7,
                actual: 4
            }
        );
    }
}
