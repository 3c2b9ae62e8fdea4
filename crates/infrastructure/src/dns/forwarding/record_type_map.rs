//! Mapping between `ferrous_resolve_domain::RecordType` and `hickory_proto::rr::RecordType`

use ferrous_resolve_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::AAAA => HickoryRecordType::AAAA,
        }
    }

    /// Convert hickory RecordType → domain RecordType
    ///
    /// Returns `None` for types the resolver has no name for.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::NS => Some(RecordType::NS),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            HickoryRecordType::SOA => Some(RecordType::SOA),
            HickoryRecordType::PTR => Some(RecordType::PTR),
            HickoryRecordType::MX => Some(RecordType::MX),
            HickoryRecordType::TXT => Some(RecordType::TXT),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            _ => None,
        }
    }

    /// Presentation mnemonic for any hickory type, known to the domain or not.
    pub fn mnemonic(hickory_type: HickoryRecordType) -> String {
        match Self::from_hickory(hickory_type) {
            Some(record_type) => record_type.as_str().to_string(),
            None => hickory_type.to_string(),
        }
    }
}
