use itertools::Itertools as _;
use std::fmt::{Debug, Display, Formatter};

/// A randomized identifier for rendered calendar elements.
///
/// Rendered as the canonical `8-4-4-4-12` lowercase hex grouping. The bytes
/// are plain random; uniqueness is practical, not cryptographic, which is all
/// element wiring needs.
#[derive(Copy, Clone, Eq, Hash, PartialEq)]
pub struct Guid {
    bytes: [u8; 16],
}

impl Guid {
    /// Generates a new random Guid.
    pub fn new() -> Guid {
        Guid {
            bytes: rand::random(),
        }
    }

    pub fn from_bytes(bytes: [u8; 16]) -> Guid {
        Guid { bytes }
    }

    pub fn to_bytes(&self) -> [u8; 16] {
        self.bytes
    }

    /// Parses the `8-4-4-4-12` grouping, hex digits in either case.
    ///
    /// Returns `None` for any other shape.
    pub fn parse(s: &str) -> Option<Guid> {
        let mut parts = s.split('-');
        let groups = [
            parts.next()?,
            parts.next()?,
            parts.next()?,
            parts.next()?,
            parts.next()?,
        ];
        if parts.next().is_some() {
            return None;
        }
        if groups.map(str::len) != [8, 4, 4, 4, 12] {
            return None;
        }

        let mut bytes = [0u8; 16];
        let mut cursor = 0;
        for group in groups {
            let decoded = hex::decode(group).ok()?;
            bytes[cursor..cursor + decoded.len()].copy_from_slice(&decoded);
            cursor += decoded.len();
        }
        Some(Guid { bytes })
    }
}

impl Default for Guid {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Guid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let b = &self.bytes;
        let grouped = [&b[0..4], &b[4..6], &b[6..8], &b[8..10], &b[10..16]]
            .iter()
            .map(hex::encode)
            .join("-");
        f.write_str(&grouped)
    }
}

impl Debug for Guid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Guid").field(&format_args!("{self}")).finish()
    }
}

#[test]
fn test_canonical_grouping() {
    let rendered = Guid::new().to_string();
    assert_eq!(rendered.len(), 36);
    for (i, c) in rendered.char_indices() {
        if matches!(i, 8 | 13 | 18 | 23) {
            assert_eq!(c, '-', "at {i} in {rendered}");
        } else {
            assert!(
                c.is_ascii_hexdigit() && !c.is_ascii_uppercase(),
                "at {i} in {rendered}"
            );
        }
    }
}

#[test]
fn test_successive_guids_differ() {
    assert_ne!(Guid::new(), Guid::new());
}

#[test]
fn test_parse_round_trip() {
    let guid = Guid::from_bytes([
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ]);
    assert_eq!(guid.to_string(), "00112233-4455-6677-8899-aabbccddeeff");
    assert_eq!(Guid::parse(&guid.to_string()), Some(guid));
    assert_eq!(Guid::parse("00112233-4455-6677-8899-AABBCCDDEEFF"), Some(guid));

    assert_eq!(Guid::parse(""), None);
    assert_eq!(Guid::parse("not-a-guid"), None);
    assert_eq!(Guid::parse("001122334455-6677-8899-aabb-ccddeeff"), None);
    assert_eq!(Guid::parse("00112233-4455-6677-8899-aabbccddeeff-"), None);
    assert_eq!(Guid::parse("0011223g-4455-6677-8899-aabbccddeeff"), None);
}
