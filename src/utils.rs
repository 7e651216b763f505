use std::fmt::Display;

/// Left-pads the stringified `value` to `len` with `fill`.
///
/// A zero `len` means the default width of 2.
pub fn pad(value: impl Display, len: usize, fill: char) -> String {
    let len = if len == 0 { 2 } else { len };
    let mut out = value.to_string();
    while out.chars().count() < len {
        out.insert(0, fill);
    }
    out
}

/// The memo hash used for page and attribute cache keys.
///
/// Classic ×31 rolling hash over the UTF-16 code units of `s`, wrapping in
/// signed 32-bit space. The empty string hashes to 0.
pub fn hash(s: &str) -> i32 {
    let mut hashcode = 0i32;
    for unit in s.encode_utf16() {
        hashcode = hashcode
            .wrapping_shl(5)
            .wrapping_sub(hashcode)
            .wrapping_add(unit as i32);
    }
    hashcode
}

/// Whether `items` holds anything.
pub fn has_items<T>(items: &[T]) -> bool {
    !items.is_empty()
}

#[test]
fn test_pad() {
    assert_eq!(pad(3, 2, '0'), "03");
    // zero width means the default of 2
    assert_eq!(pad(3, 0, '0'), "03");
    assert_eq!(pad("1234", 2, '0'), "1234");
    assert_eq!(pad(7, 4, ' '), "   7");
    assert_eq!(pad("", 3, '*'), "***");
}

#[test]
fn test_hash() {
    assert_eq!(hash(""), 0);
    assert_eq!(hash("a"), 97);
    assert_eq!(hash("abc"), 96354);
    assert_eq!(hash("2024-03"), hash("2024-03"));
    assert_ne!(hash("2024-03"), hash("2024-04"));
    // long input wraps instead of overflowing
    let long = "calendar".repeat(64);
    assert_eq!(hash(&long), hash(&long));
    // non-ascii hashes by UTF-16 code unit
    assert_eq!(hash("é"), 0xe9);
}

#[test]
fn test_has_items() {
    assert!(has_items(&[1]));
    assert!(!has_items::<i32>(&[]));
}
