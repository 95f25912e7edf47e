//! Input normalization: reduce raw text to its canonical digit sequence.

/// Strips `value` down to its ASCII digits.
///
/// Values typed "phone" (case-insensitive) additionally keep `+`
/// characters so international prefixes survive normalization; every
/// other character is dropped regardless of type.
///
/// Normalization is deterministic and idempotent, and never fails: input
/// with no digits normalizes to the empty string.
///
/// ```
/// use idfmt::normalize;
///
/// assert_eq!(normalize("+55 11 2222 3333", Some("phone")), "+551122223333");
/// assert_eq!(normalize("+55 11 2222 3333", None), "551122223333");
/// ```
pub fn normalize(value: &str, kind: Option<&str>) -> String {
    let keep_plus = kind.is_some_and(|k| k.eq_ignore_ascii_case("phone"));

    value
        .chars()
        .filter(|c| c.is_ascii_digit() || (keep_plus && *c == '+'))
        .collect()
}
