//! First-match descriptor selection over an ordered catalog.

use crate::catalog::{Catalog, FormatDescriptor};

/// Finds the first catalog descriptor compatible with `value`.
///
/// Filters are applied in catalog order: type, length, region, then the
/// descriptor's precompiled shape rule. The first descriptor passing all
/// four wins; there is no scoring or fuzzy matching, so catalog order is
/// the only tie-break.
///
/// Region filtering is strict in both directions: with no requested
/// region only regionless descriptors qualify, and with a requested
/// region only descriptors tagged with that region qualify.
///
/// The length filter counts every character of `value`. A phone value
/// that kept its `+` is therefore one longer than its digit count and
/// will not match a digits-only template; such values fall back to the
/// caller's raw input.
pub fn find_format<'c>(
    catalog: &'c Catalog,
    value: &str,
    kind: &str,
    region: Option<&str>,
) -> Option<&'c FormatDescriptor> {
    let kind = kind.to_lowercase();
    let region = region.map(str::to_lowercase);

    catalog.iter().find(|descriptor| {
        descriptor.kind() == kind
            && descriptor.length() == value.len()
            && descriptor.region() == region.as_deref()
            && descriptor.shape().is_match(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r######"[
                { "type": "code", "length": 4, "format": "##/##" },
                { "type": "code", "length": 4, "format": "##-##" },
                { "type": "code", "length": 4, "region": "brazil", "format": "##.##" },
                { "type": "phone", "length": 9, "region": "brazil", "format": "9####-####" }
            ]"######,
        )
        .expect("valid test catalog")
    }

    #[test]
    fn test_first_match_wins() {
        let catalog = catalog();
        let matched = find_format(&catalog, "1234", "code", None).unwrap();
        assert_eq!(matched.template(), "##/##");
    }

    #[test]
    fn test_type_is_case_insensitive() {
        let catalog = catalog();
        assert!(find_format(&catalog, "1234", "CODE", None).is_some());
        assert!(find_format(&catalog, "1234", "other", None).is_none());
    }

    #[test]
    fn test_length_must_be_exact() {
        let catalog = catalog();
        assert!(find_format(&catalog, "123", "code", None).is_none());
        assert!(find_format(&catalog, "12345", "code", None).is_none());
    }

    #[test]
    fn test_region_filter_is_strict() {
        let catalog = catalog();

        // Requested region selects only region-tagged descriptors
        let matched = find_format(&catalog, "1234", "code", Some("Brazil")).unwrap();
        assert_eq!(matched.template(), "##.##");

        // Unknown region matches nothing, even though regionless
        // descriptors of the right length exist
        assert!(find_format(&catalog, "1234", "code", Some("portugal")).is_none());

        // Region-tagged descriptors never match a regionless request
        assert!(find_format(&catalog, "911112222", "phone", None).is_none());
    }

    #[test]
    fn test_shape_rule_rejects_wrong_leading_digit() {
        let catalog = catalog();
        assert!(find_format(&catalog, "911112222", "phone", Some("brazil")).is_some());
        assert!(find_format(&catalog, "811112222", "phone", Some("brazil")).is_none());
    }

    #[test]
    fn test_plus_prefixed_value_fails_length_filter() {
        let catalog = catalog();
        // "+" counts toward the value's length, so no digits-only
        // template of the right digit count can match
        assert!(find_format(&catalog, "+1234", "code", None).is_none());
    }
}
