//! Attribute values that never need translation.

use super::ignore_set::IgnoreSet;

/// Namespaced attributes (`xml:lang`, `xmlns:xlink`, ...) are normalised to
/// a leading `:` by the parser.
const NAMESPACE_PREFIX: &str = ":xml";

/// Whether an attribute is exempt from the missing-attribute check.
///
/// Exempt when the value is absent, empty, a boolean literal, or numeric
/// (optionally with a `px` suffix), when the name is namespaced, or when
/// the name is in the ignore set.
pub fn is_exempt(name: &str, value: Option<&str>, ignore_set: &IgnoreSet) -> bool {
    let value_exempt = match value {
        None => true,
        Some(value) => value.is_empty() || is_boolean_literal(value) || is_numeric(value),
    };
    value_exempt || name.starts_with(NAMESPACE_PREFIX) || ignore_set.contains(name)
}

fn is_boolean_literal(value: &str) -> bool {
    value == "true" || value == "false"
}

/// A value is numeric when parsing it as a number and formatting it back
/// reproduces it exactly. `"007"`, `" 5"`, `"+5"` and `"1e3"` are rejected.
fn is_numeric(value: &str) -> bool {
    let value = value.strip_suffix("px").unwrap_or(value);
    value
        .parse::<f64>()
        .is_ok_and(|number| canonical_number(number) == value)
}

/// Canonical (shortest round-trip) spelling of a number.
///
/// Mirrors the ECMAScript Number-to-String conversion: `-0` prints as `0`
/// and magnitudes outside `[1e-6, 1e21)` use exponent notation with an
/// explicit exponent sign.
fn canonical_number(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_string();
    }
    if number.is_infinite() {
        let sign = if number < 0.0 { "-" } else { "" };
        return format!("{}Infinity", sign);
    }
    if number == 0.0 {
        return "0".to_string();
    }

    let magnitude = number.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return number.to_string();
    }

    let exp = format!("{:e}", number);
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exp,
    }
}
