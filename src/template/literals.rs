//! Literal builder methods
//!
//! Raw token text is coerced to its semantic value and kept verbatim in `raw`.
//! Nothing is validated here; malformed numbers surface as NaN.

use super::TemplateBuilder;
use crate::ast::{Literal, LiteralValue, Node, SType};

/// Trait providing literal builder methods
pub trait LiteralBuilders {
    /// Numeric literal: `42`, `0x2a`, `1.5e3`
    fn number_literal(&self, raw: &str) -> Node;

    /// Boolean literal; only the exact text `false` is false
    fn bool_literal(&self, raw: &str) -> Node;

    /// Null literal, tagged for later inference
    fn null_literal(&self, raw: &str) -> Node;

    /// String literal; the text passes through unchanged
    fn string_literal(&self, raw: &str) -> Node;
}

impl LiteralBuilders for TemplateBuilder {
    fn number_literal(&self, raw: &str) -> Node {
        let value = coerce_number(raw);
        if value.is_nan() {
            log::debug!("Numeric literal {:?} does not coerce to a number", raw);
        }
        literal(LiteralValue::Number(value), raw, SType::Number)
    }

    fn bool_literal(&self, raw: &str) -> Node {
        literal(LiteralValue::Bool(raw != "false"), raw, SType::Bool)
    }

    fn null_literal(&self, raw: &str) -> Node {
        literal(LiteralValue::Null, raw, SType::NeedsInference)
    }

    fn string_literal(&self, raw: &str) -> Node {
        literal(LiteralValue::String(raw.to_string()), raw, SType::String)
    }
}

fn literal(value: LiteralValue, raw: &str, s_type: SType) -> Node {
    Node::Literal(Literal {
        value,
        raw: raw.to_string(),
        s_type: Some(s_type),
    })
}

/// Coerce numeric source text the way the host's `Number(text)` does.
///
/// Empty text is `0`; `0x`/`0o`/`0b` prefixes and a signed `Infinity` are
/// accepted; anything else that is not a decimal literal is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let stripped = text
            .strip_prefix(prefix)
            .or_else(|| text.strip_prefix(prefix.to_ascii_uppercase().as_str()));
        if let Some(digits) = stripped {
            return parse_radix(digits, radix);
        }
    }

    let (sign, unsigned) = match text.as_bytes()[0] {
        b'-' => (-1.0, &text[1..]),
        b'+' => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }

    // Rust's float parser also takes `inf`/`nan`, which the host rejects
    let decimal = unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal || !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}
