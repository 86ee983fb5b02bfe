use scrollyt_protocol::{Axis, AxisInput, Unit};

use crate::error::{Result, ValidationError};

/// Resolve the unit shared by the two endpoints of `axis`.
///
/// Detection is by substring: a candidate unit matches when one endpoint
/// contains its token and the other endpoint either contains it too or is
/// zero. Candidates are tried in [`Unit::CANDIDATES`] order and the last
/// match wins. Two nulls or two zeros give a unitless axis.
pub fn check_units(axis: Axis, start: &AxisInput, stop: &AxisInput) -> Result<Unit> {
    let mismatch = || ValidationError::UnitMismatch {
        axis,
        start: start.to_string(),
        stop: stop.to_string(),
    };

    if start.is_null() && stop.is_null() {
        return Ok(Unit::None);
    }
    if start.is_zero() && stop.is_zero() {
        return Ok(Unit::None);
    }
    if start.is_null() || stop.is_null() {
        return Err(mismatch());
    }

    let (s, e) = (start.to_string(), stop.to_string());
    let mut found = None;
    for unit in Unit::CANDIDATES {
        let token = unit.token();
        let forward = s.contains(token) && (e.contains(token) || stop.is_zero());
        let backward = e.contains(token) && (s.contains(token) || start.is_zero());
        if forward || backward {
            found = Some(unit);
        }
    }
    found.ok_or_else(mismatch)
}

/// Numeric magnitude of an endpoint once its unit token is removed.
///
/// Zero stays zero and null stays null. Text loses the first occurrence of
/// the unit token and is read like `parseInt`: fractions are truncated.
pub fn clear_units(axis: Axis, value: &AxisInput, unit: Unit) -> Result<Option<i64>> {
    match value {
        AxisInput::Null => Ok(None),
        AxisInput::Number(n) if *n == 0.0 => Ok(Some(0)),
        AxisInput::Number(n) if n.is_finite() => Ok(Some(n.trunc() as i64)),
        AxisInput::Number(_) => Err(ValidationError::InvalidMagnitude {
            axis,
            value: value.to_string(),
        }),
        AxisInput::Text(text) => {
            let stripped = text.replacen(unit.token(), "", 1);
            parse_int(&stripped)
                .map(Some)
                .ok_or_else(|| ValidationError::InvalidMagnitude {
                    axis,
                    value: text.clone(),
                })
        }
    }
}

/// Leading base-10 integer of `text`: optional whitespace, optional sign,
/// then digits up to the first non-digit. `None` when there are no digits.
pub fn parse_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
