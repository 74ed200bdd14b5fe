//! Parsers for command line values argh can't parse on its own.

use skin_weight_normalize::COMPONENTS;

/// Parses four floats separated by commas and/or whitespace, e.g. `1,0,0,0` or `"0.5 0.5 0 0"`.
///
/// Range checks are left to the settings builder.
pub fn parse_zero_replacement(value: &str) -> Result<[f32; COMPONENTS], String> {
    let parts: Vec<&str> = value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != COMPONENTS {
        return Err(format!(
            "expected {COMPONENTS} numbers separated by commas or spaces, got {} in {value:?}",
            parts.len()
        ));
    }

    let mut replacement = [0.0; COMPONENTS];
    for (slot, part) in replacement.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|e| format!("invalid number {part:?} in {value:?}: {e}"))?;
    }
    Ok(replacement)
}
