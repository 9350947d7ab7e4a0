use super::BedroomsField;

/// Parse the bedrooms column into an inclusive (min, max) pair.
///
/// A numeric value collapses to a single-value range. A string is tried as
/// "lo-hi", then as a plain integer; non-numeric parts fall through to the
/// next rule rather than failing. Anything else returns the deliberately
/// loose (0, 10) default so messy catalog data never excludes an agency.
/// Total and deterministic over arbitrary input.
pub fn parse_bedroom_range(value: &BedroomsField) -> (i64, i64) {
    match value {
        BedroomsField::Number(count) => (*count, *count),
        // Fractional counts truncate toward zero.
        BedroomsField::Float(count) => {
            let count = *count as i64;
            (count, count)
        }
        BedroomsField::Text(text) => parse_text(text),
    }
}

fn parse_text(raw: &str) -> (i64, i64) {
    let trimmed = raw.trim();

    let parts: Vec<&str> = trimmed.split('-').collect();
    if parts.len() >= 2 {
        if let (Ok(lo), Ok(hi)) = (
            parts[0].trim().parse::<i64>(),
            parts[1].trim().parse::<i64>(),
        ) {
            return (lo, hi);
        }
    }

    match trimmed.parse::<i64>() {
        Ok(single) => (single, single),
        Err(_) => (0, 10),
    }
}
