use crate::{Body, LineErrors, Sample};

/// Decorations some writers leave around numbers, e.g. `Some(1.5)`.
const DECORATIONS: [&str; 3] = ["Some", "(", ")"];

/// Strips every decoration from `field` and parses what is left as a float.
pub fn clean(field: &str) -> Result<f64, LineErrors> {
    let mut value = field.to_string();
    for decoration in DECORATIONS {
        value = value.replace(decoration, "");
    }
    let value = value.trim();
    value
        .parse::<f64>()
        .map_err(|source| LineErrors::InvalidNumber {
            value: value.to_string(),
            source,
        })
}

/// Parses one `LABEL:X,Y` line.
pub fn parse_line(line: &str) -> Result<(Body, Sample), LineErrors> {
    let (label, values) = split_pair(line, ':')
        .ok_or_else(|| LineErrors::MalformedLine(line.to_string()))?;
    let body: Body = label.parse()?;
    let (x, y) = split_pair(values, ',')
        .ok_or_else(|| LineErrors::MalformedValues(values.to_string()))?;

    Ok((body, Sample::new(clean(x)?, clean(y)?)))
}

/// Splits on `separator`, requiring it to occur exactly once.
fn split_pair(s: &str, separator: char) -> Option<(&str, &str)> {
    let (left, right) = s.split_once(separator)?;
    if right.contains(separator) {
        return None;
    }
    Some((left, right))
}
