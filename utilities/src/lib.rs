/// Formats an axis value compactly.
///
/// Values outside `1e-2..=1e4` in magnitude are written in scientific notation
/// with 4 significant digits, everything else with up to 4 decimal places and
/// trailing zeros removed. Zero is always written as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !(1e-2..=1e4).contains(&value.abs()) {
        format!("{:.4e}", value)
    } else {
        let s = format!("{:.4}", value);
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

pub fn assert_equal(left: f64, right: f64) {
    let max = left.abs().max(right.abs());
    if max < f64::EPSILON {
        // If both values are close to zero, we consider them equal
        return;
    }
    let rel_diff = (left - right).abs() / max;
    assert!(
        rel_diff < 1e-9,
        "Assertion failed: left ({}) and right ({}) are not approximately equal. Relative difference: {}",
        left,
        right,
        rel_diff
    );
}

pub fn assert_equal_slice(left: &[f64], right: &[f64]) {
    assert_eq!(
        left.len(),
        right.len(),
        "Assertion failed: left has {} values, right has {}",
        left.len(),
        right.len()
    );
    for (l, r) in left.iter().zip(right) {
        assert_equal(*l, *r);
    }
}
