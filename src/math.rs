use nalgebra as na;

/// Euclidean distance between two centroids, in the input's normalised units
#[inline]
pub fn centroid_distance(a: &na::Point2<f64>, b: &na::Point2<f64>) -> f64 {
    na::distance(a, b)
}

/// Shortest round-trip text for `value`: positional between `1e-4` and `1e16`
/// with at least one fractional digit, otherwise `d.ddde±XX`.
pub fn short_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` already yields the shortest digits that round-trip, e.g. `-1.25e-5`
    let sci = format!("{:e}", value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(m) => ("-", m),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if !(-4..16).contains(&exp) {
        let (head, tail) = digits.split_at(1);
        let frac = if tail.is_empty() {
            String::new()
        } else {
            format!(".{}", tail)
        };
        let exp_sign = if exp < 0 { '-' } else { '+' };

        return format!("{}{}{}e{}{:02}", sign, head, frac, exp_sign, exp.abs());
    }

    let point = exp + 1;
    let body = if point <= 0 {
        format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
    } else if point as usize >= digits.len() {
        format!("{}{}.0", digits, "0".repeat(point as usize - digits.len()))
    } else {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    };

    format!("{}{}", sign, body)
}
