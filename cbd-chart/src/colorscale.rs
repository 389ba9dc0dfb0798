//! Continuous colour scales.

/// ColorBrewer GnBu, light (low) to dark (high).
pub const GNBU: [(u8, u8, u8); 9] = [
    (247, 252, 240),
    (224, 243, 219),
    (204, 235, 197),
    (168, 221, 181),
    (123, 204, 196),
    (78, 179, 211),
    (43, 140, 190),
    (8, 104, 172),
    (8, 64, 129),
];

/// Position on the scale used when every value is identical.
pub const FLAT_POSITION: f64 = 0.5;

/// Colour at `t` in [0, 1] (clamped), linearly interpolated between stops.
pub fn gnbu(t: f64) -> String {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (GNBU.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    let upper = (lower + 1).min(GNBU.len() - 1);
    let frac = scaled - lower as f64;
    let (r0, g0, b0) = GNBU[lower];
    let (r1, g1, b1) = GNBU[upper];
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    format!("#{:02x}{:02x}{:02x}", mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

/// Map each value onto [0, 1] by the min/max of `values`.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    values
        .iter()
        .map(|v| if span > 0.0 { (v - min) / span } else { FLAT_POSITION })
        .collect()
}

/// Relative luminance of a `#rrggbb` colour, 0 (black) to 1 (white).
#[cfg(test)]
pub(crate) fn luminance(hex: &str) -> Option<f64> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok().map(|c| c as f64 / 255.0);
    Some(0.2126 * channel(0)? + 0.7152 * channel(2)? + 0.0722 * channel(4)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(gnbu(0.0), "#f7fcf0");
        assert_eq!(gnbu(1.0), "#084081");
        assert_eq!(gnbu(-3.0), gnbu(0.0));
        assert_eq!(gnbu(7.0), gnbu(1.0));
    }

    #[test]
    fn test_scale_darkens_monotonically() {
        let mut previous = f64::INFINITY;
        for i in 0..=100 {
            let l = luminance(&gnbu(i as f64 / 100.0)).unwrap();
            assert!(l <= previous + 1e-9, "luminance rose at step {}", i);
            previous = l;
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(&[10.0, 20.0, 30.0]), vec![0.0, 0.5, 1.0]);
        assert_eq!(normalize(&[5.0, 5.0]), vec![FLAT_POSITION, FLAT_POSITION]);
        assert!(normalize(&[]).is_empty());
    }
}
