//! Standard swatch palette used to name colors picked by hex

/// (name, hex) pairs offered by the admin color picker
pub const STANDARD_COLORS: [(&str, &str); 7] = [
    ("Black", "#000000"),
    ("Orange", "#FFA500"),
    ("Skin/Cream", "#F5DEB3"),
    ("Blue", "#0000FF"),
    ("Gray", "#808080"),
    ("Green", "#008000"),
    ("Maroon", "#800000"),
];

/// Parse `#rrggbb` or `rrggbb` (case-insensitive)
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> f64 {
    let d = |x: u8, y: u8| (f64::from(x) - f64::from(y)).powi(2);
    (d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)).sqrt()
}

/// Name of the palette entry nearest to `hex` by RGB distance
pub fn closest_standard_color(hex: &str) -> Option<&'static str> {
    let rgb = parse_hex(hex)?;
    STANDARD_COLORS
        .iter()
        .filter_map(|(name, code)| parse_hex(code).map(|c| (*name, distance(rgb, c))))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name)
}
