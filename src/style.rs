//! Pure lookup functions mapping raw CSS values onto the target project's
//! utility tokens. Every function is total: unmatched input falls back to a
//! neutral default instead of failing.

/// Fallback token for colors nothing else matches.
const DEFAULT_COLOR: &str = "gray-500";

/// Map a raw CSS color value onto the closest palette token.
///
/// Bucketing is deliberately coarse: RGB ranges, not perceptual distance.
pub fn map_color(raw: &str) -> String {
    let value = raw.trim().to_ascii_lowercase();

    if value.is_empty() || value == "transparent" || value == "none" {
        return "transparent".to_string();
    }

    if let Some(hex) = value.strip_prefix('#') {
        if let Some((r, g, b)) = parse_hex(hex) {
            return bucket_rgb(r, g, b).to_string();
        }
        return DEFAULT_COLOR.to_string();
    }

    if value.starts_with("rgb") {
        return map_rgb_function(&value);
    }

    named_color(&value).unwrap_or(DEFAULT_COLOR).to_string()
}

/// Background utility class for a raw color value.
pub fn background_class(raw: &str) -> String {
    format!("bg-{}", map_color(raw))
}

/// Text utility class for a raw color value.
pub fn text_class(raw: &str) -> String {
    format!("text-{}", map_color(raw))
}

/// Border utility class for a raw color value.
pub fn border_class(raw: &str) -> String {
    format!("border-{}", map_color(raw))
}

/// Bucket a mapped color token into the button color families the target
/// schema understands.
pub fn button_color(token: &str) -> &'static str {
    for family in ["pink", "purple", "blue", "green", "yellow", "red"] {
        if token.contains(family) {
            return match family {
                "pink" => "pink",
                "purple" => "purple",
                "blue" => "blue",
                "green" => "green",
                "yellow" => "yellow",
                _ => "red",
            };
        }
    }
    "gray"
}

/// Map a raw size value onto the spacing scale.
///
/// Percentage sizes are not convertible and collapse to the `normal`
/// sentinel; anything beyond the scale is `large`.
pub fn map_spacing(raw: &str) -> String {
    let Some(px) = to_pixels(raw) else {
        return "normal".to_string();
    };

    if px <= 0.0 {
        return "none".to_string();
    }
    if px <= 1.0 {
        return "hairline".to_string();
    }

    const SCALE: [(f64, &str); 17] = [
        (2.0, "0.5"),
        (4.0, "1"),
        (6.0, "1.5"),
        (8.0, "2"),
        (12.0, "3"),
        (16.0, "4"),
        (20.0, "5"),
        (24.0, "6"),
        (32.0, "8"),
        (40.0, "10"),
        (48.0, "12"),
        (64.0, "16"),
        (80.0, "20"),
        (96.0, "24"),
        (128.0, "32"),
        (160.0, "40"),
        (192.0, "48"),
    ];
    for (limit, step) in SCALE {
        if px <= limit {
            return step.to_string();
        }
    }
    "large".to_string()
}

/// Decompose a padding shorthand into (top, bottom) spacing tokens.
///
/// One value applies to both sides, two values use the vertical component,
/// four values keep top and bottom only; the target schema has no
/// side-aware horizontal group, so left and right are dropped. Any other
/// arity is rejected.
pub fn map_padding_shorthand(raw: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    match parts.as_slice() {
        [all] => {
            let v = map_spacing(all);
            Some((v.clone(), v))
        }
        [vertical, _horizontal] => {
            let v = map_spacing(vertical);
            Some((v.clone(), v))
        }
        [top, _right, bottom, _left] => Some((map_spacing(top), map_spacing(bottom))),
        _ => None,
    }
}

/// Margin shorthand follows the padding rules exactly.
pub fn map_margin_shorthand(raw: &str) -> Option<(String, String)> {
    map_padding_shorthand(raw)
}

/// Map a raw font-size value onto the named type scale.
pub fn map_font_size(raw: &str) -> &'static str {
    let Some(px) = to_pixels(raw) else {
        return "base";
    };
    match px {
        v if v <= 12.0 => "xs",
        v if v <= 14.0 => "sm",
        v if v <= 16.0 => "base",
        v if v <= 18.0 => "lg",
        v if v <= 20.0 => "xl",
        v if v <= 24.0 => "2xl",
        v if v <= 30.0 => "3xl",
        v if v <= 36.0 => "4xl",
        v if v <= 48.0 => "5xl",
        _ => "6xl",
    }
}

/// Map a numeric column-size percentage onto the width fractions the target
/// layout supports. Total over [0, 100]; larger-or-equal threshold rule.
pub fn map_column_width(size: f64) -> &'static str {
    match size {
        v if v <= 25.0 => "1/4",
        v if v <= 33.33 => "1/3",
        v if v <= 50.0 => "1/2",
        v if v <= 66.66 => "2/3",
        v if v <= 75.0 => "3/4",
        _ => "full",
    }
}

/// Normalize a CSS length to pixels. Returns None for percentages and
/// anything unparsable.
fn to_pixels(raw: &str) -> Option<f64> {
    let value = raw.trim().to_ascii_lowercase();
    if value.ends_with('%') {
        return None;
    }

    let (number, factor) = if let Some(n) = value.strip_suffix("rem") {
        (n, 16.0)
    } else if let Some(n) = value.strip_suffix("em") {
        (n, 16.0)
    } else if let Some(n) = value.strip_suffix("pt") {
        (n, 1.333)
    } else if let Some(n) = value.strip_suffix("px") {
        (n, 1.0)
    } else {
        (value.as_str(), 1.0)
    };

    number.trim().parse::<f64>().ok().map(|n| n * factor)
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    // Byte-indexed slicing below; multibyte input is malformed hex anyway.
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some((r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Parse `rgb(...)` / `rgba(...)`. Alpha below 0.5 counts as transparent;
/// otherwise the channels go through the same bucketing as hex input.
fn map_rgb_function(value: &str) -> String {
    let inner = value
        .trim_start_matches("rgba")
        .trim_start_matches("rgb")
        .trim_start_matches('(')
        .trim_end_matches(')');
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() < 3 {
        return DEFAULT_COLOR.to_string();
    }

    if let Some(alpha) = parts.get(3).and_then(|a| a.parse::<f64>().ok()) {
        if alpha < 0.5 {
            return "transparent".to_string();
        }
    }

    let channel = |s: &str| s.parse::<f64>().ok().map(|v| v.clamp(0.0, 255.0) as u8);
    match (channel(parts[0]), channel(parts[1]), channel(parts[2])) {
        (Some(r), Some(g), Some(b)) => bucket_rgb(r, g, b).to_string(),
        _ => DEFAULT_COLOR.to_string(),
    }
}

/// Coarse RGB-range bucketing onto the fixed palette.
fn bucket_rgb(r: u8, g: u8, b: u8) -> &'static str {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if min >= 240 {
        return "white";
    }
    if max <= 32 {
        return "black";
    }
    // Low saturation: pick a gray by lightness.
    if max - min < 24 {
        return if max >= 192 {
            "gray-100"
        } else if max >= 96 {
            "gray-500"
        } else {
            "gray-800"
        };
    }

    let high = |v: i32| v >= 160;
    let low = |v: i32| v < 96;

    if high(r) && high(g) && !high(b) {
        "yellow-400"
    } else if high(r) && high(b) {
        if r >= b { "pink-500" } else { "purple-600" }
    } else if high(r) && low(g) {
        "red-600"
    } else if high(g) && !high(r) {
        if high(b) { "blue-600" } else { "green-600" }
    } else if high(b) {
        if r > g { "purple-600" } else { "blue-600" }
    } else if r >= g && r >= b {
        "red-600"
    } else if g >= b {
        "green-600"
    } else {
        "blue-600"
    }
}

fn named_color(name: &str) -> Option<&'static str> {
    let token = match name {
        "white" => "white",
        "black" => "black",
        "red" | "crimson" | "firebrick" => "red-600",
        "green" | "lime" | "forestgreen" => "green-600",
        "blue" | "navy" | "royalblue" => "blue-600",
        "yellow" | "gold" | "orange" => "yellow-400",
        "purple" | "violet" | "indigo" => "purple-600",
        "pink" | "magenta" | "fuchsia" => "pink-500",
        "gray" | "grey" | "silver" => "gray-500",
        _ => return None,
    };
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_width_thresholds() {
        assert_eq!(map_column_width(25.0), "1/4");
        assert_eq!(map_column_width(33.33), "1/3");
        assert_eq!(map_column_width(50.0), "1/2");
        assert_eq!(map_column_width(66.66), "2/3");
        assert_eq!(map_column_width(75.0), "3/4");
        assert_eq!(map_column_width(90.0), "full");
        assert_eq!(map_column_width(0.0), "1/4");
        assert_eq!(map_column_width(100.0), "full");
    }

    #[test]
    fn font_size_boundaries() {
        assert_eq!(map_font_size("16px"), "base");
        assert_eq!(map_font_size("24px"), "2xl");
        assert_eq!(map_font_size("1.5rem"), "2xl");
        assert_eq!(map_font_size("12px"), "xs");
        assert_eq!(map_font_size("60px"), "6xl");
        assert_eq!(map_font_size("120%"), "base");
    }

    #[test]
    fn spacing_buckets() {
        assert_eq!(map_spacing("0"), "none");
        assert_eq!(map_spacing("0px"), "none");
        assert_eq!(map_spacing("1px"), "hairline");
        assert_eq!(map_spacing("16px"), "4");
        assert_eq!(map_spacing("1em"), "4");
        assert_eq!(map_spacing("48px"), "12");
        assert_eq!(map_spacing("300px"), "large");
        assert_eq!(map_spacing("50%"), "normal");
    }

    #[test]
    fn padding_shorthand_keeps_vertical_only() {
        assert_eq!(
            map_padding_shorthand("16px"),
            Some(("4".to_string(), "4".to_string()))
        );
        assert_eq!(
            map_padding_shorthand("16px 32px"),
            Some(("4".to_string(), "4".to_string()))
        );
        // Four values: left/right are dropped by design.
        assert_eq!(
            map_padding_shorthand("8px 100px 24px 100px"),
            Some(("2".to_string(), "6".to_string()))
        );
        assert_eq!(map_padding_shorthand("1px 2px 3px"), None);
    }

    #[test]
    fn hex_colors() {
        assert_eq!(map_color("#ffffff"), "white");
        assert_eq!(map_color("#fff"), "white");
        assert_eq!(map_color("#000000"), "black");
        assert_eq!(map_color("#ff0000"), "red-600");
        assert_eq!(map_color("#00aa00"), "green-600");
        assert_eq!(map_color("#0000ff"), "blue-600");
        assert_eq!(map_color("#ffdd00"), "yellow-400");
        assert_eq!(map_color("#888888"), "gray-500");
        assert_eq!(map_color("#zzz"), "gray-500");
    }

    #[test]
    fn non_ascii_hex_falls_back_to_default() {
        assert_eq!(map_color("#é1"), "gray-500");
        assert_eq!(map_color("#ééé"), "gray-500");
        assert_eq!(map_color("#caf\u{e9}00"), "gray-500");
    }

    #[test]
    fn rgb_alpha_threshold() {
        assert_eq!(map_color("rgba(255, 0, 0, 0.4)"), "transparent");
        assert_eq!(map_color("rgba(255, 0, 0, 0.5)"), "red-600");
        assert_eq!(map_color("rgb(255, 255, 255)"), "white");
    }

    #[test]
    fn named_and_special_colors() {
        assert_eq!(map_color("transparent"), "transparent");
        assert_eq!(map_color("none"), "transparent");
        assert_eq!(map_color("RebeccaPurple"), "gray-500");
        assert_eq!(map_color("purple"), "purple-600");
        assert_eq!(background_class("#ffffff"), "bg-white");
        assert_eq!(text_class("black"), "text-black");
        assert_eq!(border_class("red"), "border-red-600");
    }

    #[test]
    fn button_color_buckets() {
        assert_eq!(button_color("pink-500"), "pink");
        assert_eq!(button_color("purple-600"), "purple");
        assert_eq!(button_color("blue-600"), "blue");
        assert_eq!(button_color("green-600"), "green");
        assert_eq!(button_color("yellow-400"), "yellow");
        assert_eq!(button_color("red-600"), "red");
        assert_eq!(button_color("white"), "gray");
        assert_eq!(button_color("gray-800"), "gray");
    }
}
