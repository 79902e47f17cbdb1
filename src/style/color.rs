use crate::foundation::error::{LogoError, LogoResult};
use crate::style::named::named_rgb;
use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA color with channels in `[0, 1]`.
///
/// Deserializes from a CSS color string (`#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb()`, `rgba()`,
/// `hsl()`, `hsla()`, a named color or `transparent`), `{r,g,b[,a]}`, `{h,s,l[,a]}` or an
/// `[r,g,b(,a)]` array and always serializes as lowercase `"#rrggbbaa"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
    /// Alpha.
    pub a: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Opaque color from normalized channels.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from normalized channels, checked to lie in `[0, 1]`.
    pub fn try_rgba(r: f64, g: f64, b: f64, a: f64) -> LogoResult<Self> {
        for (name, v) in [("r", r), ("g", g), ("b", b), ("a", a)] {
            if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                return Err(LogoError::validation(format!(
                    "color channel {name} must be in [0, 1], got {v}"
                )));
            }
        }
        Ok(Self { r, g, b, a })
    }

    /// Parse a `#RGB`, `#RRGGBB` or `#RRGGBBAA` hex string.
    pub fn from_hex(s: &str) -> LogoResult<Self> {
        parse_hex(s).map_err(LogoError::validation)
    }

    /// Parse any CSS color string accepted by [`Color`]'s deserializer.
    pub fn from_css(s: &str) -> LogoResult<Self> {
        parse_css(s).map_err(LogoError::validation)
    }

    /// Straight-alpha RGBA8 channels.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }

    /// `#rrggbb` without alpha, as used by SVG paint attributes.
    pub fn to_hex_rgb(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Canonical `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

impl std::str::FromStr for Color {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_css(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Css(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            HslaObj {
                h: f64,
                s: f64,
                l: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        let checked = |r: f64, g: f64, b: f64, a: f64| -> Result<Color, D::Error> {
            Color::try_rgba(r, g, b, a).map_err(serde::de::Error::custom)
        };

        match Repr::deserialize(deserializer)? {
            Repr::Css(s) => parse_css(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => checked(r, g, b, a),
            Repr::HslaObj { h, s, l, a } => {
                if !h.is_finite() {
                    return Err(serde::de::Error::custom("hue must be finite"));
                }
                let c = hsla_to_rgba(h, s, l, a);
                checked(c.r, c.g, c.b, c.a)
            }
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => checked(*r, *g, *b, 1.0),
                [r, g, b, a] => checked(*r, *g, *b, *a),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

/// The two gradient endpoint colors shared by the logo primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorPair {
    /// Gradient start.
    pub color1: Color,
    /// Gradient end.
    pub color2: Color,
}

impl ColorPair {
    /// Pair two colors.
    pub fn new(color1: Color, color2: Color) -> Self {
        Self { color1, color2 }
    }

    /// Both colors as an ordered array of stops.
    pub fn stops(self) -> [Color; 2] {
        [self.color1, self.color2]
    }
}

fn parse_css(s: &str) -> Result<Color, String> {
    let s = s.trim();
    if s.starts_with('#') {
        return parse_hex(s);
    }
    let lower = s.to_ascii_lowercase();
    if lower == "transparent" {
        return Ok(Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.0,
        });
    }
    if let Some(rgb) = named_rgb(&lower) {
        let [_, r, g, b] = rgb.to_be_bytes();
        return Ok(Color::rgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        ));
    }

    let Some((name, args)) = lower.strip_suffix(')').and_then(|f| f.split_once('(')) else {
        return Err(format!(
            "unrecognized color \"{s}\"; expected #hex, rgb(), hsl() or a CSS color name"
        ));
    };
    let args: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|a| !a.is_empty())
        .collect();
    let alpha = match args.get(3) {
        Some(a) => parse_unit(a, 1.0)?,
        None => 1.0,
    };

    let c = match (name.trim(), args.len()) {
        ("rgb" | "rgba", 3 | 4) => Color {
            r: parse_unit(args[0], 255.0)?,
            g: parse_unit(args[1], 255.0)?,
            b: parse_unit(args[2], 255.0)?,
            a: alpha,
        },
        ("hsl" | "hsla", 3 | 4) => {
            let h = args[0].strip_suffix("deg").unwrap_or(args[0]);
            let h: f64 = h.parse().map_err(|_| format!("invalid hue \"{}\"", args[0]))?;
            if !h.is_finite() {
                return Err("hue must be finite".to_owned());
            }
            hsla_to_rgba(h, parse_unit(args[1], 100.0)?, parse_unit(args[2], 100.0)?, alpha)
        }
        _ => return Err(format!("unsupported color function \"{s}\"")),
    };
    Color::try_rgba(c.r, c.g, c.b, c.a).map_err(|e| e.to_string())
}

/// A number or percentage normalized by `scale` (`"128"` with 255 -> 0.5, `"50%"` -> 0.5).
fn parse_unit(v: &str, scale: f64) -> Result<f64, String> {
    let (num, div) = match v.strip_suffix('%') {
        Some(n) => (n, 100.0),
        None => (v, scale),
    };
    let x: f64 = num.parse().map_err(|_| format!("invalid color component \"{v}\""))?;
    if !x.is_finite() {
        return Err(format!("invalid color component \"{v}\""));
    }
    Ok(x / div)
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let Some(hex) = s.strip_prefix('#') else {
        return Err(format!("color \"{s}\" must start with '#'"));
    };
    if !hex.is_ascii() {
        return Err(format!("invalid hex color \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    let (r, g, b, a) = match hex.len() {
        3 => {
            let r = hex_byte(&hex[0..1].repeat(2))?;
            let g = hex_byte(&hex[1..2].repeat(2))?;
            let b = hex_byte(&hex[2..3].repeat(2))?;
            (r, g, b, 255)
        }
        6 => (
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
            255,
        ),
        8 => (
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
            hex_byte(&hex[6..8])?,
        ),
        _ => {
            return Err(
                "hex color must be #RGB, #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned(),
            );
        }
    };

    Ok(Color {
        r: f64::from(r) / 255.0,
        g: f64::from(g) / 255.0,
        b: f64::from(b) / 255.0,
        a: f64::from(a) / 255.0,
    })
}

fn hsla_to_rgba(h: f64, s: f64, l: f64, a: f64) -> Color {
    let h = (h % 360.0 + 360.0) % 360.0 / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return Color { r: l, g: l, b: l, a };
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    Color {
        r: hue_to_rgb(p, q, h + 1.0 / 3.0),
        g: hue_to_rgb(p, q, h),
        b: hue_to_rgb(p, q, h - 1.0 / 3.0),
        a,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
