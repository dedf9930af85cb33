//! Colour scale interpolated in CIE LCh (D65), used to tint the output bars.

use crate::config::BAR_SCALE_STOPS;

// D65 reference white
const XN: f64 = 0.950_470;
const YN: f64 = 1.0;
const ZN: f64 = 1.088_830;

const T0: f64 = 4.0 / 29.0;
const T1: f64 = 6.0 / 29.0;
const T2: f64 = 3.0 * T1 * T1;
const T3: f64 = T1 * T1 * T1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn to_lab(self) -> Lab {
        let r = srgb_to_linear(self.r);
        let g = srgb_to_linear(self.g);
        let b = srgb_to_linear(self.b);

        let x = xyz_to_lab_f((0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b) / XN);
        let y = xyz_to_lab_f((0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b) / YN);
        let z = xyz_to_lab_f((0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b) / ZN);

        Lab {
            l: (116.0 * y - 16.0).max(0.0),
            a: 500.0 * (x - y),
            b: 200.0 * (y - z),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Lab {
    l: f64,
    a: f64,
    b: f64,
}

impl Lab {
    fn to_lch(self) -> Lch {
        let c = (self.a * self.a + self.b * self.b).sqrt();
        let h = self.b.atan2(self.a).to_degrees().rem_euclid(360.0);
        Lch { l: self.l, c, h }
    }

    fn to_rgb(self) -> Rgb {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        let x = XN * lab_to_xyz_f(fx);
        let y = YN * lab_to_xyz_f(fy);
        let z = ZN * lab_to_xyz_f(fz);

        Rgb::new(
            linear_to_srgb(3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z),
            linear_to_srgb(-0.969_266_0 * x + 1.876_010_8 * y + 0.041_556_0 * z),
            linear_to_srgb(0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Lch {
    l: f64,
    c: f64,
    h: f64,
}

impl Lch {
    fn to_lab(self) -> Lab {
        let h = self.h.to_radians();
        Lab {
            l: self.l,
            a: self.c * h.cos(),
            b: self.c * h.sin(),
        }
    }

    /// Interpolate along the shorter arc of the hue circle.
    fn mix(self, other: Lch, f: f64) -> Lch {
        let mut dh = other.h - self.h;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }
        Lch {
            l: self.l + f * (other.l - self.l),
            c: self.c + f * (other.c - self.c),
            h: self.h + f * dh,
        }
    }
}

fn srgb_to_linear(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f64) -> u8 {
    let v = if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    };
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

fn xyz_to_lab_f(t: f64) -> f64 {
    if t > T3 {
        t.cbrt()
    } else {
        t / T2 + T0
    }
}

fn lab_to_xyz_f(t: f64) -> f64 {
    if t > T1 {
        t * t * t
    } else {
        T2 * (t - T0)
    }
}

/// A continuous colour scale over `[0, 1]` with evenly spaced stops.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    stops: Vec<Lch>,
}

impl ColorScale {
    /// Build a scale from `#rrggbb` stops. Returns `None` if fewer than two
    /// stops are given or any stop fails to parse.
    pub fn from_hex_stops(stops: &[&str]) -> Option<Self> {
        if stops.len() < 2 {
            return None;
        }
        let stops = stops
            .iter()
            .map(|hex| Rgb::from_hex(hex).map(|rgb| rgb.to_lab().to_lch()))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { stops })
    }

    /// The green→yellow→red scale used for output bars.
    pub fn traffic_light() -> Self {
        let stops = BAR_SCALE_STOPS
            .iter()
            .filter_map(|hex| Rgb::from_hex(hex))
            .map(|rgb| rgb.to_lab().to_lch())
            .collect();
        Self { stops }
    }

    /// Colour at `t`, clamped into `[0, 1]`.
    pub fn at(&self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let segments = (self.stops.len() - 1) as f64;
        let pos = t * segments;
        let idx = (pos.ceil() as usize).saturating_sub(1).min(self.stops.len() - 2);
        let f = pos - idx as f64;
        self.stops[idx].mix(self.stops[idx + 1], f).to_lab().to_rgb()
    }
}
