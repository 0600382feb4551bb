//! Colormaps for data fields.
//!
//! Each map is a short list of sRGB stops sampled by piecewise-linear
//! interpolation in linear RGB.

use std::fmt;
use std::str::FromStr;

use palette::{LinSrgb, Mix, Srgb};
use plainmesh_types::MeshError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    #[default]
    Viridis,
    Plasma,
    Greys,
    Coolwarm,
    Jet,
}

const VIRIDIS: &[[u8; 3]] = &[
    [0x44, 0x01, 0x54],
    [0x48, 0x28, 0x78],
    [0x3e, 0x49, 0x89],
    [0x31, 0x68, 0x8e],
    [0x26, 0x82, 0x8e],
    [0x1f, 0x9e, 0x89],
    [0x35, 0xb7, 0x79],
    [0x6e, 0xce, 0x58],
    [0xb5, 0xde, 0x2b],
    [0xfd, 0xe7, 0x25],
];

const PLASMA: &[[u8; 3]] = &[
    [0x0d, 0x08, 0x87],
    [0x46, 0x03, 0x9f],
    [0x72, 0x01, 0xa8],
    [0x9c, 0x17, 0x9e],
    [0xbd, 0x37, 0x86],
    [0xd8, 0x57, 0x6b],
    [0xed, 0x79, 0x53],
    [0xfb, 0x9f, 0x3a],
    [0xfd, 0xca, 0x26],
    [0xf0, 0xf9, 0x21],
];

const GREYS: &[[u8; 3]] = &[[0xff, 0xff, 0xff], [0x00, 0x00, 0x00]];

const COOLWARM: &[[u8; 3]] = &[
    [0x3b, 0x4c, 0xc0],
    [0x8d, 0xb0, 0xfe],
    [0xdd, 0xdd, 0xdd],
    [0xf4, 0x9a, 0x7b],
    [0xb4, 0x04, 0x26],
];

const JET: &[[u8; 3]] = &[
    [0x00, 0x00, 0x80],
    [0x00, 0x00, 0xff],
    [0x00, 0xff, 0xff],
    [0xff, 0xff, 0x00],
    [0xff, 0x00, 0x00],
    [0x80, 0x00, 0x00],
];

impl Colormap {
    /// All supported maps.
    pub fn all() -> &'static [Colormap] {
        &[
            Colormap::Viridis,
            Colormap::Plasma,
            Colormap::Greys,
            Colormap::Coolwarm,
            Colormap::Jet,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Colormap::Viridis => "viridis",
            Colormap::Plasma => "plasma",
            Colormap::Greys => "greys",
            Colormap::Coolwarm => "coolwarm",
            Colormap::Jet => "jet",
        }
    }

    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            Colormap::Viridis => VIRIDIS,
            Colormap::Plasma => PLASMA,
            Colormap::Greys => GREYS,
            Colormap::Coolwarm => COOLWARM,
            Colormap::Jet => JET,
        }
    }

    /// Color at position `t` in `[0, 1]`. Out-of-range positions clamp;
    /// NaN maps to the first stop.
    pub fn sample(self, t: f64) -> [u8; 3] {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let pos = t * (stops.len() - 1) as f64;
        let i = (pos.floor() as usize).min(stops.len() - 2);
        let frac = (pos - i as f64) as f32;

        let a = to_linear(stops[i]);
        let b = to_linear(stops[i + 1]);
        let mixed: Srgb<f32> = Srgb::from_linear(a.mix(b, frac));
        let out: Srgb<u8> = mixed.into_format();
        [out.red, out.green, out.blue]
    }
}

fn to_linear([r, g, b]: [u8; 3]) -> LinSrgb<f32> {
    Srgb::new(r, g, b).into_format::<f32>().into_linear()
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colormap {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Colormap::all()
            .iter()
            .copied()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| {
                let available: Vec<&str> = Colormap::all().iter().map(|c| c.name()).collect();
                MeshError::InvalidConfig(format!(
                    "Unknown colormap: '{s}'. Available: {}",
                    available.join(", ")
                ))
            })
    }
}
