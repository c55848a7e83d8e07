// File: crates/graph-core/src/theme.rs
// Summary: Light/Dark theming for surface background and series colors.

use crate::types::Color;

/// Color preset for a graph: surface background plus default series colors.
///
/// Fill colors are opaque tints of the series color; the rasterizer
/// overwrites pixels rather than blending.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub series: Color,
    pub accent: Color,
    pub fill: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            series: Color::from_argb(255, 64, 160, 255),
            accent: Color::from_argb(255, 40, 200, 120),
            fill: Color::from_argb(255, 28, 70, 110),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            series: Color::from_argb(255, 32, 120, 200),
            accent: Color::from_argb(255, 20, 160, 90),
            fill: Color::from_argb(255, 176, 208, 232),
        }
    }

    pub fn solarized_dark() -> Self {
        // Base colors from Solarized dark palette
        Self {
            name: "solarized-dark",
            background: Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            series: Color::from_argb(255, 0x26, 0x8b, 0xd2),     // blue
            accent: Color::from_argb(255, 0x2a, 0xa1, 0x98),     // cyan
            fill: Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            series: Color::from_argb(255, 0x26, 0x8b, 0xd2),
            accent: Color::from_argb(255, 0xcb, 0x4b, 0x16),     // orange
            fill: Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_argb(255, 0x00, 0x00, 0x00),
            series: Color::from_argb(255, 0x00, 0xff, 0xff),
            accent: Color::from_argb(255, 0x00, 0xff, 0x00),
            fill: Color::from_argb(255, 0x00, 0x5a, 0x5a),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
