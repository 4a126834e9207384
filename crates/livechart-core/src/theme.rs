// File: crates/livechart-core/src/theme.rs
// Summary: Light/Dark theming: background, axis ink, title colors and the series palette.

use crate::backend::Rgba;

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Filled into the cache before the axes; fully transparent lets the host show through.
    pub background: Rgba,
    /// Axis lines, ticks and labels. Gridlines use it at a third of its alpha.
    pub axis: Rgba,
    pub title_text: Rgba,
    pub title_background: Rgba,
    /// Series `i` is drawn with `palette[i % palette.len()]`.
    pub palette: Vec<Rgba>,
}

fn default_palette() -> Vec<Rgba> {
    vec![
        Rgba::from_rgba8(0xF3, 0x62, 0x2D, 0xFF),
        Rgba::from_rgba8(0xFB, 0xA7, 0x1B, 0xFF),
        Rgba::from_rgba8(0x57, 0xB7, 0x57, 0xFF),
        Rgba::from_rgba8(0x41, 0xA9, 0xC9, 0xFF),
        Rgba::from_rgba8(0x42, 0x58, 0xC9, 0xFF),
        Rgba::from_rgba8(0x9A, 0x42, 0xC8, 0xFF),
        Rgba::from_rgba8(0xC8, 0x41, 0x64, 0xFF),
        Rgba::from_rgba8(0x88, 0x88, 0x88, 0xFF),
    ]
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::new(0.0, 0.0, 0.0, 0.0),
            axis: Rgba::from_rgba8(0x30, 0x30, 0x30, 0xAA),
            title_text: Rgba::new(0.0, 0.0, 0.0, 1.0),
            title_background: Rgba::new(0.3, 0.3, 0.3, 0.2),
            palette: default_palette(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::from_rgba8(18, 18, 20, 255),
            axis: Rgba::from_rgba8(180, 180, 190, 0xCC),
            title_text: Rgba::from_rgba8(235, 235, 245, 255),
            title_background: Rgba::new(0.7, 0.7, 0.7, 0.15),
            palette: default_palette(),
        }
    }

    /// Palette color for the series at `index`.
    pub fn series_color(&self, index: usize) -> Rgba {
        match self.palette.len() {
            0 => self.axis,
            n => self.palette[index % n],
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
