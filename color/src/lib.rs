#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
}

impl Color {
    /// Colors handed out to plot series in order, wrapping around.
    pub const CYCLE: [Self; 10] = [
        Self::rgb8(31, 119, 180),  // blue
        Self::rgb8(255, 127, 14),  // orange
        Self::rgb8(44, 160, 44),   // green
        Self::rgb8(214, 39, 40),   // red
        Self::rgb8(148, 103, 189), // purple
        Self::rgb8(140, 86, 75),   // brown
        Self::rgb8(227, 119, 194), // pink
        Self::rgb8(127, 127, 127), // gray
        Self::rgb8(188, 189, 34),  // olive
        Self::rgb8(23, 190, 207),  // cyan
    ];

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Returns the `index`th color of [`Color::CYCLE`].
    pub fn cycle(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    pub fn to_rgb8(&self) -> [u8; 3] {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }
}
