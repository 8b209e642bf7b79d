//! In-memory display
//!
//! Behaves like the LCD controller: a window is selected, then colors fill
//! it left-to-right, top-to-bottom, wrapping back to the window's first
//! pixel when it is full.

use crate::Color;
use crate::platform::PixelSink;
use crate::sim::{Region, Vec2};

#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
    window: Region,
    cursor: usize,
    writes: u64,
    windows: u64,
}

impl FrameBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        let window = Region::new(Vec2::ZERO, Vec2::new(width - 1, height - 1));
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; window.area()],
            window,
            cursor: 0,
            writes: 0,
            windows: 0,
        }
    }

    #[inline]
    fn index(&self, p: Vec2) -> Option<usize> {
        let inside = p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height;
        inside.then(|| (p.y * self.width + p.x) as usize)
    }

    pub fn pixel(&self, p: Vec2) -> Option<Color> {
        self.index(p).map(|i| self.pixels[i])
    }

    /// Color writes since creation or the last [`reset_stats`](Self::reset_stats)
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Window selections since creation or the last reset
    pub fn windows(&self) -> u64 {
        self.windows
    }

    pub fn reset_stats(&mut self) {
        self.writes = 0;
        self.windows = 0;
    }

    /// One character per pixel, one line per row
    pub fn to_ascii(&self, glyph: impl Fn(Color) -> char) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for row in self.pixels.chunks(self.width as usize) {
            out.extend(row.iter().map(|&c| glyph(c)));
            out.push('\n');
        }
        out
    }
}

impl PixelSink for FrameBuffer {
    fn set_window(&mut self, window: Region) {
        self.window = window;
        self.cursor = 0;
        self.windows += 1;
    }

    fn write_color(&mut self, color: Color) {
        let w = self.window.width() as usize;
        let offset = Vec2::new((self.cursor % w) as i32, (self.cursor / w) as i32);
        if let Some(i) = self.index(self.window.top_left + offset) {
            self.pixels[i] = color;
        }
        self.cursor = (self.cursor + 1) % self.window.area();
        self.writes += 1;
    }
}
