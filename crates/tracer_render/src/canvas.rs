//! Pixel buffer produced by a render.

use tracer_math::Color;

/// A width × height grid of colors, row-major with the origin top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a canvas filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// The color at (x, y), or `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write a pixel. Writes outside the canvas are ignored and reported
    /// as `false`.
    pub fn set(&mut self, x: u32, y: u32, color: Color) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// Iterate `(x, y, color)` in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        let width = self.width.max(1);
        self.pixels.iter().enumerate().map(move |(i, color)| {
            let i = i as u32;
            (i % width, i / width, *color)
        })
    }

    /// Convert to 8-bit RGBA bytes, clamping each channel. Alpha is opaque.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            let [r, g, b] = color.to_rgb8();
            bytes.extend_from_slice(&[r, g, b, 255]);
        }
        bytes
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}
