//! CPU canvas that balls are rasterized onto, one per tick

use bytemuck::{Pod, Zeroable};

use crate::sim::{Ball, World};

/// One RGB8 pixel, laid out exactly as it is written to disk
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Row-major pixel buffer the size of the arena
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Set a pixel; coordinates outside the canvas are clipped
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            let idx = y as usize * self.width as usize + x as usize;
            self.pixels[idx] = color;
        }
    }

    /// Filled disc centred on the ball's truncated integer position
    pub fn draw_ball(&mut self, ball: &Ball) {
        let cx = ball.pos.x as i32;
        let cy = ball.pos.y as i32;
        let r = ball.radius() as i32;
        let color = Rgb::from(ball.color);

        for dy in (-r + 1)..=r {
            for dx in (-r + 1)..=r {
                if dx * dx + dy * dy <= r * r {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Clear to black and draw every ball in store order
    pub fn render(&mut self, world: &World) {
        self.clear(Rgb::BLACK);
        for ball in &world.balls {
            self.draw_ball(ball);
        }
    }

    /// Raw RGB bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}
