use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::qr::{Color, Module, QR};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

// Frame
//------------------------------------------------------------------------------

/// Pixel geometry of the drawable surface: integer module size carved
/// out of the requested side length, quiet-zone padding normalized to
/// even, and the optional overlay footprint.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Frame {
    module_size: u32,
    padding: u32,
    side: u32,
    overlay: Option<(u32, u32)>,
}

impl Frame {
    pub const DEFAULT_SIZE: u32 = 100;

    pub fn fit(size: u32, padding: u32, width: i16) -> Self {
        let padding = padding + padding % 2;
        let module_size = size / width as u32;
        let side = module_size * width as u32 + 2 * padding;
        Self { module_size, padding, side, overlay: None }
    }

    pub fn with_overlay(mut self, dims: Option<(u32, u32)>) -> Self {
        self.overlay = dims;
        self
    }

    pub fn module_size(&self) -> u32 {
        self.module_size
    }

    pub fn padding(&self) -> u32 {
        self.padding
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn overlay_dims(&self) -> Option<(u32, u32)> {
        self.overlay
    }
}

// Render
//------------------------------------------------------------------------------

// Painting is split into two independent steps: `render` paints the
// finalized module grid, `compose_overlay` paints the logo into the
// reserved window whenever its asset is ready. Neither step orders
// itself against the other beyond sharing the canvas.
impl QR {
    pub fn render(&self) -> RgbaImage {
        let frame = self.frame();
        let module_size = frame.module_size();
        let padding = frame.padding();
        let w = self.width();

        let mut canvas = RgbaImage::from_pixel(frame.side(), frame.side(), WHITE);
        if module_size == 0 {
            return canvas;
        }
        for r in 0..w {
            for c in 0..w {
                let color = match self.get(r as i16, c as i16) {
                    Module::Empty => panic!("Empty module found at: {r} {c}"),
                    module => *module,
                };
                if color == Color::Dark {
                    let x = padding + c as u32 * module_size;
                    let y = padding + r as u32 * module_size;
                    draw_filled_rect_mut(
                        &mut canvas,
                        Rect::at(x as i32, y as i32).of_size(module_size, module_size),
                        BLACK,
                    );
                }
            }
        }
        canvas
    }

    /// Scales the logo to the configured overlay footprint and paints it
    /// centered, shifted right and down by half a module as the reserved
    /// window is. Falls back to the logo's own dimensions if no footprint
    /// was configured.
    pub fn compose_overlay(&self, canvas: &mut RgbaImage, logo: &DynamicImage) {
        let frame = self.frame();
        let (width_px, height_px) = match frame.overlay_dims() {
            Some(dims) => dims,
            None => (logo.width(), logo.height()),
        };
        if width_px == 0 || height_px == 0 {
            return;
        }

        let scaled = logo.resize_exact(width_px, height_px, FilterType::Triangle).to_rgba8();
        let x = (frame.side() + frame.module_size()).saturating_sub(width_px).div_ceil(2);
        let y = (frame.side() + frame.module_size()).saturating_sub(height_px).div_ceil(2);
        imageops::overlay(canvas, &scaled, x as i64, y as i64);
    }

    pub fn to_str(&self, module_size: usize) -> String {
        let qz_size = 4 * module_size;
        let qr_size = self.width() * module_size;
        let total_size = qz_size + qr_size + qz_size;

        let mut canvas = String::new();
        for i in 0..total_size {
            for j in 0..total_size {
                if i < qz_size || i >= qz_size + qr_size || j < qz_size || j >= qz_size + qr_size {
                    canvas.push(' ');
                    continue;
                }
                let r = ((i - qz_size) / module_size) as i16;
                let c = ((j - qz_size) / module_size) as i16;

                let color = match self.get(r, c) {
                    Module::Empty => panic!("Empty module found at: {r} {c}"),
                    module => *module,
                };
                canvas.push(color.select('█', ' '));
            }
            canvas.push('\n');
        }

        canvas
    }
}
