//! The fixed set of renditions written into every icon container.

use icns::IconType;
use std::fmt;

/// One rendition in the container: a nominal size in points and a pixel
/// density (1 for standard, 2 for "@2x" retina).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconSize {
    pub points: u32,
    pub scale: u32,
}

impl IconSize {
    pub const fn new(points: u32, scale: u32) -> Self {
        IconSize { points, scale }
    }

    /// Edge length of the rendition in pixels.
    pub const fn pixels(&self) -> u32 {
        self.points * self.scale
    }

    /// Pixel dimensions as `(width, height)`.
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.pixels(), self.pixels())
    }

    pub const fn is_retina(&self) -> bool {
        self.scale > 1
    }

    /// ICNS element type used to store this rendition, or `None` for sizes
    /// outside the standard point-size and density pairs.
    pub fn icon_type(&self) -> Option<IconType> {
        let icon_type = match (self.points, self.scale) {
            (16, 1) => IconType::RGBA32_16x16,
            (16, 2) => IconType::RGBA32_16x16_2x,
            (32, 1) => IconType::RGBA32_32x32,
            (32, 2) => IconType::RGBA32_32x32_2x,
            (128, 1) => IconType::RGBA32_128x128,
            (128, 2) => IconType::RGBA32_128x128_2x,
            (256, 1) => IconType::RGBA32_256x256,
            (256, 2) => IconType::RGBA32_256x256_2x,
            (512, 1) => IconType::RGBA32_512x512,
            (512, 2) => IconType::RGBA32_512x512_2x,
            _ => return None,
        };
        Some(icon_type)
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_retina() {
            write!(f, "{}x{}@{}x", self.points, self.points, self.scale)
        } else {
            write!(f, "{}x{}", self.points, self.points)
        }
    }
}

/// Every container gets these ten renditions, in this order.
///
/// Pixel sizes are 16, 32, 32, 64, 128, 256, 256, 512, 512 and 1024. The
/// repeated sizes are distinct entries: the @2x rendition of one point size
/// and the @1x rendition of the next.
pub const ICON_SIZES: [IconSize; 10] = [
    IconSize::new(16, 1),
    IconSize::new(16, 2),
    IconSize::new(32, 1),
    IconSize::new(32, 2),
    IconSize::new(128, 1),
    IconSize::new(128, 2),
    IconSize::new(256, 1),
    IconSize::new(256, 2),
    IconSize::new(512, 1),
    IconSize::new(512, 2),
];
