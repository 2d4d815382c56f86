/// Width of a Game Boy screen in pixels.
pub const SCREEN_WIDTH: u32 = 160;

/// Height of a Game Boy screen in pixels.
pub const SCREEN_HEIGHT: u32 = 144;

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub enum PixelEncoding {
    #[default]
    RGBA,
    ARGB,
    ABGR,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pixel {
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
}

impl Pixel {
    /// Build a pixel from a packed 0xRRGGBB colour, the form the palette
    /// tables are written in.
    pub fn from_rgb(colour: u32) -> Self {
        Pixel::Rgb((colour >> 16) as u8, (colour >> 8) as u8, colour as u8)
    }

    #[inline]
    pub fn encode(self, encoding: PixelEncoding) -> u32 {
        let (r, g, b, a) = match self {
            Pixel::Rgb(r, g, b) => (r as u32, g as u32, b as u32, 255),
            Pixel::Rgba(r, g, b, a) => (r as u32, g as u32, b as u32, a as u32),
        };

        match encoding {
            PixelEncoding::RGBA => (r << 24) | (g << 16) | (b << 8) | a,
            PixelEncoding::ARGB => (a << 24) | (r << 16) | (g << 8) | b,
            PixelEncoding::ABGR => (a << 24) | (b << 16) | (g << 8) | r,
        }
    }
}

/// The four display shades of one emulator instance, brightest first,
/// as packed 0xRRGGBB colours.  Each game variant gets its own tint so
/// the instances can be told apart in the composed grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette(pub [u32; 4]);

impl Palette {
    pub fn shade(&self, index: usize) -> Pixel {
        Pixel::from_rgb(self.0[index.min(3)])
    }
}

impl Default for Palette {
    fn default() -> Self {
        // classic DMG greens
        Palette([0xe0f8d0, 0x88c070, 0x346856, 0x081820])
    }
}

/// A rectangular bitmap of encoded pixels, used both for individual
/// instance screens and for the composed reply image.
#[derive(Clone, Default)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub encoding: PixelEncoding,
    pub bitmap: Vec<u32>,
}

impl Frame {
    pub fn new(width: u32, height: u32, encoding: PixelEncoding) -> Self {
        Self {
            width,
            height,
            encoding,
            bitmap: vec![0; (width * height) as usize],
        }
    }

    #[inline]
    pub fn set_pixel(&mut self, pos_x: u32, pos_y: u32, pixel: Pixel) {
        if pos_x < self.width && pos_y < self.height {
            self.bitmap[(pos_x + (pos_y * self.width)) as usize] = pixel.encode(self.encoding);
        }
    }

    #[inline]
    pub fn set_encoded_pixel(&mut self, pos_x: u32, pos_y: u32, pixel: u32) {
        if pos_x < self.width && pos_y < self.height {
            self.bitmap[(pos_x + (pos_y * self.width)) as usize] = pixel;
        }
    }

    /// Copy an already-encoded bitmap into this frame at the given
    /// position, clipping anything that falls outside.
    pub fn blit(&mut self, pos_x: u32, pos_y: u32, bitmap: &[u32], width: u32, height: u32) {
        let mut source = bitmap.iter();
        for y in pos_y..(pos_y + height) {
            for x in pos_x..(pos_x + width) {
                let Some(value) = source.next() else {
                    return;
                };
                if x < self.width && y < self.height {
                    self.bitmap[(x + (y * self.width)) as usize] = *value;
                }
            }
        }
    }

    pub fn clear(&mut self, value: Pixel) {
        let value = value.encode(self.encoding);
        self.bitmap.iter_mut().for_each(|pixel| *pixel = value);
    }

    /// Integer upscale by pixel repetition.  A factor of 0 or 1 returns
    /// the frame unchanged.
    pub fn scaled(&self, factor: u32) -> Frame {
        if factor <= 1 {
            return self.clone();
        }

        let mut scaled = Frame::new(self.width * factor, self.height * factor, self.encoding);
        for y in 0..scaled.height {
            for x in 0..scaled.width {
                let source = self.bitmap[((x / factor) + (y / factor) * self.width) as usize];
                scaled.bitmap[(x + y * scaled.width) as usize] = source;
            }
        }
        scaled
    }
}
