use font8x8::legacy::BASIC_LEGACY;

use chatpad_host::{Frame, Pixel, PixelEncoding};

const GLYPH_SIZE: u32 = 8;

pub struct GridOptions {
    pub columns: u32,
    /// Gap between cells and around the outer edge, in pixels.
    pub pad: u32,
    /// Height of the label strip above each screen.
    pub title_height: u32,
    /// Integer upscale applied to the finished grid.
    pub scale: u32,
    pub encoding: PixelEncoding,
    pub background: Pixel,
    pub label_colour: Pixel,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            columns: 3,
            pad: 10,
            title_height: 12,
            scale: 2,
            encoding: PixelEncoding::RGBA,
            background: Pixel::Rgb(0, 0, 0),
            label_colour: Pixel::Rgb(255, 255, 255),
        }
    }
}

/// Arrange labelled screens into a single padded grid image, each cell
/// carrying its label centered in a title strip above the screen.
///
/// Pure presentation: frames in, one frame out.  Cells are sized to the
/// largest screen supplied, so mixed sizes still line up.
pub fn compose(screens: &[(String, Frame)], options: &GridOptions) -> Frame {
    let columns = options.columns.max(1);
    let rows = (screens.len() as u32 + columns - 1) / columns;
    let cell_width = screens.iter().map(|(_, f)| f.width).max().unwrap_or(0);
    let cell_height = screens.iter().map(|(_, f)| f.height).max().unwrap_or(0);

    let width = columns * (cell_width + options.pad) + options.pad;
    let height = rows * (cell_height + options.pad + options.title_height) + options.pad;
    let mut canvas = Frame::new(width, height, options.encoding);
    canvas.clear(options.background);

    for (index, (label, screen)) in screens.iter().enumerate() {
        let column = index as u32 % columns;
        let row = index as u32 / columns;
        let cell_x = options.pad + column * (cell_width + options.pad);
        let cell_y = options.pad + row * (cell_height + options.pad + options.title_height);

        draw_label(&mut canvas, label, cell_x, cell_y, cell_width, options);
        canvas.blit(
            cell_x,
            cell_y + options.title_height,
            &screen.bitmap,
            screen.width,
            screen.height,
        );
    }

    canvas.scaled(options.scale)
}

/// Draw a label centered in the title strip with the 8x8 bitmap font,
/// skipping any characters outside the basic ASCII range.
fn draw_label(canvas: &mut Frame, label: &str, cell_x: u32, cell_y: u32, cell_width: u32, options: &GridOptions) {
    let text_width = label.len() as u32 * GLYPH_SIZE;
    let start_x = cell_x + cell_width.saturating_sub(text_width) / 2;
    let start_y = cell_y + options.title_height.saturating_sub(GLYPH_SIZE) / 2;

    for (position, ch) in label.chars().enumerate() {
        let Some(glyph) = BASIC_LEGACY.get(ch as usize) else {
            continue;
        };
        let glyph_x = start_x + position as u32 * GLYPH_SIZE;
        for (y, row) in glyph.iter().enumerate() {
            for x in 0..GLYPH_SIZE {
                if row & (1 << x) != 0 {
                    canvas.set_pixel(glyph_x + x, start_y + y as u32, options.label_colour);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatpad_host::{Palette, SCREEN_WIDTH, SCREEN_HEIGHT};

    fn screens(count: usize) -> Vec<(String, Frame)> {
        (0..count)
            .map(|index| {
                let mut frame = Frame::new(SCREEN_WIDTH, SCREEN_HEIGHT, PixelEncoding::RGBA);
                frame.clear(Palette::default().shade(index % 4));
                (format!("Game {}", index), frame)
            })
            .collect()
    }

    #[test]
    fn six_screens_fill_a_three_by_two_grid() {
        let options = GridOptions {
            scale: 1,
            ..Default::default()
        };
        let grid = compose(&screens(6), &options);
        // 3 * (160 + 10) + 10 wide, 2 * (144 + 10 + 12) + 10 tall
        assert_eq!(grid.width, 520);
        assert_eq!(grid.height, 342);
    }

    #[test]
    fn scaling_doubles_the_output() {
        let grid = compose(&screens(6), &GridOptions::default());
        assert_eq!(grid.width, 1040);
        assert_eq!(grid.height, 684);
    }

    #[test]
    fn partial_rows_round_up() {
        let options = GridOptions {
            scale: 1,
            ..Default::default()
        };
        let grid = compose(&screens(4), &options);
        assert_eq!(grid.height, 342);
    }

    #[test]
    fn labels_are_drawn_into_the_title_strip() {
        let options = GridOptions {
            scale: 1,
            ..Default::default()
        };
        let grid = compose(&screens(1), &options);
        let white = options.label_colour.encode(options.encoding);
        let strip: Vec<u32> = (0..options.title_height)
            .flat_map(|y| {
                let y = options.pad + y;
                (0..grid.width).map(move |x| (x, y))
            })
            .map(|(x, y)| grid.bitmap[(x + y * grid.width) as usize])
            .collect();
        assert!(strip.contains(&white));
    }

    #[test]
    fn empty_input_is_just_padding() {
        let options = GridOptions {
            scale: 1,
            ..Default::default()
        };
        let grid = compose(&[], &options);
        assert_eq!(grid.width, options.pad * 4);
        assert_eq!(grid.height, options.pad);
    }
}
