use error_chain::bail;
use image::{ImageFormat, Rgb, RgbImage};
use log::info;
use rand::Rng;
use std::convert::TryFrom;
use std::path::{Path, PathBuf};

use crate::cells::CompassPrimary;
use crate::errors::*;
use crate::maze::Maze;

const MAX_FILE_STEM_LENGTH: usize = 120;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    cell_side_pixels_length: u32,
    wall_colour: Rgb<u8>,
    floor_colour: Rgb<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            cell_side_pixels_length: 10,
            wall_colour: Rgb([0, 0, 0]),
            floor_colour: Rgb([0xff, 0xff, 0xff]),
        }
    }
}

impl RenderOptions {
    pub fn cell_side_pixels_length(&self) -> u32 {
        self.cell_side_pixels_length
    }

    pub fn wall_colour(&self) -> Rgb<u8> {
        self.wall_colour
    }

    pub fn floor_colour(&self) -> Rgb<u8> {
        self.floor_colour
    }
}

#[derive(Debug)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}
impl RenderOptionsBuilder {
    pub fn new() -> RenderOptionsBuilder {
        RenderOptionsBuilder { options: RenderOptions::default() }
    }
    /// Pixels along one side of a tile. Walls are drawn just as thick.
    pub fn cell_side_pixels_length(mut self, cell_side_pixels_length: u32) -> Self {
        self.options.cell_side_pixels_length = cell_side_pixels_length;
        self
    }
    pub fn wall_colour(mut self, colour: Rgb<u8>) -> Self {
        self.options.wall_colour = colour;
        self
    }
    pub fn floor_colour(mut self, colour: Rgb<u8>) -> Self {
        self.options.floor_colour = colour;
        self
    }
    pub fn build(self) -> RenderOptions {
        self.options
    }
}
impl Default for RenderOptionsBuilder {
    fn default() -> Self {
        RenderOptionsBuilder::new()
    }
}

/// Pixel dimensions of the image `render` produces for a maze of the given tile dimensions.
pub fn image_dimensions(width: usize, height: usize, cell_pixels: u32) -> Result<(u32, u32)> {
    let side = |tiles: usize| {
        u32::try_from(tiles).ok()
            .and_then(|tiles| tiles.checked_mul(2))
            .and_then(|lattice| lattice.checked_add(1))
            .and_then(|lattice| lattice.checked_mul(cell_pixels))
    };
    match (side(width), side(height)) {
        (Some(img_width), Some(img_height)) => Ok((img_width, img_height)),
        _ => bail!(ErrorKind::ImageTooLarge(width, height, cell_pixels)),
    }
}

/// Draw a generated maze.
///
/// Tiles sit on the odd rows and columns of a lattice of `cell_side_pixels_length` sized
/// squares; everything is wall except the tiles and the squares between a tile and the side
/// it is open to. Boundary openings (entry, exit) break through the outer wall.
pub fn render<R: Rng>(maze: &Maze<R>, options: &RenderOptions) -> Result<RgbImage> {
    if !maze.is_done() {
        bail!(ErrorKind::NotGenerated(maze.name().to_owned()));
    }
    let pixels = options.cell_side_pixels_length;
    if pixels == 0 {
        bail!(ErrorKind::InvalidPixelSize(pixels));
    }

    let (img_width, img_height) = image_dimensions(maze.width(), maze.height(), pixels)?;
    let mut image = RgbImage::from_pixel(img_width, img_height, options.wall_colour);

    for tile in maze.tiles().tiles() {
        // (x + 1) * 2 - 1: tiles at lattice positions 1, 3, 5...
        let x = (tile.x() as u32 * 2 + 1) * pixels;
        let y = (tile.y() as u32 * 2 + 1) * pixels;
        fill_square(&mut image, x, y, pixels, options.floor_colour);

        for dir in tile.openings().directions() {
            let (passage_x, passage_y) = match dir {
                CompassPrimary::North => (x, y - pixels),
                CompassPrimary::South => (x, y + pixels),
                CompassPrimary::West => (x - pixels, y),
                CompassPrimary::East => (x + pixels, y),
            };
            fill_square(&mut image, passage_x, passage_y, pixels, options.floor_colour);
        }
    }

    Ok(image)
}

fn fill_square(image: &mut RgbImage, x: u32, y: u32, side: u32, colour: Rgb<u8>) {
    for py in y..y + side {
        for px in x..x + side {
            image.put_pixel(px, py, colour);
        }
    }
}

/// File name for a maze image: the maze name reduced to letters, digits and underscores,
/// at most 120 of them, followed by the image pixel size.
pub fn image_file_name(maze_name: &str, width_px: u32, height_px: u32) -> String {
    let stem: String = maze_name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .take(MAX_FILE_STEM_LENGTH)
        .collect();
    format!("{}-{}_{}.png", stem, width_px, height_px)
}

/// Write a rendered maze as PNG, to `path` or else to `image_file_name` in the working
/// directory. Returns where it was written.
pub fn save_image<R: Rng>(maze: &Maze<R>,
                          image: &RgbImage,
                          path: Option<&Path>)
                          -> Result<PathBuf> {
    let out_path = match path {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(image_file_name(maze.name(), image.width(), image.height())),
    };

    image.save_with_format(&out_path, ImageFormat::Png)
        .chain_err(|| format!("Failed to write maze image {}", out_path.display()))?;
    info!("saved maze '{}' to {}", maze.name(), out_path.display());
    Ok(out_path)
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::units::{Height, Width};

    fn done_maze(w: isize, h: isize, name: &str) -> Maze {
        let mut m = Maze::with_seed(Width(w), Height(h), name, 4).unwrap();
        m.generate_growing_tree(90, 30).unwrap();
        m
    }

    #[test]
    fn nothing_to_render_before_generation() {
        let m = Maze::with_seed(Width(3), Height(3), "unformed", 4).unwrap();
        match render(&m, &RenderOptions::default()) {
            Err(Error(ErrorKind::NotGenerated(ref name), _)) => assert_eq!(name, "unformed"),
            other => panic!("expected NotGenerated, got {:?}", other.map(|i| i.dimensions())),
        }
    }

    #[test]
    fn zero_pixel_tiles_are_rejected() {
        let m = done_maze(3, 3, "m");
        let options = RenderOptionsBuilder::new().cell_side_pixels_length(0).build();
        match render(&m, &options) {
            Err(Error(ErrorKind::InvalidPixelSize(0), _)) => (),
            other => panic!("expected InvalidPixelSize, got {:?}", other.map(|i| i.dimensions())),
        }
    }

    #[test]
    fn image_size_follows_tile_pixels() {
        let m = done_maze(12, 7, "m");
        let image = render(&m, &RenderOptions::default()).unwrap();
        assert_eq!(image.dimensions(), (250, 150));
        assert_eq!(image_dimensions(12, 7, 10).unwrap(), (250, 150));
    }

    #[test]
    fn oversized_images_are_rejected() {
        assert_eq!(image_dimensions(1, 1, u32::MAX / 3).unwrap(), (u32::MAX, u32::MAX));
        match image_dimensions(1, 1, 2_000_000_000) {
            Err(Error(ErrorKind::ImageTooLarge(1, 1, 2_000_000_000), _)) => (),
            other => panic!("expected ImageTooLarge, got {:?}", other),
        }
        match image_dimensions(1 << 31, 1, 1) {
            Err(Error(ErrorKind::ImageTooLarge(..), _)) => (),
            other => panic!("expected ImageTooLarge, got {:?}", other),
        }

        let m = done_maze(2, 2, "m");
        let options = RenderOptionsBuilder::new()
            .cell_side_pixels_length(1_000_000_000)
            .build();
        match render(&m, &options) {
            Err(Error(ErrorKind::ImageTooLarge(2, 2, 1_000_000_000), _)) => (),
            other => panic!("expected ImageTooLarge, got {:?}", other.map(|i| i.dimensions())),
        }
    }

    #[test]
    fn single_tile_pixels() {
        let m = done_maze(1, 1, "m");
        let wall = Rgb([250, 0, 20]);
        let floor = Rgb([255, 255, 0]);
        let options = RenderOptionsBuilder::new()
            .cell_side_pixels_length(1)
            .wall_colour(wall)
            .floor_colour(floor)
            .build();
        let image = render(&m, &options).unwrap();
        assert_eq!(image.dimensions(), (3, 3));

        // Floor down the middle column: entry, tile, exit
        for y in 0..3 {
            assert_eq!(*image.get_pixel(0, y), wall);
            assert_eq!(*image.get_pixel(1, y), floor);
            assert_eq!(*image.get_pixel(2, y), wall);
        }
    }

    #[test]
    fn floor_pixels_match_openings() {
        let m = done_maze(6, 4, "m");
        let floor = RenderOptions::default().floor_colour();
        let image = render(&m, &RenderOptions::default()).unwrap();

        // Sample the centre of every lattice square
        let is_floor = |lx: u32, ly: u32| *image.get_pixel(lx * 10 + 5, ly * 10 + 5) == floor;
        let mut floor_squares = 0;
        for ly in 0..9 {
            for lx in 0..13 {
                if is_floor(lx, ly) {
                    floor_squares += 1;
                }
            }
        }
        // 24 tiles, 23 passages between them, entry and exit
        assert_eq!(floor_squares, 24 + 23 + 2);

        // Lattice corners are always wall
        assert!(!is_floor(0, 0));
        assert!(!is_floor(2, 2));
        // Entry above the top left tile, exit below the bottom right tile
        assert!(is_floor(1, 0));
        assert!(is_floor(11, 8));
    }

    #[test]
    fn file_names() {
        assert_eq!(image_file_name("A_Maze", 250, 250), "A_Maze-250_250.png");
        assert_eq!(image_file_name("Color Maze!/..", 30, 50), "ColorMaze-30_50.png");
        let long_name = "x".repeat(300);
        assert_eq!(image_file_name(&long_name, 1, 2),
                   format!("{}-1_2.png", "x".repeat(120)));
    }

    #[test]
    fn saves_png() {
        let dir = tempfile::tempdir().unwrap();
        let m = done_maze(5, 5, "saved");
        let image = render(&m, &RenderOptions::default()).unwrap();
        let path = dir.path().join(image_file_name(m.name(), image.width(), image.height()));

        let written = save_image(&m, &image, Some(&path)).unwrap();
        assert_eq!(written, path);
        let reloaded = image::open(&written).unwrap().to_rgb8();
        assert_eq!(reloaded.dimensions(), (110, 110));
        assert_eq!(reloaded.as_raw(), image.as_raw());
    }

    #[test]
    fn save_failure_carries_context() {
        let dir = tempfile::tempdir().unwrap();
        let m = done_maze(2, 2, "m");
        let image = render(&m, &RenderOptions::default()).unwrap();
        let missing_dir_path = dir.path().join("no_such_dir").join("maze.png");
        let err = save_image(&m, &image, Some(&missing_dir_path)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to write maze image"));
    }
}
