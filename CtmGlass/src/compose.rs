//! Tile stitching into 2x2 CTM atlases
//!
//! A variant's source directory holds four fixed-name PNG tiles. They are
//! painted row-major into a canvas twice as wide and twice as tall as the
//! first tile, in the first tile's pixel format:
//!
//! ```text
//! +-------+-------+
//! | 26    | 24    |
//! +-------+-------+
//! | 2     | 46    |
//! +-------+-------+
//! ```
//!
//! Tiles are not checked against each other. A tile of a different size is
//! copied at its own size from its quadrant origin and clipped to the canvas.
//!
//! SPDX-FileCopyrightText: 2025 CyberDeco
//! SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{imageops, ColorType, DynamicImage, GenericImageView, ImageError, ImageFormat, ImageReader};

use crate::error::{Error, Result};

/// Source tile filenames, in atlas order (top-left, top-right, bottom-left, bottom-right)
pub const TILE_FILES: [&str; 4] = ["26.png", "24.png", "2.png", "46.png"];

/// A composed 2x2 atlas held in memory
#[derive(Debug, Clone)]
pub struct Atlas {
    image: DynamicImage,
    tile_width: u32,
    tile_height: u32,
}

impl Atlas {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Size of one quadrant (the first tile's size)
    #[must_use]
    pub fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    #[must_use]
    pub fn color(&self) -> ColorType {
        self.image.color()
    }

    #[must_use]
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    #[must_use]
    pub fn into_image(self) -> DynamicImage {
        self.image
    }

    /// Encode the atlas as PNG at `path`, replacing any existing file
    ///
    /// # Errors
    /// Returns [`Error::Write`] if the file cannot be created or encoded.
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        let write = || -> std::io::Result<()> {
            let mut writer = BufWriter::new(File::create(path)?);
            self.image
                .write_with_encoder(PngEncoder::new(&mut writer))
                .map_err(image_to_io_error)?;
            writer.flush()
        };

        write().map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            "Wrote {}x{} atlas {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }
}

/// Stitch the four tiles found in `source_dir` into an atlas
///
/// Every tile is located and decoded before the canvas is allocated, so a
/// missing or broken tile never yields a partial atlas.
///
/// # Errors
/// Returns [`Error::MissingSourceFile`] naming the first absent tile, or
/// [`Error::SourceDecode`] if a tile is not a readable PNG.
pub fn compose<P: AsRef<Path>>(source_dir: P) -> Result<Atlas> {
    let source_dir = source_dir.as_ref();

    let tiles = [
        load_tile(source_dir.join(TILE_FILES[0]))?,
        load_tile(source_dir.join(TILE_FILES[1]))?,
        load_tile(source_dir.join(TILE_FILES[2]))?,
        load_tile(source_dir.join(TILE_FILES[3]))?,
    ];

    Ok(compose_tiles(&tiles))
}

/// Stitch four decoded tiles into an atlas using the first tile as the template
#[must_use]
pub fn compose_tiles(tiles: &[DynamicImage; 4]) -> Atlas {
    let (w, h) = tiles[0].dimensions();
    let mut canvas = DynamicImage::new(w * 2, h * 2, tiles[0].color());

    for (index, tile) in (0u8..).zip(tiles) {
        if tile.dimensions() != (w, h) {
            tracing::warn!(
                "Tile {} is {}x{}, expected {w}x{h}; copying at native size",
                TILE_FILES[usize::from(index)],
                tile.width(),
                tile.height()
            );
        }

        let (x, y) = tile_origin(index, w, h);
        paint(&mut canvas, tile, x, y);
    }

    Atlas {
        image: canvas,
        tile_width: w,
        tile_height: h,
    }
}

/// Pixel origin of tile `index` in a 2x2 row-major grid of `w`x`h` cells
fn tile_origin(index: u8, w: u32, h: u32) -> (i64, i64) {
    (
        i64::from(index % 2) * i64::from(w),
        i64::from(index / 2) * i64::from(h),
    )
}

fn load_tile(path: PathBuf) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(Error::MissingSourceFile { path });
    }

    let mut reader = match ImageReader::open(&path) {
        Ok(reader) => reader,
        Err(e) => {
            return Err(Error::SourceDecode {
                path,
                source: ImageError::IoError(e),
            });
        }
    };
    reader.set_format(ImageFormat::Png);

    match reader.decode() {
        Ok(tile) => {
            tracing::debug!(
                "Loaded tile {} ({}x{}, {:?})",
                path.display(),
                tile.width(),
                tile.height(),
                tile.color()
            );
            Ok(tile)
        }
        Err(source) => Err(Error::SourceDecode { path, source }),
    }
}

/// Opaque copy of `tile` onto `canvas` at (`x`, `y`), in the canvas's pixel format
fn paint(canvas: &mut DynamicImage, tile: &DynamicImage, x: i64, y: i64) {
    match canvas {
        DynamicImage::ImageLuma8(buf) => imageops::replace(buf, &tile.to_luma8(), x, y),
        DynamicImage::ImageLumaA8(buf) => imageops::replace(buf, &tile.to_luma_alpha8(), x, y),
        DynamicImage::ImageRgb8(buf) => imageops::replace(buf, &tile.to_rgb8(), x, y),
        DynamicImage::ImageRgba8(buf) => imageops::replace(buf, &tile.to_rgba8(), x, y),
        DynamicImage::ImageLuma16(buf) => imageops::replace(buf, &tile.to_luma16(), x, y),
        DynamicImage::ImageLumaA16(buf) => imageops::replace(buf, &tile.to_luma_alpha16(), x, y),
        DynamicImage::ImageRgb16(buf) => imageops::replace(buf, &tile.to_rgb16(), x, y),
        DynamicImage::ImageRgba16(buf) => imageops::replace(buf, &tile.to_rgba16(), x, y),
        DynamicImage::ImageRgb32F(buf) => imageops::replace(buf, &tile.to_rgb32f(), x, y),
        DynamicImage::ImageRgba32F(buf) => imageops::replace(buf, &tile.to_rgba32f(), x, y),
        other => imageops::replace(other, tile, x, y),
    }
}

fn image_to_io_error(err: ImageError) -> std::io::Error {
    match err {
        ImageError::IoError(e) => e,
        other => std::io::Error::other(other),
    }
}
