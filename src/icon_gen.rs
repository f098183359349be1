use crate::emblem;
use anyhow::{Context, Result};
use image::{
    codecs::{
        ico::{IcoEncoder, IcoFrame},
        png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    },
    imageops::{self, FilterType},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Edge lengths bundled into the favicon.
pub const ICON_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

pub const ICO_FILE_NAME: &str = "favicon.ico";
pub const PREVIEW_FILE_NAME: &str = "magic-icon-preview.png";

/// One icon at several sizes, all resampled from a single master canvas.
pub struct IconSet {
    frames: Vec<RgbaImage>,
}

impl IconSet {
    /// Build one square frame per entry of `sizes`, in order.
    ///
    /// Entries matching the master's own size reuse its pixels as-is; every
    /// other size is resampled with Lanczos3.
    pub fn from_master(master: &RgbaImage, sizes: &[u32]) -> Self {
        let frames = sizes
            .iter()
            .map(|&size| {
                if size == master.width() {
                    master.clone()
                } else {
                    imageops::resize(master, size, size, FilterType::Lanczos3)
                }
            })
            .collect();

        Self { frames }
    }

    pub fn frames(&self) -> &[RgbaImage] {
        &self.frames
    }

    /// Write every frame into one ICO file, each keeping its own dimensions.
    pub fn write_ico(&self, path: &Path) -> Result<()> {
        let mut frames = Vec::with_capacity(self.frames.len());

        for image in &self.frames {
            let size = image.width();

            // The 256px layer dominates the file size, so it gets the best compression
            if size == 256 {
                let mut buf = Vec::new();
                write_png(image.as_raw(), &mut buf, size)?;
                frames.push(IcoFrame::with_encoded(buf, size, size, ColorType::Rgba8)?);
            } else {
                frames.push(IcoFrame::as_png(
                    image.as_raw(),
                    size,
                    size,
                    ColorType::Rgba8,
                )?);
            }
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut out_file = BufWriter::new(file);
        let encoder = IcoEncoder::new(&mut out_file);
        encoder
            .encode_images(&frames)
            .with_context(|| format!("Failed to encode {}", path.display()))?;
        out_file.flush()?;

        Ok(())
    }
}

/// Render the emblem into `out_dir/favicon.ico` plus a full-size PNG preview.
pub fn generate_icons(out_dir: &Path) -> Result<PathBuf> {
    println!("Generating magic icon...");

    // Ensure the output directory exists
    create_dir_all(out_dir).context("Can't create output directory")?;

    let ico_path = out_dir.join(ICO_FILE_NAME);
    let preview_path = out_dir.join(PREVIEW_FILE_NAME);
    let written = export(emblem::render, &ICON_SIZES, &ico_path, &preview_path)?;

    println!(
        "✓ Generated {} (preview: {})",
        written.display(),
        preview_path.display()
    );
    Ok(written)
}

/// Render once at the largest of `sizes`, then write the multi-size ICO and
/// the full-size preview. Returns the ICO path.
pub fn export<F>(render: F, sizes: &[u32], ico_path: &Path, preview_path: &Path) -> Result<PathBuf>
where
    F: Fn(u32) -> RgbaImage,
{
    let max_size = sizes
        .iter()
        .copied()
        .max()
        .context("At least one icon size is required")?;

    let master = render(max_size);
    let icons = IconSet::from_master(&master, sizes);
    for frame in icons.frames() {
        println!("  ✓ Generated {0}x{0} icon", frame.width());
    }

    icons.write_ico(ico_path)?;
    write_preview(&master, preview_path)?;

    Ok(ico_path.to_path_buf())
}

fn write_preview(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(image.as_raw(), &mut out_file, image.width())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    out_file.flush()?;
    Ok(())
}

// Encode square RGBA data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
