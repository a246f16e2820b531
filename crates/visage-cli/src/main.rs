//! Command-line host for the visage engine.
//!
//! Builds an identity record from flags, composes the avatar, writes a
//! PNG, and reports the dominant (average) color for theming — the thin
//! glue the engine itself stays free of.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use visage_engine::logging::{LoggingConfig, init_logging};
use visage_engine::{GrainTexture, IdentityRecord, RasterSurface, Resources, compose};

#[derive(Parser, Debug)]
#[command(name = "visage", about = "Deterministic avatar synthesis from identity attributes")]
struct Args {
    /// Full display name (must contain at least one non-space character).
    #[arg(long)]
    name: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    phone: String,

    #[arg(long, default_value = "")]
    birthday: String,

    /// Variation counter; bump to get a different image for the same person.
    #[arg(long, default_value_t = 0)]
    variation: i64,

    /// Image side length in pixels.
    #[arg(long, default_value_t = 640)]
    size: u32,

    /// Output PNG path.
    #[arg(long, default_value = "avatar.png")]
    out: PathBuf,
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let args = Args::parse();

    let record = IdentityRecord {
        full_name: args.name,
        email: args.email,
        phone: args.phone,
        birthday: args.birthday,
        variation: args.variation,
    };

    log::debug!("composing avatar for {:?}", record.full_name);
    let grain = GrainTexture::synthesized(128);
    let resources = Resources { grain: &grain };
    let surface = compose(&record, args.size, &resources)?;

    let image = image::RgbaImage::from_raw(
        surface.size(),
        surface.size(),
        surface.as_bytes().to_vec(),
    )
    .context("raster buffer has unexpected length")?;
    image
        .save(&args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;

    let [r, g, b] = average_color(&surface);
    let side = surface.size();
    println!(
        "wrote {} ({side}x{side} px, average color #{r:02x}{g:02x}{b:02x})",
        args.out.display(),
    );
    Ok(())
}

/// Average color over the buffer, for host-side theming.
fn average_color(surface: &RasterSurface) -> [u8; 3] {
    let mut sums = [0u64; 3];
    for p in surface.pixels() {
        sums[0] += p.r as u64;
        sums[1] += p.g as u64;
        sums[2] += p.b as u64;
    }
    let count = surface.pixels().len() as u64;
    [
        (sums[0] / count) as u8,
        (sums[1] / count) as u8,
        (sums[2] / count) as u8,
    ]
}
