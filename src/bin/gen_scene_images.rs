//! Procedural placeholder images for the scene.
//!
//! Writes the four images the game loads (sky, ship, star, asteroid) so the
//! game runs without downloading art.
//!
//! Usage:
//!   cargo run --bin gen_scene_images -- --out-dir assets/images --seed 7

use std::{fs, path::PathBuf};

use clap::Parser;
use image::{Rgba, RgbaImage};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(about = "Generate placeholder scene images", version, author)]
struct Args {
    #[arg(long, default_value = "assets/images")]
    out_dir: PathBuf,
    /// Background tile edge in pixels (stretched to the viewport at runtime).
    #[arg(long, default_value_t = 512)]
    sky_size: u32,
    #[arg(long, default_value_t = 7)]
    seed: u64,
}

const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

fn sky(size: u32, rng: &mut StdRng) -> RgbaImage {
    let mut img = RgbaImage::from_fn(size, size, |_, y| {
        let t = y as f32 / size.max(1) as f32;
        let r = (10.0 + 14.0 * t) as u8;
        let g = (10.0 + 6.0 * t) as u8;
        let b = (26.0 + 40.0 * t) as u8;
        Rgba([r, g, b, 255])
    });
    let stars = (size * size) / 900;
    for _ in 0..stars {
        let x = rng.gen_range(0..size);
        let y = rng.gen_range(0..size);
        let v: u8 = rng.gen_range(120..=255);
        img.put_pixel(x, y, Rgba([v, v, v.saturating_add(20), 255]));
    }
    img
}

/// Point-in-triangle via edge signs.
fn inside_triangle(p: (f32, f32), a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> bool {
    let edge = |p1: (f32, f32), p2: (f32, f32)| (p.0 - p2.0) * (p1.1 - p2.1) - (p1.0 - p2.0) * (p.1 - p2.1);
    let d1 = edge(a, b);
    let d2 = edge(b, c);
    let d3 = edge(c, a);
    let neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(neg && pos)
}

/// Ship with its nose pointing up (image row 0 is the top).
fn ship(size: u32) -> RgbaImage {
    let s = size as f32;
    let nose = (s * 0.5, 1.0);
    let left = (2.0, s - 2.0);
    let right = (s - 2.0, s - 2.0);
    let notch = (s * 0.5, s * 0.72);
    RgbaImage::from_fn(size, size, |x, y| {
        let p = (x as f32 + 0.5, y as f32 + 0.5);
        let hull = inside_triangle(p, nose, left, right) && !inside_triangle(p, left, notch, right);
        if !hull {
            return CLEAR;
        }
        let cockpit = ((p.0 - s * 0.5).powi(2) + (p.1 - s * 0.42).powi(2)).sqrt() < s * 0.1;
        if cockpit {
            Rgba([120, 220, 255, 255])
        } else {
            Rgba([200, 205, 220, 255])
        }
    })
}

fn star(size: u32) -> RgbaImage {
    let c = size as f32 * 0.5;
    let outer = c - 1.0;
    let inner = outer * 0.45;
    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - c;
        let dy = y as f32 + 0.5 - c;
        let r = (dx * dx + dy * dy).sqrt();
        // angle measured from straight up, five lobes
        let a = dx.atan2(-dy);
        let lobe = (a * 5.0 / 2.0).cos().abs();
        let limit = inner + (outer - inner) * lobe.powf(4.0);
        if r <= limit {
            Rgba([255, 220, 60, 255])
        } else {
            CLEAR
        }
    })
}

fn asteroid(size: u32) -> RgbaImage {
    let c = size as f32 * 0.5;
    let radius = c - 1.0;
    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - c;
        let dy = y as f32 + 0.5 - c;
        let r = (dx * dx + dy * dy).sqrt();
        if r > radius {
            return CLEAR;
        }
        // light from the upper left
        let shade = 1.0 - ((dx + radius * 0.4).powi(2) + (dy + radius * 0.4).powi(2)).sqrt() / (radius * 2.0);
        let k = shade.clamp(0.35, 1.0);
        Rgba([(170.0 * k) as u8, (70.0 * k) as u8, (210.0 * k) as u8, 255])
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.sky_size < 16 {
        anyhow::bail!("sky_size too small (min 16)");
    }
    fs::create_dir_all(&args.out_dir)
        .map_err(|e| anyhow::anyhow!("create {}: {e}", args.out_dir.display()))?;
    let mut rng = StdRng::seed_from_u64(args.seed);

    let outputs = [
        ("sky.png", sky(args.sky_size, &mut rng)),
        ("ship.png", ship(48)),
        ("star.png", star(24)),
        ("asteroid.png", asteroid(32)),
    ];
    for (name, img) in outputs {
        let path = args.out_dir.join(name);
        img.save(&path)
            .map_err(|e| anyhow::anyhow!("write {}: {e}", path.display()))?;
        println!("wrote {} ({}x{})", path.display(), img.width(), img.height());
    }
    Ok(())
}
