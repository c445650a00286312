//! file: assets.rs
//! author: Jacob Xie
//! date: 2025/12/20 14:18:50 Saturday
//! brief: locates the player sprite atlas and reads its dimensions

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, bail, ensure};

pub const PLAYER_ATLAS_PATH: &str = "res/player_atlas.png";

/// Side of one square cell in the player atlas, in texels.
pub const ATLAS_CELL_SIZE: f32 = 24.0;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

#[derive(Clone, Debug)]
pub struct PlayerAtlas {
    pub path: Arc<Path>,
    pub width: u32,
    pub height: u32,
}

impl PlayerAtlas {
    /// Resolves `path` against the working directory, then the crate root.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = resolve(path.as_ref())?;
        let bytes =
            std::fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
        let (width, height) =
            png_dimensions(&bytes).with_context(|| format!("invalid PNG {}", path.display()))?;
        ensure!(
            width as f32 >= ATLAS_CELL_SIZE && height as f32 >= ATLAS_CELL_SIZE,
            "{} is {width}x{height}, smaller than one {ATLAS_CELL_SIZE}px cell",
            path.display()
        );

        log::info!("Loaded player atlas {} ({width}x{height})", path.display());
        Ok(Self {
            path: path.into(),
            width,
            height,
        })
    }

    /// Texel to pixel scale that maps one cell onto a `width` x `height` box.
    pub fn cell_scale(&self, width: f32, height: f32) -> (f32, f32) {
        (width / ATLAS_CELL_SIZE, height / ATLAS_CELL_SIZE)
    }
}

fn resolve(path: &Path) -> anyhow::Result<PathBuf> {
    let candidates = [
        path.to_path_buf(),
        Path::new(env!("CARGO_MANIFEST_DIR")).join(path),
    ];
    for candidate in &candidates {
        if candidate.is_file() {
            return candidate
                .canonicalize()
                .with_context(|| format!("failed to resolve {}", candidate.display()));
        }
    }
    bail!("asset {} not found", path.display())
}

/// Reads width and height from the IHDR chunk that must follow the signature.
fn png_dimensions(bytes: &[u8]) -> anyhow::Result<(u32, u32)> {
    ensure!(bytes.len() >= 24, "file is too short ({} bytes)", bytes.len());
    ensure!(bytes[..8] == PNG_SIGNATURE, "missing PNG signature");
    ensure!(&bytes[12..16] == b"IHDR", "first chunk is not IHDR");

    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    ensure!(width > 0 && height > 0, "empty image {width}x{height}");
    Ok((width, height))
}
