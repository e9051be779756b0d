use std::env;
use std::fs::File;

use anyhow::{Context, Result};
use memmap::Mmap;

fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .context("usage: jfif_header <image.jpg>")?;

    let file = File::open(&path).with_context(|| format!("failed to open {path}"))?;
    let mmap = unsafe { Mmap::map(&file)? };

    let header = jfif_header::parse(&mmap)
        .with_context(|| format!("failed to parse headers of {path}"))?;

    match &header.jfif {
        Some(jfif) => {
            println!("JFIF version: {}.{:02}", jfif.version.major, jfif.version.minor);
            println!(
                "density: {}x{} ({:?})",
                jfif.x_density, jfif.y_density, jfif.density_unit
            );
            println!("thumbnail: {}x{}", jfif.x_thumbnail, jfif.y_thumbnail);
        }
        None => println!("no JFIF APP0 segment"),
    }

    println!("quantization tables: {}", header.quantization_tables.len());
    println!(
        "huffman tables: {} dc, {} ac",
        header.dc_huffman_tables.len(),
        header.ac_huffman_tables.len()
    );

    Ok(())
}
