//! Basic usage of the pathfs backends.
//!
//! The same build-like routine runs against an in-memory tree and against a
//! scratch directory on disk seen through a rerooted view.
//!
//! Run with: `cargo run --example basic_usage`

use pathfs::*;
use std::path::Path;

/// Lay out a tiny build tree and report what ended up in it.
fn emit_artifacts(fs: &dyn Fs) -> Result<(), FsError> {
    fs.create_dir_all(Path::new("/target/release"))?;
    fs.write(Path::new("/target/release/app"), b"\x7fELF...")?;
    fs.write_str(Path::new("/target/release/app.d"), "app: src/main.rs\n")?;

    for name in fs.read_dir(Path::new("/target/release"))? {
        println!("   /target/release/{name}");
    }

    match fs.write(Path::new("/target"), b"oops") {
        Err(err) if err.kind() == FsErrorKind::IsADirectory => {
            println!("   refused to overwrite a directory: {err}");
        }
        other => println!("   unexpected: {other:?}"),
    }
    Ok(())
}

fn main() {
    println!("=== pathfs Basic Usage Example ===\n");

    println!("1. In memory...");
    let mem = MemoryFs::new();
    emit_artifacts(&mem).unwrap();
    println!("   /target exists: {}", mem.exists(Path::new("/target")));

    println!("\n2. On disk, rerooted at a scratch directory...");
    let scratch = std::env::temp_dir().join(format!("pathfs-demo-{}", std::process::id()));
    local().create_dir_all(&scratch).unwrap();
    let view = local().layer(RerootLayer::new(&scratch));
    emit_artifacts(&view).unwrap();
    println!("   host path: {}", view.translate(Path::new("/target/release/app")).display());
    std::fs::remove_dir_all(&scratch).unwrap();

    println!("\n=== Done ===");
}
