use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Copies the workspace config.toml next to the built binary,
/// where `shared::config::load_config` looks for it.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let Some(target_dir) = target_profile_dir() else {
        println!("cargo:warning=Cannot locate target profile directory, config.toml not copied");
        return;
    };

    let source_config = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config.toml");
    if !source_config.exists() {
        println!("cargo:warning=config.toml not found, the embedded default config will be used");
        return;
    }

    let dest_config = target_dir.join("config.toml");
    if let Err(e) = fs::copy(&source_config, &dest_config) {
        println!("cargo:warning=Failed to copy config.toml: {}", e);
    }
}

/// OUT_DIR is target/<profile>/build/backend-xxx/out
fn target_profile_dir() -> Option<PathBuf> {
    let out_dir = env::var("OUT_DIR").ok()?;
    let profile = env::var("PROFILE").ok()?;
    Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}
