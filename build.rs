//! Build script for the Spotify top items CLI.
//!
//! Copies the `.env.example` configuration template to the user's local data
//! directory so a ready-to-edit example sits next to where the application
//! looks for its `.env` file.
//!
//! ## Destination Location
//! - Linux: `~/.local/share/spotop/.env.example`
//! - macOS: `~/Library/Application Support/spotop/.env.example`
//! - Windows: `%LOCALAPPDATA%/spotop/.env.example`
//!
//! Every filesystem problem is reported as a cargo warning. A read-only home
//! directory (sandboxed builds, CI) must not break the build.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotop");

    let copied = fs::create_dir_all(&out_dir)
        .and_then(|_| fs::read_to_string(&env_example_path))
        .and_then(|contents| fs::write(out_dir.join(".env.example"), contents));
    if let Err(e) = copied {
        println!(
            "cargo:warning=could not copy .env.example to {}: {}",
            out_dir.display(),
            e
        );
    }

    Ok(())
}
