//! Build script for sobol_core.
//!
//! Embeds the published Joe & Kuo parameter file when one is available.
//!
//! # Environment Variables
//!
//! - `SOBOL_JOE_KUO_FILE`: Path to `new-joe-kuo-6.21201` (optional)
//!
//! Without the variable the script looks for `data/new-joe-kuo-6.21201` in
//! the crate directory. When a file is found it is copied into `OUT_DIR` and
//! the `published_table` cfg is set, so `DirectionNumberTable::builtin()`
//! serves the full table at the historical row offset. Otherwise the build
//! continues with the transcribed leading rows only and says so.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const FILE_NAME: &str = "new-joe-kuo-6.21201";

fn main() {
    println!("cargo:rerun-if-env-changed=SOBOL_JOE_KUO_FILE");
    println!("cargo:rustc-check-cfg=cfg(published_table)");

    let bundled = Path::new("data").join(FILE_NAME);
    println!("cargo:rerun-if-changed={}", bundled.display());

    let source = env::var_os("SOBOL_JOE_KUO_FILE")
        .map(PathBuf::from)
        .or_else(|| bundled.exists().then_some(bundled));

    match source {
        Some(path) => embed_published_table(&path),
        None => emit_missing_table_warning(),
    }
}

/// Copies the parameter file into `OUT_DIR` and enables `published_table`.
fn embed_published_table(path: &Path) {
    println!("cargo:rerun-if-changed={}", path.display());

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            println!("cargo:warning=OUT_DIR is not set; skipping the published table");
            return;
        }
    };

    match fs::copy(path, out_dir.join(FILE_NAME)) {
        Ok(_) => {
            println!("cargo:rustc-cfg=published_table");
        }
        Err(e) => {
            println!(
                "cargo:warning=Failed to read {}: {}",
                path.display(),
                e
            );
            emit_missing_table_warning();
        }
    }
}

/// Emits a cargo warning describing the fallback table.
fn emit_missing_table_warning() {
    println!("cargo:warning=Joe & Kuo parameter file not found.");
    println!("cargo:warning=Built-in table falls back to dimensions 1..=37 at row offset 0.");
    println!("cargo:warning=For the full table at the historical 1000-row offset:");
    println!("cargo:warning=  1. Download https://web.maths.unsw.edu.au/~fkuo/sobol/{}", FILE_NAME);
    println!("cargo:warning=  2. Place it at crates/sobol_core/data/{} or set SOBOL_JOE_KUO_FILE", FILE_NAME);
}
