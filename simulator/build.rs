//! Build script for companion-simulator.
//!
//! On Windows, points the linker at a vendored SDL2 and copies `SDL2.dll` next
//! to the built binary. Other platforms use the system SDL2.

use std::path::{Path, PathBuf};
use std::{env, fs};

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let Some(vendor_sdl2) = env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .and_then(|dir| dir.parent().map(|root| root.join("vendor").join("sdl2")))
    else {
        return;
    };
    println!("cargo:rerun-if-changed={}", vendor_sdl2.display());

    if !vendor_sdl2.exists() {
        println!(
            "cargo:warning=SDL2 not found at {}; expecting SDL2.lib and SDL2.dll there",
            vendor_sdl2.display()
        );
        return;
    }
    println!("cargo:rustc-link-search=native={}", vendor_sdl2.display());

    // OUT_DIR is target/<profile>/build/companion-simulator-<hash>/out
    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        return;
    };
    if let Some(profile_dir) = find_profile_dir(&out_dir) {
        copy_dll(&vendor_sdl2.join("SDL2.dll"), &profile_dir.join("SDL2.dll"));
    }
}

fn find_profile_dir(out_dir: &Path) -> Option<&Path> {
    out_dir
        .ancestors()
        .find(|p| p.file_name().is_some_and(|n| n == "release" || n == "debug"))
}

fn copy_dll(from: &Path, to: &Path) {
    if !from.exists() || to.exists() {
        return;
    }
    if let Err(e) = fs::copy(from, to) {
        println!("cargo:warning=Failed to copy SDL2.dll: {e}");
    }
}
