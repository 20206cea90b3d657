use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=frontend/assets");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let assets_dir = manifest_dir.join("frontend").join("assets");

    if !assets_dir.join("style.css").exists() {
        panic!(
            "Embedded frontend assets are missing at {}",
            assets_dir.display()
        );
    }
}
