use std::env;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=device.x");

    // cortex-m-rt's link.x does `INCLUDE device.x` when its `device` feature is on.
    if env::var_os("CARGO_FEATURE_RT").is_some() {
        let out_dir = PathBuf::from(env::var("OUT_DIR")?);
        fs::copy("device.x", out_dir.join("device.x"))?;
        println!("cargo:rustc-link-search={}", out_dir.display());
    }

    Ok(())
}
