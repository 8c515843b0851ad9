// File: crates/pathline-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager pulls in; no-op elsewhere.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    #[cfg(target_os = "windows")]
    {
        // registry lookups in the font manager
        println!("cargo:rustc-link-lib=advapi32");
    }
}
