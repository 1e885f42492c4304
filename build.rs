fn main() {
    // Footer copyright year is read from this at compile time
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={build_time}");

    println!("cargo:rerun-if-changed=build.rs");
    // re-embed content edits in release builds
    println!("cargo:rerun-if-changed=content");
}
