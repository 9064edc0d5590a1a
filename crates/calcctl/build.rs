// Build script for calcctl - embeds version at compile time

fn main() {
    // Release builds may override the Cargo.toml version
    let version =
        std::env::var("CALCCTL_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=CALCCTL_VERSION={}", version);

    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=CALCCTL_VERSION");
}
