fn main() {
    println!("cargo:rerun-if-env-changed=STACKGEN_VERSION");
    let version = std::env::var("STACKGEN_VERSION")
        .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
    println!("cargo:rustc-env=APP_VERSION={}", version);
}
