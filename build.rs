use std::env;

fn main() {
    let version = env::var("APP_VERSION")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| env::var("CARGO_PKG_VERSION").unwrap_or_default());
    println!("cargo:rustc-env=CARGO_APP_VERSION={}", version);
    println!("cargo:rerun-if-env-changed=APP_VERSION");
}
