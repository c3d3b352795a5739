use std::sync::LazyLock;

/// Version of the software: the Cargo package version plus the build profile
/// when it is not a release build.
pub static VERSION: LazyLock<String> = LazyLock::new(|| {
    let version = env!("CARGO_PKG_VERSION");
    if cfg!(debug_assertions) { format!("{version}-debug") } else { version.to_string() }
});
