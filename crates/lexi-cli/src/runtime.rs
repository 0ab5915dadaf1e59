use anyhow::Context as _;

/// Every request spawns onto this runtime so it must stay alive until the
/// command completes
pub fn create_runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("unable to create runtime")
}
