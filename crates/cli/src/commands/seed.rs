//! Seed and wipe the data directory.

use std::path::Path;

use handora_storefront::store::{JsonFileStore, KvStore, StoreError, keys, seed};

/// Errors from the seeding commands.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Write the seed collections into `data_dir`.
///
/// Existing collections are left alone unless `force` is set.
///
/// # Errors
///
/// Returns an error when the data directory cannot be opened or a
/// collection cannot be written.
pub fn run(data_dir: &Path, force: bool) -> Result<(), SeedError> {
    let store = JsonFileStore::open(data_dir)?;

    write_collection(&store, keys::PRODUCTS, &seed::products(), force)?;
    write_collection(&store, keys::BLOGS, &seed::blogs(), force)?;
    write_collection::<serde_json::Value>(&store, keys::ORDERS, &[], force)?;

    println!("seeded {}", data_dir.display());
    Ok(())
}

/// Remove every collection from `data_dir`.
///
/// # Errors
///
/// Returns an error when the data directory cannot be opened or a
/// collection cannot be removed.
pub fn wipe(data_dir: &Path) -> Result<(), SeedError> {
    let store = JsonFileStore::open(data_dir)?;

    for key in [keys::PRODUCTS, keys::BLOGS, keys::ORDERS] {
        store.remove(key)?;
        tracing::info!(key, "collection removed");
    }

    println!("wiped {}", data_dir.display());
    Ok(())
}

fn write_collection<T: serde::Serialize>(
    store: &JsonFileStore,
    key: &str,
    items: &[T],
    force: bool,
) -> Result<(), SeedError> {
    if !force && store.get(key)?.is_some() {
        tracing::info!(key, "collection exists, skipping (use --force to overwrite)");
        return Ok(());
    }
    let bytes = serde_json::to_vec_pretty(items).map_err(StoreError::from)?;
    store.set(key, &bytes)?;
    tracing::info!(key, items = items.len(), "collection written");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("handora-seed-{tag}-{}", std::process::id()))
    }

    #[test]
    fn test_seed_then_wipe() {
        let dir = temp_dir("roundtrip");
        run(&dir, false).unwrap();

        let store = JsonFileStore::open(&dir).unwrap();
        assert!(store.get(keys::PRODUCTS).unwrap().is_some());
        assert!(store.get(keys::BLOGS).unwrap().is_some());
        assert!(store.get(keys::ORDERS).unwrap().is_some());

        wipe(&dir).unwrap();
        assert!(store.get(keys::PRODUCTS).unwrap().is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_seed_without_force_preserves_existing() {
        let dir = temp_dir("preserve");
        let store = JsonFileStore::open(&dir).unwrap();
        store.set(keys::PRODUCTS, b"[]").unwrap();

        run(&dir, false).unwrap();
        assert_eq!(store.get(keys::PRODUCTS).unwrap().unwrap(), b"[]");

        run(&dir, true).unwrap();
        assert_ne!(store.get(keys::PRODUCTS).unwrap().unwrap(), b"[]");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
