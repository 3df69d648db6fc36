//! Lookups into the opened files.
//!
//! Both lookups are side-effect free; `None` is an ordinary answer.

use crate::models::FileRecord;
use crate::store::RepoStore;

/// The opened file whose URL matches the active file's URL.
pub fn find_active_in_opened(store: &RepoStore) -> Option<&FileRecord> {
    let active = store.active_url()?;
    find_by_path(store, active)
}

/// The opened file with exactly this URL.
pub fn find_by_path<'a>(store: &'a RepoStore, path: &str) -> Option<&'a FileRecord> {
    store.opened_files().iter().find(|file| file.url == path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BlobPayload;

    fn store_with(urls: &[&str]) -> RepoStore {
        let mut store = RepoStore::new("/p");
        for url in urls {
            store.activate_file(BlobPayload::default(), None, url);
        }
        store
    }

    #[test]
    fn test_find_active() {
        let store = store_with(&["/blob/a.rb", "/blob/b.rb"]);
        assert_eq!(
            find_active_in_opened(&store).map(|f| f.url.as_str()),
            Some("/blob/b.rb")
        );
    }

    #[test]
    fn test_find_active_without_files() {
        assert!(find_active_in_opened(&RepoStore::new("/p")).is_none());
    }

    #[test]
    fn test_find_by_path_exact() {
        let store = store_with(&["/blob/a.rb"]);
        assert!(find_by_path(&store, "/blob/a.rb").is_some());
        assert!(find_by_path(&store, "/blob/a.r").is_none());
        assert!(find_by_path(&store, "/blob/A.rb").is_none());
    }
}
