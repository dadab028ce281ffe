use super::data::{new_item_id, MediaItem};
use super::library::Library;
use crate::error::Result;

/// The guestbook's media collection, newest first.
///
/// Every mutation rewrites the whole serialized sequence under
/// one storage key, so the stored value always mirrors `items`.
#[derive(Debug)]
pub struct Gallery {
    items: Vec<MediaItem>,
    library: Library,
    storage_key: String,
}

impl Gallery {
    /// Load the collection stored under `storage_key`.
    ///
    /// - nothing stored yet: seed the welcome item and persist it
    /// - stored value unreadable: start empty, leave storage untouched
    pub fn load(library: Library, storage_key: &str) -> Result<Self> {
        let items = match library.get(storage_key)? {
            Some(json) => match serde_json::from_str::<Vec<MediaItem>>(&json) {
                Ok(items) => items,
                Err(e) => {
                    tracing::error!(error = %e, "Fehler beim Laden der Galerie");
                    Vec::new()
                }
            },
            None => {
                let seeded = vec![MediaItem::demo()];
                library.set(storage_key, &serde_json::to_string(&seeded)?)?;
                tracing::info!("🌱 Seeded gallery with welcome item");
                seeded
            }
        };

        tracing::info!("🖼️  Gallery loaded with {} items", items.len());

        Ok(Self {
            items,
            library,
            storage_key: storage_key.to_string(),
        })
    }

    /// Prepend a freshly uploaded item and persist.
    ///
    /// An id that is already taken is replaced with a new one. If the
    /// write fails the collection is left as it was.
    pub fn add(&mut self, mut item: MediaItem) -> Result<()> {
        while self.index_of(&item.id).is_some() {
            let fresh = new_item_id();
            tracing::debug!(old = %item.id, new = %fresh, "reassigning duplicate id");
            item.id = fresh;
        }

        let mut updated = Vec::with_capacity(self.items.len() + 1);
        updated.push(item);
        updated.extend(self.items.iter().cloned());

        self.persist(&updated)?;
        self.items = updated;
        Ok(())
    }

    /// Remove the item with `id` and persist.
    ///
    /// Returns false (and writes nothing) when no item has that id.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let Some(index) = self.index_of(id) else {
            return Ok(false);
        };

        let mut updated = self.items.clone();
        updated.remove(index);

        self.persist(&updated)?;
        self.items = updated;
        Ok(true)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self, items: &[MediaItem]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.library.set(&self.storage_key, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::MediaType;

    const KEY: &str = "test_gallery";

    fn item(id: &str, guest: &str) -> MediaItem {
        MediaItem {
            id: id.to_string(),
            url: format!("data:image/png;base64,{id}"),
            thumbnail: None,
            media_type: MediaType::Image,
            caption: String::new(),
            guest_name: guest.to_string(),
            timestamp: 1_718_000_000_000,
        }
    }

    fn stored(gallery: &Gallery) -> Vec<MediaItem> {
        let json = gallery.library.get(KEY).unwrap().unwrap();
        serde_json::from_str(&json).unwrap()
    }

    fn gallery_with(items: &[MediaItem]) -> Gallery {
        let library = Library::open_in_memory().unwrap();
        library
            .set(KEY, &serde_json::to_string(items).unwrap())
            .unwrap();
        Gallery::load(library, KEY).unwrap()
    }

    #[test]
    fn test_first_launch_seeds_demo_item() {
        let gallery = Gallery::load(Library::open_in_memory().unwrap(), KEY).unwrap();

        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.items()[0].id, "welcome-1");
        assert_eq!(stored(&gallery), gallery.items());
    }

    #[test]
    fn test_malformed_storage_yields_empty_gallery() {
        let library = Library::open_in_memory().unwrap();
        library.set(KEY, "{not json").unwrap();

        let gallery = Gallery::load(library, KEY).unwrap();

        assert!(gallery.is_empty());
        // Left alone until the next mutation
        assert_eq!(gallery.library.get(KEY).unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_wrong_shape_yields_empty_gallery() {
        let library = Library::open_in_memory().unwrap();
        library.set(KEY, r#"[{"id": 5}]"#).unwrap();

        assert!(Gallery::load(library, KEY).unwrap().is_empty());
    }

    #[test]
    fn test_add_prepends_and_persists() {
        let mut gallery = gallery_with(&[item("older", "Anna")]);

        gallery.add(item("newer", "Ben")).unwrap();

        let ids: Vec<_> = gallery.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["newer", "older"]);
        assert_eq!(stored(&gallery), gallery.items());
    }

    #[test]
    fn test_add_after_malformed_storage_overwrites_it() {
        let library = Library::open_in_memory().unwrap();
        library.set(KEY, "garbage").unwrap();
        let mut gallery = Gallery::load(library, KEY).unwrap();

        gallery.add(item("first", "Anna")).unwrap();

        assert_eq!(stored(&gallery).len(), 1);
    }

    #[test]
    fn test_add_keeps_ids_unique() {
        let mut gallery = gallery_with(&[item("same", "Anna")]);

        gallery.add(item("same", "Ben")).unwrap();

        assert_eq!(gallery.len(), 2);
        assert_ne!(gallery.items()[0].id, gallery.items()[1].id);
        assert_eq!(gallery.items()[0].guest_name, "Ben");
        assert_eq!(gallery.items()[1].id, "same");
    }

    #[test]
    fn test_remove_targets_exactly_one_item() {
        let mut gallery = gallery_with(&[item("a", "Anna"), item("b", "Ben"), item("c", "Cem")]);

        assert!(gallery.remove("b").unwrap());

        let ids: Vec<_> = gallery.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert_eq!(stored(&gallery), gallery.items());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut gallery = gallery_with(&[item("a", "Anna")]);

        assert!(!gallery.remove("zzz").unwrap());
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn test_index_of() {
        let gallery = gallery_with(&[item("a", "Anna"), item("b", "Ben")]);
        assert_eq!(gallery.index_of("b"), Some(1));
        assert_eq!(gallery.index_of("x"), None);
        assert_eq!(gallery.get(0).map(|i| i.guest_name.as_str()), Some("Anna"));
    }
}
