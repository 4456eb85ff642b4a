use std::{collections::BTreeMap, path::PathBuf};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        menu::{entities::MenuEntry, ports::MenuRepository, value_objects::DateKey},
    },
    infrastructure::file::JsonFileStore,
};

const MENUS_FILE: &str = "menus.json";

type MenuFile = BTreeMap<String, MenuEntry>;

/// Menus kept in a single `menus.json` for local development.
#[derive(Debug, Clone)]
pub struct FileMenuRepository {
    files: JsonFileStore,
}

impl FileMenuRepository {
    pub fn new(files: JsonFileStore) -> Self {
        Self { files }
    }

    pub fn path(&self) -> PathBuf {
        self.files.path(MENUS_FILE)
    }

    async fn stored_for_update(&self) -> Result<MenuFile, CoreError> {
        Ok(self
            .files
            .read_for_update(MENUS_FILE)
            .await?
            .unwrap_or_default())
    }
}

impl MenuRepository for FileMenuRepository {
    async fn get_menu_for_date(&self, date: DateKey) -> Result<Option<MenuEntry>, CoreError> {
        let _guard = self.files.lock().await;
        let mut menus: MenuFile = self.files.read(MENUS_FILE).await.unwrap_or_default();

        Ok(menus.remove(&date.to_string()))
    }

    async fn save_menu_for_date(&self, date: DateKey, entry: MenuEntry) -> Result<(), CoreError> {
        let _guard = self.files.lock().await;
        let mut menus = self.stored_for_update().await?;
        menus.insert(date.to_string(), entry);

        self.files.write(MENUS_FILE, &menus).await
    }

    async fn merge_menu_for_date(
        &self,
        date: DateKey,
        entry: MenuEntry,
    ) -> Result<MenuEntry, CoreError> {
        let _guard = self.files.lock().await;
        let mut menus = self.stored_for_update().await?;

        let key = date.to_string();
        let merged = menus.remove(&key).unwrap_or_default().merge(entry);
        menus.insert(key, merged.clone());

        self.files.write(MENUS_FILE, &menus).await?;
        Ok(merged)
    }
}
