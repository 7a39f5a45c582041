//! Project layout configuration: which paths to probe and what to scan for

use crate::constants;
use droidcheck_types::{CheckItem, CheckSection};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Expected layout of the inspected project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_source_tree")]
    pub source_tree: String,
    /// Extension counted under `source_tree`, without the leading dot
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_manifest")]
    pub manifest: String,
    #[serde(default = "default_required_permissions")]
    pub required_permissions: Vec<String>,
    // Tables last so TOML output keeps plain keys ahead of them
    #[serde(default = "default_directories")]
    pub directories: Vec<CheckItem>,
    #[serde(default = "default_build_files")]
    pub build_files: Vec<CheckItem>,
    #[serde(default = "default_app_files")]
    pub app_files: Vec<CheckItem>,
    #[serde(default = "default_resource_files")]
    pub resource_files: Vec<CheckItem>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            root: default_root(),
            directories: default_directories(),
            build_files: default_build_files(),
            app_files: default_app_files(),
            resource_files: default_resource_files(),
            source_tree: default_source_tree(),
            source_extension: default_source_extension(),
            source_language: default_source_language(),
            manifest: default_manifest(),
            required_permissions: default_required_permissions(),
        }
    }
}

impl ProjectConfig {
    /// Ordered check items for a section
    #[must_use]
    pub fn items(&self, section: CheckSection) -> &[CheckItem] {
        match section {
            CheckSection::Structure => &self.directories,
            CheckSection::BuildConfiguration => &self.build_files,
            CheckSection::ApplicationFiles => &self.app_files,
            CheckSection::ResourceFiles => &self.resource_files,
        }
    }

    /// Join a root-relative path onto the project root.
    ///
    /// The empty path resolves to the root itself.
    #[must_use]
    pub fn resolve(&self, relative: &str) -> PathBuf {
        if relative.is_empty() {
            self.root.clone()
        } else {
            self.root.join(relative)
        }
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.resolve(&self.manifest)
    }

    #[must_use]
    pub fn source_tree_path(&self) -> PathBuf {
        self.resolve(&self.source_tree)
    }

    /// Replace the project root, keeping every table relative to it
    pub fn set_root(&mut self, root: &Path) {
        self.root = root.to_path_buf();
    }
}

fn items(table: &[(&str, &str)]) -> Vec<CheckItem> {
    table
        .iter()
        .map(|(path, description)| CheckItem::new(*path, *description))
        .collect()
}

// Default value functions for serde
fn default_title() -> String {
    constants::DEFAULT_TITLE.to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from(constants::DEFAULT_ROOT)
}

fn default_directories() -> Vec<CheckItem> {
    items(constants::DIRECTORIES)
}

fn default_build_files() -> Vec<CheckItem> {
    items(constants::BUILD_FILES)
}

fn default_app_files() -> Vec<CheckItem> {
    items(constants::APP_FILES)
}

fn default_resource_files() -> Vec<CheckItem> {
    items(constants::RESOURCE_FILES)
}

fn default_source_tree() -> String {
    constants::SOURCE_TREE.to_string()
}

fn default_source_extension() -> String {
    constants::SOURCE_EXTENSION.to_string()
}

fn default_source_language() -> String {
    constants::SOURCE_LANGUAGE.to_string()
}

fn default_manifest() -> String {
    constants::MANIFEST.to_string()
}

fn default_required_permissions() -> Vec<String> {
    constants::REQUIRED_PERMISSIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_table_keeps_fixed_order() {
        let config = ProjectConfig::default();
        let descriptions: Vec<_> = config
            .items(CheckSection::Structure)
            .iter()
            .map(|item| item.description.as_str())
            .collect();
        assert_eq!(
            descriptions,
            [
                "Project root directory",
                "App module directory",
                "Main package directory",
                "Resources directory",
                "Gradle wrapper directory",
            ]
        );
    }

    #[test]
    fn empty_path_resolves_to_root() {
        let config = ProjectConfig::default();
        assert_eq!(config.resolve(""), PathBuf::from("MT5AlertApp"));
        assert_eq!(
            config.manifest_path(),
            PathBuf::from("MT5AlertApp/app/src/main/AndroidManifest.xml")
        );
    }

    #[test]
    fn section_sizes_match_tables() {
        let config = ProjectConfig::default();
        assert_eq!(config.items(CheckSection::BuildConfiguration).len(), 5);
        assert_eq!(config.items(CheckSection::ApplicationFiles).len(), 4);
        assert_eq!(config.items(CheckSection::ResourceFiles).len(), 5);
        assert_eq!(config.required_permissions.len(), 3);
    }
}
