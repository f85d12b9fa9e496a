//! Directory-tree catalog source.
//!
//! Layout:
//!
//! ```text
//! base/
//! └── <family>/
//!     └── <distro>/
//!         ├── <distro>.json       ← required, otherwise the folder is skipped
//!         ├── flavours.json       ← optional index (or flavors.json)
//!         └── <flavor>.json       ← one per listed flavor, required if listed
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Catalog, Distribution, Family, Flavor};
use crate::error::{CoreError, CoreResult};

/// Extension of every record file in the tree.
pub const RECORD_EXTENSION: &str = "json";

/// Flavor index filenames, in lookup order.
pub const FLAVOR_INDEX_FILES: [&str; 2] = ["flavours.json", "flavors.json"];

#[derive(Debug, Default, Deserialize)]
struct FlavorIndex {
    #[serde(default, deserialize_with = "crate::domain::null_as_default")]
    flavours: Vec<String>,
    #[serde(default, deserialize_with = "crate::domain::null_as_default")]
    flavors: Vec<String>,
}

impl FlavorIndex {
    fn into_names(self) -> Vec<String> {
        if self.flavours.is_empty() {
            self.flavors
        } else {
            self.flavours
        }
    }
}

/// Build a catalog from a directory tree.
///
/// Families without a single parsed distribution are left out, so an empty
/// result means the tree holds nothing usable.
pub fn load_tree(base: &Path) -> CoreResult<Catalog> {
    let mut catalog = Catalog::new();

    for (family_key, family_dir) in subdirectories(base)? {
        let mut family = Family::default();

        for (distro_key, distro_dir) in subdirectories(&family_dir)? {
            if let Some(distro) = load_distro(&family_key, &distro_key, &distro_dir)? {
                family.distros.insert(distro_key, distro);
            }
        }

        if family.is_empty() {
            tracing::debug!(family = %family_key, "No distributions found, skipping family");
        } else {
            catalog.insert_family(family_key, family);
        }
    }

    Ok(catalog)
}

/// Immediate subdirectories of `dir` as `(name, path)`, sorted by name.
fn subdirectories(dir: &Path) -> CoreResult<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        CoreError::config(format!("read directory {}: {e}", dir.display()))
    })?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| CoreError::config(format!("read directory {}: {e}", dir.display())))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => dirs.push((name, path)),
            Err(name) => {
                tracing::warn!(?name, "Skipping directory with a non UTF-8 name");
            }
        }
    }

    dirs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(dirs)
}

/// Load `<distro>/<distro>.json` plus any listed flavors.
///
/// Returns `None` when the record file is absent: the folder does not follow
/// the convention and is ignored. Everything after that point is strict.
fn load_distro(family: &str, distro: &str, dir: &Path) -> CoreResult<Option<Distribution>> {
    let record_path = dir.join(format!("{distro}.{RECORD_EXTENSION}"));
    if !record_path.is_file() {
        tracing::debug!(
            path = %record_path.display(),
            "No distribution record, skipping directory"
        );
        return Ok(None);
    }

    let content = fs::read_to_string(&record_path)
        .map_err(|e| CoreError::config(format!("read distro {family}/{distro}: {e}")))?;
    let mut record = Distribution::from_json(&content)
        .map_err(|e| CoreError::config(format!("parse distro {family}/{distro}: {e}")))?;

    for name in read_flavor_index(dir) {
        let flavor = load_flavor(family, distro, &name, dir)?;
        record.flavors.insert(name, flavor);
    }

    Ok(Some(record))
}

/// Flavor names listed by the first index file found.
///
/// An index that cannot be read or parsed is ignored.
fn read_flavor_index(dir: &Path) -> Vec<String> {
    let Some(index_path) = FLAVOR_INDEX_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
    else {
        return Vec::new();
    };

    let parsed = fs::read_to_string(&index_path)
        .map_err(|e| e.to_string())
        .and_then(|content| {
            serde_json::from_str::<FlavorIndex>(&content).map_err(|e| e.to_string())
        });

    match parsed {
        Ok(index) => index.into_names(),
        Err(reason) => {
            tracing::warn!(
                path = %index_path.display(),
                %reason,
                "Ignoring unreadable flavor index"
            );
            Vec::new()
        }
    }
}

fn load_flavor(family: &str, distro: &str, name: &str, dir: &Path) -> CoreResult<Flavor> {
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(CoreError::config(format!(
            "invalid flavour name '{name}' listed for {family}/{distro}"
        )));
    }

    let path = dir.join(format!("{name}.{RECORD_EXTENSION}"));
    let content = fs::read_to_string(&path)
        .map_err(|e| CoreError::config(format!("read flavour {family}/{distro}/{name}: {e}")))?;
    Flavor::from_json(&content)
        .map_err(|e| CoreError::config(format!("parse flavour {family}/{distro}/{name}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DEBIAN_RECORD: &str = r#"{
        "url_template": "{base_url}/{version}/debian.iso",
        "filename_template": "debian-{version}.iso",
        "base_url": "http://x",
        "versions": ["12"]
    }"#;

    fn write(base: &Path, relative: &str, content: &str) {
        let path = base.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn debian_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "gnu/debian/debian.json", DEBIAN_RECORD);
        temp
    }

    #[test]
    fn test_single_distro_tree() {
        let temp = debian_tree();

        let catalog = load_tree(temp.path()).unwrap();

        assert_eq!(catalog.family_keys().collect::<Vec<_>>(), vec!["gnu"]);
        let family = catalog.family("gnu").unwrap();
        assert_eq!(family.distro_keys().collect::<Vec<_>>(), vec!["debian"]);
        let distro = catalog.distribution("gnu", "debian").unwrap();
        assert_eq!(distro.versions, vec!["12"]);
        assert!(distro.flavors.is_empty());
    }

    #[test]
    fn test_flavours_loaded_without_touching_primary_templates() {
        let temp = debian_tree();
        write(
            temp.path(),
            "gnu/debian/flavours.json",
            r#"{"flavours": ["netinst"]}"#,
        );
        write(
            temp.path(),
            "gnu/debian/netinst.json",
            r#"{"filename_template": "debian-netinst-{version}.iso"}"#,
        );

        let catalog = load_tree(temp.path()).unwrap();
        let distro = catalog.distribution("gnu", "debian").unwrap();

        assert_eq!(
            distro.flavors["netinst"].filename_template.as_deref(),
            Some("debian-netinst-{version}.iso")
        );
        assert_eq!(distro.filename_template, "debian-{version}.iso");
        assert_eq!(distro.url_template, "{base_url}/{version}/debian.iso");
    }

    #[test]
    fn test_american_spelling_index() {
        let temp = debian_tree();
        write(temp.path(), "gnu/debian/flavors.json", r#"{"flavors": ["kde"]}"#);
        write(temp.path(), "gnu/debian/kde.json", r#"{"filename_glob": "*-kde.iso"}"#);

        let catalog = load_tree(temp.path()).unwrap();
        let distro = catalog.distribution("gnu", "debian").unwrap();
        assert!(distro.flavors.contains_key("kde"));
    }

    #[test]
    fn test_primary_index_name_wins() {
        let temp = debian_tree();
        write(temp.path(), "gnu/debian/flavours.json", r#"{"flavours": ["kde"]}"#);
        write(temp.path(), "gnu/debian/flavors.json", r#"{"flavors": ["gnome"]}"#);
        write(temp.path(), "gnu/debian/kde.json", "{}");

        let catalog = load_tree(temp.path()).unwrap();
        let distro = catalog.distribution("gnu", "debian").unwrap();
        assert_eq!(distro.flavors.keys().collect::<Vec<_>>(), vec!["kde"]);
    }

    #[test]
    fn test_british_key_wins_when_both_listed() {
        let temp = debian_tree();
        write(
            temp.path(),
            "gnu/debian/flavours.json",
            r#"{"flavours": ["kde"], "flavors": ["gnome"]}"#,
        );
        write(temp.path(), "gnu/debian/kde.json", "{}");

        let catalog = load_tree(temp.path()).unwrap();
        let distro = catalog.distribution("gnu", "debian").unwrap();
        assert_eq!(distro.flavors.keys().collect::<Vec<_>>(), vec!["kde"]);
    }

    #[test]
    fn test_empty_british_key_falls_back_to_american() {
        let temp = debian_tree();
        write(
            temp.path(),
            "gnu/debian/flavours.json",
            r#"{"flavours": [], "flavors": ["gnome"]}"#,
        );
        write(temp.path(), "gnu/debian/gnome.json", "{}");

        let catalog = load_tree(temp.path()).unwrap();
        let distro = catalog.distribution("gnu", "debian").unwrap();
        assert_eq!(distro.flavors.keys().collect::<Vec<_>>(), vec!["gnome"]);
    }

    #[test]
    fn test_null_index_lists_are_empty() {
        let temp = debian_tree();
        write(
            temp.path(),
            "gnu/debian/flavours.json",
            r#"{"flavours": null, "flavors": ["gnome"]}"#,
        );
        write(temp.path(), "gnu/debian/gnome.json", "{}");

        let catalog = load_tree(temp.path()).unwrap();
        let distro = catalog.distribution("gnu", "debian").unwrap();
        assert_eq!(distro.flavors.keys().collect::<Vec<_>>(), vec!["gnome"]);
    }

    #[test]
    fn test_index_in_primary_file_may_use_either_key() {
        let temp = debian_tree();
        write(temp.path(), "gnu/debian/flavours.json", r#"{"flavors": ["kde"]}"#);
        write(temp.path(), "gnu/debian/kde.json", "{}");

        let catalog = load_tree(temp.path()).unwrap();
        assert!(
            catalog
                .distribution("gnu", "debian")
                .unwrap()
                .flavors
                .contains_key("kde")
        );
    }

    #[test]
    fn test_missing_listed_flavour_is_fatal() {
        let temp = debian_tree();
        write(temp.path(), "gnu/debian/flavours.json", r#"{"flavours": ["netinst"]}"#);

        let err = load_tree(temp.path()).unwrap_err();
        assert!(matches!(err, CoreError::Config { .. }));
        assert!(err.to_string().contains("gnu/debian/netinst"));
    }

    #[test]
    fn test_malformed_listed_flavour_is_fatal() {
        let temp = debian_tree();
        write(temp.path(), "gnu/debian/flavours.json", r#"{"flavours": ["netinst"]}"#);
        write(temp.path(), "gnu/debian/netinst.json", "{not json");

        let err = load_tree(temp.path()).unwrap_err();
        assert!(err.to_string().contains("parse flavour gnu/debian/netinst"));
    }

    #[test]
    fn test_flavour_name_cannot_escape_directory() {
        let temp = debian_tree();
        write(
            temp.path(),
            "gnu/debian/flavours.json",
            r#"{"flavours": ["../../gnu/debian/debian"]}"#,
        );

        let err = load_tree(temp.path()).unwrap_err();
        assert!(err.to_string().contains("invalid flavour name"));
    }

    #[test]
    fn test_malformed_index_is_ignored() {
        let temp = debian_tree();
        write(temp.path(), "gnu/debian/flavours.json", "[oops");

        let catalog = load_tree(temp.path()).unwrap();
        assert!(catalog.distribution("gnu", "debian").unwrap().flavors.is_empty());
    }

    #[test]
    fn test_embedded_flavours_kept_and_overridden_by_files() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "gnu/debian/debian.json",
            r#"{
                "versions": ["12"],
                "flavors": {
                    "kde": {"filename_glob": "embedded-kde-*.iso"},
                    "xfce": {"filename_glob": "embedded-xfce-*.iso"}
                }
            }"#,
        );
        write(temp.path(), "gnu/debian/flavours.json", r#"{"flavours": ["kde"]}"#);
        write(temp.path(), "gnu/debian/kde.json", r#"{"filename_glob": "file-kde-*.iso"}"#);

        let catalog = load_tree(temp.path()).unwrap();
        let flavors = &catalog.distribution("gnu", "debian").unwrap().flavors;
        assert_eq!(flavors["kde"].filename_glob.as_deref(), Some("file-kde-*.iso"));
        assert_eq!(
            flavors["xfce"].filename_glob.as_deref(),
            Some("embedded-xfce-*.iso")
        );
    }

    #[test]
    fn test_directories_without_record_are_skipped() {
        let temp = debian_tree();
        write(temp.path(), "gnu/notes/README.txt", "scratch");
        write(temp.path(), "empty-family/stray/other.json", "{}");
        write(temp.path(), "loose-file.json", "{}");

        let catalog = load_tree(temp.path()).unwrap();
        assert_eq!(catalog.family_keys().collect::<Vec<_>>(), vec!["gnu"]);
        assert_eq!(catalog.distribution_count(), 1);
    }

    #[test]
    fn test_malformed_distro_record_is_fatal() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "gnu/debian/debian.json", "{\"versions\": 12}");

        let err = load_tree(temp.path()).unwrap_err();
        assert!(err.to_string().contains("parse distro gnu/debian"));
    }

    #[test]
    fn test_empty_tree_yields_empty_catalog() {
        let temp = TempDir::new().unwrap();
        assert!(load_tree(temp.path()).unwrap().is_empty());
    }
}
