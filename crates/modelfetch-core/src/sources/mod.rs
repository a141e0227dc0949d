//! Source list construction.
//!
//! The list is data: an explicit URL list followed by a URL template
//! expanded once per name, both taken from [`SourcesConfig`].

pub mod catalog;
mod collision;

pub use collision::{filename_collisions, Collision};

use crate::config::SourcesConfig;
use crate::url_model::derive_filename;

/// Placeholder replaced by each name when expanding a template.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// One remote asset slated for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub url: String,
    /// Last path segment of `url`; the local file name.
    pub filename: String,
}

impl SourceEntry {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let filename = derive_filename(&url).to_string();
        Self { url, filename }
    }
}

/// Concatenates `explicit_urls` with `template` expanded for every name, preserving order.
///
/// An empty template contributes nothing.
pub fn build_source_list<S: AsRef<str>>(
    explicit_urls: &[S],
    template: &str,
    names: &[S],
) -> Vec<String> {
    let mut urls: Vec<String> = explicit_urls.iter().map(|u| u.as_ref().to_string()).collect();
    if template.is_empty() {
        if !names.is_empty() {
            tracing::warn!("{} template names ignored: template is empty", names.len());
        }
        return urls;
    }
    if !template.contains(NAME_PLACEHOLDER) {
        tracing::warn!("template {} has no {} placeholder", template, NAME_PLACEHOLDER);
    }
    urls.extend(
        names
            .iter()
            .map(|name| template.replace(NAME_PLACEHOLDER, name.as_ref())),
    );
    urls
}

/// Builds the ordered source entries described by `cfg`.
pub fn entries_from_config(cfg: &SourcesConfig) -> Vec<SourceEntry> {
    build_source_list(&cfg.explicit_urls, &cfg.template, &cfg.names)
        .into_iter()
        .map(SourceEntry::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_then_generated_in_order() {
        let urls = build_source_list(
            &["https://a.example/x.glb", "https://a.example/y.glb"],
            "https://k.example/Models/{name}/glTF-Binary/{name}.glb",
            &["Box", "Fox"],
        );
        assert_eq!(
            urls,
            vec![
                "https://a.example/x.glb",
                "https://a.example/y.glb",
                "https://k.example/Models/Box/glTF-Binary/Box.glb",
                "https://k.example/Models/Fox/glTF-Binary/Fox.glb",
            ]
        );
    }

    #[test]
    fn empty_template_ignores_names() {
        let urls = build_source_list(&["https://a.example/x.glb"], "", &["Box"]);
        assert_eq!(urls, vec!["https://a.example/x.glb"]);
    }

    #[test]
    fn empty_inputs_give_empty_list() {
        let none: [&str; 0] = [];
        assert!(build_source_list(&none, "https://k.example/{name}.glb", &none).is_empty());
    }

    #[test]
    fn entry_derives_filename() {
        let e = SourceEntry::new("https://k.example/Models/Duck/glTF-Binary/Duck.glb");
        assert_eq!(e.filename, "Duck.glb");
    }

    #[test]
    fn builtin_catalog_expands_fully() {
        let entries = entries_from_config(&SourcesConfig::default());
        assert_eq!(
            entries.len(),
            catalog::EXPLICIT_URLS.len() + catalog::KHRONOS_NAMES.len()
        );
        assert_eq!(entries[0].filename, "Astronaut.glb");
        let last = entries.last().unwrap();
        assert_eq!(
            last.url,
            "https://raw.githubusercontent.com/KhronosGroup/glTF-Sample-Assets/main/Models/DragonAttenuation/glTF-Binary/DragonAttenuation.glb"
        );
        assert!(entries.iter().all(|e| !e.filename.contains('/')));
    }
}
