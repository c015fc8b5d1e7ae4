//! Catalog of font names available on the host.

use fontdb::Database;
use std::collections::BTreeSet;

/// Font names known to the host font system.
///
/// Both PostScript names (e.g. `Helvetica-Bold`) and family names
/// (e.g. `Helvetica`) are recorded, since storyboards accept either.
/// Names starting with '.' are private system faces; they resolve but are
/// left out of listings when `hide_dot_fonts` is set.
#[derive(Debug, Clone, Default)]
pub struct FontCatalog {
    names: BTreeSet<String>,
    hide_dot_fonts: bool,
}

impl FontCatalog {
    /// Discover the fonts installed on this machine.
    pub fn load_system(hide_dot_fonts: bool) -> Self {
        let mut font_db = Database::new();
        font_db.load_system_fonts();
        log::info!("Loaded {} system font faces", font_db.len());
        Self::from_database(&font_db, hide_dot_fonts)
    }

    /// Collect the names of every face in an already-populated database.
    pub fn from_database(font_db: &Database, hide_dot_fonts: bool) -> Self {
        let names = font_db.faces().flat_map(|face| {
            let postscript = (!face.post_script_name.is_empty())
                .then(|| face.post_script_name.clone());
            face.families
                .iter()
                .map(|(family, _language)| family.clone())
                .chain(postscript)
                .collect::<Vec<_>>()
        });
        Self::from_names(names, hide_dot_fonts)
    }

    /// Build a catalog from an explicit list of names.
    pub fn from_names<I, S>(names: I, hide_dot_fonts: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: BTreeSet<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|n| !n.trim().is_empty())
            .collect();
        log::debug!("Font catalog holds {} distinct names", names.len());
        Self {
            names,
            hide_dot_fonts,
        }
    }

    /// Listable font names, sorted and deduplicated.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(move |n| !(self.hide_dot_fonts && n.starts_with('.')))
    }

    /// Listable names containing `needle`, ignoring case.
    pub fn search(&self, needle: &str) -> Vec<&str> {
        let needle = needle.to_lowercase();
        self.names()
            .filter(|n| n.to_lowercase().contains(&needle))
            .collect()
    }

    /// Resolve a user-supplied name to the catalog's spelling.
    ///
    /// An exact match wins; otherwise the first case-insensitive match is
    /// returned.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        if let Some(exact) = self.names.get(name) {
            return Some(exact.as_str());
        }
        self.names
            .iter()
            .find(|n| n.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names().count()
    }

    pub fn is_empty(&self) -> bool {
        self.names().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FontCatalog {
        FontCatalog::from_names(
            [
                "Helvetica",
                "Helvetica-Bold",
                ".SFNS-Regular",
                "Avenir Next",
                "Helvetica",
                "",
            ],
            true,
        )
    }

    #[test]
    fn test_names_sorted_deduplicated_and_hidden_filtered() {
        let catalog = sample();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["Avenir Next", "Helvetica", "Helvetica-Bold"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_hidden_fonts_listed_when_not_hiding() {
        let catalog = FontCatalog::from_names([".SFNS-Regular", "Menlo"], false);
        assert_eq!(catalog.names().next(), Some(".SFNS-Regular"));
    }

    #[test]
    fn test_resolve_exact_then_case_insensitive() {
        let catalog = sample();
        assert_eq!(catalog.resolve("Helvetica-Bold"), Some("Helvetica-Bold"));
        assert_eq!(catalog.resolve("helvetica-bold"), Some("Helvetica-Bold"));
        assert_eq!(catalog.resolve("Comic Sans"), None);
    }

    #[test]
    fn test_hidden_fonts_still_resolve() {
        let catalog = sample();
        assert_eq!(catalog.resolve(".sfns-regular"), Some(".SFNS-Regular"));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = sample();
        assert_eq!(catalog.search("HELV"), vec!["Helvetica", "Helvetica-Bold"]);
        assert!(catalog.search("sfns").is_empty());
    }

    #[test]
    fn test_empty_database_gives_empty_catalog() {
        let catalog = FontCatalog::from_database(&Database::new(), true);
        assert!(catalog.is_empty());
    }
}
