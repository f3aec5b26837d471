//! Named page sections
//!
//! A page is split into a fixed, ordered list of sections. Each section is
//! addressed in the document by the lowercase form of its name, so `"About"`
//! lives under the anchor `#about`. The list is built once and is immutable
//! afterwards; order is significant because it breaks ties when several
//! sections are on screen at once.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{CoreError, Result};

/// One named, anchor-addressable region of the page
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Section {
    name: String,
    order: usize,
}

impl Section {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position in the declared sequence (0-based)
    pub fn order(&self) -> usize {
        self.order
    }

    /// DOM id of the element carrying this section
    pub fn anchor(&self) -> String {
        self.name.to_lowercase()
    }

    /// `#anchor` link target
    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }
}

/// The fixed, ordered list of sections on the page
///
/// Cheap to clone; clones share the same storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionList {
    // Keyed by anchor so two names differing only in case are rejected.
    sections: Arc<IndexMap<String, Section>>,
}

impl SectionList {
    /// Build the list from names in display order
    ///
    /// Fails if no names are given or if two names share an anchor.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sections = IndexMap::new();
        for name in names {
            let name = name.into();
            let anchor = name.to_lowercase();
            if sections.contains_key(&anchor) {
                return Err(CoreError::DuplicateSection { name, anchor });
            }
            let order = sections.len();
            sections.insert(anchor, Section { name, order });
        }

        if sections.is_empty() {
            return Err(CoreError::EmptySections);
        }

        Ok(Self {
            sections: Arc::new(sections),
        })
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false; an empty list cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The first declared section
    pub fn first(&self) -> &Section {
        // from_names rejects empty lists
        &self.sections[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    pub fn at(&self, order: usize) -> Option<&Section> {
        self.sections.get_index(order).map(|(_, s)| s)
    }

    /// Look a section up by name (case-insensitive)
    pub fn get(&self, name: &str) -> Result<&Section> {
        self.sections
            .get(&name.to_lowercase())
            .ok_or_else(|| CoreError::UnknownSection(name.to_string()))
    }

    /// The section declared after `section`, if any
    pub fn next_after(&self, section: &Section) -> Option<&Section> {
        self.at(section.order + 1)
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(Section::name).collect()
    }
}

impl<'a> IntoIterator for &'a SectionList {
    type Item = &'a Section;
    type IntoIter = indexmap::map::Values<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> SectionList {
        SectionList::from_names(["Hero", "About", "Experience", "Projects", "Skills", "Contact"])
            .unwrap()
    }

    #[test]
    fn test_order_and_anchor() {
        let sections = page();
        assert_eq!(sections.len(), 6);
        assert_eq!(sections.first().name(), "Hero");

        let projects = sections.get("Projects").unwrap();
        assert_eq!(projects.order(), 3);
        assert_eq!(projects.anchor(), "projects");
        assert_eq!(projects.href(), "#projects");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let sections = page();
        assert_eq!(sections.get("skills").unwrap().name(), "Skills");
        assert_eq!(
            sections.get("Blog"),
            Err(CoreError::UnknownSection("Blog".to_string()))
        );
    }

    #[test]
    fn test_next_after() {
        let sections = page();
        let about = sections.get("About").unwrap();
        assert_eq!(sections.next_after(about).unwrap().name(), "Experience");

        let contact = sections.get("Contact").unwrap();
        assert!(sections.next_after(contact).is_none());
    }

    #[test]
    fn test_rejects_empty() {
        let names: [&str; 0] = [];
        assert_eq!(SectionList::from_names(names), Err(CoreError::EmptySections));
    }

    #[test]
    fn test_rejects_duplicate_anchor() {
        let err = SectionList::from_names(["About", "about"]).unwrap_err();
        assert_eq!(
            err,
            CoreError::DuplicateSection {
                name: "about".to_string(),
                anchor: "about".to_string(),
            }
        );
    }

    #[test]
    fn test_section_serializes_name_and_order() {
        let sections = page();
        let json = serde_json::to_string(sections.get("About").unwrap()).unwrap();
        assert_eq!(json, r#"{"name":"About","order":1}"#);
    }
}
