//! The process-wide document model.
//!
//! Livery mutates three kinds of UI state: the managed style element's text,
//! the presence of the auxiliary vertical-layout link, and the dark-theme
//! class on the document root. [`Document`] models that state explicitly
//! instead of going through lookup-by-id against a global document: the
//! component that creates an element keeps an owned handle to it, which
//! removes the "element missing at update time" failure mode entirely.
//!
//! Lifecycle: style elements are created during initialization and live for
//! the process's UI lifetime; only link elements are attached and detached
//! dynamically. Everything runs on one thread, so the interior state is a
//! plain `RefCell`.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use thiserror::Error;
use tracing::debug;

/// Error raised by document mutations.
#[derive(Debug, Error)]
pub enum DomError {
    /// A style element with this id already exists. The managed stylesheet
    /// must be created exactly once per process lifetime.
    #[error("style element '{0}' already exists")]
    DuplicateStyleElement(String),
}

#[derive(Debug, Default)]
struct DocumentState {
    styles: Vec<StyleNode>,
    links: Vec<LinkNode>,
    root_classes: BTreeSet<String>,
}

#[derive(Debug)]
struct StyleNode {
    id: String,
    text: String,
}

#[derive(Debug)]
struct LinkNode {
    id: String,
    href: String,
}

/// Shared handle to the document state. Clones refer to the same document.
#[derive(Clone, Default)]
pub struct Document {
    state: Rc<RefCell<DocumentState>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a style element and returns the owning handle.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::DuplicateStyleElement`] if an element with this id
    /// exists already. Creating the managed element twice would leave two
    /// conflicting stylesheets in the document, so this is an explicit error
    /// rather than a silent second element.
    pub fn create_style_element(&self, id: &str) -> Result<StyleHandle, DomError> {
        let mut state = self.state.borrow_mut();
        if state.styles.iter().any(|node| node.id == id) {
            return Err(DomError::DuplicateStyleElement(id.to_string()));
        }
        state.styles.push(StyleNode {
            id: id.to_string(),
            text: String::new(),
        });
        debug!(id, "created style element");
        Ok(StyleHandle {
            state: Rc::clone(&self.state),
            index: state.styles.len() - 1,
        })
    }

    /// Attaches the link element if absent. Returns true when it was created.
    ///
    /// An existence check guards creation, so repeated calls while the link
    /// is present never duplicate it.
    pub fn ensure_link(&self, id: &str, href: &str) -> bool {
        let mut state = self.state.borrow_mut();
        if state.links.iter().any(|node| node.id == id) {
            return false;
        }
        state.links.push(LinkNode {
            id: id.to_string(),
            href: href.to_string(),
        });
        debug!(id, href, "attached stylesheet link");
        true
    }

    /// Detaches the link element if present. Returns true when it existed.
    pub fn remove_link(&self, id: &str) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.links.len();
        state.links.retain(|node| node.id != id);
        let removed = state.links.len() != before;
        if removed {
            debug!(id, "detached stylesheet link");
        }
        removed
    }

    pub fn has_link(&self, id: &str) -> bool {
        self.state.borrow().links.iter().any(|node| node.id == id)
    }

    /// Number of link elements with this id. Anything above one is a bug.
    pub fn link_count(&self, id: &str) -> usize {
        self.state
            .borrow()
            .links
            .iter()
            .filter(|node| node.id == id)
            .count()
    }

    pub fn link_href(&self, id: &str) -> Option<String> {
        self.state
            .borrow()
            .links
            .iter()
            .find(|node| node.id == id)
            .map(|node| node.href.clone())
    }

    /// Adds or removes a class on the document root. Returns true when the
    /// class set actually changed.
    pub fn set_root_class(&self, class: &str, enabled: bool) -> bool {
        let mut state = self.state.borrow_mut();
        let changed = if enabled {
            state.root_classes.insert(class.to_string())
        } else {
            state.root_classes.remove(class)
        };
        if changed {
            debug!(class, enabled, "root class changed");
        }
        changed
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.state.borrow().root_classes.contains(class)
    }

    /// Current text of the style element with this id, if it exists.
    pub fn style_text(&self, id: &str) -> Option<String> {
        self.state
            .borrow()
            .styles
            .iter()
            .find(|node| node.id == id)
            .map(|node| node.text.clone())
    }
}

/// Owned reference to one style element.
///
/// Style elements are never removed, so the handle stays valid for the
/// process lifetime of the document it came from.
#[derive(Clone)]
pub struct StyleHandle {
    state: Rc<RefCell<DocumentState>>,
    index: usize,
}

impl StyleHandle {
    /// Replaces the element's full text content.
    pub fn set_text(&self, text: impl Into<String>) {
        self.state.borrow_mut().styles[self.index].text = text.into();
    }

    pub fn text(&self) -> String {
        self.state.borrow().styles[self.index].text.clone()
    }

    pub fn id(&self) -> String {
        self.state.borrow().styles[self.index].id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_style_element_and_set_text() {
        let doc = Document::new();
        let handle = doc.create_style_element("managed").unwrap();
        assert_eq!(handle.text(), "");
        assert_eq!(handle.id(), "managed");

        handle.set_text(".a { color: red; }");
        assert_eq!(doc.style_text("managed").unwrap(), ".a { color: red; }");
    }

    #[test]
    fn test_duplicate_style_element_is_an_error() {
        let doc = Document::new();
        doc.create_style_element("managed").unwrap();
        let result = doc.create_style_element("managed");
        assert!(matches!(result, Err(DomError::DuplicateStyleElement(_))));
    }

    #[test]
    fn test_set_text_replaces_rather_than_appends() {
        let doc = Document::new();
        let handle = doc.create_style_element("managed").unwrap();
        handle.set_text("first");
        handle.set_text("second");
        assert_eq!(handle.text(), "second");
    }

    #[test]
    fn test_ensure_link_is_idempotent() {
        let doc = Document::new();
        assert!(doc.ensure_link("aux", "./styles/vertical.css"));
        assert!(!doc.ensure_link("aux", "./styles/vertical.css"));
        assert_eq!(doc.link_count("aux"), 1);
        assert_eq!(doc.link_href("aux").unwrap(), "./styles/vertical.css");
    }

    #[test]
    fn test_remove_link() {
        let doc = Document::new();
        assert!(!doc.remove_link("aux"));
        doc.ensure_link("aux", "x.css");
        assert!(doc.remove_link("aux"));
        assert!(!doc.has_link("aux"));
    }

    #[test]
    fn test_set_root_class_reports_changes() {
        let doc = Document::new();
        assert!(doc.set_root_class("dark", true));
        assert!(!doc.set_root_class("dark", true)); // already present
        assert!(doc.has_root_class("dark"));
        assert!(doc.set_root_class("dark", false));
        assert!(!doc.set_root_class("dark", false)); // already absent
        assert!(!doc.has_root_class("dark"));
    }

    #[test]
    fn test_clones_share_state() {
        let doc = Document::new();
        let other = doc.clone();
        doc.ensure_link("aux", "x.css");
        assert!(other.has_link("aux"));
    }

    #[test]
    fn test_handles_stay_valid_across_later_creations() {
        let doc = Document::new();
        let first = doc.create_style_element("first").unwrap();
        let _second = doc.create_style_element("second").unwrap();
        first.set_text("still me");
        assert_eq!(doc.style_text("first").unwrap(), "still me");
        assert_eq!(doc.style_text("second").unwrap(), "");
    }
}
