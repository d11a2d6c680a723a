use markup5ever_rcdom::{Handle, NodeData};

/// The kind of a node in a parsed HTML tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    /// Comments, doctypes, processing instructions, the document root.
    Other,
}

/// The capabilities the HTML block parser needs from a tree node.
///
/// Keeps the parser independent of the tree-building library.
pub trait DomNode: Sized {
    fn kind(&self) -> NodeKind;

    /// Lowercase local tag name; `None` for non-elements.
    fn tag_name(&self) -> Option<String>;

    fn attr(&self, name: &str) -> Option<String>;

    fn children(&self) -> Vec<Self>;

    /// The node's own text; empty for non-text nodes.
    fn text(&self) -> String;

    /// All descendant text in document order.
    fn text_content(&self) -> String {
        match self.kind() {
            NodeKind::Text => self.text(),
            _ => self.children().iter().map(DomNode::text_content).collect(),
        }
    }

    fn is_element(&self, tag: &str) -> bool {
        self.tag_name().as_deref() == Some(tag)
    }

    /// First descendant element named `tag`, depth first.
    fn find_descendant(&self, tag: &str) -> Option<Self> {
        for child in self.children() {
            if child.is_element(tag) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(tag) {
                return Some(found);
            }
        }
        None
    }
}

impl DomNode for Handle {
    fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::Element { .. } => NodeKind::Element,
            NodeData::Text { .. } => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }

    fn tag_name(&self) -> Option<String> {
        match self.data {
            NodeData::Element { ref name, .. } => {
                Some(name.local.to_string().to_ascii_lowercase())
            }
            _ => None,
        }
    }

    fn attr(&self, name: &str) -> Option<String> {
        match self.data {
            NodeData::Element { ref attrs, .. } => attrs
                .borrow()
                .iter()
                .find(|a| &*a.name.local == name)
                .map(|a| a.value.to_string()),
            _ => None,
        }
    }

    fn children(&self) -> Vec<Self> {
        self.children.borrow().iter().cloned().collect()
    }

    fn text(&self) -> String {
        match self.data {
            NodeData::Text { ref contents } => contents.borrow().to_string(),
            _ => String::new(),
        }
    }
}
