//! Enter/leave traversal
//!
//! [`walkabout`] drives a depth-first walk: `visit` is called before a node's
//! children are walked, `depart` after. The walker owns the traversal, so
//! implementations only decide what to do at each step.

use super::node::Node;

/// Callbacks for [`walkabout`].
pub trait Visitor {
    /// Called in pre-order (before the node's children).
    fn visit(&mut self, node: &Node);

    /// Called in post-order (after the node's children).
    fn depart(&mut self, node: &Node);
}

/// Walk `node` and its subtree, calling `visit` and `depart` on every node.
pub fn walkabout<V: Visitor + ?Sized>(node: &Node, visitor: &mut V) {
    visitor.visit(node);
    for child in node.children() {
        walkabout(child, visitor);
    }
    visitor.depart(node);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Element, NodeKind};

    struct Recorder {
        events: Vec<String>,
    }

    impl Visitor for Recorder {
        fn visit(&mut self, node: &Node) {
            self.events.push(format!("+{}", label(node)));
        }

        fn depart(&mut self, node: &Node) {
            self.events.push(format!("-{}", label(node)));
        }
    }

    fn label(node: &Node) -> String {
        match node {
            Node::Element(e) => e.kind.tag_name().to_string(),
            Node::Text(t) => format!("'{}'", t),
        }
    }

    #[test]
    fn test_visit_and_depart_are_balanced() {
        let tree: Node = Element::new(NodeKind::BulletList)
            .with_child(Element::new(NodeKind::ListItem).with_child(Node::text("a")))
            .into();
        let mut recorder = Recorder { events: vec![] };
        walkabout(&tree, &mut recorder);
        assert_eq!(
            recorder.events,
            vec!["+bullet_list", "+list_item", "+'a'", "-'a'", "-list_item", "-bullet_list"]
        );
    }
}
