//! Stack of in-progress sibling sequences.
//!
//! `open` starts a new sequence, `append` adds to the most recently opened
//! one, `close` pops it and hands it back to the caller, who attaches it to a
//! parent node. The builder knows nothing about node shapes.
use super::DocNode;

#[derive(Debug, Default)]
pub struct DocBuilder {
    stack: Vec<Vec<DocNode>>,
}

impl DocBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn open(&mut self) {
        self.stack.push(Vec::new());
    }

    /// Panics when no sequence is open: a visit routine appended outside its
    /// own `open`/`close` pair.
    pub fn append(&mut self, node: DocNode) {
        match self.stack.last_mut() {
            Some(top) => top.push(node),
            None => panic!("DocBuilder::append with no open sequence"),
        }
    }

    /// Appends only present nodes; `None` is the result of kinds that emit nothing.
    pub fn append_opt(&mut self, node: Option<DocNode>) {
        if let Some(node) = node {
            self.append(node);
        }
    }

    /// Panics on an empty stack: unbalanced nesting is a defect, not input error.
    pub fn close(&mut self) -> Vec<DocNode> {
        match self.stack.pop() {
            Some(seq) => seq,
            None => panic!("DocBuilder::close with no open sequence"),
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::DocKind;

    #[test]
    fn append_targets_latest_open_sequence() {
        let mut b = DocBuilder::new();
        b.open();
        b.append(DocNode::new(DocKind::Comment));
        b.open();
        b.append(DocNode::new(DocKind::Return));
        b.append_opt(None);
        let inner = b.close();
        assert_eq!(inner.len(), 1);
        assert_eq!(inner[0].kind(), DocKind::Return);
        let outer = b.close();
        assert_eq!(outer.len(), 1);
        assert_eq!(outer[0].kind(), DocKind::Comment);
        assert_eq!(b.depth(), 0);
    }

    #[test]
    #[should_panic(expected = "no open sequence")]
    fn close_on_empty_stack_is_a_defect() {
        let mut b = DocBuilder::new();
        b.close();
    }
}
