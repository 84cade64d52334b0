//! Containment checks over a parent chain.

/// Anything with a parent link, such as a DOM node.
pub trait ParentLink: PartialEq + Sized {
    fn parent(&self) -> Option<Self>;
}

/// True if `container` is `item` or one of its ancestors. An absent
/// container contains nothing.
pub fn within<N: ParentLink>(item: &N, container: Option<&N>) -> bool {
    let Some(container) = container else {
        return false;
    };
    if container == item {
        return true;
    }
    let mut cursor = item.parent();
    while let Some(node) = cursor {
        if &node == container {
            return true;
        }
        cursor = node.parent();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Index into a parent table.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Node<'a> {
        id: usize,
        parents: &'a [Option<usize>],
    }

    impl<'a> ParentLink for Node<'a> {
        fn parent(&self) -> Option<Self> {
            self.parents[self.id].map(|id| Node {
                id,
                parents: self.parents,
            })
        }
    }

    // 0 is the root; 1 and 2 are its children; 3 is a child of 1.
    const TREE: [Option<usize>; 4] = [None, Some(0), Some(0), Some(1)];

    fn node(id: usize) -> Node<'static> {
        Node { id, parents: &TREE }
    }

    #[test]
    fn test_within_self() {
        assert!(within(&node(3), Some(&node(3))));
    }

    #[test]
    fn test_within_ancestor() {
        assert!(within(&node(3), Some(&node(1))));
        assert!(within(&node(3), Some(&node(0))));
    }

    #[test]
    fn test_not_within_sibling() {
        assert!(!within(&node(3), Some(&node(2))));
        assert!(!within(&node(1), Some(&node(3))));
    }

    #[test]
    fn test_absent_container() {
        assert!(!within(&node(1), None));
    }
}
