use crate::dataset::{Dataset, DatasetNode, Leaf};

pub type NodeId = usize;

/// One node of the aggregated hierarchy.
///
/// The arena owns every node; `children` lists the ids this node owns and
/// `parent` is a plain back-reference used for upward traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    pub name: String,
    /// Leaf datum. `None` for interior nodes.
    pub leaf: Option<Leaf>,
    /// Own value for leaves, sum of descendant leaf values otherwise.
    pub value: f64,
    pub depth: usize,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl HierarchyNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-backed hierarchy with aggregated values and children sorted by
/// descending value (stable for ties). Root is always id 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Hierarchy {
    nodes: Vec<HierarchyNode>,
}

impl Hierarchy {
    pub const ROOT: NodeId = 0;

    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut nodes = Vec::new();
        push_node(&mut nodes, &dataset.root, 0, None);
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &HierarchyNode {
        &self.nodes[id]
    }

    pub fn root(&self) -> &HierarchyNode {
        &self.nodes[Self::ROOT]
    }

    /// Node ids in pre-order, visiting children in their sorted order.
    pub fn pre_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id].children.iter().rev().copied());
        }
        out
    }

    /// Leaf ids in pre-order.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.pre_order()
            .into_iter()
            .filter(|&id| self.nodes[id].is_leaf())
            .collect()
    }
}

fn push_node(
    nodes: &mut Vec<HierarchyNode>,
    source: &DatasetNode,
    depth: usize,
    parent: Option<NodeId>,
) -> NodeId {
    let id = nodes.len();
    let (name, leaf) = match source {
        DatasetNode::Leaf(leaf) => (leaf.name.clone(), Some(leaf.clone())),
        DatasetNode::Branch { name, .. } => (name.clone(), None),
    };
    let value = leaf.as_ref().map(|l| l.value).unwrap_or(0.0);
    nodes.push(HierarchyNode {
        name,
        leaf,
        value,
        depth,
        parent,
        children: Vec::new(),
    });

    if let DatasetNode::Branch { children, .. } = source {
        let mut child_ids: Vec<NodeId> = children
            .iter()
            .map(|child| push_node(nodes, child, depth + 1, Some(id)))
            .collect();
        // sort_by is stable: equal values keep document order.
        child_ids.sort_by(|&a, &b| nodes[b].value.total_cmp(&nodes[a].value));
        let sum: f64 = child_ids.iter().map(|&c| nodes[c].value).sum();
        nodes[id].value = sum;
        nodes[id].children = child_ids;
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, category: &str, value: f64) -> DatasetNode {
        DatasetNode::Leaf(Leaf::new(name, category, value))
    }

    fn branch(name: &str, children: Vec<DatasetNode>) -> DatasetNode {
        DatasetNode::Branch {
            name: name.to_string(),
            children,
        }
    }

    fn sample() -> Dataset {
        Dataset {
            root: branch(
                "root",
                vec![
                    branch("A", vec![leaf("a1", "A", 1.0), leaf("a2", "A", 4.0)]),
                    branch("B", vec![leaf("b1", "B", 10.0)]),
                    branch("C", vec![leaf("c1", "C", 2.0), leaf("c2", "C", 3.0)]),
                ],
            ),
        }
    }

    #[test]
    fn interior_values_are_sums_of_leaves() {
        let h = Hierarchy::from_dataset(&sample());
        assert_eq!(h.root().value, 20.0);
        for id in h.pre_order() {
            let node = h.node(id);
            if !node.is_leaf() {
                let sum: f64 = node.children.iter().map(|&c| h.node(c).value).sum();
                assert_eq!(node.value, sum);
            }
        }
    }

    #[test]
    fn children_sorted_descending_by_value() {
        let h = Hierarchy::from_dataset(&sample());
        let names: Vec<&str> = h
            .root()
            .children
            .iter()
            .map(|&c| h.node(c).name.as_str())
            .collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn equal_values_keep_document_order() {
        let dataset = Dataset {
            root: branch(
                "root",
                vec![
                    leaf("first", "X", 5.0),
                    leaf("second", "X", 5.0),
                    leaf("big", "X", 9.0),
                    leaf("third", "X", 5.0),
                ],
            ),
        };
        let h = Hierarchy::from_dataset(&dataset);
        let names: Vec<&str> = h.leaves().iter().map(|&id| h.node(id).name.as_str()).collect();
        assert_eq!(names, vec!["big", "first", "second", "third"]);
    }

    #[test]
    fn depth_and_parent_links() {
        let h = Hierarchy::from_dataset(&sample());
        for id in h.leaves() {
            let node = h.node(id);
            assert_eq!(node.depth, 2);
            let parent = node.parent.unwrap();
            assert_eq!(h.node(parent).parent, Some(Hierarchy::ROOT));
            assert!(h.node(parent).children.contains(&id));
        }
        assert_eq!(h.root().parent, None);
    }

    #[test]
    fn single_leaf_root() {
        let h = Hierarchy::from_dataset(&Dataset {
            root: leaf("only", "X", 7.0),
        });
        assert_eq!(h.len(), 1);
        assert_eq!(h.leaves(), vec![Hierarchy::ROOT]);
        assert_eq!(h.root().value, 7.0);
    }
}
