/// Which of the three structural cases a tree deletion went through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DeleteCase {
    /// The node had no children. Its parent's link is simply cleared.
    Leaf,
    /// The node had exactly one child, which takes its place under the parent.
    OneChild,
    /// The node had two children. Its in-order successor was removed instead and the
    /// successor's key moved into this node.
    TwoChildren,
}
