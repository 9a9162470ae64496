/// What a subtree did with a value handed to its `insert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertResult {
    /// No equal value was stored so a new leaf now holds it.
    Created,
    /// An equal value was already stored so the tree was left as it was.
    AlreadyPresent,
}

impl InsertResult {
    pub(crate) fn created(self) -> bool {
        self == Self::Created
    }
}
