/// Generic parsed-script tree node.
///
/// Every statement of a script becomes a node with a name (first word),
/// a value (rest of the line, possibly empty) and ordered children
/// (the statements of its `{ }` block).

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScriptNode {
    name: String,
    value: String,
    children: Vec<ScriptNode>,
}

impl ScriptNode {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Builder helper, mostly for tests and tools creating trees in code
    pub fn with_child(mut self, child: ScriptNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn add_child(&mut self, child: ScriptNode) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Children in declaration order
    pub fn children(&self) -> &[ScriptNode] {
        &self.children
    }

    /// First direct child with the given name
    pub fn find_child(&self, name: &str) -> Option<&ScriptNode> {
        self.children.iter().find(|c| c.name == name)
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<ScriptNode> {
        &mut self.children
    }
}
