use crate::models::Node;

/// Open `::name` components, innermost last. Blocks land in the innermost one.
#[derive(Debug, Default)]
pub struct ComponentStack(Vec<Node>);

impl ComponentStack {
    pub fn push(&mut self, component: Node) {
        self.0.push(component);
    }

    pub fn pop(&mut self) -> Option<Node> {
        self.0.pop()
    }

    pub fn innermost_mut(&mut self) -> Option<&mut Node> {
        self.0.last_mut()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}
