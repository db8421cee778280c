pub mod id;
pub mod node;
pub mod props;
pub mod tokens;

pub use id::NodeId;
pub use node::{Align, ListKind, Node, NodeKind};
pub use props::{ComponentProps, PropValue};
pub use tokens::{FontStyle, StyledToken, Theme, ThemedTokens, TokenGrid};
