pub mod block_math;
pub mod block_quote;
pub mod code_fence;
pub mod component;
pub mod heading;
pub mod list_item;
pub mod rule;
pub mod table;

pub use block_math::BlockMath;
pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceSig};
pub use component::{Component, ComponentLine};
pub use heading::Heading;
pub use list_item::ListMarker;
pub use rule::ThematicBreak;
pub use table::Table;
