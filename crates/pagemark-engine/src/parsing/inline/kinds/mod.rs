//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The tokenizer asks these types
//! whether a matched segment is theirs; it never hardcodes `**` or `](`.
//!
//! ## Types
//!
//! - **`Emphasis`**: `**`, `*`, `__`, `~~`, `==`, `~`, `^` (content is tokenized again)
//! - **`InlineMath`**: `$...$`
//! - **`CodeSpan`**: `` `...` `` with an optional `{attrs}` block
//! - **`InlineComponent`**: `:name{attrs}`
//! - **`Link`**: `[...](...)`, `![...](...)`, bare URLs and YouTube links

pub mod code_span;
pub mod component;
pub mod emphasis;
pub mod link;
pub mod math;

pub use code_span::{CodeSpan, CodeSpanParts};
pub use component::{InlineComponent, InlineComponentParts};
pub use emphasis::Emphasis;
pub use link::{Link, LinkParts};
pub use math::InlineMath;
