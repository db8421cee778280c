//! Tree-shaping passes run after block scanning.
//!
//! - **`lists`**: nests flat list items into `list-items` / `ordered-list-items` containers
//! - **`sections`**: wraps each heading and its following blocks into a `section`

pub mod lists;
pub mod sections;

pub use lists::group_list_items;
pub use sections::group_sections;
