//! Data models for arXiv entities and tool inputs.
//!
//! Tool inputs use the snake_case argument names advertised in each
//! tool's JSON schema.

mod arxiv_id;
mod categories;
mod content;
mod enums;
mod inputs;
mod paper;

pub use arxiv_id::{ArxivId, InvalidArxivId};
pub use categories::{CATEGORY_GROUPS, CategoryGroup, categories_by_group, category_name};
pub use content::{PageText, PaperContent};
pub use enums::{ResponseFormat, SortBy};
pub use inputs::*;
pub use paper::Paper;
