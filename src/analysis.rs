//! Text analysis building blocks.
//!
//! Input text passes through a char filter (space normalization) and is then
//! cut by the segmenter into scan units. The [`script`] helpers classify
//! characters for the boundary rules applied while scanning.

pub mod char_filter;
pub mod script;
pub mod segmenter;
