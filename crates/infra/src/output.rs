//! HTML outline output: markup rendering, document assembly and writing.

pub mod document;
pub mod escape;
pub mod href;
pub mod identifier;
pub mod markup;
pub mod writer;

pub use document::{DEFAULT_STYLESHEET, HtmlDocument};
pub use href::file_href;
pub use identifier::{ROOT_TOGGLE_ID, toggle_id};
pub use markup::{MarkupRenderer, RenderOptions};
pub use writer::{OutputTarget, OutputWriter};
