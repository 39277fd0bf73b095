//! Menu model and menu document parser.

mod model;
mod parser;

pub use model::{MenuEntry, MenuModel, MenuStyle};
pub use parser::{ITEM_TAG, MENU_TAG, MenuParser, item_attrs, menu_attrs};
