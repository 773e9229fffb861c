mod pager;
mod reader;
mod script;

pub use pager::{PageTurner, SystemPager};
pub use reader::{activate_reader, toggle_fullscreen};
