//! Page templates embedded in the binary, so the server runs without a
//! theme directory on disk.

pub const LIST: &str = include_str!("postlist.tpl");
pub const POST: &str = include_str!("view.tpl");
pub const NOT_FOUND: &str = include_str!("not_found.tpl");
