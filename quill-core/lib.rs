pub mod chars;
pub mod navigation;
pub mod utf8;
