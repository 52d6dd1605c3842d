pub mod colors;
pub mod format;
pub mod gauge;
pub mod logging;
pub mod print;
