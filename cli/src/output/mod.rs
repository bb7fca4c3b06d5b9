pub mod banner;
pub mod colorize;
