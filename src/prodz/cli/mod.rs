pub mod menu;
pub mod print;
