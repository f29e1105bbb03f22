// Application layer: console input helpers and the interactive menu.

pub mod input;
pub mod menu;
