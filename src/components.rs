pub mod digits;
pub mod roster;
pub mod team_panel;
