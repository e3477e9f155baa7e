pub mod piano_roll;
pub mod tab_view;
