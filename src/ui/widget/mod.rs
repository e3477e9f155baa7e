pub mod progress_bar;
pub mod square_button;
