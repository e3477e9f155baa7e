pub mod central_panel;
pub mod top_bar;
