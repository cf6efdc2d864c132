pub mod completion_panel;
pub mod header;
pub mod name_entry;
pub mod progress_bar;
pub mod question_card;
