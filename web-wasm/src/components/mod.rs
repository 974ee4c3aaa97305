pub mod header;
pub mod placeholder;
pub mod results_table;
pub mod template_card;
pub mod upload_area;
