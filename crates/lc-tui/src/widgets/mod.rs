pub mod doc_grid;
pub mod gauge_bar;
pub mod status_bar;
