pub mod banner;
pub mod capabilities;
pub mod complexity;
pub mod panels;
pub mod roi;
