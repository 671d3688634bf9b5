pub mod dashboard;
pub mod demo;
pub mod nav_item;
