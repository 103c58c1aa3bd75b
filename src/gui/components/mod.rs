// src/gui/components/mod.rs
pub mod banner;
pub mod charts;
pub mod data_table;
pub mod export_bar;
pub mod section_view;
pub mod tabs;
