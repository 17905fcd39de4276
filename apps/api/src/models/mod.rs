pub mod lead;
pub mod settings;
