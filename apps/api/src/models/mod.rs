pub mod proposal;
pub mod settings;
