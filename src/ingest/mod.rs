pub mod download;
pub mod extract;
pub mod record;

pub use download::{manual_download_instructions, run_download};
