pub mod output;
pub mod spinner;
pub mod theme;

pub use output::{format_count, format_size, print_model_info};
pub use spinner::FetchSpinner;
