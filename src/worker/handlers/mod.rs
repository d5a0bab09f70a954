pub mod donors;
pub mod files;
pub mod thank_you;
