pub mod dates;
pub mod filters;
