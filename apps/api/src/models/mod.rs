pub mod lenient;
pub mod resume_analysis;
