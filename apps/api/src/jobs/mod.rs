// Resume-based job recommendations (substring policy).

pub mod handlers;
pub mod recommendations;
