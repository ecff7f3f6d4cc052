// Interview-answer analysis and job matching (exact policy).

pub mod answers;
pub mod handlers;
