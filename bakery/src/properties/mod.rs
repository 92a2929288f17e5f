mod general;
mod joining;
mod positional;
mod syllabic;

pub use general::GeneralCategory;
pub use joining::JoiningType;
pub use positional::PositionalCategory;
pub use syllabic::SyllabicCategory;
