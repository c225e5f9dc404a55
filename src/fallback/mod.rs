pub mod catalog;
pub mod grocery;
pub mod synthesizer;

pub use grocery::build_grocery_list;
pub use synthesizer::synthesize_plan;
