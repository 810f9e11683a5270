pub mod chinese;
pub mod string;

pub use chinese::{contains_han_script, Simplifier, ZhconvSimplifier};
pub use string::{capitalize, normalize_text, strip_featured_artist, strip_parenthetical_suffix};
