//! Free-text ingredient quantities: reading them into numbers and writing
//! scaled numbers back out as kitchen fractions.

pub mod parser;
pub mod render;

pub use parser::{extract_unit, parse_quantity, ParsedQuantity, NON_SCALABLE_TERMS};
pub use render::{render_amount, WHOLE_NUMBER_TOLERANCE};
