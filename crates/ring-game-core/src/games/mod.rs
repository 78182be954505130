//! Move sets and outcome resolution.

mod moveset;
mod resolver;
mod table;

pub use moveset::MoveSet;
pub use resolver::{compare, Outcome};
pub use table::{relation_table, MoveRelations};
