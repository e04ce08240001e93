//! Per-kind handlers that fill the [`Accumulator`](crate::accumulator::Accumulator).

mod declarations;
mod exports;
mod functions;
mod statics;
mod variables;

pub use declarations::{process_interface, process_type_alias};
pub use exports::{ANONYMOUS_DEFAULT, process_export};
pub use functions::process_function;
pub use statics::process_expression_statement;
pub use variables::process_variable_statement;
