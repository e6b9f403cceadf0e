/// Runtime coercion command.
pub mod coerce;
/// Tree printing command.
pub mod tree;

mod util;

#[cfg(test)]
mod test_support;
