/// The runtime value type.
///
/// Defines the `Value` enum produced by evaluation together with its
/// conversions and output formatting.
pub mod core;
