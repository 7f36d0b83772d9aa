/// The polymorphic runtime value.
///
/// Defines the `Value` type: a string coupled with cached array, boolean,
/// and numeric renditions. Construction fixes the string and boolean;
/// the array and number are derived lazily on first use.
pub mod core;
/// Arbitrary-precision numerics.
///
/// Defines the `Number` type used for all arithmetic: an unbounded integer
/// or an IEEE 754 double, with promotion rules that keep integer math exact
/// and make any float operand contagious.
pub mod number;
