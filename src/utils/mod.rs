//! Arithmetic, matrix and alphabet helpers shared by the cipher.

pub mod alphabet;
pub mod matrix;
pub mod modular;
