pub mod crt;
pub mod integer;
pub mod matrix;
pub mod modn;
pub mod monomial;
pub mod poly;
pub mod rational;
pub mod trace;
pub mod word;
