//! Host toolkit
pub mod lexer;
