//! # SVG BASIC
//!
//! A line-numbered BASIC that draws pictures.
//!
//! Every line starts with a numeric label and carries one statement.
//! There are no loops or subroutines; programs move around with `GOTO`
//! and `IF ... THEN`. Numbers are the only values. Pictures are drawn
//! between `DRAW START` and `DRAW FINISH` and saved as SVG files.
//!
//! Run a program with the command `basic <filename>`.
//! ```text
//! $ basic house.bas
//! ```
//!
//! Drawings are written to the current directory, or to the directory
//! given with `--out-dir`, named after the program and the time the
//! drawing was finished.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
