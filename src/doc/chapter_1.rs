/*!
# Statements
*/

#[path = "statements/dim.rs"]
#[allow(non_snake_case)]
pub mod DIM;

#[path = "statements/draw.rs"]
#[allow(non_snake_case)]
pub mod DRAW;

#[path = "statements/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/input.rs"]
#[allow(non_snake_case)]
pub mod INPUT;

#[path = "statements/let.rs"]
#[allow(non_snake_case)]
pub mod LET;

#[path = "statements/line.rs"]
#[allow(non_snake_case)]
pub mod LINE;

#[path = "statements/plot.rs"]
#[allow(non_snake_case)]
pub mod PLOT;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/rectangle.rs"]
#[allow(non_snake_case)]
pub mod RECTANGLE;
