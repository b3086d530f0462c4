mod common;
use basic::mach::{Listing, Runtime};
use common::*;

#[test]
fn test_input() {
    let mut r = Runtime::seeded(1);
    r.set_listing(&Listing::load("10 INPUT R\n20 PRINT R * 2\n"));
    assert_eq!(exec(&mut r), "# ");
    assert!(r.enter("21"));
    assert_eq!(exec(&mut r), "42\n");
}

#[test]
fn test_input_redo() {
    let mut r = Runtime::seeded(1);
    r.set_listing(&Listing::load("10 INPUT R\n20 PRINT R\n"));
    assert_eq!(exec(&mut r), "# ");
    assert!(!r.enter("ABC"));
    assert_eq!(exec(&mut r), "?REDO FROM START\n# ");
    assert!(r.enter("-1.5"));
    assert_eq!(exec(&mut r), "-1.5\n");
}

#[test]
fn test_input_into_array() {
    assert_eq!(
        run("10 DIM V 2\n20 INPUT V\n"),
        "?TYPE MISMATCH IN 20; V IS AN ARRAY\n"
    );
}

#[test]
fn test_input_interrupted() {
    let mut r = Runtime::seeded(1);
    r.set_listing(&Listing::load("10 INPUT R\n20 PRINT R\n"));
    assert_eq!(exec(&mut r), "# ");
    r.interrupt();
    assert_eq!(exec(&mut r), "?BREAK IN 10\n");
    assert!(!r.enter("1"));
}
