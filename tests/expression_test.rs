mod common;
use common::*;

#[test]
fn test_precedence() {
    assert_eq!(run("10 PRINT 2 + 3 * 4 ^ 2\n"), "50\n");
    assert_eq!(run("10 PRINT (2 + 3) * 4\n"), "20\n");
    assert_eq!(run("10 PRINT 10 - 4 - 3\n"), "3\n");
    assert_eq!(run("10 PRINT 24 / 4 / 2\n"), "3\n");
}

#[test]
fn test_power_is_left_associative() {
    assert_eq!(run("10 PRINT 2 ^ 3 ^ 2\n"), "64\n");
}

#[test]
fn test_unary_minus() {
    assert_eq!(run("10 LET A = -5\n20 PRINT A\n"), "-5\n");
    assert_eq!(run("10 LET A = 3\n20 PRINT -A * 2\n"), "-6\n");
    assert_eq!(run("10 PRINT 4 * (-2)\n"), "-8\n");
    assert_eq!(run("10 PRINT 4 - -2\n"), "6\n");
}

#[test]
fn test_unary_minus_binds_tighter_than_operator() {
    assert_eq!(run("10 PRINT 6 / -2\n"), "-3\n");
    assert_eq!(run("10 PRINT 2 ^ -2\n"), "0.25\n");
    assert_eq!(run("10 PRINT 3 * -2 ^ 2\n"), "-12\n");
    assert_eq!(run("10 PRINT 6 / -2 * 3\n"), "-9\n");
    assert_eq!(run("10 LET B = 4\n20 PRINT 1 / -B\n"), "-0.25\n");
    assert_eq!(run("10 PRINT -2 ^ 2\n"), "-4\n");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(run("10 PRINT 1 / 0\n"), "inf\n");
    assert_eq!(run("10 PRINT 0 / 0\n"), "NaN\n");
}

#[test]
fn test_number_format() {
    assert_eq!(run("10 PRINT 0.5\n"), "0.5\n");
    assert_eq!(run("10 PRINT .25 + 1\n"), "1.25\n");
    assert_eq!(run("10 PRINT 7\n"), "7\n");
}

#[test]
fn test_undefined_variable() {
    assert_eq!(run("10 PRINT A + 1\n"), "?UNDEFINED VARIABLE IN 10; A\n");
}
