mod common;
use basic::lang::ErrorKind;
use basic::mach::Listing;
use common::*;

#[test]
fn test_bad_lines_are_skipped() {
    let source = "10 PRINT 1\n20 PRINT $\n30 LET = 2\nPRINT 4\n50 PRINT 5\n";
    let listing = Listing::load(source);
    let kinds: Vec<ErrorKind> = listing.errors().iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![ErrorKind::Lexical, ErrorKind::Lexical, ErrorKind::Lexical]
    );
    assert_eq!(listing.statements().len(), 2);
    assert_eq!(
        run(source),
        "?ILLEGAL CHARACTER IN 20; '$' IN 20 PRINT $\n\
         ?MALFORMED STATEMENT IN 30; INVALID LET STATEMENT: 30 LET = 2\n\
         ?MISSING LINE LABEL; PRINT 4\n\
         1\n5\n"
    );
}

#[test]
fn test_parse_errors_are_skipped() {
    let source = "10 PRINT 1 +\n20 PRINT (1 + 2\n30 GOTO 10 20\n40 PRINT 4\n";
    let listing = Listing::load(source);
    assert_eq!(listing.errors().len(), 3);
    assert!(listing.errors().iter().all(|e| e.is_recoverable()));
    assert_eq!(listing.statements().len(), 1);
}

#[test]
fn test_lower_case() {
    assert_eq!(run("10 let a = 2\n20 print a * a\n"), "4\n");
}
