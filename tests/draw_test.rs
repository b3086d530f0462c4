mod common;
use common::*;

#[test]
fn test_one_plot() {
    let source = "10 DRAW START 200, 100\n20 PLOT 10, 20, 5, RED\n30 DRAW FINISH\n";
    let (out, documents) = drawings(source);
    assert_eq!(out, "");
    assert_eq!(documents.len(), 1);
    let document = &documents[0];
    assert_eq!(document.matches("<svg ").count(), 1);
    assert_eq!(document.matches("</svg>").count(), 1);
    assert_eq!(document.matches("<circle ").count(), 1);
    assert!(document.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100">"#));
    assert!(document.contains(r#"<circle cx="10" cy="20" r="5" stroke="red" fill="none" />"#));
}

#[test]
fn test_shapes() {
    let source = "10 DRAW START 100, 100\n20 LET X = 5\n30 RECTANGLE 90, 90, 10, 50, GREEN FILL\n40 LINE 0, 0, X * 20, 100, BLACK\n50 PLOT X, X, 2, BLUE FILL\n60 DRAW FINISH\n";
    let (out, documents) = drawings(source);
    assert_eq!(out, "");
    assert_eq!(
        documents,
        vec![concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">"#,
            "\n",
            r#"<rect x="10" y="50" width="80" height="40" stroke="green" fill="green" />"#,
            "\n",
            r#"<line x1="0" y1="0" x2="100" y2="100" stroke="black" />"#,
            "\n",
            r#"<circle cx="5" cy="5" r="2" stroke="blue" fill="blue" />"#,
            "\n</svg>\n"
        )
        .to_string()]
    );
}

#[test]
fn test_two_drawings() {
    let source = "10 LET N = 0\n20 DRAW START 10, 10\n30 PLOT 1, 1, 1, RED\n40 DRAW FINISH\n50 LET N = N + 1\n60 IF N < 2 THEN 20\n";
    let (_, documents) = drawings(source);
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0], documents[1]);
}

#[test]
fn test_plot_without_region() {
    let source = "10 PRINT 1\n20 PLOT 1, 1, 1, RED\n30 PRINT 3\n";
    assert_eq!(run(source), "?NO DRAWING STARTED IN 20\n1\n3\n");
}

#[test]
fn test_start_twice() {
    let source = "10 DRAW START 10, 10\n20 DRAW START 10, 10\n30 DRAW FINISH\n";
    let (out, documents) = drawings(source);
    assert_eq!(out, "?DRAWING ALREADY STARTED IN 20\n");
    assert_eq!(documents.len(), 1);
}

#[test]
fn test_unfinished_drawing() {
    let source = "10 DRAW START 10, 10\n20 PLOT 1, 1, 1, RED\n";
    let (out, documents) = drawings(source);
    assert_eq!(out, "?SYNTAX ERROR IN 10; DRAW START WITHOUT DRAW FINISH\n");
    assert!(documents.is_empty());
}

#[test]
fn test_jump_into_region() {
    let source = "10 GOTO 30\n20 DRAW START 10, 10\n30 PLOT 1, 1, 1, RED\n40 DRAW FINISH\n";
    assert_eq!(run(source), "?NO DRAWING STARTED IN 30\n");
}
