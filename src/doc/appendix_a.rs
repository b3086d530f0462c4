/*!
# Error Messages

Errors print with a leading `?`, the line label and some detail.
```text
?UNDEFINED VARIABLE IN 20; Q
```

Errors found while reading the program skip the line they are on and
the rest of the program still runs. Errors found while running stop
the program.

## Reading the program

* `ILLEGAL CHARACTER` A character that is not part of the language.
* `MISSING LINE LABEL` The line doesn't start with a number.
* `MALFORMED STATEMENT` The statement is missing parts or has too many.
* `SYNTAX ERROR` The statement is in the wrong shape.
* `DRAWING ALREADY STARTED` `DRAW START` inside another drawing.
* `NO DRAWING STARTED` Drawing outside of `DRAW START` and `DRAW FINISH`.

## Running the program

* `UNDEFINED VARIABLE` Reading a variable that was never assigned.
* `TYPE MISMATCH` An array used without an index or a plain variable
  assigned with one.
* `SUBSCRIPT OUT OF RANGE` An index below 1 or above the array length.
* `BAD SUBSCRIPT` An index that isn't a whole number.
* `UNDEFINED LINE` `GOTO` or `IF` to a label that doesn't exist.
* `UNSUPPORTED FUNCTION` Calling a function that isn't built in.
* `ILLEGAL FUNCTION CALL` The wrong number of arguments.
* `REDIMENSIONED ARRAY` `DIM` of a name already in use.
* `OUT OF MEMORY` `DIM` of an array longer than 16777216.
* `DRAWING ALREADY STARTED` and `NO DRAWING STARTED` also happen when
  `GOTO` jumps into or out of a drawing.
* `CAN'T CREATE FILE` A drawing could not be saved.
* `BREAK` CTRL-C was pressed.

*/
