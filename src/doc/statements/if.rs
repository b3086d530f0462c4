/*!
# `IF <expression> <comparison> <expression> THEN <line label>`

## Purpose
Jump to a line when a comparison holds.

## Remarks
The comparison is one of `=`, `<` or `>`. When it does not hold,
execution continues with the next line.

## Example
```text
10 LET A = 10
20 PRINT A
30 LET A = A + 10
40 IF A < 40 THEN 20
10
20
30
```

*/
