/*!
# `LET <variable>[[<index>]] = <expression>`

## Purpose
Assign a value to the variable.

## Remarks
A variable without an index must not be an array. A variable with an
index must have been created with `DIM`. Breaking either rule is a
`TYPE MISMATCH`.

## Example
```text
10 LET A = 10
20 PRINT A
30 LET A = -A * 2
40 PRINT A
10
-20
```

*/
