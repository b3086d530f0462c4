/*!
# `DIM <variable name> <length>`

## Purpose
Create an array of numbers.

## Remarks
The length is a whole number. Elements are numbered from 1 to the
length inclusive and all start at zero. A name can only be dimensioned
once and cannot already be in use as a plain variable, otherwise a
`REDIMENSIONED ARRAY` error occurs. Arrays hold at most 16777216
elements; a longer `DIM` is `OUT OF MEMORY`. Once dimensioned, the name must
always be used with an index in brackets.

An index is either a number or a plain variable, never an expression.
It must be a whole number in range, otherwise `BAD SUBSCRIPT` or
`SUBSCRIPT OUT OF RANGE` will occur.

## Example
```text
10 DIM A 3
20 LET I = 2
30 LET A[I] = 42
40 PRINT A[2]
50 PRINT A[1]
42
0
```
*/
