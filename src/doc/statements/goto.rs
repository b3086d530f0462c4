/*!
# `GOTO <line label>`

## Purpose
Immediately and unconditionally move execution to the specified line.

## Remarks
If `<line label>` doesn't exist an `UNDEFINED LINE` error will occur.
Labels are matched as written, so `GOTO 010` does not find line `10`.
When the same label appears twice, the first one wins.

## Example
```text
10 GOTO 30
20 PRINT "THIS WILL NOT PRINT"
30 PRINT "THIS WILL PRINT"
```

*/
