/*!
# `PRINT <expression>` or `PRINT "<text>"`

## Purpose
Output information to the terminal for the operator.

## Remarks
Prints one number or one piece of text, followed by a newline.
Text runs to the closing quote or the end of the line.

## Example
```text
10 PRINT "AREA"
20 PRINT 2 + 3 * 4 ^ 2
AREA
50
```

*/
