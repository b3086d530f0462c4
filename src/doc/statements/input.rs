/*!
# `INPUT <variable>`

## Purpose
Suspends execution and awaits a number from the terminal.

## Remarks
The prompt is `# `. Anything that is not a number is answered with
`?REDO FROM START` and the prompt is shown again. Arrays can not be
the target of `INPUT`.

## Example
```text
10 INPUT R
20 PRINT R * R * 3.14159
# 2
12.56636
```

*/
