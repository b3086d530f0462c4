/*!
# `DRAW START <width>, <height>` and `DRAW FINISH`

## Purpose
Begin and end a drawing.

## Remarks
`PLOT`, `LINE` and `RECTANGLE` are only allowed between a `DRAW START`
and a `DRAW FINISH`. A drawing can't be started while another is open.
`DRAW FINISH` saves everything drawn since `DRAW START` as an SVG file
named after the program, for example `house-drawing_20240606-090530.svg`.

## Example
```text
10 DRAW START 200, 100
20 RECTANGLE 10, 10, 190, 90, BLACK
30 DRAW FINISH
```

*/
