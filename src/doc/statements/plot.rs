/*!
# `PLOT <x>, <y>, <radius>, <color> [FILL]`

## Purpose
Draw a circle.

## Remarks
The color is any SVG color name. Without `FILL` only the outline is drawn.

## Example
```text
10 DRAW START 100, 100
20 PLOT 50, 50, 20, YELLOW FILL
30 DRAW FINISH
```

*/
