/*!
# `RECTANGLE <x1>, <y1>, <x2>, <y2>, <color> [FILL]`

## Purpose
Draw a rectangle.

## Remarks
The two points are opposite corners in any order.
Without `FILL` only the outline is drawn.

## Example
```text
10 DRAW START 100, 100
20 RECTANGLE 90, 90, 10, 50, GREEN FILL
30 DRAW FINISH
```

*/
