/*!
# `LINE <x1>, <y1>, <x2>, <y2>, <color>`

## Purpose
Draw a straight line between two points.

## Example
```text
10 DRAW START 100, 100
20 LINE 0, 0, 100, 100, RED
30 DRAW FINISH
```

*/
