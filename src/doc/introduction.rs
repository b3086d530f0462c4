/*!
# Introductory Tutorial

Programs are plain text files. Every line begins with a label, which is
a number, followed by one statement. Lines run from top to bottom unless
a `GOTO` or `IF` sends execution somewhere else. Save the following as
`hello.bas`.

```text
10 PRINT "HELLO WORLD"
20 END
```

Then run it.

<pre><code>&nbsp;$ basic hello.bas
&nbsp; HELLO WORLD
&nbsp; END
</code></pre>

Stop a running program with CTRL-C.

Upper and lower case are the same. Lines that are empty or begin with a
`*` are ignored, so they make good comments.

```text
* COUNT TO FIVE
10 LET N = 1
20 PRINT N
30 LET N = N + 1
40 IF N < 6 THEN 20
```

## Numbers and variables

Every value is a number. Variables are named with letters and digits
and are created by assigning them with `LET`. Reading a variable that
was never assigned is an error.

Expressions use `+ - * /` and `^` for powers. Powers are worked out
first, then multiplication and division, then addition and subtraction.
Use parentheses to change the order.

```text
10 PRINT 2 + 3 * 4 ^ 2
50
```

Dividing by zero is not an error. It prints `inf` or `NaN`.

## Arrays

`DIM` creates a list of numbers. Elements are numbered from 1.

```text
10 DIM T 3
20 LET T[3] = 5
30 LET T[2] = (SIN(T[3]) + 3) ^ 2
40 PRINT T[2]
```

## Drawing

Pictures are drawn between `DRAW START` and `DRAW FINISH` and saved as
an SVG file you can open in any web browser.

```text
10 DRAW START 200, 200
20 RECTANGLE 40, 100, 160, 180, BROWN FILL
30 LINE 40, 100, 100, 40, BLACK
40 LINE 100, 40, 160, 100, BLACK
50 PLOT 100, 70, 15, YELLOW FILL
60 DRAW FINISH
```

Use `--verbose` to see every line as it is read, and `--check` to look
for mistakes without running the program.

*/
