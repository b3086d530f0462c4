/*!
# Functions

Angles are in degrees.
*/

pub mod ABS {
    /*!
    ## `ABS(X)` Returns the absolute value of X.
    ```text
    10 PRINT ABS(-0.125)
    0.125
    ```
    */
}

pub mod COS {
    /*!
    ## `COS(X)` Returns the cosine of X degrees.
    ```text
    10 PRINT COS(180)
    -1
    ```
    */
}

pub mod EXP {
    /*!
    ## `EXP(X)` Returns e to the power of X.
    ```text
    10 PRINT EXP(0)
    1
    ```
    */
}

pub mod LOG {
    /*!
    ## `LOG(X)` Returns the natural logarithm of X.
    ```text
    10 PRINT LOG(1)
    0
    ```
    */
}

pub mod RND {
    /*!
    ## `RND()` Returns a random number from 0 up to but not including 1.
    Arguments are allowed and ignored. Every run uses a new sequence.
    ```text
    10 PRINT RND()
    0.7098480789645691
    ```
    */
}

pub mod SIN {
    /*!
    ## `SIN(X)` Returns the sine of X degrees.
    ```text
    10 PRINT SIN(90)
    1
    ```
    */
}

pub mod SQR {
    /*!
    ## `SQR(X)` Returns the square root of X.
    ```text
    10 PRINT SQR(16)
    4
    ```
    */
}

pub mod TAN {
    /*!
    ## `TAN(X)` Returns the tangent of X degrees.
    ```text
    10 PRINT TAN(0)
    0
    ```
    */
}
