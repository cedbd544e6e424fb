#[macro_use]
mod common;

#[cfg(test)]
mod if_stmt {
    tests! {
        class_in_else is ERR
        "// class in else clause
        if (true) \"ok\"; else class Foo {}",
        "[line 2] Error at 'class': Expect expression."
    }

    tests! {
        class_in_then is ERR
        "// class in then clause
        if (true) class Foo {}",
        "[line 2] Error at 'class': Expect expression."
    }

    tests! {
        dangling_else is OK
        "// a dangling else binds to the nearest if
        if (true) if (false) print \"bad\"; else print \"good\";",
        "good"
    }

    tests! {
        else_flow is OK
        "if (true) print \"good\"; else print \"bad\";
        if (false) print \"bad\"; else print \"good\";
        if (false) print \"bad\"; else { print \"block\"; }",
        "good"
        "good"
        "block"
    }

    tests! {
        fun_in_else is ERR
        "// fun in else clause
        if (true) \"ok\"; else fun foo() {}",
        "[line 2] Error at 'fun': Expect expression."
    }

    tests! {
        fun_in_then is ERR
        "// fun in then clause
        if (true) fun foo() {}",
        "[line 2] Error at 'fun': Expect expression."
    }

    tests! {
        if_flow is OK
        "if (true) print \"good\";
        if (false) print \"bad\";

        if (true) { print \"block\"; }

        var a = false;
        if (a = true) print a;",
        "good"
        "block"
        "true"
    }

    tests! {
        truth is OK
        "if (false) print \"bad\"; else print \"false\";
        if (nil) print \"bad\"; else print \"nil\";
        if (true) print \"true\";
        if (0) print \"0\";
        if (\"\") print \"empty\";",
        "false"
        "nil"
        "true"
        "0"
        "empty"
    }

    tests! {
        var_in_else is ERR
        "// var in else clause
        if (true) \"ok\"; else var foo;",
        "[line 2] Error at 'var': Expect expression."
    }

    tests! {
        var_in_then is ERR
        "// var in then clause
        if (true) var foo;",
        "[line 2] Error at 'var': Expect expression."
    }
}
