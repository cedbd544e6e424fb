#[macro_use]
mod common;

#[cfg(test)]
mod for_loop {
    tests! {
        class_in_body is ERR
        "// class in body
        for (;;) class Foo {}",
        "[line 2] Error at 'class': Expect expression."
    }

    tests! {
        closure_in_body is OK
        "var f1; var f2; var f3;

        for (var i = 1; i < 4; i = i + 1) {
            var j = i;
            fun f() {
                print j;
            }
            if (i == 1) f1 = f;
            if (i == 2) f2 = f;
            if (i == 3) f3 = f;
        }

        f1();
        f2();
        f3();",
        "1"
        "2"
        "3"
    }

    tests! {
        fun_in_body is ERR
        "// fun in body
        for (;;) fun foo() {}",
        "[line 2] Error at 'fun': Expect expression."
    }

    tests! {
        return_closure is OK
        "fun f() {
            for (;;) {
                var i = \"i\";
                fun g() { print i; }
                return g;
            }
        }

        var h = f();
        h();",
        "i"
    }

    tests! {
        return_inside is OK
        "fun f() {
            for (;;) {
                var i = \"i\";
                return i;
            }
        }

        print f();",
        "i"
    }

    tests! {
        var_in_body is ERR
        "// var in body
        for (;;) var foo;",
        "[line 2] Error at 'var': Expect expression."
    }
}
