#[macro_use]
mod common;

#[cfg(test)]
mod method {
    tests! {
        arity is OK
        "class Foo {
            method0() { return \"no args\"; }
            method1(a) { return a; }
            method2(a, b) { return a + b; }
            method3(a, b, c) { return a + b + c; }
        }

        var foo = Foo();
        print foo.method0();
        print foo.method1(1);
        print foo.method2(1, 2);
        print foo.method3(1, 2, 3);",
        "no args"
        "1"
        "3"
        "6"
    }

    tests! {
        empty_block is OK
        "class Foo {
            bar() {}
        }

        print Foo().bar();",
        "nil"
    }

    tests! {
        extra_arguments is RUNTIME_ERR
        "class Foo {
            method(a, b) {}
        }

        Foo().method(1, 2, 3, 4);",
        "Expected 2 arguments but got 4"
        "[line 5]"
    }

    tests! {
        missing_arguments is RUNTIME_ERR
        "class Foo {
            method(a, b) {}
        }

        Foo().method(1);",
        "Expected 2 arguments but got 1"
        "[line 4]"
    }

    tests! {
        not_found is RUNTIME_ERR
        "class Foo {}

        Foo().unknown();",
        "Undefined property unknown."
        "[line 3]"
    }

    tests! {
        print_bound_method is OK
        "class Foo {
            method() {}
        }
        var foo = Foo();
        print foo.method;",
        "<fn method>"
    }

    tests! {
        refer_to_name is RUNTIME_ERR
        "class Foo {
            method() {
                print method;
            }
        }

        Foo().method();",
        "Undefined variable 'method'"
        "[line 3]"
    }

    tests! {
        too_many_arguments is ERR
        {
            let args: Vec<String> = (0..256).map(|i| i.to_string()).collect();
            format!("class Foo {{ method() {{}} }}\nFoo().method({});", args.join(", "))
        },
        "[line 2] Error at '255': Can't have more than 255 arguments."
    }

    tests! {
        too_many_parameters is ERR
        {
            let params: Vec<String> = (0..256).map(|i| format!("a{i}")).collect();
            format!("class Foo {{ method({}) {{}} }}", params.join(", "))
        },
        "[line 1] Error at 'a255': Can't have more than 255 parameters."
    }
}
