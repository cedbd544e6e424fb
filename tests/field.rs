#[macro_use]
mod common;

#[cfg(test)]
mod field {
    tests! {
        call_function_field is OK
        "class Foo {}
        fun bar(a, b) {
            print \"bar\";
            print a;
            print b;
        }

        var foo = Foo();
        foo.bar = bar;

        foo.bar(1, 2);",
        "bar"
        "1"
        "2"
    }

    tests! {
        call_nonfunction_field is RUNTIME_ERR
        "class Foo {}

        var foo = Foo();
        foo.bar = \"not fn\";

        foo.bar();",
        "Can only call functions and classes"
        "[line 6]"
    }

    tests! {
        get_and_set_method is OK
        "class Foo {
            method1() {
                print \"method1\";
            }
            method2() {
                print \"method2\";
            }
        }

        var foo = Foo();
        var method = foo.method1;
        foo.method1 = foo.method2;
        foo.method2 = method;

        foo.method1();
        foo.method2();",
        "method2"
        "method1"
    }

    tests! {
        get_on_bool is RUNTIME_ERR
        "true.foo;",
        "Only instances have properties."
        "[line 1]"
    }

    tests! {
        get_on_class is RUNTIME_ERR
        "class Foo {}
        Foo.bar;",
        "Only instances have properties."
        "[line 2]"
    }

    tests! {
        get_on_function is RUNTIME_ERR
        "fun foo() {}
        foo.bar;",
        "Only instances have properties."
        "[line 2]"
    }

    tests! {
        get_on_nil is RUNTIME_ERR
        "nil.foo;",
        "Only instances have properties."
        "[line 1]"
    }

    tests! {
        get_on_num is RUNTIME_ERR
        "123.foo;",
        "Only instances have properties."
        "[line 1]"
    }

    tests! {
        get_on_string is RUNTIME_ERR
        "\"str\".foo;",
        "Only instances have properties."
        "[line 1]"
    }

    tests! {
        many is OK
        "class Foo {}
        var foo = Foo();
        foo.bar = \"bar value\";
        foo.baz = \"baz value\";
        print foo.bar;
        print foo.baz;",
        "bar value"
        "baz value"
    }

    tests! {
        method is OK
        "class Foo {
            bar(arg) {
                print \"got method\";
                print arg;
            }
        }

        Foo().bar(\"arg\");",
        "got method"
        "arg"
    }

    tests! {
        method_binds_this is OK
        "class Foo {
            sayName(a) {
                print this.name;
                print a;
            }
        }

        var foo1 = Foo();
        foo1.name = \"foo1\";

        var method = foo1.sayName;
        method(1);",
        "foo1"
        "1"
    }

    tests! {
        on_instance is OK
        "class Foo {}

        var foo = Foo();
        foo.bar = \"bar value\";
        foo.baz = \"baz value\";
        print foo.bar;
        print foo.baz;",
        "bar value"
        "baz value"
    }

    tests! {
        set_evaluation_order is RUNTIME_ERR
        "undefined1.bar = undefined2;",
        "Undefined variable 'undefined1'"
        "[line 1]"
    }

    tests! {
        set_on_bool is RUNTIME_ERR
        "true.foo = \"value\";",
        "Only instances have fields."
        "[line 1]"
    }

    tests! {
        set_on_class is RUNTIME_ERR
        "class Foo {}
        Foo.bar = \"value\";",
        "Only instances have fields."
        "[line 2]"
    }

    tests! {
        set_on_function is RUNTIME_ERR
        "fun foo() {}
        foo.bar = \"value\";",
        "Only instances have fields."
        "[line 2]"
    }

    tests! {
        set_on_nil is RUNTIME_ERR
        "nil.foo = \"value\";",
        "Only instances have fields."
        "[line 1]"
    }

    tests! {
        set_on_num is RUNTIME_ERR
        "123.foo = \"value\";",
        "Only instances have fields."
        "[line 1]"
    }

    tests! {
        set_on_string is RUNTIME_ERR
        "\"str\".foo = \"value\";",
        "Only instances have fields."
        "[line 1]"
    }

    tests! {
        undefined is RUNTIME_ERR
        "class Foo {}

        var foo = Foo();
        foo.bar;",
        "Undefined property bar."
        "[line 4]"
    }
}
