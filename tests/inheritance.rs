#[macro_use]
mod common;

#[cfg(test)]
mod inheritance {
    tests! {
        constructor is OK
        "class A {
            init(a) {
                this.a = a;
            }
        }

        class B < A {}

        var b = B(\"value\");
        print b.a;",
        "value"
    }

    tests! {
        inherit_from_function is RUNTIME_ERR
        "fun Base() {}

        class Subclass < Base {}",
        "Superclass must be a class"
        "[line 3]"
    }

    tests! {
        inherit_from_nil is RUNTIME_ERR
        "var Foo = nil;
        class Subclass < Foo {}",
        "Superclass must be a class"
        "[line 2]"
    }

    tests! {
        inherit_from_number is RUNTIME_ERR
        "var Foo = 123;
        class Subclass < Foo {}",
        "Superclass must be a class"
        "[line 2]"
    }

    tests! {
        inherit_methods is OK
        "class Foo {
            methodOnFoo() { print \"foo\"; }
            override() { print \"foo\"; }
        }

        class Bar < Foo {
            methodOnBar() { print \"bar\"; }
            override() { print \"bar\"; }
        }

        var bar = Bar();
        bar.methodOnFoo();
        bar.methodOnBar();
        bar.override();",
        "foo"
        "bar"
        "bar"
    }

    tests! {
        parenthesized_superclass is ERR
        "class Foo {}

        class Bar < (Foo) {}",
        "[line 3] Error at '(': Expect superclass name."
    }

    tests! {
        set_fields_from_base_class is OK
        "class Foo {
            foo(a, b) {
                this.a = a;
                this.b = b;
            }

            fooPrint() {
                print this.a;
                print this.b;
            }
        }

        class Bar < Foo {
            bar(a, b) {
                this.a = a;
                this.b = b;
            }

            barPrint() {
                print this.a;
                print this.b;
            }
        }

        var bar = Bar();
        bar.foo(\"foo 1\", \"foo 2\");
        bar.fooPrint();

        bar.bar(\"bar 1\", \"bar 2\");
        bar.barPrint();

        bar.fooPrint();",
        "foo 1"
        "foo 2"
        "bar 1"
        "bar 2"
        "bar 1"
        "bar 2"
    }
}
