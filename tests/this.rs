#[macro_use]
mod common;

#[cfg(test)]
mod this_expr {
    tests! {
        closure is OK
        "class Foo {
            getClosure() {
                fun closure() {
                    return this.toString();
                }
                return closure;
            }

            toString() { return \"Foo\"; }
        }

        var closure = Foo().getClosure();
        print closure();",
        "Foo"
    }

    tests! {
        nested_class is OK
        "class Outer {
            method() {
                print this;

                fun f() {
                    print this;

                    class Inner {
                        method() {
                            print this;
                        }
                    }

                    Inner().method();
                }
                f();
            }
        }

        Outer().method();",
        "Outer instance"
        "Outer instance"
        "Inner instance"
    }

    tests! {
        nested_closure is OK
        "class Foo {
            getClosure() {
                fun f() {
                    fun g() {
                        return this.toString();
                    }
                    return g;
                }
                return f;
            }
            toString() { return \"Foo\"; }
        }

        var closure = Foo().getClosure()();
        print closure();",
        "Foo"
    }

    tests! {
        this_at_top_level is ERR
        "print this;",
        "[line 1] Error at 'this': Can't use 'this' outside of a class."
    }

    tests! {
        this_in_method is OK
        "class Foo {
            bar() { return \"baz\"; }
            baz() {
                print this.bar();
            }
        }
        Foo().baz();",
        "baz"
    }

    tests! {
        this_in_top_level_function is ERR
        "fun foo() {
            this.bar();
        }",
        "[line 2] Error at 'this': Can't use 'this' outside of a class."
    }
}
