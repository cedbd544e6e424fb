use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use crate::class::{Class, Instance};
use crate::environment::Environment;
use crate::error::{Diagnostics, RuntimeError, Unwind};
use crate::expr::{
    AssignData, BinaryData, CallData, Expr, ExprVisitor, GetData, GroupingData, LogicalData,
    NodeId, SetData, SuperData, ThisData, UnaryData, VariableData,
};
use crate::function::{Function, NativeFunction};
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::{
    BlockData, ClassData, ExpressionData, FunctionData, IfData, PrintData, ReturnData, Stmt,
    StmtVisitor, VarData, WhileData,
};
use crate::token::{Token, TokenKind};

/// Walks the AST against a chain of environments rooted in `globals`. Holds
/// the resolver's locals side table and writes `print` output to `out`
/// rather than directly to stdout, so a test can capture it in-process.
/// `out` is reference-counted so that [`Diagnostics`](crate::error::Diagnostics)
/// can share the exact same sink for error reports.
pub struct Interpreter<'out> {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<NodeId, usize>,
    out: Rc<RefCell<&'out mut dyn Write>>,
}

impl<'out> Interpreter<'out> {
    pub fn new(out: Rc<RefCell<&'out mut dyn Write>>) -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        for native in NativeFunction::globals() {
            globals.borrow_mut().define(native.name, Object::from(native));
        }

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            out,
        }
    }

    pub fn interpret(&mut self, statements: &[Stmt], diagnostics: &mut Diagnostics<'_>) {
        for statement in statements {
            if let Err(unwind) = self.execute(statement) {
                match unwind {
                    Unwind::Error(error) => {
                        diagnostics.report_runtime(&error);
                        return;
                    }
                    Unwind::Return(_) => unreachable!("resolver forbids top-level return"),
                }
            }
        }
    }

    /// Records that the expression node `id` resolves `depth` environments
    /// out from wherever it is evaluated.
    pub fn resolve(&mut self, id: NodeId, depth: usize) {
        self.locals.insert(id, depth);
    }

    fn execute(&mut self, stmt: &Stmt) -> Result<(), Unwind> {
        stmt.accept(self)
    }

    fn evaluate(&mut self, expr: &Expr) -> Result<Object, RuntimeError> {
        expr.accept(self)
    }

    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>) -> Result<(), Unwind> {
        let previous = Rc::clone(&self.environment);
        self.environment = environment;

        let result = (|| {
            for statement in statements {
                self.execute(statement)?;
            }
            Ok(())
        })();

        self.environment = previous;
        result
    }

    fn look_up_variable(&self, name: &Token, id: NodeId) -> Result<Object, RuntimeError> {
        match self.locals.get(&id) {
            Some(&distance) => self.environment.borrow().get_at(distance, name),
            None => self.globals.borrow().get(name),
        }
    }

    fn is_equal(left: &Object, right: &Object) -> bool {
        left == right
    }

    fn check_number_operand(operator: &Token, operand: &Object) -> Result<(), RuntimeError> {
        match operand {
            Object::Number(_) => Ok(()),
            _ => Err(RuntimeError {
                token: operator.clone(),
                message: "Operand must be a number.".to_string(),
            }),
        }
    }

    fn check_number_operands(operator: &Token, left: &Object, right: &Object) -> Result<(), RuntimeError> {
        match (left, right) {
            (Object::Number(_), Object::Number(_)) => Ok(()),
            _ => Err(RuntimeError {
                token: operator.clone(),
                message: "Operands must be numbers.".to_string(),
            }),
        }
    }
}

impl<'out> ExprVisitor<Result<Object, RuntimeError>> for Interpreter<'out> {
    fn visit_literal_expr(&mut self, literal: &Literal) -> Result<Object, RuntimeError> {
        Ok(Object::from(literal.clone()))
    }

    fn visit_unary_expr(&mut self, data: &UnaryData) -> Result<Object, RuntimeError> {
        let right = self.evaluate(&data.expr)?;

        match data.operator.kind {
            TokenKind::Minus => {
                Self::check_number_operand(&data.operator, &right)?;
                Ok((-right).expect("checked above to be a number"))
            }
            TokenKind::Not => Ok(Object::Bool(!right.is_truthy())),
            _ => unreachable!("parser only emits Minus/Not as unary operators"),
        }
    }

    fn visit_binary_expr(&mut self, data: &BinaryData) -> Result<Object, RuntimeError> {
        let left = self.evaluate(&data.left)?;
        let right = self.evaluate(&data.right)?;
        let operator = &data.operator;

        match operator.kind {
            TokenKind::Minus => {
                Self::check_number_operands(operator, &left, &right)?;
                Ok((left - right).expect("checked above to be numbers"))
            }
            TokenKind::Slash => {
                Self::check_number_operands(operator, &left, &right)?;
                Ok((left / right).expect("checked above to be numbers"))
            }
            TokenKind::Star => {
                Self::check_number_operands(operator, &left, &right)?;
                Ok((left * right).expect("checked above to be numbers"))
            }
            TokenKind::Plus => (left + right).ok_or_else(|| RuntimeError {
                token: operator.clone(),
                message: "Operands must be two numbers or two strings.".to_string(),
            }),
            TokenKind::GreaterThan => {
                Self::check_number_operands(operator, &left, &right)?;
                let (Object::Number(l), Object::Number(r)) = (left, right) else { unreachable!() };
                Ok(Object::Bool(l > r))
            }
            TokenKind::GreaterEqual => {
                Self::check_number_operands(operator, &left, &right)?;
                let (Object::Number(l), Object::Number(r)) = (left, right) else { unreachable!() };
                Ok(Object::Bool(l >= r))
            }
            TokenKind::LessThan => {
                Self::check_number_operands(operator, &left, &right)?;
                let (Object::Number(l), Object::Number(r)) = (left, right) else { unreachable!() };
                Ok(Object::Bool(l < r))
            }
            TokenKind::LessEqual => {
                Self::check_number_operands(operator, &left, &right)?;
                let (Object::Number(l), Object::Number(r)) = (left, right) else { unreachable!() };
                Ok(Object::Bool(l <= r))
            }
            TokenKind::NotEqual => Ok(Object::Bool(!Self::is_equal(&left, &right))),
            TokenKind::EqualEqual => Ok(Object::Bool(Self::is_equal(&left, &right))),
            _ => unreachable!("parser only emits arithmetic/comparison operators as binary"),
        }
    }

    fn visit_logical_expr(&mut self, data: &LogicalData) -> Result<Object, RuntimeError> {
        let left = self.evaluate(&data.left)?;

        match data.operator.kind {
            TokenKind::Or if left.is_truthy() => Ok(left),
            TokenKind::And if !left.is_truthy() => Ok(left),
            _ => self.evaluate(&data.right),
        }
    }

    fn visit_grouping_expr(&mut self, data: &GroupingData) -> Result<Object, RuntimeError> {
        self.evaluate(&data.expr)
    }

    fn visit_variable_expr(&mut self, data: &VariableData) -> Result<Object, RuntimeError> {
        self.look_up_variable(&data.name, data.id)
    }

    fn visit_assign_expr(&mut self, data: &AssignData) -> Result<Object, RuntimeError> {
        let value = self.evaluate(&data.value)?;

        match self.locals.get(&data.id) {
            Some(&distance) => self.environment.borrow_mut().assign_at(distance, &data.name, value.clone()),
            None => self.globals.borrow_mut().assign(&data.name, value.clone())?,
        }

        Ok(value)
    }

    fn visit_call_expr(&mut self, data: &CallData) -> Result<Object, RuntimeError> {
        let callee = self.evaluate(&data.callee)?;

        let mut arguments = Vec::with_capacity(data.arguments.len());
        for argument in &data.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        match callee {
            Object::Class(class) => {
                let arity = class.borrow().initializer_arity();
                if arguments.len() != arity {
                    return Err(RuntimeError {
                        token: data.paren.clone(),
                        message: format!("Expected {} arguments but got {}", arity, arguments.len()),
                    });
                }

                let instance = Object::from(Instance::new(Rc::clone(&class)));
                if let Some(initializer) = class.borrow().get_method("init") {
                    initializer.bind(instance.clone()).call(self, arguments)?;
                }

                Ok(instance)
            }
            Object::Function(function) => Self::call_checked(&function, self, &data.paren, arguments),
            Object::NativeFunction(function) => Self::call_checked(&function, self, &data.paren, arguments),
            _ => Err(RuntimeError {
                token: data.paren.clone(),
                message: "Can only call functions and classes".to_string(),
            }),
        }
    }

    fn visit_get_expr(&mut self, data: &GetData) -> Result<Object, RuntimeError> {
        let object = self.evaluate(&data.object)?;

        if let Object::Instance(instance) = &object {
            instance.borrow().get(&data.name, &object)
        } else {
            Err(RuntimeError {
                token: data.name.clone(),
                message: "Only instances have properties.".to_string(),
            })
        }
    }

    fn visit_set_expr(&mut self, data: &SetData) -> Result<Object, RuntimeError> {
        let object = self.evaluate(&data.object)?;

        let Object::Instance(instance) = object else {
            return Err(RuntimeError {
                token: data.name.clone(),
                message: "Only instances have fields.".to_string(),
            });
        };

        let value = self.evaluate(&data.value)?;
        instance.borrow_mut().set(&data.name, value.clone());

        Ok(value)
    }

    fn visit_this_expr(&mut self, data: &ThisData) -> Result<Object, RuntimeError> {
        self.look_up_variable(&data.keyword, data.id)
    }

    fn visit_super_expr(&mut self, data: &SuperData) -> Result<Object, RuntimeError> {
        let distance = *self
            .locals
            .get(&data.id)
            .expect("resolver always records a depth for a valid 'super' use");

        let superclass = self.environment.borrow().get_at(distance, &Token::from("super"))?;
        let Object::Class(superclass) = superclass else {
            unreachable!("'super' always resolves to the class value bound by a class declaration");
        };

        let instance = self.environment.borrow().get_at(distance - 1, &Token::from("this"))?;

        match superclass.borrow().get_method(&data.method.lexeme) {
            Some(method) => Ok(Object::from(method.bind(instance))),
            None => Err(RuntimeError {
                token: data.method.clone(),
                message: format!("Undefined property '{}'", data.method.lexeme),
            }),
        }
    }
}

impl<'out> Interpreter<'out> {
    fn call_checked(
        callable: &dyn Callable,
        interpreter: &mut Interpreter<'_>,
        paren: &Token,
        arguments: Vec<Object>,
    ) -> Result<Object, RuntimeError> {
        if arguments.len() != callable.arity() {
            return Err(RuntimeError {
                token: paren.clone(),
                message: format!("Expected {} arguments but got {}", callable.arity(), arguments.len()),
            });
        }

        callable.call(interpreter, arguments)
    }
}

impl<'out> StmtVisitor<Result<(), Unwind>> for Interpreter<'out> {
    fn visit_expression_stmt(&mut self, data: &ExpressionData) -> Result<(), Unwind> {
        self.evaluate(&data.expr)?;
        Ok(())
    }

    fn visit_print_stmt(&mut self, data: &PrintData) -> Result<(), Unwind> {
        let value = self.evaluate(&data.expr)?;
        let _ = writeln!(self.out.borrow_mut(), "{value}");
        Ok(())
    }

    fn visit_var_stmt(&mut self, data: &VarData) -> Result<(), Unwind> {
        let value = match &data.initializer {
            Some(initializer) => self.evaluate(initializer)?,
            None => Object::Nil,
        };

        self.environment.borrow_mut().define(&data.name.lexeme, value);
        Ok(())
    }

    fn visit_block_stmt(&mut self, data: &BlockData) -> Result<(), Unwind> {
        let environment = Environment::new(Some(Rc::clone(&self.environment)));
        self.execute_block(&data.statements, Rc::new(RefCell::new(environment)))
    }

    fn visit_if_stmt(&mut self, data: &IfData) -> Result<(), Unwind> {
        if self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.then_branch)
        } else if let Some(else_branch) = &data.else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    fn visit_while_stmt(&mut self, data: &WhileData) -> Result<(), Unwind> {
        while self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.body)?;
        }
        Ok(())
    }

    fn visit_function_stmt(&mut self, data: &FunctionData) -> Result<(), Unwind> {
        let function = Function::new(Rc::new(data.clone()), Rc::clone(&self.environment), false);
        self.environment.borrow_mut().define(&data.name.lexeme, Object::from(function));
        Ok(())
    }

    fn visit_return_stmt(&mut self, data: &ReturnData) -> Result<(), Unwind> {
        let value = match &data.value {
            Some(value) => self.evaluate(value)?,
            None => Object::Nil,
        };

        Err(Unwind::Return(value))
    }

    fn visit_class_stmt(&mut self, data: &ClassData) -> Result<(), Unwind> {
        let superclass = match &data.superclass {
            Some(superclass_expr) => {
                let value = self.evaluate(superclass_expr)?;
                let Object::Class(class) = value else {
                    let Expr::Variable(variable) = superclass_expr else {
                        unreachable!("parser only ever produces a Variable expr for a superclass");
                    };
                    return Err(Unwind::Error(RuntimeError {
                        token: variable.name.clone(),
                        message: "Superclass must be a class".to_string(),
                    }));
                };
                Some(class)
            }
            None => None,
        };

        self.environment.borrow_mut().define(&data.name.lexeme, Object::Nil);

        if let Some(superclass) = &superclass {
            let environment = Environment::new(Some(Rc::clone(&self.environment)));
            self.environment = Rc::new(RefCell::new(environment));
            self.environment.borrow_mut().define("super", Object::Class(Rc::clone(superclass)));
        }

        let mut methods = HashMap::new();
        for method in &data.methods {
            let is_initializer = method.name.lexeme == "init";
            let function = Function::new(Rc::new(method.clone()), Rc::clone(&self.environment), is_initializer);
            methods.insert(method.name.lexeme.clone(), function);
        }

        let class = Rc::new(RefCell::new(Class::new(data.name.lexeme.clone(), superclass, methods)));

        if data.superclass.is_some() {
            let enclosing = self.environment.borrow().enclosing().expect("super scope always has an enclosing scope");
            self.environment = enclosing;
        }

        self.environment
            .borrow_mut()
            .assign(&data.name, Object::Class(class))
            .map_err(Unwind::Error)?;

        Ok(())
    }
}
