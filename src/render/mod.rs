//! Preview renderer
//!
//! Lowers a built tree into an OXC program and prints it with `oxc_codegen`.
//! This is an inspection aid for builder output; extension fields such as
//! `sType` and `isPower` are ignored.

use std::cell::RefCell;

use oxc_allocator::{Allocator, Vec as ArenaVec};
use oxc_ast::{
    ast::{
        Argument, ArrayExpressionElement, BinaryOperator, BindingPatternKind, Expression,
        FormalParameterKind, LogicalOperator, ObjectPropertyKind, PropertyKey, Statement,
        UnaryOperator, VariableDeclarationKind,
    },
    AstBuilder as OxcAstBuilder,
};
use oxc_codegen::Codegen;
use oxc_span::{SourceType, SPAN};
use oxc_syntax::number::NumberBase;

use crate::ast::{
    ArrowFunctionExpression, Comment, DeclarationKind, LiteralValue, MemberExpression, Node, Property,
    PropertyKind, VariableDeclaration,
};
use crate::error::{Error, Result};

pub mod comments;

/// Render a tree to JavaScript source.
///
/// A `Program` renders its body; any other node renders as a single statement.
pub fn render_program(node: &Node) -> Result<String> {
    let allocator = Allocator::default();
    let ast_builder = OxcAstBuilder::new(&allocator);
    let lowering = TreeLowering::new(&ast_builder);

    let statements = lowering.lower_program(node)?;
    let program = ast_builder.program(
        SPAN,
        SourceType::default(),
        "",
        ast_builder.vec(), // comments
        None,              // hashbang
        ast_builder.vec(), // directives
        statements,
    );

    let code = Codegen::new().build(&program).code;
    comments::restore_comments(&code, &lowering.into_comments())
}

/// Converts template nodes into OXC AST nodes
pub struct TreeLowering<'a> {
    ast_builder: &'a OxcAstBuilder<'a>,
    /// Comments lowered so far, indexed by placeholder number
    comments: RefCell<Vec<Comment>>,
}

impl<'a> TreeLowering<'a> {
    pub fn new(ast_builder: &'a OxcAstBuilder<'a>) -> Self {
        Self {
            ast_builder,
            comments: RefCell::new(Vec::new()),
        }
    }

    /// Comments collected while lowering, in placeholder order
    pub fn into_comments(self) -> Vec<Comment> {
        self.comments.into_inner()
    }

    /// Lower the top-level statements of a tree
    pub fn lower_program(&self, node: &Node) -> Result<ArenaVec<'a, Statement<'a>>> {
        match node {
            Node::Program(program) => self.lower_statements(&program.body),
            other => Ok(self.ast_builder.vec1(self.lower_statement(other)?)),
        }
    }

    fn lower_statements(&self, nodes: &[Node]) -> Result<ArenaVec<'a, Statement<'a>>> {
        let mut statements = self.ast_builder.vec_with_capacity(nodes.len());
        for node in nodes {
            statements.push(self.lower_statement(node)?);
        }
        Ok(statements)
    }

    /// Lower a node in statement position
    pub fn lower_statement(&self, node: &Node) -> Result<Statement<'a>> {
        match node {
            Node::ExpressionStatement(stmt) => Ok(self
                .ast_builder
                .statement_expression(SPAN, self.lower_expression(&stmt.expression)?)),
            Node::VariableDeclaration(decl) => self.lower_declaration(decl),
            Node::BlockStatement(block) => {
                let body = self.lower_statements(&block.body)?;
                Ok(self.ast_builder.statement_block(SPAN, body))
            }
            Node::Comment(comment) => {
                let text = {
                    let mut lowered = self.comments.borrow_mut();
                    lowered.push(comment.clone());
                    comments::placeholder(lowered.len() - 1)
                };
                let placeholder = self.ast_builder.expression_string_literal(
                    SPAN,
                    self.ast_builder.atom(&text),
                    None,
                );
                let void_expr =
                    self.ast_builder
                        .expression_unary(SPAN, UnaryOperator::Void, placeholder);
                Ok(self.ast_builder.statement_expression(SPAN, void_expr))
            }
            Node::Program(_) => Err(Error::render("Program can only appear at the root")),
            expression => Ok(self
                .ast_builder
                .statement_expression(SPAN, self.lower_expression(expression)?)),
        }
    }

    /// Lower a node in expression position, unwrapping statement wrappers
    pub fn lower_expression(&self, node: &Node) -> Result<Expression<'a>> {
        let ast = self.ast_builder;
        match node {
            Node::ExpressionStatement(stmt) => self.lower_expression(&stmt.expression),
            Node::Identifier(id) => Ok(ast.expression_identifier(SPAN, ast.atom(&id.name))),
            Node::Literal(lit) => Ok(match &lit.value {
                LiteralValue::Number(value) => {
                    ast.expression_numeric_literal(SPAN, *value, None, NumberBase::Decimal)
                }
                LiteralValue::String(value) => {
                    ast.expression_string_literal(SPAN, ast.atom(value), None)
                }
                LiteralValue::Bool(value) => ast.expression_boolean_literal(SPAN, *value),
                LiteralValue::Null => ast.expression_null_literal(SPAN),
            }),
            Node::CallExpression(call) => {
                let callee = self.lower_expression(&call.callee)?;
                let mut arguments = ast.vec_with_capacity(call.arguments.len());
                for arg in &call.arguments {
                    arguments.push(Argument::from(self.lower_expression(arg)?));
                }
                Ok(ast.expression_call(
                    SPAN,
                    callee,
                    None::<oxc_ast::ast::TSTypeParameterInstantiation>,
                    arguments,
                    false,
                ))
            }
            Node::MemberExpression(member) => self.lower_member(member),
            Node::ArrowFunctionExpression(arrow) => self.lower_arrow(arrow),
            Node::BinaryExpression(bin) => {
                let left = self.lower_expression(&bin.left)?;
                let right = self.lower_expression(&bin.right)?;
                if let Some(op) = logical_operator(&bin.operator) {
                    return Ok(ast.expression_logical(SPAN, left, op, right));
                }
                let op = binary_operator(&bin.operator).ok_or_else(|| {
                    Error::render(format!("unsupported binary operator `{}`", bin.operator))
                })?;
                Ok(ast.expression_binary(SPAN, left, op, right))
            }
            Node::UnaryExpression(unary) => {
                let op = unary_operator(&unary.operator).ok_or_else(|| {
                    Error::render(format!("unsupported unary operator `{}`", unary.operator))
                })?;
                let argument = self.lower_expression(&unary.argument)?;
                Ok(ast.expression_unary(SPAN, op, argument))
            }
            Node::ConditionalExpression(cond) => Ok(ast.expression_conditional(
                SPAN,
                self.lower_expression(&cond.test)?,
                self.lower_expression(&cond.consequent)?,
                self.lower_expression(&cond.alternate)?,
            )),
            Node::ArrayExpression(array) => {
                let mut elements = ast.vec_with_capacity(array.elements.len());
                for element in &array.elements {
                    elements.push(ArrayExpressionElement::from(self.lower_expression(element)?));
                }
                Ok(ast.expression_array(SPAN, elements))
            }
            Node::ObjectExpression(object) => {
                let mut properties = ast.vec_with_capacity(object.properties.len());
                for property in &object.properties {
                    properties.push(self.lower_property(property)?);
                }
                Ok(ast.expression_object(SPAN, properties))
            }
            other => Err(Error::render(format!(
                "{} cannot appear in expression position",
                other.type_name()
            ))),
        }
    }

    fn lower_declaration(&self, decl: &VariableDeclaration) -> Result<Statement<'a>> {
        let ast = self.ast_builder;
        let kind = match decl.kind {
            DeclarationKind::Const => VariableDeclarationKind::Const,
            DeclarationKind::Let => VariableDeclarationKind::Let,
            DeclarationKind::Var => VariableDeclarationKind::Var,
        };

        let mut declarators = ast.vec_with_capacity(decl.declarations.len());
        for declarator in &decl.declarations {
            let name = self.binding_name(&declarator.id, "declarator id")?;
            let binding = ast.binding_identifier(SPAN, ast.atom(name));
            let pattern = ast.binding_pattern(
                BindingPatternKind::BindingIdentifier(ast.alloc(binding)),
                None::<oxc_ast::ast::TSTypeAnnotation>,
                false,
            );
            let init = self.lower_expression(&declarator.init)?;
            declarators.push(ast.variable_declarator(SPAN, kind, pattern, Some(init), false));
        }

        Ok(Statement::VariableDeclaration(ast.alloc_variable_declaration(
            SPAN,
            kind,
            declarators,
            false,
        )))
    }

    fn lower_member(&self, member: &MemberExpression) -> Result<Expression<'a>> {
        let ast = self.ast_builder;
        let object = self.lower_expression(&member.object)?;
        if member.computed {
            let property = self.lower_expression(&member.property)?;
            return Ok(Expression::ComputedMemberExpression(
                ast.alloc_computed_member_expression(SPAN, object, property, false),
            ));
        }
        let name = self.binding_name(&member.property, "dotted member property")?;
        let property = ast.identifier_name(SPAN, ast.atom(name));
        Ok(Expression::StaticMemberExpression(
            ast.alloc_static_member_expression(SPAN, object, property, false),
        ))
    }

    fn lower_arrow(&self, arrow: &ArrowFunctionExpression) -> Result<Expression<'a>> {
        let ast = self.ast_builder;

        let mut items = ast.vec_with_capacity(arrow.params.len());
        for param in &arrow.params {
            let name = self.binding_name(param, "parameter")?;
            let binding = ast.binding_identifier(SPAN, ast.atom(name));
            let pattern = ast.binding_pattern(
                BindingPatternKind::BindingIdentifier(ast.alloc(binding)),
                None::<oxc_ast::ast::TSTypeAnnotation>,
                false,
            );
            items.push(ast.formal_parameter(
                SPAN,
                ast.vec(), // decorators
                pattern,
                None,  // accessibility
                false, // readonly
                false, // r#override
            ));
        }
        let params = ast.formal_parameters(
            SPAN,
            FormalParameterKind::ArrowFormalParameters,
            items,
            None::<oxc_ast::ast::BindingRestElement>,
        );

        // expression-bodied arrows hold their expression as the only statement
        let body_expr = self.lower_expression(&arrow.body)?;
        let body = ast.function_body(
            SPAN,
            ast.vec(), // directives
            ast.vec1(ast.statement_expression(SPAN, body_expr)),
        );

        Ok(ast.expression_arrow_function(
            SPAN,
            true,  // expression
            false, // async
            None::<oxc_ast::ast::TSTypeParameterDeclaration>,
            params,
            None::<oxc_ast::ast::TSTypeAnnotation>,
            body,
        ))
    }

    fn lower_property(&self, property: &Property) -> Result<ObjectPropertyKind<'a>> {
        let ast = self.ast_builder;
        let key = match property.key.as_expression() {
            Node::Identifier(id) if !property.computed => PropertyKey::StaticIdentifier(
                ast.alloc(ast.identifier_name(SPAN, ast.atom(&id.name))),
            ),
            other => PropertyKey::from(self.lower_expression(other)?),
        };
        let kind = match property.kind {
            PropertyKind::Init => oxc_ast::ast::PropertyKind::Init,
            PropertyKind::Get => oxc_ast::ast::PropertyKind::Get,
            PropertyKind::Set => oxc_ast::ast::PropertyKind::Set,
        };
        let value = self.lower_expression(&property.value)?;
        let lowered = ast.object_property(
            SPAN,
            kind,
            key,
            value,
            property.method,
            property.shorthand,
            property.computed,
        );
        Ok(ObjectPropertyKind::ObjectProperty(ast.alloc(lowered)))
    }

    fn binding_name<'n>(&self, node: &'n Node, role: &str) -> Result<&'n str> {
        node.as_expression()
            .as_identifier()
            .map(|id| id.name.as_str())
            .ok_or_else(|| {
                Error::render(format!(
                    "{} must be an Identifier, found {}",
                    role,
                    node.type_name()
                ))
            })
    }
}

fn binary_operator(operator: &str) -> Option<BinaryOperator> {
    Some(match operator {
        "+" => BinaryOperator::Addition,
        "-" => BinaryOperator::Subtraction,
        "*" => BinaryOperator::Multiplication,
        "/" => BinaryOperator::Division,
        "%" => BinaryOperator::Remainder,
        "**" => BinaryOperator::Exponential,
        "===" => BinaryOperator::StrictEquality,
        "!==" => BinaryOperator::StrictInequality,
        "==" => BinaryOperator::Equality,
        "!=" => BinaryOperator::Inequality,
        "<" => BinaryOperator::LessThan,
        "<=" => BinaryOperator::LessEqualThan,
        ">" => BinaryOperator::GreaterThan,
        ">=" => BinaryOperator::GreaterEqualThan,
        "|" => BinaryOperator::BitwiseOR,
        "&" => BinaryOperator::BitwiseAnd,
        "<<" => BinaryOperator::ShiftLeft,
        ">>" => BinaryOperator::ShiftRight,
        ">>>" => BinaryOperator::ShiftRightZeroFill,
        "in" => BinaryOperator::In,
        "instanceof" => BinaryOperator::Instanceof,
        _ => return None,
    })
}

fn logical_operator(operator: &str) -> Option<LogicalOperator> {
    match operator {
        "&&" => Some(LogicalOperator::And),
        "||" => Some(LogicalOperator::Or),
        "??" => Some(LogicalOperator::Coalesce),
        _ => None,
    }
}

fn unary_operator(operator: &str) -> Option<UnaryOperator> {
    Some(match operator {
        "-" => UnaryOperator::UnaryNegation,
        "+" => UnaryOperator::UnaryPlus,
        "!" => UnaryOperator::LogicalNot,
        "~" => UnaryOperator::BitwiseNot,
        "typeof" => UnaryOperator::Typeof,
        "void" => UnaryOperator::Void,
        "delete" => UnaryOperator::Delete,
        _ => return None,
    })
}
