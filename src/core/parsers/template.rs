//! Template parser adapter built on minijinja's parser machinery.
//!
//! Besides parsing, this module exposes [`find_calls`], a full-tree search
//! that returns every function-call expression of a template in document
//! order. Extraction never has to walk the template AST itself.

use minijinja::machinery::{
    WhitespaceConfig,
    ast::{CallArg, Expr, Spanned, Stmt},
};
use minijinja::syntax::SyntaxConfig;

use super::ParseError;
use crate::core::data::offset_to_line_col;

pub use minijinja::machinery::ast::Call;

/// Parse template source into its root statement.
pub fn parse_template_source<'s>(
    source: &'s str,
    file_path: &'s str,
) -> Result<Stmt<'s>, ParseError> {
    minijinja::machinery::parse(
        source,
        file_path,
        SyntaxConfig::default(),
        WhitespaceConfig::default(),
    )
    .map_err(|err| {
        let position = err.range().map(|range| offset_to_line_col(source, range.start));
        ParseError {
            line: position.map(|(line, _)| line).or(err.line()),
            column: position.map(|(_, col)| col),
            message: err
                .detail()
                .map(str::to_string)
                .unwrap_or_else(|| err.kind().to_string()),
        }
    })
}

/// Collect every call expression in the template, depth-first pre-order.
///
/// A call is recorded before its callee and arguments are searched, so for
/// `{{ _(_("a")) }}` the outer call comes first.
pub fn find_calls<'t, 's>(root: &'t Stmt<'s>) -> Vec<&'t Spanned<Call<'s>>> {
    let mut calls = Vec::new();
    walk_stmt(root, &mut calls);
    calls
}

fn walk_body<'t, 's>(body: &'t [Stmt<'s>], calls: &mut Vec<&'t Spanned<Call<'s>>>) {
    for stmt in body {
        walk_stmt(stmt, calls);
    }
}

fn walk_stmt<'t, 's>(stmt: &'t Stmt<'s>, calls: &mut Vec<&'t Spanned<Call<'s>>>) {
    match stmt {
        Stmt::Template(node) => walk_body(&node.children, calls),
        Stmt::EmitExpr(node) => walk_expr(&node.expr, calls),
        Stmt::ForLoop(node) => {
            walk_expr(&node.target, calls);
            walk_expr(&node.iter, calls);
            if let Some(filter) = &node.filter_expr {
                walk_expr(filter, calls);
            }
            walk_body(&node.body, calls);
            walk_body(&node.else_body, calls);
        }
        Stmt::IfCond(node) => {
            walk_expr(&node.expr, calls);
            walk_body(&node.true_body, calls);
            walk_body(&node.false_body, calls);
        }
        Stmt::WithBlock(node) => {
            for (target, value) in &node.assignments {
                walk_expr(target, calls);
                walk_expr(value, calls);
            }
            walk_body(&node.body, calls);
        }
        Stmt::Set(node) => {
            walk_expr(&node.target, calls);
            walk_expr(&node.expr, calls);
        }
        Stmt::SetBlock(node) => {
            walk_expr(&node.target, calls);
            if let Some(filter) = &node.filter {
                walk_expr(filter, calls);
            }
            walk_body(&node.body, calls);
        }
        Stmt::AutoEscape(node) => {
            walk_expr(&node.enabled, calls);
            walk_body(&node.body, calls);
        }
        Stmt::FilterBlock(node) => {
            walk_expr(&node.filter, calls);
            walk_body(&node.body, calls);
        }
        Stmt::Block(node) => walk_body(&node.body, calls),
        Stmt::Extends(node) => walk_expr(&node.name, calls),
        Stmt::Include(node) => walk_expr(&node.name, calls),
        Stmt::Import(node) => {
            walk_expr(&node.expr, calls);
            walk_expr(&node.name, calls);
        }
        Stmt::FromImport(node) => walk_expr(&node.expr, calls),
        Stmt::Macro(node) => {
            for default in &node.defaults {
                walk_expr(default, calls);
            }
            walk_body(&node.body, calls);
        }
        Stmt::CallBlock(node) => {
            walk_call(&node.call, calls);
            for default in &node.macro_decl.defaults {
                walk_expr(default, calls);
            }
            walk_body(&node.macro_decl.body, calls);
        }
        Stmt::Do(node) => walk_call(&node.call, calls),
        #[allow(unreachable_patterns)]
        _ => {}
    }
}

fn walk_call<'t, 's>(call: &'t Spanned<Call<'s>>, calls: &mut Vec<&'t Spanned<Call<'s>>>) {
    calls.push(call);
    walk_expr(&call.expr, calls);
    walk_args(&call.args, calls);
}

fn walk_args<'t, 's>(args: &'t [CallArg<'s>], calls: &mut Vec<&'t Spanned<Call<'s>>>) {
    for arg in args {
        match arg {
            CallArg::Pos(expr)
            | CallArg::Kwarg(_, expr)
            | CallArg::PosSplat(expr)
            | CallArg::KwargSplat(expr) => walk_expr(expr, calls),
        }
    }
}

fn walk_expr<'t, 's>(expr: &'t Expr<'s>, calls: &mut Vec<&'t Spanned<Call<'s>>>) {
    match expr {
        Expr::Call(call) => walk_call(call, calls),
        Expr::Var(_) | Expr::Const(_) => {}
        Expr::Slice(node) => {
            walk_expr(&node.expr, calls);
            for part in [&node.start, &node.stop, &node.step].into_iter().flatten() {
                walk_expr(part, calls);
            }
        }
        Expr::UnaryOp(node) => walk_expr(&node.expr, calls),
        Expr::BinOp(node) => {
            walk_expr(&node.left, calls);
            walk_expr(&node.right, calls);
        }
        Expr::IfExpr(node) => {
            walk_expr(&node.test_expr, calls);
            walk_expr(&node.true_expr, calls);
            if let Some(false_expr) = &node.false_expr {
                walk_expr(false_expr, calls);
            }
        }
        Expr::Filter(node) => {
            if let Some(inner) = &node.expr {
                walk_expr(inner, calls);
            }
            walk_args(&node.args, calls);
        }
        Expr::Test(node) => {
            walk_expr(&node.expr, calls);
            walk_args(&node.args, calls);
        }
        Expr::GetAttr(node) => walk_expr(&node.expr, calls),
        Expr::GetItem(node) => {
            walk_expr(&node.expr, calls);
            walk_expr(&node.subscript_expr, calls);
        }
        Expr::List(node) => {
            for item in &node.items {
                walk_expr(item, calls);
            }
        }
        Expr::Map(node) => {
            for (key, value) in node.keys.iter().zip(&node.values) {
                walk_expr(key, calls);
                walk_expr(value, calls);
            }
        }
        #[allow(unreachable_patterns)]
        _ => {}
    }
}
