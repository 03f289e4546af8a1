//! Script extraction: swc AST → call sites → records.

use swc_ecma_ast::{CallExpr, Callee, Expr, ExprOrSpread, Lit};
use swc_ecma_visit::{Visit, VisitWith};

use super::{
    Extract, FileExtraction,
    call_site::{Argument, CallSite},
    markers::SCRIPT_MARKERS,
};
use crate::core::parsers::script::{ParsedScript, parse_script_source};

/// Extracts `gettext` / `ngettext` calls from JavaScript.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptExtractor;

impl Extract for ScriptExtractor {
    fn extract(&self, file_path: &str, source: &str) -> FileExtraction {
        let parsed = match parse_script_source(source.to_string(), file_path) {
            Ok(parsed) => parsed,
            Err(err) => return FileExtraction::parse_failure(file_path, source, err),
        };

        let calls = CallCollector::collect(&parsed);
        let (records, issues) = SCRIPT_MARKERS.collect(&calls, file_path, source);
        FileExtraction::new(records, issues)
    }
}

/// Visitor that records every call expression, outer calls first.
///
/// Only `visit_call_expr` is overridden; the default traversal reaches calls
/// nested anywhere (function bodies, arguments, class members).
struct CallCollector<'a> {
    parsed: &'a ParsedScript,
    calls: Vec<CallSite>,
}

impl<'a> CallCollector<'a> {
    fn collect(parsed: &'a ParsedScript) -> Vec<CallSite> {
        let mut collector = Self {
            parsed,
            calls: Vec::new(),
        };
        parsed.program.visit_with(&mut collector);
        collector.calls
    }

    fn lower(&self, node: &CallExpr) -> CallSite {
        let callee = match &node.callee {
            Callee::Expr(expr) => match unwrap_parens(expr) {
                Expr::Ident(ident) => Some(ident.sym.to_string()),
                _ => None,
            },
            _ => None,
        };
        let (line, col) = self.parsed.line_col(node.span);

        CallSite {
            callee,
            line,
            col,
            args: node.args.iter().map(lower_argument).collect(),
        }
    }
}

fn lower_argument(arg: &ExprOrSpread) -> Argument {
    if arg.spread.is_some() {
        return Argument::Expression;
    }
    match unwrap_parens(&arg.expr) {
        Expr::Lit(Lit::Str(s)) => match s.value.as_str() {
            Some(value) => Argument::Literal(value.to_string()),
            None => Argument::Expression,
        },
        _ => Argument::Expression,
    }
}

fn unwrap_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_parens(&paren.expr),
        other => other,
    }
}

impl Visit for CallCollector<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        let call = self.lower(node);
        self.calls.push(call);
        node.visit_children_with(self);
    }
}
