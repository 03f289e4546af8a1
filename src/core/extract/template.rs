//! Template extraction: minijinja AST → call sites → records.

use minijinja::machinery::ast::{CallArg, Expr, Spanned};

use super::{
    Extract, FileExtraction,
    call_site::{Argument, CallSite},
    markers::TEMPLATE_MARKERS,
};
use crate::core::{
    data::offset_to_line_col,
    parsers::template::{Call, find_calls, parse_template_source},
};

/// Extracts `_` / `_plural` calls from Jinja/Nunjucks-style templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateExtractor;

impl Extract for TemplateExtractor {
    fn extract(&self, file_path: &str, source: &str) -> FileExtraction {
        let root = match parse_template_source(source, file_path) {
            Ok(root) => root,
            Err(err) => return FileExtraction::parse_failure(file_path, source, err),
        };

        let calls: Vec<CallSite> = find_calls(&root)
            .into_iter()
            .map(|call| lower_call(call, source))
            .collect();
        let (records, issues) = TEMPLATE_MARKERS.collect(&calls, file_path, source);
        FileExtraction::new(records, issues)
    }
}

/// Positions come from the byte offset; the span's own line and column
/// fields are `u16` and saturate on large files.
fn lower_call(call: &Spanned<Call<'_>>, source: &str) -> CallSite {
    let (line, col) = offset_to_line_col(source, call.span().start_offset as usize);
    let callee = match &call.expr {
        Expr::Var(var) => Some(var.id.to_string()),
        _ => None,
    };

    CallSite {
        callee,
        line,
        col,
        args: call.args.iter().map(lower_argument).collect(),
    }
}

fn lower_argument(arg: &CallArg<'_>) -> Argument {
    match arg {
        CallArg::Pos(Expr::Const(constant)) => match constant.value.as_str() {
            Some(value) => Argument::Literal(value.to_string()),
            None => Argument::Expression,
        },
        _ => Argument::Expression,
    }
}
