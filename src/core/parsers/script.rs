use std::sync::Arc;

use swc_common::{FileName, Globals, SourceMap, Span, Spanned};
use swc_ecma_ast::Program;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, error::Error as SwcError};

use super::ParseError;

pub struct ParsedScript {
    pub program: Program,
    pub source_map: Arc<SourceMap>,
}

impl ParsedScript {
    /// 1-based (line, column) of the start of `span`.
    pub fn line_col(&self, span: Span) -> (usize, usize) {
        let loc = self.source_map.lookup_char_pos(span.lo);
        (loc.line, loc.col_display + 1)
    }
}

/// Parse JavaScript source code into an AST.
///
/// Both scripts and ES modules are accepted. Errors the parser recovers from
/// are still reported as failures so that only well-formed files contribute
/// messages.
pub fn parse_script_source(code: String, file_path: &str) -> Result<ParsedScript, ParseError> {
    use swc_common::GLOBALS;

    let source_map = Arc::new(SourceMap::default());

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Es(EsSyntax {
            jsx: false,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let program = parser
            .parse_program()
            .map_err(|e| to_parse_error(&source_map, e))?;

        if let Some(err) = parser.take_errors().into_iter().next() {
            return Err(to_parse_error(&source_map, err));
        }

        Ok(ParsedScript {
            program,
            source_map: source_map.clone(),
        })
    })
}

fn to_parse_error(source_map: &SourceMap, err: SwcError) -> ParseError {
    let loc = source_map.lookup_char_pos(err.span().lo);
    ParseError {
        line: Some(loc.line),
        column: Some(loc.col_display + 1),
        message: err.kind().msg().to_string(),
    }
}
