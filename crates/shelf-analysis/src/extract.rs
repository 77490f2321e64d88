//! Import specifier extraction.
//!
//! Source text is parsed with Oxc and the `from` clause of every top-level
//! `import … from '…'` declaration is collected in source order. Duplicates
//! are kept; callers deduplicate when building sets.
//!
//! Files Oxc cannot parse fall back to a permissive textual scan. The scan
//! may pick up specifiers inside comments or strings, and misses imports
//! spread over several lines, but a broken file still contributes what it
//! can instead of failing the run.

use std::sync::LazyLock;

use oxc_allocator::Allocator;
use oxc_ast::ast::ModuleDeclaration;
use oxc_parser::{Parser, ParserReturn};
use oxc_span::SourceType;
use regex::Regex;

static TEXTUAL_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+.*?from\s+['"]([^'"]+)['"]"#).expect("valid import pattern")
});

/// Extract import specifiers from `source`.
///
/// `filename` only selects the dialect (TypeScript, JSX, ...); it is never read.
pub fn extract_imports(source: &str, filename: &str) -> Vec<String> {
    let source_type = SourceType::from_path(filename).unwrap_or_else(|_| SourceType::tsx());
    let allocator = Allocator::default();

    let ParserReturn {
        program,
        errors,
        panicked,
        ..
    } = Parser::new(&allocator, source, source_type).parse();

    if panicked || !errors.is_empty() {
        tracing::debug!(
            file = filename,
            errors = errors.len(),
            "parse failed, falling back to textual import scan"
        );
        return extract_imports_textual(source);
    }

    let mut specifiers = Vec::new();
    for stmt in &program.body {
        if let Some(ModuleDeclaration::ImportDeclaration(import)) = stmt.as_module_declaration() {
            // Side-effect imports (`import './x.css'`) have no `from` clause
            if import.specifiers.is_some() {
                specifiers.push(import.source.value.to_string());
            }
        }
    }
    specifiers
}

/// Pattern-based extraction: `import`, anything on the same line, `from`,
/// then a quoted specifier.
pub fn extract_imports_textual(source: &str) -> Vec<String> {
    TEXTUAL_IMPORT
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
