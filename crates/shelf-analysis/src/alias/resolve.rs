//! Aliased specifier → file resolution.

use crate::config::{AnalyzerConfig, SOURCE_EXTENSIONS, has_source_extension};
use crate::error::{AnalysisError, Result};
use crate::fs::FileSystem;

use super::AliasTable;

/// Candidate files for a base path without a source extension, in probe order.
///
/// `<base>.ts`, `.tsx`, `.js`, `.jsx`, then `<base>/index.<ext>` in the same
/// order, and last the path as is (covers `.css`, `.json`, ...).
pub fn candidates(base: &str) -> Vec<String> {
    let files = SOURCE_EXTENSIONS.iter().map(|ext| format!("{base}.{ext}"));
    let indexes = SOURCE_EXTENSIONS
        .iter()
        .map(|ext| format!("{base}/index.{ext}"));
    files
        .chain(indexes)
        .chain(std::iter::once(base.to_string()))
        .collect()
}

/// Resolve `specifier` to a root-relative file path.
///
/// The alias is substituted first; a specifier no alias matches is taken as
/// a root-relative path. A path that already carries a source extension is
/// returned as is. Otherwise the first existing [`candidates`] entry wins.
pub fn resolve_specifier(
    specifier: &str,
    aliases: &AliasTable,
    config: &AnalyzerConfig,
    fs: &dyn FileSystem,
) -> Result<String> {
    let base = match aliases.substitute(specifier) {
        Some(path) => path,
        None => {
            tracing::debug!(specifier, "no alias matches, resolving as a project path");
            specifier.trim_start_matches('/').to_string()
        }
    };

    if has_source_extension(&base) {
        return Ok(base);
    }

    let tried = candidates(&base);
    if let Some(found) = tried
        .iter()
        .find(|candidate| fs.is_file(&config.absolute(candidate)))
    {
        return Ok(found.clone());
    }

    Err(AnalysisError::UnresolvedSpecifier {
        specifier: specifier.to_string(),
        tried,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::NativeFileSystem;
    use crate::tests::test_helpers::create_test_project;
    use tempfile::TempDir;

    fn aliases() -> AliasTable {
        AliasTable::from_pairs([("@", "src")])
    }

    #[test]
    fn probes_extensions_in_order() {
        let temp = TempDir::new().unwrap();
        let root = create_test_project(
            &temp,
            &[
                ("src/shared/lib/utils/classes.ts", "export const cx = 1;"),
                ("src/shared/lib/utils/classes.js", "exports.cx = 1;"),
            ],
        );
        let config = AnalyzerConfig::new(&root);

        let resolved =
            resolve_specifier("@/shared/lib/utils/classes", &aliases(), &config, &NativeFileSystem)
                .unwrap();
        assert_eq!(resolved, "src/shared/lib/utils/classes.ts");
    }

    #[test]
    fn source_extension_wins_over_extensionless_file() {
        let temp = TempDir::new().unwrap();
        let root = create_test_project(
            &temp,
            &[
                ("src/shared/lib/utils/classes", "not a module"),
                ("src/shared/lib/utils/classes.ts", "export const cx = 1;"),
            ],
        );
        let config = AnalyzerConfig::new(&root);

        let resolved =
            resolve_specifier("@/shared/lib/utils/classes", &aliases(), &config, &NativeFileSystem)
                .unwrap();
        assert_eq!(resolved, "src/shared/lib/utils/classes.ts");
    }

    #[test]
    fn keeps_explicit_extension() {
        let temp = TempDir::new().unwrap();
        let config = AnalyzerConfig::new(temp.path());

        let resolved =
            resolve_specifier("@/shared/lib/hooks/usePulse.ts", &aliases(), &config, &NativeFileSystem)
                .unwrap();
        assert_eq!(resolved, "src/shared/lib/hooks/usePulse.ts");
    }

    #[test]
    fn falls_back_to_index_file() {
        let temp = TempDir::new().unwrap();
        let root = create_test_project(&temp, &[("src/shared/lib/hooks/index.ts", "")]);
        let config = AnalyzerConfig::new(&root);

        let resolved =
            resolve_specifier("@/shared/lib/hooks", &aliases(), &config, &NativeFileSystem).unwrap();
        assert_eq!(resolved, "src/shared/lib/hooks/index.ts");
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let config = AnalyzerConfig::new(temp.path());

        let err = resolve_specifier("@/shared/lib/utils/classes", &aliases(), &config, &NativeFileSystem)
            .unwrap_err();
        match err {
            AnalysisError::UnresolvedSpecifier { specifier, tried } => {
                assert_eq!(specifier, "@/shared/lib/utils/classes");
                assert_eq!(tried[0], "src/shared/lib/utils/classes.ts");
                assert_eq!(tried[4], "src/shared/lib/utils/classes/index.ts");
                assert_eq!(tried[8], "src/shared/lib/utils/classes");
                assert_eq!(tried.len(), 9);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn existing_non_source_file_is_used_as_is() {
        let temp = TempDir::new().unwrap();
        let root = create_test_project(&temp, &[("src/shared/styles/tokens.css", "")]);
        let config = AnalyzerConfig::new(&root);

        let resolved =
            resolve_specifier("@/shared/styles/tokens.css", &aliases(), &config, &NativeFileSystem)
                .unwrap();
        assert_eq!(resolved, "src/shared/styles/tokens.css");
    }

    #[test]
    fn unaliased_specifier_resolves_from_root() {
        let temp = TempDir::new().unwrap();
        let root = create_test_project(&temp, &[("lib/util.tsx", "")]);
        let config = AnalyzerConfig::new(&root);

        let resolved =
            resolve_specifier("lib/util", &AliasTable::default(), &config, &NativeFileSystem).unwrap();
        assert_eq!(resolved, "lib/util.tsx");
    }
}
