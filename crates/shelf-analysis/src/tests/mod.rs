//! Cross-module tests for component analysis and registry output.
