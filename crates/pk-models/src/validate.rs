//! Build-time validation of a model configuration.
//!
//! Validation never stops at the first problem: every offending field is
//! collected so the user sees the complete list at once.

use std::fmt;

use crate::component::{Component, ComponentParameter};
use crate::matrix::{InteractionMatrix, PairFlags};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    Missing,
    Invalid { reason: String },
}

/// One missing or invalid field, e.g. `mixing_rule` or `components[1].zc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub field: String,
    pub kind: IssueKind,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::Missing => write!(f, "missing {}", self.field),
            IssueKind::Invalid { reason } => write!(f, "invalid {}: {reason}", self.field),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("Invalid model configuration: {}", join_issues(.issues))]
pub struct ConfigurationError {
    pub issues: Vec<ConfigIssue>,
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ConfigurationError {
    /// True if any issue concerns `field` or one of its sub-fields.
    pub fn mentions(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| {
            issue.field == field
                || issue
                    .field
                    .strip_prefix(field)
                    .is_some_and(|rest| rest.starts_with('.') || rest.starts_with('['))
        })
    }

    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().map(|issue| issue.field.as_str()).collect()
    }
}

/// Accumulates issues while a configuration is checked.
#[derive(Debug, Default)]
pub struct IssueCollector {
    issues: Vec<ConfigIssue>,
}

impl IssueCollector {
    pub fn missing(&mut self, field: impl Into<String>) {
        self.issues.push(ConfigIssue {
            field: field.into(),
            kind: IssueKind::Missing,
        });
    }

    pub fn invalid(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.issues.push(ConfigIssue {
            field: field.into(),
            kind: IssueKind::Invalid {
                reason: reason.into(),
            },
        });
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn finish(self) -> Result<(), ConfigurationError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }

    pub fn into_error(self) -> ConfigurationError {
        ConfigurationError {
            issues: self.issues,
        }
    }

    /// `n x n` with finite entries, and symmetric when `symmetric`.
    pub fn check_matrix(&mut self, field: &str, matrix: &InteractionMatrix, n: usize, symmetric: bool) {
        if matrix.dim() != n {
            self.invalid(field, format!("expected {n}x{n}, got {0}x{0}", matrix.dim()));
        } else if !matrix.is_finite() {
            self.invalid(field, "contains non-finite values");
        } else if symmetric && !matrix.is_symmetric() {
            self.invalid(field, "must be symmetric");
        }
    }

    pub fn check_optional_matrix(
        &mut self,
        field: &str,
        matrix: Option<&InteractionMatrix>,
        n: usize,
        symmetric: bool,
    ) {
        if let Some(matrix) = matrix {
            self.check_matrix(field, matrix, n, symmetric);
        }
    }

    pub fn check_flags(&mut self, field: &str, flags: &PairFlags, n: usize) {
        if flags.dim() != n {
            self.invalid(field, format!("expected {n}x{n}, got {0}x{0}", flags.dim()));
        }
    }

    /// Length `n` with finite entries, strictly positive when `positive`.
    pub fn check_vector(&mut self, field: &str, values: &[f64], n: usize, positive: bool) {
        if values.len() != n {
            self.invalid(field, format!("expected {n} values, got {}", values.len()));
        } else if values.iter().any(|v| !v.is_finite()) {
            self.invalid(field, "contains non-finite values");
        } else if positive && values.iter().any(|v| *v <= 0.0) {
            self.invalid(field, "values must be positive");
        }
    }

    /// Critical constants of every component plus the extra data a model needs.
    pub fn check_components(&mut self, components: &[Component], required: &[ComponentParameter]) {
        for (i, c) in components.iter().enumerate() {
            let field = |name: &str| format!("components[{i}].{name}");

            let tc = c.tc_k();
            if !tc.is_finite() || tc <= 0.0 {
                self.invalid(field("tc"), "must be positive");
            }
            let pc = c.pc_bar();
            if !pc.is_finite() || pc <= 0.0 {
                self.invalid(field("pc"), "must be positive");
            }
            if !c.acentric_factor.is_finite() {
                self.invalid(field("acentric_factor"), "must be finite");
            }

            for parameter in required {
                if !c.has_parameter(*parameter) {
                    self.missing(field(parameter.field()));
                }
            }

            if let Some(zc) = c.zc {
                if !(zc > 0.0 && zc < 1.0) {
                    self.invalid(field("zc"), "must be between 0 and 1");
                }
            }
            if let Some(constants) = c.mathias_copeman {
                if constants.iter().any(|v| !v.is_finite()) {
                    self.invalid(field("mathias_copeman"), "must be finite");
                }
            }
        }
    }
}
