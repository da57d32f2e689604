//! Rule to forbid catching overly broad exception types.
//!
//! # Rationale
//!
//! Catching `Exception`, `RuntimeException`, `Error` or `Throwable` swallows
//! failures the handler was never written for. Handlers should name the
//! specific types they can actually recover from.
//!
//! # Detected Patterns
//!
//! ```text
//! // BAD
//! try { load(); } catch (Exception e) { log(e); }
//! try { load(); } catch (java.lang.Throwable t) { }
//! ```
//!
//! # Permitted Patterns
//!
//! ```text
//! // GOOD: specific type
//! try { load(); } catch (IOException e) { log(e); }
//!
//! // GOOD with permit_rethrow = true
//! try { load(); } catch (Exception e) { cleanup(); throw e; }
//!
//! // GOOD with permit_fresh_throw = true
//! try { load(); } catch (Exception e) { throw new LoadFailed(e); }
//! ```

use crate::error::CatchError;
use crate::illegal_names::IllegalNames;
use crate::qualified_name::{self, QualifiedName};
use crate::throw_scan::{self, ThrowPattern};
use catch_lint_core::{
    FileContext, Location, Node, NodeKind, Rule, RuleConfig, Severity, Suggestion, Violation,
};
use tracing::{debug, warn};

/// Rule code for illegal-catch.
pub const CODE: &str = "IC001";

/// Rule name for illegal-catch.
pub const NAME: &str = "illegal-catch";

/// Message key carried by every violation of this rule.
pub const MESSAGE_KEY: &str = "illegal.catch";

/// Kinds the throw search never enters.
const SCOPE_BOUNDARY: &[NodeKind] = &[NodeKind::ParameterDeclaration];

/// Immutable options of [`IllegalCatch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IllegalCatchConfig {
    /// Spellings that must not be caught.
    pub illegal_names: IllegalNames,
    /// A body whose first throw constructs a new value suppresses the violation.
    pub permit_fresh_throw: bool,
    /// A body whose first throw re-raises a plain name suppresses the violation.
    pub permit_rethrow: bool,
}

impl IllegalCatchConfig {
    /// Reads the options from a rule table.
    ///
    /// `illegal_names` replaces the default set when present. A value of
    /// the wrong type is logged and the option keeps its default.
    #[must_use]
    pub fn from_rule_config(config: &RuleConfig) -> Self {
        let illegal_names = match config.try_option::<Vec<String>>("illegal_names") {
            Ok(Some(names)) => IllegalNames::new(names),
            Ok(None) => IllegalNames::default(),
            Err(e) => {
                warn!("{}: {}, using the default names", NAME, e);
                IllegalNames::default()
            }
        };

        Self {
            illegal_names,
            permit_fresh_throw: permit_option(config, "permit_fresh_throw"),
            permit_rethrow: permit_option(config, "permit_rethrow"),
        }
    }

    /// Decides whether a found throw pattern excuses the catch clause.
    #[must_use]
    pub fn permits(&self, pattern: ThrowPattern) -> bool {
        match pattern {
            ThrowPattern::FreshThrow => self.permit_fresh_throw,
            ThrowPattern::Rethrow => self.permit_rethrow,
        }
    }
}

fn permit_option(config: &RuleConfig, key: &str) -> bool {
    config.try_option::<bool>(key).unwrap_or_else(|e| {
        warn!("{}: {}, leaving it off", NAME, e);
        None
    })
    .unwrap_or(false)
}

/// Forbids catch clauses whose caught type is in the illegal-name set.
#[derive(Debug, Clone)]
pub struct IllegalCatch {
    config: IllegalCatchConfig,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for IllegalCatch {
    fn default() -> Self {
        Self::new()
    }
}

impl IllegalCatch {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IllegalCatchConfig::default())
    }

    /// Creates a rule from prepared options.
    #[must_use]
    pub fn with_config(config: IllegalCatchConfig) -> Self {
        Self {
            config,
            severity: Severity::Error,
        }
    }

    /// Creates a rule from a `[rules.illegal-catch]` table.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        Self::with_config(IllegalCatchConfig::from_rule_config(config))
    }

    /// Replaces the illegal-name set.
    #[must_use]
    pub fn illegal_names(mut self, names: IllegalNames) -> Self {
        self.config.illegal_names = names;
        self
    }

    /// Sets whether a fresh throw excuses the clause.
    #[must_use]
    pub fn permit_fresh_throw(mut self, permit: bool) -> Self {
        self.config.permit_fresh_throw = permit;
        self
    }

    /// Sets whether a rethrow excuses the clause.
    #[must_use]
    pub fn permit_rethrow(mut self, permit: bool) -> Self {
        self.config.permit_rethrow = permit;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns the options this rule runs with.
    #[must_use]
    pub fn config(&self) -> &IllegalCatchConfig {
        &self.config
    }

    fn is_suppressed(&self, clause: &Node) -> bool {
        let Some(throw) = throw_scan::find_throw(clause, SCOPE_BOUNDARY) else {
            return false;
        };

        match throw_scan::classify(throw) {
            Ok(pattern) => self.config.permits(pattern),
            Err(e) => {
                debug!(
                    "Throw at {}:{} does not suppress: {}",
                    throw.span().line,
                    throw.span().column,
                    e
                );
                false
            }
        }
    }

    fn violation(&self, ctx: &FileContext, clause: &Node, name: &QualifiedName) -> Violation {
        let name = name.to_string();
        Violation::new(
            CODE,
            NAME,
            self.severity,
            Location::from_span(ctx.relative_path.clone(), clause.span()),
            format!("Catching '{name}' is not allowed."),
        )
        .with_key(MESSAGE_KEY, [name])
        .with_suggestion(Suggestion::new(
            "Catch only the specific exception types this block can handle",
        ))
    }
}

impl Rule for IllegalCatch {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids catching overly broad exception types such as Exception or Throwable"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn relevant_kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::CatchClause]
    }

    fn visit_node(&self, ctx: &FileContext, node: &Node, sink: &mut Vec<Violation>) {
        let caught = match caught_types(node) {
            Ok(types) => types,
            Err(e) => {
                debug!(
                    "Skipping catch clause at {}:{}: {}",
                    node.span().line,
                    node.span().column,
                    e
                );
                return;
            }
        };

        let illegal: Vec<QualifiedName> = caught
            .into_iter()
            .filter(|name| self.config.illegal_names.contains(name))
            .collect();
        if illegal.is_empty() {
            return;
        }

        if self.is_suppressed(node) {
            debug!(
                "Catch of {} at {}:{} permitted by its throw",
                illegal[0],
                node.span().line,
                node.span().column
            );
            return;
        }

        for name in &illegal {
            sink.push(self.violation(ctx, node, name));
        }
    }
}

/// Resolves every type a catch clause catches, in source order.
///
/// A plain clause yields one name; a multi-catch yields one per
/// alternative. Alternatives that cannot be spelled are skipped.
fn caught_types(clause: &Node) -> Result<Vec<QualifiedName>, CatchError> {
    let param = clause
        .find_first_child(NodeKind::ParameterDeclaration)
        .ok_or(CatchError::MalformedType {
            reason: "catch clause has no parameter declaration",
        })?;

    let union = param.find_first_child(NodeKind::UnionType).or_else(|| {
        param
            .find_first_child(NodeKind::TypeReference)
            .and_then(|t| t.find_first_child(NodeKind::UnionType))
    });

    if let Some(union) = union {
        let names: Vec<QualifiedName> = union
            .children()
            .iter()
            .filter(|alt| alt.kind() == NodeKind::TypeReference)
            .filter_map(|alt| match qualified_name::resolve(alt) {
                Ok(name) => Some(name),
                Err(e) => {
                    debug!("Skipping multi-catch alternative: {}", e);
                    None
                }
            })
            .collect();
        if names.is_empty() {
            return Err(CatchError::MalformedType {
                reason: "multi-catch has no resolvable alternative",
            });
        }
        return Ok(names);
    }

    let type_ref = param
        .find_first_child(NodeKind::TypeReference)
        .ok_or(CatchError::MalformedType {
            reason: "parameter declaration has no type reference",
        })?;

    Ok(vec![qualified_name::resolve(type_ref)?])
}
