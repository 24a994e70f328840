//! Column expressions and row filters.

use std::cmp::Ordering;

use crate::error::Error;
use crate::session::Instance;
use crate::value::Value;

/// A column reached from the root entity through single-valued relationships.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    /// Relationship names walked from the root entity; empty for root columns.
    pub path: Vec<String>,
    /// Field on the entity at the end of the path.
    pub field: String,
}

impl ColumnRef {
    /// A column of the root entity.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            path: Vec::new(),
            field: field.into(),
        }
    }

    /// A column reached through relationships.
    pub fn via(path: &[&str], field: impl Into<String>) -> Self {
        Self {
            path: path.iter().map(|p| p.to_string()).collect(),
            field: field.into(),
        }
    }
}

/// A scalar expression over one row and its related rows.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Column reference.
    Column(ColumnRef),
    /// Constant.
    Literal(Value),
    /// String concatenation with SQL `CONCAT` semantics: NULL if any operand is NULL.
    Concat(Vec<Expr>),
}

impl Expr {
    /// Column of the root entity.
    pub fn column(field: impl Into<String>) -> Self {
        Expr::Column(ColumnRef::new(field))
    }

    /// Column reached through relationships, e.g. `related(&["Proposal"], "proposalCode")`.
    pub fn related(path: &[&str], field: impl Into<String>) -> Self {
        Expr::Column(ColumnRef::via(path, field))
    }

    /// Constant value.
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    /// Concatenate operands.
    pub fn concat(parts: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Concat(parts.into_iter().collect())
    }

    /// Every column referenced by the expression, in order.
    pub fn columns(&self) -> Vec<&ColumnRef> {
        let mut out = Vec::new();
        self.collect_columns(&mut out);
        out
    }

    fn collect_columns<'a>(&'a self, out: &mut Vec<&'a ColumnRef>) {
        match self {
            Expr::Column(column) => out.push(column),
            Expr::Literal(_) => {}
            Expr::Concat(parts) => parts.iter().for_each(|p| p.collect_columns(out)),
        }
    }

    /// Distinct non-empty relationship paths, in first-use order.
    pub fn relation_paths(&self) -> Vec<Vec<String>> {
        let mut paths: Vec<Vec<String>> = Vec::new();
        for column in self.columns() {
            if !column.path.is_empty() && !paths.contains(&column.path) {
                paths.push(column.path.clone());
            }
        }
        paths
    }

    /// Evaluate with a caller-supplied column resolver.
    pub fn eval_with<F>(&self, resolve: &mut F) -> Result<Value, Error>
    where
        F: FnMut(&ColumnRef) -> Result<Value, Error>,
    {
        match self {
            Expr::Column(column) => resolve(column),
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Concat(parts) => {
                let mut out = String::new();
                for part in parts {
                    match part.eval_with(resolve)?.to_concat_string() {
                        Some(text) => out.push_str(&text),
                        None => return Ok(Value::Null),
                    }
                }
                Ok(Value::String(out))
            }
        }
    }

    /// Evaluate against an instance and its loaded relationships.
    ///
    /// A relationship that is unset or not loaded makes the columns behind it
    /// NULL, like an outer join without a match.
    pub fn evaluate(&self, instance: &Instance) -> Value {
        let mut resolve = |column: &ColumnRef| -> Result<Value, Error> {
            let mut current = instance.clone();
            for relation in &column.path {
                match current.loaded_one(relation) {
                    Some(Some(next)) => current = next,
                    _ => return Ok(Value::Null),
                }
            }
            Ok(current.get(&column.field).unwrap_or(Value::Null))
        };
        self.eval_with(&mut resolve).unwrap_or(Value::Null)
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `<>`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl CompareOp {
    /// SQL spelling.
    pub fn as_sql(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }

    fn holds(self, ord: Ordering) -> bool {
        match self {
            CompareOp::Eq => ord == Ordering::Equal,
            CompareOp::Ne => ord != Ordering::Equal,
            CompareOp::Lt => ord == Ordering::Less,
            CompareOp::Le => ord != Ordering::Greater,
            CompareOp::Gt => ord == Ordering::Greater,
            CompareOp::Ge => ord != Ordering::Less,
        }
    }
}

/// A predicate over one row. Operands are expressions, so a comparison can
/// read related columns or a derived accessor's expression.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpr {
    /// `operand <op> value`
    Compare {
        /// Left-hand side.
        operand: Expr,
        /// Operator.
        op: CompareOp,
        /// Right-hand side.
        value: Value,
    },
    /// `operand IS NULL`
    IsNull(Expr),
    /// `operand IS NOT NULL`
    IsNotNull(Expr),
    /// `operand IN (values)`
    In {
        /// Tested expression.
        operand: Expr,
        /// Candidate values.
        values: Vec<Value>,
    },
    /// `operand LIKE pattern` with `%` and `_` wildcards.
    Like {
        /// Tested expression.
        operand: Expr,
        /// Pattern.
        pattern: String,
    },
    /// All must hold.
    And(Vec<FilterExpr>),
    /// Any must hold.
    Or(Vec<FilterExpr>),
    /// Negation.
    Not(Box<FilterExpr>),
}

impl From<&str> for Expr {
    fn from(field: &str) -> Self {
        Expr::column(field)
    }
}

impl From<String> for Expr {
    fn from(field: String) -> Self {
        Expr::column(field)
    }
}

impl From<ColumnRef> for Expr {
    fn from(column: ColumnRef) -> Self {
        Expr::Column(column)
    }
}

impl FilterExpr {
    /// `operand <op> value`. Field names convert to root columns.
    pub fn compare(operand: impl Into<Expr>, op: CompareOp, value: impl Into<Value>) -> Self {
        FilterExpr::Compare {
            operand: operand.into(),
            op,
            value: value.into(),
        }
    }

    /// `operand = value`
    pub fn eq(operand: impl Into<Expr>, value: impl Into<Value>) -> Self {
        Self::compare(operand, CompareOp::Eq, value)
    }

    /// `operand <> value`
    pub fn ne(operand: impl Into<Expr>, value: impl Into<Value>) -> Self {
        Self::compare(operand, CompareOp::Ne, value)
    }

    /// `operand < value`
    pub fn lt(operand: impl Into<Expr>, value: impl Into<Value>) -> Self {
        Self::compare(operand, CompareOp::Lt, value)
    }

    /// `operand <= value`
    pub fn le(operand: impl Into<Expr>, value: impl Into<Value>) -> Self {
        Self::compare(operand, CompareOp::Le, value)
    }

    /// `operand > value`
    pub fn gt(operand: impl Into<Expr>, value: impl Into<Value>) -> Self {
        Self::compare(operand, CompareOp::Gt, value)
    }

    /// `operand >= value`
    pub fn ge(operand: impl Into<Expr>, value: impl Into<Value>) -> Self {
        Self::compare(operand, CompareOp::Ge, value)
    }

    /// `operand IS NULL`
    pub fn is_null(operand: impl Into<Expr>) -> Self {
        FilterExpr::IsNull(operand.into())
    }

    /// `operand IS NOT NULL`
    pub fn is_not_null(operand: impl Into<Expr>) -> Self {
        FilterExpr::IsNotNull(operand.into())
    }

    /// `operand IN (values)`
    pub fn in_values(operand: impl Into<Expr>, values: impl IntoIterator<Item = Value>) -> Self {
        FilterExpr::In {
            operand: operand.into(),
            values: values.into_iter().collect(),
        }
    }

    /// `operand LIKE pattern`
    pub fn like(operand: impl Into<Expr>, pattern: impl Into<String>) -> Self {
        FilterExpr::Like {
            operand: operand.into(),
            pattern: pattern.into(),
        }
    }

    /// Conjunction.
    pub fn and(filters: impl IntoIterator<Item = FilterExpr>) -> Self {
        FilterExpr::And(filters.into_iter().collect())
    }

    /// Disjunction.
    pub fn or(filters: impl IntoIterator<Item = FilterExpr>) -> Self {
        FilterExpr::Or(filters.into_iter().collect())
    }

    /// Negation.
    #[allow(clippy::should_implement_trait)]
    pub fn not(filter: FilterExpr) -> Self {
        FilterExpr::Not(Box::new(filter))
    }

    /// The expressions the filter tests, in order.
    pub fn operands(&self) -> Vec<&Expr> {
        match self {
            FilterExpr::Compare { operand, .. }
            | FilterExpr::IsNull(operand)
            | FilterExpr::IsNotNull(operand)
            | FilterExpr::In { operand, .. }
            | FilterExpr::Like { operand, .. } => vec![operand],
            FilterExpr::And(filters) | FilterExpr::Or(filters) => {
                filters.iter().flat_map(|f| f.operands()).collect()
            }
            FilterExpr::Not(inner) => inner.operands(),
        }
    }

    /// Whether a row image satisfies the filter. Unknown (NULL) results reject
    /// the row; columns behind relationships read as NULL.
    pub fn matches(&self, row: &[(String, Value)]) -> bool {
        let mut resolve = |column: &ColumnRef| -> Result<Value, Error> {
            if !column.path.is_empty() {
                return Ok(Value::Null);
            }
            Ok(row
                .iter()
                .find(|(name, _)| *name == column.field)
                .map(|(_, value)| value.clone())
                .unwrap_or(Value::Null))
        };
        matches!(self.eval_with(&mut resolve), Ok(Some(true)))
    }

    /// Three-valued evaluation with a caller-supplied column resolver:
    /// `None` stands for SQL UNKNOWN.
    pub fn eval_with<F>(&self, resolve: &mut F) -> Result<Option<bool>, Error>
    where
        F: FnMut(&ColumnRef) -> Result<Value, Error>,
    {
        Ok(match self {
            FilterExpr::Compare { operand, op, value } => operand
                .eval_with(resolve)?
                .sql_cmp(value)
                .map(|ord| op.holds(ord)),
            FilterExpr::IsNull(operand) => Some(operand.eval_with(resolve)?.is_null()),
            FilterExpr::IsNotNull(operand) => Some(!operand.eval_with(resolve)?.is_null()),
            FilterExpr::In { operand, values } => {
                let actual = operand.eval_with(resolve)?;
                if actual.is_null() {
                    return Ok(None);
                }
                let mut unknown = false;
                for candidate in values {
                    match actual.sql_eq(candidate) {
                        Some(true) => return Ok(Some(true)),
                        Some(false) => {}
                        None => unknown = true,
                    }
                }
                if unknown {
                    None
                } else {
                    Some(false)
                }
            }
            FilterExpr::Like { operand, pattern } => operand
                .eval_with(resolve)?
                .to_concat_string()
                .map(|actual| like_match(&actual, pattern)),
            FilterExpr::And(filters) => {
                let mut result = Some(true);
                for filter in filters {
                    match filter.eval_with(resolve)? {
                        Some(false) => return Ok(Some(false)),
                        None => result = None,
                        Some(true) => {}
                    }
                }
                result
            }
            FilterExpr::Or(filters) => {
                let mut result = Some(false);
                for filter in filters {
                    match filter.eval_with(resolve)? {
                        Some(true) => return Ok(Some(true)),
                        None => result = None,
                        Some(false) => {}
                    }
                }
                result
            }
            FilterExpr::Not(inner) => inner.eval_with(resolve)?.map(|b| !b),
        })
    }
}

/// Match `text` against a LIKE pattern (`%` any run, `_` any single character).
fn like_match(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    let (mut t, mut p) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == '_' || pattern[p] == text[t]) {
            t += 1;
            p += 1;
        } else if p < pattern.len() && pattern[p] == '%' {
            backtrack = Some((p, t));
            p += 1;
        } else if let Some((star, matched)) = backtrack {
            p = star + 1;
            t = matched + 1;
            backtrack = Some((star, matched + 1));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|c| *c == '%')
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// SQL spelling.
    pub fn as_sql(self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Vec<(String, Value)> {
        vec![
            ("proposalCode".to_string(), Value::from("MX")),
            ("proposalNumber".to_string(), Value::from("415")),
            ("title".to_string(), Value::Null),
            ("proposalId".to_string(), Value::Int(12)),
        ]
    }

    #[test]
    fn test_concat_null_semantics() {
        let expr = Expr::concat([Expr::column("proposalCode"), Expr::column("proposalNumber")]);
        let mut resolve = |c: &ColumnRef| -> Result<Value, Error> {
            Ok(row()
                .into_iter()
                .find(|(n, _)| *n == c.field)
                .map(|(_, v)| v)
                .unwrap_or(Value::Null))
        };
        assert_eq!(expr.eval_with(&mut resolve).unwrap(), Value::from("MX415"));

        let with_null = Expr::concat([Expr::column("proposalCode"), Expr::column("title")]);
        assert_eq!(with_null.eval_with(&mut resolve).unwrap(), Value::Null);

        let with_int = Expr::concat([Expr::literal("#"), Expr::column("proposalId")]);
        assert_eq!(with_int.eval_with(&mut resolve).unwrap(), Value::from("#12"));
    }

    #[test]
    fn test_relation_paths() {
        let expr = Expr::concat([
            Expr::related(&["Proposal"], "proposalCode"),
            Expr::related(&["Proposal"], "proposalNumber"),
            Expr::literal("-"),
            Expr::column("visit_number"),
        ]);
        assert_eq!(expr.relation_paths(), vec![vec!["Proposal".to_string()]]);
        assert_eq!(expr.columns().len(), 3);
    }

    #[test]
    fn test_filter_comparisons() {
        let row = row();
        assert!(FilterExpr::eq("proposalCode", "MX").matches(&row));
        assert!(FilterExpr::gt("proposalId", 10).matches(&row));
        assert!(!FilterExpr::lt("proposalId", 10).matches(&row));
        assert!(FilterExpr::is_null("title").matches(&row));
        assert!(FilterExpr::in_values("proposalId", [Value::Int(1), Value::Int(12)]).matches(&row));
    }

    #[test]
    fn test_filter_null_is_unknown() {
        let row = row();
        assert!(!FilterExpr::eq("title", "x").matches(&row));
        assert!(!FilterExpr::ne("title", "x").matches(&row));
        assert!(!FilterExpr::not(FilterExpr::eq("title", "x")).matches(&row));
        assert!(FilterExpr::or([FilterExpr::eq("title", "x"), FilterExpr::eq("proposalCode", "MX")])
            .matches(&row));
        assert!(!FilterExpr::and([FilterExpr::eq("title", "x"), FilterExpr::eq("proposalCode", "MX")])
            .matches(&row));
    }

    #[test]
    fn test_like() {
        assert!(like_match("MX415", "MX%"));
        assert!(like_match("MX415", "%41_"));
        assert!(like_match("MX415", "%"));
        assert!(!like_match("MX415", "CM%"));
        assert!(!like_match("MX415", "MX41"));
        assert!(FilterExpr::like("proposalNumber", "4%").matches(&row()));
    }

    #[test]
    fn test_filter_operands() {
        let label = Expr::concat([Expr::column("proposalCode"), Expr::column("proposalNumber")]);
        let filter = FilterExpr::and([
            FilterExpr::eq("proposalCode", "MX"),
            FilterExpr::not(FilterExpr::is_null("title")),
            FilterExpr::eq(label.clone(), "MX415"),
        ]);
        assert_eq!(
            filter.operands(),
            vec![&Expr::column("proposalCode"), &Expr::column("title"), &label]
        );
    }

    #[test]
    fn test_filter_on_expression() {
        let row = row();
        let label = Expr::concat([Expr::column("proposalCode"), Expr::column("proposalNumber")]);
        assert!(FilterExpr::eq(label.clone(), "MX415").matches(&row));
        assert!(FilterExpr::like(label, "MX4%").matches(&row));

        let related = Expr::concat([Expr::related(&["Proposal"], "proposalCode"), Expr::literal("-")]);
        assert!(FilterExpr::is_null(related).matches(&row));
    }
}
