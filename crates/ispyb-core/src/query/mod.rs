//! Queries over one root entity.
//!
//! A [`Query`] names a root entity, an optional row filter, an ordering, a
//! window and optional projections. The embedded session evaluates it directly
//! against storage; [`Query::to_sql`] renders the same query for a MySQL
//! server.

mod expr;
mod sql;

pub use expr::{ColumnRef, CompareOp, Expr, FilterExpr, OrderDirection};
pub use sql::{Params, Placeholder, SelectStatement};

use crate::catalog::Catalog;
use crate::error::Error;
use crate::value::Value;

/// A named output column.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub alias: String,
    pub expr: Expr,
}

/// A query rooted at one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    entity: String,
    filter: Option<FilterExpr>,
    order_by: Vec<(Expr, OrderDirection)>,
    limit: Option<usize>,
    offset: Option<usize>,
    projections: Vec<Projection>,
}

impl Query {
    /// Select every row of an entity.
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            filter: None,
            order_by: Vec::new(),
            limit: None,
            offset: None,
            projections: Vec::new(),
        }
    }

    /// Add a filter. Repeated calls are combined with AND.
    pub fn filter(mut self, filter: FilterExpr) -> Self {
        self.filter = Some(match self.filter.take() {
            None => filter,
            Some(FilterExpr::And(mut all)) => {
                all.push(filter);
                FilterExpr::And(all)
            }
            Some(existing) => FilterExpr::and([existing, filter]),
        });
        self
    }

    /// Append a sort key: a root field name or any expression.
    pub fn order_by(mut self, key: impl Into<Expr>, direction: OrderDirection) -> Self {
        self.order_by.push((key.into(), direction));
        self
    }

    /// Return at most `limit` rows.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skip the first `offset` rows.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Add an output column.
    pub fn select(mut self, alias: impl Into<String>, expr: Expr) -> Self {
        self.projections.push(Projection {
            alias: alias.into(),
            expr,
        });
        self
    }

    /// Add a derived accessor of the root entity as an output column named after it.
    pub fn select_accessor(self, catalog: &Catalog, name: &str) -> Result<Self, Error> {
        let accessor = catalog.require_accessor(&self.entity, name)?;
        let expr = accessor.expression();
        Ok(self.select(name, expr))
    }

    /// Filter on a derived accessor of the root entity: `accessor <op> value`.
    pub fn filter_accessor(
        self,
        catalog: &Catalog,
        name: &str,
        op: CompareOp,
        value: impl Into<Value>,
    ) -> Result<Self, Error> {
        let expr = catalog.require_accessor(&self.entity, name)?.expression();
        Ok(self.filter(FilterExpr::compare(expr, op, value)))
    }

    /// Sort by a derived accessor of the root entity.
    pub fn order_by_accessor(
        self,
        catalog: &Catalog,
        name: &str,
        direction: OrderDirection,
    ) -> Result<Self, Error> {
        let expr = catalog.require_accessor(&self.entity, name)?.expression();
        Ok(self.order_by(expr, direction))
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn filter_expr(&self) -> Option<&FilterExpr> {
        self.filter.as_ref()
    }

    pub fn ordering(&self) -> &[(Expr, OrderDirection)] {
        &self.order_by
    }

    pub fn limit_value(&self) -> Option<usize> {
        self.limit
    }

    pub fn offset_value(&self) -> Option<usize> {
        self.offset
    }

    pub fn projections(&self) -> &[Projection] {
        &self.projections
    }

    /// Render as a MySQL SELECT with `?` placeholders.
    pub fn to_sql(&self, catalog: &Catalog) -> Result<SelectStatement, Error> {
        let mut params = Vec::new();
        let sql = sql::Serializer::new(catalog, &self.entity, &mut params)?.select(self)?;
        Ok(SelectStatement { sql, params })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_combine_with_and() {
        let query = Query::new("Protein")
            .filter(FilterExpr::eq("acronym", "lyso"))
            .filter(FilterExpr::is_not_null("proposalId"))
            .filter(FilterExpr::gt("proteinId", 3));

        match query.filter_expr() {
            Some(FilterExpr::And(all)) => assert_eq!(all.len(), 3),
            other => panic!("unexpected filter: {other:?}"),
        }
    }

    #[test]
    fn test_builder_accessors() {
        let query = Query::new("Protein")
            .order_by("acronym", OrderDirection::Asc)
            .limit(5)
            .offset(10)
            .select("name", Expr::column("name"));

        assert_eq!(query.entity(), "Protein");
        assert_eq!(query.ordering(), &[(Expr::column("acronym"), OrderDirection::Asc)]);
        assert_eq!(query.limit_value(), Some(5));
        assert_eq!(query.offset_value(), Some(10));
        assert_eq!(query.projections()[0].alias, "name");
    }
}
