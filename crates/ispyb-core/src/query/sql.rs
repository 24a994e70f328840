//! MySQL rendering of queries with positional parameters.

use std::collections::HashMap;

use super::{Expr, FilterExpr, Query};
use crate::catalog::{Catalog, EntityDef};
use crate::error::Error;
use crate::value::Value;

/// Collects bound parameters while a statement is rendered.
pub trait Params {
    fn push(&mut self, param: &Value) -> Placeholder;
}

/// One-based position of a bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

/// A rendered SELECT with its parameters in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    pub sql: String,
    pub params: Vec<Value>,
}

fn ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

struct Join<'a> {
    alias: String,
    entity: &'a EntityDef,
}

pub(crate) struct Serializer<'a, P> {
    catalog: &'a Catalog,
    root: &'a EntityDef,
    params: &'a mut P,
    joins: Vec<String>,
    paths: HashMap<Vec<String>, Join<'a>>,
    alias_counts: HashMap<String, usize>,
}

impl<'a, P: Params> Serializer<'a, P> {
    pub(crate) fn new(catalog: &'a Catalog, entity: &str, params: &'a mut P) -> Result<Self, Error> {
        Ok(Self {
            catalog,
            root: catalog.require_entity(entity)?,
            params,
            joins: Vec::new(),
            paths: HashMap::new(),
            alias_counts: HashMap::new(),
        })
    }

    pub(crate) fn select(mut self, query: &Query) -> Result<String, Error> {
        let columns = if query.projections().is_empty() {
            self.root
                .fields
                .iter()
                .map(|f| format!("{}.{}", ident(&self.root.table), ident(&f.name)))
                .collect::<Vec<_>>()
        } else {
            let mut columns = Vec::with_capacity(query.projections().len());
            for projection in query.projections() {
                let expr = self.expr(&projection.expr)?;
                columns.push(format!("{} AS {}", expr, ident(&projection.alias)));
            }
            columns
        };

        let filter = match query.filter_expr() {
            Some(filter) => Some(self.filter(filter)?),
            None => None,
        };

        let mut order = Vec::with_capacity(query.ordering().len());
        for (key, direction) in query.ordering() {
            order.push(format!("{} {}", self.expr(key)?, direction.as_sql()));
        }

        let mut sql = format!("SELECT {} FROM {}", columns.join(", "), ident(&self.root.table));
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }
        if let Some(filter) = filter {
            sql.push_str(" WHERE ");
            sql.push_str(&filter);
        }
        if !order.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&order.join(", "));
        }
        if let Some(limit) = query.limit_value() {
            sql.push_str(" LIMIT ");
            sql.push_str(&self.param(&Value::Int(limit as i64)));
        }
        if let Some(offset) = query.offset_value() {
            sql.push_str(" OFFSET ");
            sql.push_str(&self.param(&Value::Int(offset as i64)));
        }
        Ok(sql)
    }

    fn param(&mut self, value: &Value) -> String {
        self.params.push(value);
        "?".to_string()
    }

    /// Join every hop of a relationship path once, returning the alias of the last entity.
    fn join_path(&mut self, path: &[String]) -> Result<(String, &'a EntityDef), Error> {
        let mut alias = self.root.table.clone();
        let mut entity = self.root;

        for depth in 0..path.len() {
            let prefix = &path[..=depth];
            if let Some(join) = self.paths.get(prefix) {
                alias = join.alias.clone();
                entity = join.entity;
                continue;
            }

            let relation = self.catalog.require_relation(&entity.name, &path[depth])?;
            if relation.is_collection() {
                return Err(Error::InvalidQuery(format!(
                    "relationship '{}.{}' is a collection",
                    entity.name,
                    relation.name()
                )));
            }
            for step in &relation.path {
                let target = self.catalog.require_entity(&step.to_entity)?;
                let count = self.alias_counts.entry(target.table.clone()).or_insert(0);
                *count += 1;
                let next = format!("{}_{}", target.table, count);
                self.joins.push(format!(
                    "LEFT OUTER JOIN {} AS {} ON {}.{} = {}.{}",
                    ident(&target.table),
                    ident(&next),
                    ident(&alias),
                    ident(&step.from_field),
                    ident(&next),
                    ident(&step.to_field),
                ));
                alias = next;
                entity = target;
            }
            self.paths.insert(
                prefix.to_vec(),
                Join {
                    alias: alias.clone(),
                    entity,
                },
            );
        }

        Ok((alias, entity))
    }

    fn expr(&mut self, expr: &Expr) -> Result<String, Error> {
        match expr {
            Expr::Column(column) => {
                let (alias, entity) = self.join_path(&column.path)?;
                if !entity.has_field(&column.field) {
                    return Err(Error::UnknownField {
                        entity: entity.name.clone(),
                        field: column.field.clone(),
                    });
                }
                Ok(format!("{}.{}", ident(&alias), ident(&column.field)))
            }
            Expr::Literal(Value::Null) => Ok("NULL".to_string()),
            Expr::Literal(value) => Ok(self.param(value)),
            Expr::Concat(parts) => {
                let mut rendered = Vec::with_capacity(parts.len());
                for part in parts {
                    rendered.push(self.expr(part)?);
                }
                Ok(format!("concat({})", rendered.join(", ")))
            }
        }
    }

    fn filter(&mut self, filter: &FilterExpr) -> Result<String, Error> {
        Ok(match filter {
            FilterExpr::Compare { operand, op, value } => {
                let operand = self.expr(operand)?;
                format!("{} {} {}", operand, op.as_sql(), self.param(value))
            }
            FilterExpr::IsNull(operand) => format!("{} IS NULL", self.expr(operand)?),
            FilterExpr::IsNotNull(operand) => format!("{} IS NOT NULL", self.expr(operand)?),
            FilterExpr::In { operand, values } => {
                let operand = self.expr(operand)?;
                if values.is_empty() {
                    "1 != 1".to_string()
                } else {
                    let placeholders: Vec<String> = values.iter().map(|v| self.param(v)).collect();
                    format!("{} IN ({})", operand, placeholders.join(", "))
                }
            }
            FilterExpr::Like { operand, pattern } => {
                let operand = self.expr(operand)?;
                format!("{} LIKE BINARY {}", operand, self.param(&Value::String(pattern.clone())))
            }
            FilterExpr::And(filters) => self.junction(filters, " AND ", "1 = 1")?,
            FilterExpr::Or(filters) => self.junction(filters, " OR ", "1 != 1")?,
            FilterExpr::Not(inner) => format!("NOT ({})", self.filter(inner)?),
        })
    }

    fn junction(&mut self, filters: &[FilterExpr], sep: &str, empty: &str) -> Result<String, Error> {
        match filters {
            [] => Ok(empty.to_string()),
            [only] => self.filter(only),
            _ => {
                let mut parts = Vec::with_capacity(filters.len());
                for filter in filters {
                    parts.push(self.filter(filter)?);
                }
                Ok(format!("({})", parts.join(sep)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        ColumnType, EntityDef, FieldDef, ForeignKey, RelationDef, SchemaBundle,
    };

    fn catalog() -> Catalog {
        let bundle = SchemaBundle::new(1)
            .with_entity(
                EntityDef::table("Proposal", "Proposal")
                    .with_field(FieldDef::new("proposalId", ColumnType::int(10)).primary_key())
                    .with_field(FieldDef::new("proposalCode", ColumnType::varchar(45)))
                    .with_field(FieldDef::new("proposalNumber", ColumnType::varchar(45))),
            )
            .with_entity(
                EntityDef::table("BLSession", "BLSession")
                    .with_field(FieldDef::new("sessionId", ColumnType::int(10)).primary_key())
                    .with_field(
                        FieldDef::new("proposalId", ColumnType::int(10))
                            .references(ForeignKey::to("Proposal", "proposalId")),
                    )
                    .with_field(FieldDef::new("visit_number", ColumnType::int(10))),
            )
            .with_relation(RelationDef::many_to_one("Proposal", "BLSession", "Proposal"))
            .with_relation(RelationDef::one_to_many("BLSession", "Proposal", "BLSession"));
        Catalog::new(bundle).unwrap()
    }

    fn session_expr() -> Expr {
        Expr::concat([
            Expr::related(&["Proposal"], "proposalCode"),
            Expr::related(&["Proposal"], "proposalNumber"),
            Expr::literal("-"),
            Expr::column("visit_number"),
        ])
    }

    #[test]
    fn test_projection_with_join() {
        let query = Query::new("BLSession")
            .select("session", session_expr())
            .filter(FilterExpr::eq("sessionId", 7));
        let statement = query.to_sql(&catalog()).unwrap();

        assert_eq!(
            statement.sql,
            "SELECT concat(`Proposal_1`.`proposalCode`, `Proposal_1`.`proposalNumber`, ?, \
             `BLSession`.`visit_number`) AS `session` FROM `BLSession` \
             LEFT OUTER JOIN `Proposal` AS `Proposal_1` \
             ON `BLSession`.`proposalId` = `Proposal_1`.`proposalId` \
             WHERE `BLSession`.`sessionId` = ?"
        );
        assert_eq!(statement.params, vec![Value::from("-"), Value::Int(7)]);
    }

    #[test]
    fn test_filter_and_order_by_expression() {
        let query = Query::new("BLSession")
            .filter(FilterExpr::eq(session_expr(), "MX415-3"))
            .order_by(session_expr(), crate::query::OrderDirection::Desc)
            .limit(1);
        let statement = query.to_sql(&catalog()).unwrap();

        let label = "concat(`Proposal_1`.`proposalCode`, `Proposal_1`.`proposalNumber`, ?, \
                     `BLSession`.`visit_number`)";
        assert_eq!(
            statement.sql,
            format!(
                "SELECT `BLSession`.`sessionId`, `BLSession`.`proposalId`, `BLSession`.`visit_number` \
                 FROM `BLSession` LEFT OUTER JOIN `Proposal` AS `Proposal_1` \
                 ON `BLSession`.`proposalId` = `Proposal_1`.`proposalId` \
                 WHERE {label} = ? ORDER BY {label} DESC LIMIT ?"
            )
        );
        assert_eq!(
            statement.params,
            vec![
                Value::from("-"),
                Value::from("MX415-3"),
                Value::from("-"),
                Value::Int(1),
            ]
        );
    }

    #[test]
    fn test_plain_select() {
        let query = Query::new("Proposal")
            .filter(FilterExpr::in_values("proposalId", Vec::new()))
            .order_by("proposalCode", crate::query::OrderDirection::Desc)
            .limit(10)
            .offset(20);
        let statement = query.to_sql(&catalog()).unwrap();

        assert_eq!(
            statement.sql,
            "SELECT `Proposal`.`proposalId`, `Proposal`.`proposalCode`, `Proposal`.`proposalNumber` \
             FROM `Proposal` WHERE 1 != 1 ORDER BY `Proposal`.`proposalCode` DESC LIMIT ? OFFSET ?"
        );
        assert_eq!(statement.params, vec![Value::Int(10), Value::Int(20)]);
    }

    #[test]
    fn test_rejects_collections_and_unknown_fields() {
        let catalog = catalog();

        let query = Query::new("Proposal").select("n", Expr::related(&["BLSession"], "visit_number"));
        assert!(matches!(query.to_sql(&catalog), Err(Error::InvalidQuery(_))));

        let query = Query::new("Proposal").filter(FilterExpr::eq("title", "x"));
        assert!(matches!(query.to_sql(&catalog), Err(Error::UnknownField { .. })));

        let query = Query::new("BLSession").select("x", Expr::related(&["Person"], "login"));
        assert!(matches!(query.to_sql(&catalog), Err(Error::UnknownRelation { .. })));
    }

    #[test]
    fn test_nested_filters() {
        let query = Query::new("Proposal").filter(FilterExpr::or([
            FilterExpr::like("proposalCode", "M%"),
            FilterExpr::not(FilterExpr::is_null("proposalNumber")),
        ]));
        let statement = query.to_sql(&catalog()).unwrap();
        assert!(statement.sql.ends_with(
            "WHERE (`Proposal`.`proposalCode` LIKE BINARY ? OR NOT (`Proposal`.`proposalNumber` IS NULL))"
        ));
        assert_eq!(statement.params, vec![Value::from("M%")]);
    }
}
