//! Constraint enforcement.
//!
//! Column typing and nullability, primary key uniqueness, unique fields and
//! composite unique constraints, and foreign key existence, checked against
//! the rows a transaction can see.

mod validator;

pub use validator::ConstraintValidator;
