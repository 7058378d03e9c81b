//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the `breeds` table.

use crate::model::{BreedChanges, BreedFilter, NewBreed};

pub const BREEDS_TABLE: &str = "breeds";

/// Derived column; never stored.
const AVERAGE_WEIGHT_EXPR: &str = "(weight_min + weight_max) / 2";

/// Placeholder style of the target engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    Sqlite,
}

impl Dialect {
    fn placeholder(self, n: usize) -> String {
        match self {
            Dialect::Postgres => format!("${}", n),
            Dialect::Sqlite => format!("?{}", n),
        }
    }
}

/// A value bound to a placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Int(i64),
    Float(f64),
    Text(String),
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
    dialect: Dialect,
}

impl QueryBuf {
    fn new(dialect: Dialect) -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
            dialect,
        }
    }

    /// Push a value and return its placeholder text.
    fn push_param(&mut self, v: BindValue) -> String {
        self.params.push(v);
        self.dialect.placeholder(self.params.len())
    }
}

fn select_column_list() -> String {
    format!("id, name, species, {} AS average_weight", AVERAGE_WEIGHT_EXPR)
}

/// Idempotent DDL for the breeds table.
pub fn create_table(dialect: Dialect) -> String {
    let id_def = match dialect {
        Dialect::Postgres => "id BIGSERIAL PRIMARY KEY",
        Dialect::Sqlite => "id INTEGER PRIMARY KEY AUTOINCREMENT",
    };
    let float = match dialect {
        Dialect::Postgres => "DOUBLE PRECISION",
        Dialect::Sqlite => "REAL",
    };
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {},\n  species TEXT NOT NULL,\n  pet_size TEXT NOT NULL,\n  name TEXT NOT NULL,\n  weight_min {float} NOT NULL,\n  weight_max {float} NOT NULL\n)",
        BREEDS_TABLE,
        id_def,
        float = float
    )
}

/// SELECT one breed by id, computing average_weight.
pub fn select_by_id(dialect: Dialect, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new(dialect);
    let ph = q.push_param(BindValue::Int(id));
    q.sql = format!("SELECT {} FROM {} WHERE id = {}", select_column_list(), BREEDS_TABLE, ph);
    q
}

/// SELECT with optional conjuncts: species equality, then average_weight upper bound.
/// No ORDER BY: rows come back in the engine's natural order.
pub fn select_list(dialect: Dialect, filter: &BreedFilter) -> QueryBuf {
    let mut q = QueryBuf::new(dialect);
    let mut where_parts = vec!["1 = 1".to_string()];
    if let Some(species) = &filter.species {
        let ph = q.push_param(BindValue::Text(species.clone()));
        where_parts.push(format!("species = {}", ph));
    }
    if let Some(max) = filter.max_average_weight {
        let ph = q.push_param(BindValue::Float(max));
        where_parts.push(format!("{} <= {}", AVERAGE_WEIGHT_EXPR, ph));
    }
    q.sql = format!(
        "SELECT {} FROM {} WHERE {}",
        select_column_list(),
        BREEDS_TABLE,
        where_parts.join(" AND ")
    );
    q
}

/// INSERT returning the store-assigned id.
pub fn insert(dialect: Dialect, breed: &NewBreed) -> QueryBuf {
    let mut q = QueryBuf::new(dialect);
    let placeholders = [
        q.push_param(BindValue::Text(breed.species.clone())),
        q.push_param(BindValue::Text(breed.pet_size.clone())),
        q.push_param(BindValue::Text(breed.name.clone())),
        q.push_param(BindValue::Float(breed.weight_min)),
        q.push_param(BindValue::Float(breed.weight_max)),
    ];
    q.sql = format!(
        "INSERT INTO {} (species, pet_size, name, weight_min, weight_max) VALUES ({}) RETURNING id",
        BREEDS_TABLE,
        placeholders.join(", ")
    );
    q
}

/// UPDATE by id. pet_size is left as stored.
pub fn update(dialect: Dialect, id: i64, changes: &BreedChanges) -> QueryBuf {
    let mut q = QueryBuf::new(dialect);
    let sets = [
        format!("name = {}", q.push_param(BindValue::Text(changes.name.clone()))),
        format!("species = {}", q.push_param(BindValue::Text(changes.species.clone()))),
        format!("weight_min = {}", q.push_param(BindValue::Float(changes.weight_min))),
        format!("weight_max = {}", q.push_param(BindValue::Float(changes.weight_max))),
    ];
    let id_ph = q.push_param(BindValue::Int(id));
    q.sql = format!("UPDATE {} SET {} WHERE id = {}", BREEDS_TABLE, sets.join(", "), id_ph);
    q
}

/// DELETE by id.
pub fn delete(dialect: Dialect, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new(dialect);
    let ph = q.push_param(BindValue::Int(id));
    q.sql = format!("DELETE FROM {} WHERE id = {}", BREEDS_TABLE, ph);
    q
}
