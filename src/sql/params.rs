//! Scalar parameters bound to MySQL statements.

use serde_json::Value;
use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::mysql::{MySql, MySqlTypeInfo};
use sqlx::{Database, Type};

/// A value that can be bound to a MySQL query. Converts from Rust scalars and from serde_json::Value.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlParam {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SqlParam {
    /// For fields that are only checked for presence: numbers and strings pass through and
    /// the server coerces them to the column type.
    pub fn from_json(v: &Value) -> Self {
        match v {
            Value::Null => SqlParam::Null,
            Value::Bool(b) => SqlParam::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => SqlParam::Int(i),
                None => n.as_f64().map(SqlParam::Float).unwrap_or(SqlParam::Null),
            },
            Value::String(s) => SqlParam::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => SqlParam::Text(v.to_string()),
        }
    }
}

impl From<&Value> for SqlParam {
    fn from(v: &Value) -> Self {
        SqlParam::from_json(v)
    }
}

impl From<i32> for SqlParam {
    fn from(v: i32) -> Self {
        SqlParam::Int(v.into())
    }
}

impl From<i64> for SqlParam {
    fn from(v: i64) -> Self {
        SqlParam::Int(v)
    }
}

impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        SqlParam::Text(v.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(v: String) -> Self {
        SqlParam::Text(v)
    }
}

impl<T: Into<SqlParam>> From<Option<T>> for SqlParam {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(SqlParam::Null)
    }
}

impl<'q> Encode<'q, MySql> for SqlParam {
    fn encode_by_ref(
        &self,
        buf: &mut <MySql as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        match self {
            SqlParam::Null => Ok(IsNull::Yes),
            SqlParam::Bool(b) => <bool as Encode<MySql>>::encode_by_ref(b, buf),
            SqlParam::Int(n) => <i64 as Encode<MySql>>::encode_by_ref(n, buf),
            SqlParam::Float(n) => <f64 as Encode<MySql>>::encode_by_ref(n, buf),
            SqlParam::Text(s) => <&str as Encode<MySql>>::encode_by_ref(&s.as_str(), buf),
        }
    }

    fn produces(&self) -> Option<MySqlTypeInfo> {
        Some(match self {
            SqlParam::Null | SqlParam::Text(_) => <str as Type<MySql>>::type_info(),
            SqlParam::Bool(_) => <bool as Type<MySql>>::type_info(),
            SqlParam::Int(_) => <i64 as Type<MySql>>::type_info(),
            SqlParam::Float(_) => <f64 as Type<MySql>>::type_info(),
        })
    }
}

impl Type<MySql> for SqlParam {
    fn type_info() -> MySqlTypeInfo {
        <str as Type<MySql>>::type_info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_numbers_keep_their_kind() {
        assert_eq!(SqlParam::from_json(&json!(12)), SqlParam::Int(12));
        assert_eq!(SqlParam::from_json(&json!(12.5)), SqlParam::Float(12.5));
        assert_eq!(SqlParam::from_json(&json!("19.99")), SqlParam::Text("19.99".into()));
        assert_eq!(SqlParam::from_json(&Value::Null), SqlParam::Null);
    }

    #[test]
    fn options_map_to_null() {
        assert_eq!(SqlParam::from(None::<String>), SqlParam::Null);
        assert_eq!(SqlParam::from(Some(3_i32)), SqlParam::Int(3));
        assert_eq!(SqlParam::from(None::<&Value>), SqlParam::Null);
        assert_eq!(SqlParam::from(Some(&json!("30"))), SqlParam::Text("30".into()));
    }
}
