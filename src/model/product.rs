use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row of `productos`. DECIMAL columns are read as their exact text (e.g. `"19.90"`).
#[derive(Serialize, Deserialize, FromRow, ToSchema, Clone, Debug, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub categoria: Option<String>,
    pub precio_compra: Option<String>,
    pub precio_venta: Option<String>,
    /// Porcentaje de IVA
    pub iva: Option<String>,
    pub imagen_url: Option<String>,
}

/// Fields are only checked for presence; the database coerces them to the column types.
#[derive(Deserialize, ToSchema, Clone, Debug, Default)]
#[schema(example = json!({
    "name": "Teclado",
    "categoria": "Periféricos",
    "precio_compra": 10.5,
    "precio_venta": 15.0,
    "iva": 19,
    "imagen_url": "https://example.com/teclado.png"
}))]
pub struct CreateProduct {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub categoria: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub precio_compra: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub precio_venta: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub iva: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub imagen_url: Option<Value>,
}

/// The submitted product echoed back with its generated id.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CreatedProduct {
    pub id: i32,
    #[schema(value_type = String)]
    pub name: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub categoria: Option<Value>,
    #[schema(value_type = f64)]
    pub precio_compra: Value,
    #[schema(value_type = f64)]
    pub precio_venta: Value,
    #[schema(value_type = f64)]
    pub iva: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub imagen_url: Option<Value>,
}
