use super::DeleteOutcome;
use crate::error::StoreError;
use crate::model::{CreatedProduct, Product};
use crate::sql::SqlParam;
use crate::store::Database;
use serde_json::Value;
use sqlx::FromRow;

#[derive(Clone, Debug)]
pub struct NewProduct {
    pub name: Value,
    pub categoria: Option<Value>,
    pub precio_compra: Value,
    pub precio_venta: Value,
    pub iva: Value,
    pub imagen_url: Option<Value>,
}

#[derive(FromRow, Clone, Debug, PartialEq)]
pub struct ProductName {
    pub id: i32,
    pub name: String,
}

pub struct ProductService;

impl ProductService {
    pub async fn create(db: &Database, product: NewProduct) -> Result<CreatedProduct, StoreError> {
        let params = [
            SqlParam::from_json(&product.name),
            product.categoria.as_ref().into(),
            SqlParam::from_json(&product.precio_compra),
            SqlParam::from_json(&product.precio_venta),
            SqlParam::from_json(&product.iva),
            product.imagen_url.as_ref().into(),
        ];
        let outcome = db
            .execute(
                "INSERT INTO productos (name, categoria, precio_compra, precio_venta, iva, imagen_url) \
                 VALUES (?, ?, ?, ?, ?, ?)",
                &params,
            )
            .await?;
        Ok(CreatedProduct {
            id: outcome.inserted_id()?,
            name: product.name,
            categoria: product.categoria,
            precio_compra: product.precio_compra,
            precio_venta: product.precio_venta,
            iva: product.iva,
            imagen_url: product.imagen_url,
        })
    }

    pub async fn list(db: &Database) -> Result<Vec<Product>, StoreError> {
        db.fetch_all(
            "SELECT id, name, categoria, \
             CAST(precio_compra AS CHAR) AS precio_compra, \
             CAST(precio_venta AS CHAR) AS precio_venta, \
             CAST(iva AS CHAR) AS iva, \
             imagen_url FROM productos",
            &[],
        )
        .await
    }

    pub async fn delete(db: &Database, id: i64) -> Result<DeleteOutcome<ProductName>, StoreError> {
        let found: Option<ProductName> = db
            .fetch_optional("SELECT id, name FROM productos WHERE id = ?", &[id.into()])
            .await?;
        let Some(product) = found else {
            return Ok(DeleteOutcome::NotFound);
        };
        let outcome = db.execute("DELETE FROM productos WHERE id = ?", &[id.into()]).await?;
        if outcome.rows_affected == 0 {
            return Ok(DeleteOutcome::NothingDeleted);
        }
        Ok(DeleteOutcome::Deleted(product))
    }
}
