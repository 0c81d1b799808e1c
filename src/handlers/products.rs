//! Products (`/api/productos`): create, list, delete.

use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::model::{CreateProduct, CreatedProduct, Product};
use crate::response::{success_data, success_message, ErrorBody, SuccessMessage};
use crate::service::products::NewProduct;
use crate::service::validation::{parse_id, required_field, required_value};
use crate::service::{DeleteOutcome, ProductService};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub const PRODUCTS_TAG: &str = "Productos";

const MISSING_PRODUCT_FIELDS: &str =
    "Los campos obligatorios son: name, precio_compra, precio_venta e iva.";

impl CreateProduct {
    fn into_new_product(self) -> Result<NewProduct, AppError> {
        let missing = || AppError::Validation(MISSING_PRODUCT_FIELDS.into());
        Ok(NewProduct {
            name: required_field(&self.name).ok_or_else(missing)?.clone(),
            precio_compra: required_value(&self.precio_compra).ok_or_else(missing)?.clone(),
            precio_venta: required_value(&self.precio_venta).ok_or_else(missing)?.clone(),
            iva: required_value(&self.iva).ok_or_else(missing)?.clone(),
            categoria: self.categoria,
            imagen_url: self.imagen_url,
        })
    }
}

/// Crear un nuevo producto
#[utoipa::path(
    post,
    path = "/api/productos",
    tag = PRODUCTS_TAG,
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Producto creado exitosamente", body = CreatedProduct),
        (status = 400, description = "Datos inválidos", body = ErrorBody),
        (status = 500, description = "Error del servidor", body = ErrorBody)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateProduct>,
) -> Result<impl IntoResponse, AppError> {
    let new_product = body.into_new_product()?;
    let product = ProductService::create(&state.db, new_product)
        .await
        .map_err(AppError::storage("Error al crear producto."))?;
    tracing::info!(id = product.id, "product created");
    Ok(success_data(product))
}

/// Obtener todos los productos
#[utoipa::path(
    get,
    path = "/api/productos",
    tag = PRODUCTS_TAG,
    responses(
        (status = 200, description = "Lista de productos obtenida exitosamente", body = [Product]),
        (status = 500, description = "Error del servidor", body = ErrorBody)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::list(&state.db)
        .await
        .map_err(AppError::storage("Error al obtener productos."))?;
    Ok(success_data(products))
}

/// Eliminar un producto
#[utoipa::path(
    delete,
    path = "/api/productos/{id}",
    tag = PRODUCTS_TAG,
    params(("id" = i64, Path, description = "ID del producto a eliminar")),
    responses(
        (status = 200, description = "Producto eliminado exitosamente", body = SuccessMessage),
        (status = 400, description = "ID inválido", body = ErrorBody),
        (status = 404, description = "Producto no encontrado", body = ErrorBody),
        (status = 500, description = "Error del servidor", body = ErrorBody)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = match parse_id(&raw_id)? {
        Some(id) => ProductService::delete(&state.db, id)
            .await
            .map_err(AppError::storage("Error al eliminar el producto."))?,
        None => DeleteOutcome::NotFound,
    };
    match outcome {
        DeleteOutcome::Deleted(product) => {
            tracing::info!(id = product.id, "product deleted");
            Ok(success_message(format!(
                "Producto \"{}\" eliminado exitosamente.",
                product.name
            )))
        }
        DeleteOutcome::NotFound => Err(AppError::NotFound("El producto no existe.".into())),
        DeleteOutcome::InUse(_) | DeleteOutcome::NothingDeleted => {
            Err(AppError::NotFound("No se pudo eliminar el producto.".into()))
        }
    }
}
