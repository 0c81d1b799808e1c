//! Table bootstrap: roles, users (references roles), productos.
//! Idempotent (`CREATE TABLE IF NOT EXISTS`); run at startup before serving.

use crate::error::StoreError;
use crate::store::Database;

const ROLES_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS roles (
        id INT AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(100) NOT NULL
    )
"#;

const USERS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INT AUTO_INCREMENT PRIMARY KEY,
        identificacion VARCHAR(50) NOT NULL,
        nombres VARCHAR(100) NOT NULL,
        apellidos VARCHAR(100) NOT NULL,
        email VARCHAR(100) NOT NULL,
        telefono VARCHAR(20),
        direccion VARCHAR(200),
        password VARCHAR(100) NOT NULL,
        sexo ENUM('M', 'F'),
        edad INT,
        estatus ENUM('activo', 'inactivo'),
        role_id INT,
        FOREIGN KEY (role_id) REFERENCES roles(id)
    )
"#;

const PRODUCTOS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS productos (
        id INT AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        categoria VARCHAR(100),
        precio_compra DECIMAL(10,2),
        precio_venta DECIMAL(10,2),
        iva DECIMAL(5,2),
        imagen_url VARCHAR(255)
    )
"#;

/// Statements in dependency order: users has a foreign key to roles.
pub const TABLES: &[(&str, &str)] = &[
    ("roles", ROLES_DDL),
    ("users", USERS_DDL),
    ("productos", PRODUCTOS_DDL),
];

/// Create the three tables if they do not exist. Stops at the first failing statement.
pub async fn ensure_tables(db: &Database) -> Result<(), StoreError> {
    for (table, ddl) in TABLES {
        tracing::debug!(table, "ensure table");
        db.execute(ddl, &[]).await?;
    }
    tracing::info!("tables ready");
    Ok(())
}
