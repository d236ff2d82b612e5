use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.sqlx_logging(false);

    // Every pooled connection to an in-memory database would get its own empty database
    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    tracing::info!("Database ready at {}", database_url);
    Ok(db)
}

async fn execute(db: &DatabaseConnection, sql: &str) -> Result<(), DbErr> {
    db.execute(Statement::from_string(db.get_database_backend(), sql.to_owned()))
        .await
        .map(|_| ())
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    execute(db, "PRAGMA foreign_keys = ON").await?;

    // Create products table
    execute(
        db,
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT,
            price REAL NOT NULL,
            image_url TEXT,
            category TEXT,
            stock INTEGER NOT NULL DEFAULT 0,
            design_code TEXT,
            is_on_sale BOOLEAN NOT NULL DEFAULT 0,
            sale_price REAL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .await?;

    // Columns added after the first release. If they exist the statement
    // fails, so we ignore errors (simple migration strategy)
    for sql in [
        "ALTER TABLE products ADD COLUMN design_code TEXT",
        "ALTER TABLE products ADD COLUMN is_on_sale BOOLEAN NOT NULL DEFAULT 0",
        "ALTER TABLE products ADD COLUMN sale_price REAL",
        "ALTER TABLE products ADD COLUMN stock INTEGER NOT NULL DEFAULT 0",
    ] {
        let _ = execute(db, sql).await;
    }

    // Create users table (admin login)
    execute(
        db,
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL DEFAULT '',
            role TEXT NOT NULL DEFAULT 'admin',
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .await?;

    // Older stores kept a plaintext `password` column; the admin is re-hashed at start-up
    for sql in [
        "ALTER TABLE users ADD COLUMN password_hash TEXT NOT NULL DEFAULT ''",
        "ALTER TABLE users ADD COLUMN role TEXT NOT NULL DEFAULT 'admin'",
        "ALTER TABLE users ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
    ] {
        let _ = execute(db, sql).await;
    }

    // Create categories table
    execute(
        db,
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            image_url TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .await?;
    let _ = execute(db, "ALTER TABLE categories ADD COLUMN image_url TEXT").await;

    // Create banners table
    execute(
        db,
        r#"
        CREATE TABLE IF NOT EXISTS banners (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            image_url TEXT NOT NULL,
            title TEXT NOT NULL,
            subtitle TEXT,
            link_url TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .await?;

    // Create product_variants table (color + size of a product)
    execute(
        db,
        r#"
        CREATE TABLE IF NOT EXISTS product_variants (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            product_id INTEGER NOT NULL,
            color_name TEXT NOT NULL,
            color_hex TEXT NOT NULL,
            size TEXT NOT NULL DEFAULT 'N/A',
            extra_price REAL NOT NULL DEFAULT 0,
            FOREIGN KEY (product_id) REFERENCES products(id) ON DELETE CASCADE
        )
        "#,
    )
    .await?;
    for sql in [
        "ALTER TABLE product_variants ADD COLUMN size TEXT NOT NULL DEFAULT 'N/A'",
        "ALTER TABLE product_variants ADD COLUMN extra_price REAL NOT NULL DEFAULT 0",
    ] {
        let _ = execute(db, sql).await;
    }

    // Create product_variant_media table (images / videos of a variant)
    execute(
        db,
        r#"
        CREATE TABLE IF NOT EXISTS product_variant_media (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            variant_id INTEGER NOT NULL,
            url TEXT NOT NULL,
            type TEXT NOT NULL, -- 'image' or 'youtube'
            FOREIGN KEY (variant_id) REFERENCES product_variants(id) ON DELETE CASCADE
        )
        "#,
    )
    .await?;

    execute(
        db,
        "CREATE INDEX IF NOT EXISTS idx_variants_product ON product_variants(product_id)",
    )
    .await?;
    execute(
        db,
        "CREATE INDEX IF NOT EXISTS idx_media_variant ON product_variant_media(variant_id)",
    )
    .await?;

    Ok(())
}
