//! Local persistence for the inquiry cart
//!
//! The cart is written after every mutation, with no expiry. A missing or
//! unreadable cart file loads as an empty cart.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::DomainError;
use crate::services::cart::{Cart, NewCartItem};

/// File name of the persisted cart
pub const CART_FILE: &str = "dc_cart_v2.json";

pub trait CartStore: Send + Sync {
    fn load(&self) -> Result<Cart, DomainError>;

    fn save(&self, cart: &Cart) -> Result<(), DomainError>;
}

/// Cart kept as a JSON list of line items in a single file
pub struct JsonFileCartStore {
    path: PathBuf,
}

impl JsonFileCartStore {
    /// Store the cart as `dc_cart_v2.json` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(CART_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStore for JsonFileCartStore {
    fn load(&self) -> Result<Cart, DomainError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Cart::new()),
            Err(e) => {
                tracing::warn!("Failed to read cart file {:?}: {}", self.path, e);
                return Ok(Cart::new());
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cart) => Ok(cart),
            Err(e) => {
                tracing::warn!("Discarding unreadable cart file {:?}: {}", self.path, e);
                Ok(Cart::new())
            }
        }
    }

    fn save(&self, cart: &Cart) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(cart).map_err(|e| DomainError::Internal(e.to_string()))?;

        // Replace atomically
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Cart that lives only as long as the process
#[derive(Default)]
pub struct MemoryCartStore {
    cart: Mutex<Cart>,
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> Result<Cart, DomainError> {
        let cart = self
            .cart
            .lock()
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(cart.clone())
    }

    fn save(&self, cart: &Cart) -> Result<(), DomainError> {
        let mut stored = self
            .cart
            .lock()
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        *stored = cart.clone();
        Ok(())
    }
}

/// A cart that writes itself back to its store after every change
pub struct PersistentCart<S: CartStore> {
    cart: Cart,
    store: S,
}

impl<S: CartStore> PersistentCart<S> {
    pub fn open(store: S) -> Result<Self, DomainError> {
        let cart = store.load()?;
        Ok(Self { cart, store })
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add(&mut self, item: NewCartItem) -> Result<(), DomainError> {
        self.cart.add(item);
        self.store.save(&self.cart)
    }

    pub fn remove(&mut self, id: &str) -> Result<(), DomainError> {
        self.cart.remove(id);
        self.store.save(&self.cart)
    }

    pub fn clear(&mut self) -> Result<(), DomainError> {
        self.cart.clear();
        self.store.save(&self.cart)
    }
}
