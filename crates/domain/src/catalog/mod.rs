//! Reference data: products, routes and the locations they serve.
//!
//! A [`Catalog`] is loaded once from its JSON document and is read-only
//! afterwards. Every product is available on every route.

mod value_objects;

pub use value_objects::{LocationName, ProductId, RouteId, TrayType};

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, NotFoundError, ValidationError};
use crate::order::Order;
use crate::relay::LocationKind;

/// A product that can be ordered on any route.
///
/// Construction goes through [`Product::new`] (or deserialization, which
/// uses the same checks) so units-per-tray and stack height are always
/// positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    units_per_tray: u32,
    tray_type: TrayType,
    stack_height: u32,
    origin_plant: u32,
}

impl Product {
    /// Creates a product, rejecting a zero units-per-tray or stack height.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        units_per_tray: u32,
        tray_type: TrayType,
        stack_height: u32,
        origin_plant: u32,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if units_per_tray == 0 {
            return Err(ValidationError::InvalidProduct {
                product_id: id,
                field: "units_per_tray",
            });
        }
        if stack_height == 0 {
            return Err(ValidationError::InvalidProduct {
                product_id: id,
                field: "stack_height",
            });
        }

        Ok(Self {
            id,
            name: name.into(),
            units_per_tray,
            tray_type,
            stack_height,
            origin_plant,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Units that fill exactly one tray.
    pub fn units_per_tray(&self) -> u32 {
        self.units_per_tray
    }

    pub fn tray_type(&self) -> TrayType {
        self.tray_type
    }

    /// Trays of this product that make up one stack.
    pub fn stack_height(&self) -> u32 {
        self.stack_height
    }

    /// Plant number the product is baked at.
    pub fn origin_plant(&self) -> u32 {
        self.origin_plant
    }
}

/// Serialized shape of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    units_per_tray: u32,
    tray_type: TrayType,
    stack_height: u32,
    origin_plant: u32,
}

impl TryFrom<ProductRecord> for Product {
    type Error = ValidationError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(
            record.id,
            record.name,
            record.units_per_tray,
            record.tray_type,
            record.stack_height,
            record.origin_plant,
        )
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            units_per_tray: product.units_per_tray,
            tray_type: product.tray_type,
            stack_height: product.stack_height,
            origin_plant: product.origin_plant,
        }
    }
}

/// A delivery route owned by one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub route_id: RouteId,
    pub location: LocationName,
}

impl Route {
    pub fn new(route_id: impl Into<RouteId>, location: impl Into<LocationName>) -> Self {
        Self {
            route_id: route_id.into(),
            location: location.into(),
        }
    }
}

/// The catalog JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub products: Vec<Product>,
    pub routes: Vec<Route>,

    /// Locations that are sister plants rather than warehouses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sister_plants: Vec<LocationName>,
}

/// Read-only product and route lookup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    routes: Vec<Route>,
    sister_plants: BTreeSet<LocationName>,
    product_index: HashMap<ProductId, usize>,
    route_index: HashMap<RouteId, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate product or route ids.
    pub fn from_document(document: CatalogDocument) -> Result<Self, ValidationError> {
        let mut product_index = HashMap::with_capacity(document.products.len());
        for (position, product) in document.products.iter().enumerate() {
            if product_index.insert(product.id(), position).is_some() {
                return Err(ValidationError::DuplicateId {
                    kind: "product",
                    id: product.id().to_string(),
                });
            }
        }

        let mut route_index = HashMap::with_capacity(document.routes.len());
        for (position, route) in document.routes.iter().enumerate() {
            if route_index.insert(route.route_id, position).is_some() {
                return Err(ValidationError::DuplicateId {
                    kind: "route",
                    id: route.route_id.to_string(),
                });
            }
        }

        tracing::debug!(
            products = document.products.len(),
            routes = document.routes.len(),
            "catalog loaded"
        );

        Ok(Self {
            products: document.products,
            routes: document.routes,
            sister_plants: document.sister_plants.into_iter().collect(),
            product_index,
            route_index,
        })
    }

    /// Parses a catalog from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(document)?)
    }

    /// Returns the catalog as its JSON document, in load order.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            products: self.products.clone(),
            routes: self.routes.clone(),
            sister_plants: self.sister_plants.iter().cloned().collect(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn product(&self, id: ProductId) -> Result<&Product, NotFoundError> {
        self.product_index
            .get(&id)
            .map(|&position| &self.products[position])
            .ok_or(NotFoundError::Product(id))
    }

    pub fn route(&self, id: RouteId) -> Result<&Route, NotFoundError> {
        self.route_index
            .get(&id)
            .map(|&position| &self.routes[position])
            .ok_or(NotFoundError::Route(id))
    }

    /// Routes owned by a location, in catalog order.
    pub fn routes_for_location(&self, location: &LocationName) -> Vec<&Route> {
        self.routes
            .iter()
            .filter(|route| &route.location == location)
            .collect()
    }

    /// Distinct location names served by at least one route, sorted.
    pub fn locations(&self) -> Vec<LocationName> {
        self.routes
            .iter()
            .map(|route| route.location.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Products orderable on a route. Every product is available everywhere.
    pub fn products_for_route(&self, route_id: RouteId) -> Result<&[Product], NotFoundError> {
        self.route(route_id)?;
        Ok(&self.products)
    }

    pub fn location_kind(&self, location: &LocationName) -> LocationKind {
        if self.sister_plants.contains(location) {
            LocationKind::SisterPlant
        } else {
            LocationKind::Warehouse
        }
    }

    /// Summary counts over the catalog and a set of orders.
    pub fn stats(&self, orders: &[Order]) -> CatalogStats {
        let mut routes_per_location = BTreeMap::new();
        for route in &self.routes {
            *routes_per_location
                .entry(route.location.clone())
                .or_insert(0usize) += 1;
        }

        CatalogStats {
            total_products: self.products.len(),
            total_routes: self.routes.len(),
            total_locations: routes_per_location.len(),
            total_orders: orders.len(),
            total_trays: orders.iter().map(|order| u64::from(order.total_trays())).sum(),
            total_stacks: orders.iter().map(|order| u64::from(order.total_stacks())).sum(),
            routes_per_location,
        }
    }
}

/// Counts reported by [`Catalog::stats`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_products: usize,
    pub total_routes: usize,
    pub total_locations: usize,
    pub total_orders: usize,
    pub total_trays: u64,
    pub total_stacks: u64,
    pub routes_per_location: BTreeMap<LocationName, usize>,
}
