use crate::{errors::ServiceError, model::Product as ProductModel};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Storefront filter applied over the full, name-ordered product list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllProducts {
    /// Case-insensitive substring matched against name or description.
    #[serde(default)]
    pub search: Option<String>,

    /// Exact category; `all` or absent disables the filter.
    #[serde(default)]
    pub category: Option<String>,
}

impl FindAllProducts {
    pub fn is_empty(&self) -> bool {
        self.search_term().is_none() && self.category_filter().is_none()
    }

    pub fn matches(&self, product: &ProductModel) -> bool {
        let matches_search = match self.search_term() {
            Some(term) => {
                product.name.to_lowercase().contains(&term)
                    || product.description.to_lowercase().contains(&term)
            }
            None => true,
        };

        let matches_category = match self.category_filter() {
            Some(category) => product.category == category,
            None => true,
        };

        matches_search && matches_category
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != "all")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LowStockQuery {
    /// Products with inventory strictly below this value are low stock.
    pub threshold: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(
        required(message = "Missing required fields: name, slug, price"),
        length(min = 1, message = "Missing required fields: name, slug, price")
    )]
    #[schema(example = "Trail Running Shoe")]
    pub name: Option<String>,

    #[validate(
        required(message = "Missing required fields: name, slug, price"),
        length(min = 1, message = "Missing required fields: name, slug, price")
    )]
    #[schema(example = "trail-running-shoe")]
    pub slug: Option<String>,

    #[serde(default)]
    pub description: String,

    #[validate(required(message = "Missing required fields: name, slug, price"))]
    #[schema(value_type = Option<f64>, example = 129.99)]
    pub price: Option<Decimal>,

    #[serde(default)]
    #[schema(example = "Footwear")]
    pub category: String,

    #[serde(default)]
    #[schema(example = 42)]
    pub inventory: i32,

    pub image_urls: Option<Vec<String>>,

    pub image_public_ids: Option<Vec<String>>,
}

/// A create request whose required fields have been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub inventory: i32,
    pub image_urls: Option<Vec<String>>,
    pub image_public_ids: Option<Vec<String>>,
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = ServiceError;

    fn try_from(req: CreateProductRequest) -> Result<Self, Self::Error> {
        let name = req.name.filter(|n| !n.is_empty());
        let slug = req.slug.filter(|s| !s.is_empty());
        let price = req.price.filter(|p| !p.is_zero());

        match (name, slug, price) {
            (Some(name), Some(slug), Some(price)) => Ok(NewProduct {
                name,
                slug,
                description: req.description,
                price,
                category: req.category,
                inventory: req.inventory,
                image_urls: req.image_urls,
                image_public_ids: req.image_public_ids,
            }),
            _ => Err(ServiceError::Validation(vec![
                "Missing required fields: name, slug, price".to_string(),
            ])),
        }
    }
}

/// Partial update body. Unknown keys are rejected so that nothing outside the
/// column allow-list can reach the statement builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProductRequest {
    /// Ignored; the product is addressed by the slug in the path.
    #[serde(default, skip_serializing)]
    pub id: Option<i64>,

    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,

    /// Accepted only when equal to the current slug.
    pub slug: Option<String>,

    pub description: Option<String>,

    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,

    pub category: Option<String>,

    pub inventory: Option<i32>,

    pub image_urls: Option<Vec<String>>,

    pub image_public_ids: Option<Vec<String>>,
}
