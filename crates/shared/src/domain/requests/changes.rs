use crate::domain::requests::UpdateProductRequest;
use rust_decimal::Decimal;

/// Columns a partial update may assign. `id`, `slug` and `last_updated`
/// are not updatable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Description,
    Price,
    Category,
    Inventory,
    ImageUrls,
    ImagePublicIds,
}

impl ProductField {
    pub const fn column(self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Description => "description",
            ProductField::Price => "price",
            ProductField::Category => "category",
            ProductField::Inventory => "inventory",
            ProductField::ImageUrls => "image_urls",
            ProductField::ImagePublicIds => "image_public_ids",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Decimal(Decimal),
    Integer(i32),
    TextArray(Vec<String>),
}

/// Ordered set of column assignments for one update statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    assignments: Vec<(ProductField, FieldValue)>,
}

impl ProductChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing an earlier value for it in place.
    pub fn set(&mut self, field: ProductField, value: FieldValue) -> &mut Self {
        match self.assignments.iter_mut().find(|(f, _)| *f == field) {
            Some((_, existing)) => *existing = value,
            None => self.assignments.push((field, value)),
        }
        self
    }

    pub fn get(&self, field: ProductField) -> Option<&FieldValue> {
        self.assignments
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ProductField, FieldValue)> {
        self.assignments.iter()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl From<&UpdateProductRequest> for ProductChanges {
    fn from(req: &UpdateProductRequest) -> Self {
        let mut changes = ProductChanges::new();

        if let Some(name) = &req.name {
            changes.set(ProductField::Name, FieldValue::Text(name.clone()));
        }
        if let Some(description) = &req.description {
            changes.set(ProductField::Description, FieldValue::Text(description.clone()));
        }
        if let Some(price) = req.price {
            changes.set(ProductField::Price, FieldValue::Decimal(price));
        }
        if let Some(category) = &req.category {
            changes.set(ProductField::Category, FieldValue::Text(category.clone()));
        }
        if let Some(inventory) = req.inventory {
            changes.set(ProductField::Inventory, FieldValue::Integer(inventory));
        }
        if let Some(urls) = &req.image_urls {
            changes.set(ProductField::ImageUrls, FieldValue::TextArray(urls.clone()));
        }
        if let Some(ids) = &req.image_public_ids {
            changes.set(ProductField::ImagePublicIds, FieldValue::TextArray(ids.clone()));
        }

        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_present_fields_become_assignments() {
        let req = UpdateProductRequest {
            id: Some(99),
            slug: Some("mug".into()),
            inventory: Some(5),
            ..Default::default()
        };

        let changes = ProductChanges::from(&req);

        assert_eq!(changes.len(), 1);
        assert_eq!(
            changes.get(ProductField::Inventory),
            Some(&FieldValue::Integer(5))
        );
    }

    #[test]
    fn setting_a_field_twice_keeps_its_position() {
        let mut changes = ProductChanges::new();
        changes
            .set(ProductField::Name, FieldValue::Text("a".into()))
            .set(ProductField::Inventory, FieldValue::Integer(1))
            .set(ProductField::Name, FieldValue::Text("b".into()));

        let fields: Vec<_> = changes.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, vec![ProductField::Name, ProductField::Inventory]);
        assert_eq!(
            changes.get(ProductField::Name),
            Some(&FieldValue::Text("b".into()))
        );
    }
}
