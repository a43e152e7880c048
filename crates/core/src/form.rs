//! The product form: a single-record working copy of a [`Product`].
//!
//! Every field holds the text shown in the form, except availability,
//! which is a three-way [`Availability`]. The form is converted into a
//! [`ProductBody`] when writing and overwritten from a [`Product`] when a
//! response arrives.

use std::fmt;
use std::str::FromStr;

use crate::product::{Product, ProductBody};

/// Availability as shown in the form.
///
/// `Unset` is what a cleared form holds. Only [`Availability::True`] maps
/// to `true` in a request body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Availability {
    #[default]
    Unset,
    True,
    False,
}

impl Availability {
    /// Parse the form value. Anything other than `"true"`/`"false"` is `Unset`.
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "true" => Availability::True,
            "false" => Availability::False,
            _ => Availability::Unset,
        }
    }

    /// The text shown in the form: `"true"`, `"false"` or empty.
    pub fn as_form_value(self) -> &'static str {
        match self {
            Availability::Unset => "",
            Availability::True => "true",
            Availability::False => "false",
        }
    }

    pub fn as_bool(self) -> bool {
        self == Availability::True
    }
}

impl From<bool> for Availability {
    fn from(available: bool) -> Self {
        if available {
            Availability::True
        } else {
            Availability::False
        }
    }
}

/// Error raised by field editing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

/// Names of the editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Id,
    Name,
    Category,
    Available,
    Like,
    Color,
    Size,
    CreateDate,
    LastModifyDate,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::Id,
        FormField::Name,
        FormField::Category,
        FormField::Available,
        FormField::Like,
        FormField::Color,
        FormField::Size,
        FormField::CreateDate,
        FormField::LastModifyDate,
    ];

    /// Wire name of the field, as used in request bodies and filters.
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Id => "id",
            FormField::Name => "name",
            FormField::Category => "category",
            FormField::Available => "available",
            FormField::Like => "like",
            FormField::Color => "color",
            FormField::Size => "size",
            FormField::CreateDate => "create_date",
            FormField::LastModifyDate => "last_modify_date",
        }
    }
}

impl FromStr for FormField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Working copy of the product being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub id: String,
    pub name: String,
    pub category: String,
    pub available: Availability,
    pub like: String,
    pub color: String,
    pub size: String,
    pub create_date: String,
    pub last_modify_date: String,
}

impl FormState {
    /// Build the create/update body from the form. `id` is never included.
    pub fn to_record(&self) -> ProductBody {
        ProductBody {
            name: self.name.clone(),
            category: self.category.clone(),
            available: self.available.as_bool(),
            like: self.like.clone(),
            color: self.color.clone(),
            size: self.size.clone(),
            create_date: self.create_date.clone(),
            last_modify_date: self.last_modify_date.clone(),
        }
    }

    /// Overwrite every field, `id` included, from a service response.
    pub fn fill_from(&mut self, product: &Product) {
        *self = FormState::from(product);
    }

    /// Empty every field except `id`.
    pub fn clear(&mut self) {
        let id = std::mem::take(&mut self.id);
        *self = FormState {
            id,
            ..FormState::default()
        };
    }

    /// Empty every field, `id` included.
    pub fn reset(&mut self) {
        *self = FormState::default();
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::Name => &self.name,
            FormField::Category => &self.category,
            FormField::Available => self.available.as_form_value(),
            FormField::Like => &self.like,
            FormField::Color => &self.color,
            FormField::Size => &self.size,
            FormField::CreateDate => &self.create_date,
            FormField::LastModifyDate => &self.last_modify_date,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: &str) {
        let slot = match field {
            FormField::Available => {
                self.available = Availability::from_form_value(value);
                return;
            }
            FormField::Id => &mut self.id,
            FormField::Name => &mut self.name,
            FormField::Category => &mut self.category,
            FormField::Like => &mut self.like,
            FormField::Color => &mut self.color,
            FormField::Size => &mut self.size,
            FormField::CreateDate => &mut self.create_date,
            FormField::LastModifyDate => &mut self.last_modify_date,
        };
        *slot = value.to_string();
    }
}

impl From<&Product> for FormState {
    fn from(product: &Product) -> Self {
        FormState {
            id: product.id.map(|id| id.to_string()).unwrap_or_default(),
            name: product.name.clone(),
            category: product.category.clone(),
            available: Availability::from(product.available),
            like: product.like.clone(),
            color: product.color.clone(),
            size: product.size.clone(),
            create_date: product.create_date.clone(),
            last_modify_date: product.last_modify_date.clone(),
        }
    }
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in FormField::ALL {
            writeln!(f, "{:>16}: {}", field.as_str(), self.field(field))?;
        }
        Ok(())
    }
}
