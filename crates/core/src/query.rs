//! Search filter built from the form.
//!
//! Only `name`, `category` and `available` take part in a search. A field
//! is included when it is present: non-empty text, or availability set to
//! `true`. Values are appended verbatim.

use crate::form::FormState;

/// Filter for `GET {base}?{query}`, borrowed from the current form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchFilter<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub available: bool,
}

impl<'a> SearchFilter<'a> {
    pub fn from_form(form: &'a FormState) -> Self {
        Self {
            name: &form.name,
            category: &form.category,
            available: form.available.as_bool(),
        }
    }

    /// Join the present fields as `key=value` pairs with `&`, in the order
    /// `name`, `category`, `available`. Returns an empty string when no
    /// field is present.
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::with_capacity(3);

        if !self.name.is_empty() {
            pairs.push(format!("name={}", self.name));
        }
        if !self.category.is_empty() {
            pairs.push(format!("category={}", self.category));
        }
        if self.available {
            pairs.push("available=true".to_string());
        }

        pairs.join("&")
    }
}
