//! Checkout validation schema
//!
//! Runs every rule from [`crate::fields::FIELDS`] against the raw input
//! values and either produces a typed [`CheckoutFormData`] or a per-field map
//! of human-readable messages.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::checkout::{CheckoutFormData, PaymentMethod};
use crate::fields::{FieldId, FieldRule, FIELDS};

/// HTML living-standard email grammar (the same one browsers use for
/// `<input type="email">`).
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("Invalid EMAIL_REGEX")
});

pub const INVALID_EMAIL: &str = "Invalid email";

/// Raw, unvalidated text for every billing field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: [String; FIELDS.len()],
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldId) -> &str {
        &self.values[field as usize]
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values[field as usize] = value.into();
    }

    /// Builder-style setter, handy for fixtures
    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// True when no field holds any text
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(|v| v.is_empty())
    }
}

/// Per-field validation failures, ordered like the field table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<FieldId, String>,
    payment_method: Option<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.payment_method.is_none()
    }

    /// Number of failing controls (fields plus payment selector)
    pub fn len(&self) -> usize {
        self.fields.len() + usize::from(self.payment_method.is_some())
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: FieldId, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FieldId) {
        self.fields.remove(&field);
    }

    /// Replace (or clear) the error for a single field
    pub fn update(&mut self, field: FieldId, message: Option<String>) {
        match message {
            Some(message) => self.insert(field, message),
            None => self.remove(field),
        }
    }

    pub fn payment_method(&self) -> Option<&str> {
        self.payment_method.as_deref()
    }

    pub fn set_payment_method(&mut self, message: Option<String>) {
        self.payment_method = message;
    }

    /// Earliest failing field in table order
    pub fn first_invalid(&self) -> Option<FieldId> {
        self.fields.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.fields.iter().map(|(id, msg)| (*id, msg.as_str()))
    }
}

/// Validate a single field value in isolation.
///
/// Returns the message to show beside the input, or `None` if the value is
/// acceptable.
pub fn validate_field(field: FieldId, raw: &str) -> Option<String> {
    let spec = field.spec();
    let value = raw.trim();

    match spec.rule {
        FieldRule::Optional => None,
        _ if value.is_empty() => Some(format!("{} is required", spec.label())),
        FieldRule::Required => None,
        FieldRule::Email => {
            if EMAIL_REGEX.is_match(value) {
                None
            } else {
                Some(INVALID_EMAIL.to_string())
            }
        }
        FieldRule::Numeric => match parse_numeric(value) {
            Some(_) => None,
            None => Some(format!("{} must be a number", spec.label())),
        },
    }
}

/// Check the payment selection against the configured requirement
pub fn validate_payment_method(selection: Option<PaymentMethod>, required: bool) -> Option<String> {
    if required && selection.is_none() {
        Some("Payment Method is required".to_string())
    } else {
        None
    }
}

/// Validate all fields and build the typed record.
pub fn validate(values: &FieldValues) -> Result<CheckoutFormData, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for spec in FIELDS.iter() {
        if let Some(message) = validate_field(spec.id, values.get(spec.id)) {
            errors.insert(spec.id, message);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let text = |field: FieldId| values.get(field).trim().to_string();
    let optional = |field: FieldId| {
        let value = values.get(field).trim();
        (!value.is_empty()).then(|| value.to_string())
    };

    // validate_field already accepted the postal code
    let zipcode = parse_numeric(values.get(FieldId::Zipcode).trim()).unwrap_or_default();

    Ok(CheckoutFormData {
        first_name: text(FieldId::FirstName),
        last_name: text(FieldId::LastName),
        company_name: optional(FieldId::CompanyName),
        address: text(FieldId::Address),
        country: text(FieldId::Country),
        zipcode,
        town: text(FieldId::Town),
        phone: text(FieldId::Phone),
        email: text(FieldId::Email),
        description: optional(FieldId::Description),
    })
}

fn parse_numeric(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
