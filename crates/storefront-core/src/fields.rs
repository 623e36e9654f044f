//! Declarative checkout field table
//!
//! [`FIELDS`] is the single source of truth for which inputs the checkout
//! form shows, in which order, and which rule each one is validated against.
//! The validator and the form widget both iterate it.

/// Identifier of a billing field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    FirstName,
    LastName,
    CompanyName,
    Address,
    Country,
    Zipcode,
    Town,
    Phone,
    Email,
    Description,
}

/// Constraint a field must satisfy before submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Must be non-empty
    Required,
    /// Never fails
    Optional,
    /// Required, and must be a syntactically valid address
    Email,
    /// Required, and must be a whole number
    Numeric,
}

/// How the field is edited and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Numeric,
    Phone,
    Multiline,
}

/// One row of the field table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    /// Wire identifier (camelCase), also the source of the label
    pub identifier: &'static str,
    pub rule: FieldRule,
    pub input: InputKind,
}

impl FieldSpec {
    const fn new(id: FieldId, identifier: &'static str, rule: FieldRule, input: InputKind) -> Self {
        Self {
            id,
            identifier,
            rule,
            input,
        }
    }

    /// Human-readable label derived from the identifier
    pub fn label(&self) -> String {
        label_from_identifier(self.identifier)
    }

    pub fn is_required(&self) -> bool {
        !matches!(self.rule, FieldRule::Optional)
    }
}

/// Billing fields in render order
pub const FIELDS: [FieldSpec; 10] = [
    FieldSpec::new(FieldId::FirstName, "firstName", FieldRule::Required, InputKind::Text),
    FieldSpec::new(FieldId::LastName, "lastName", FieldRule::Required, InputKind::Text),
    FieldSpec::new(FieldId::CompanyName, "companyName", FieldRule::Optional, InputKind::Text),
    FieldSpec::new(FieldId::Address, "address", FieldRule::Required, InputKind::Text),
    FieldSpec::new(FieldId::Country, "country", FieldRule::Required, InputKind::Text),
    FieldSpec::new(FieldId::Zipcode, "zipcode", FieldRule::Numeric, InputKind::Numeric),
    FieldSpec::new(FieldId::Town, "town", FieldRule::Required, InputKind::Text),
    FieldSpec::new(FieldId::Phone, "phone", FieldRule::Required, InputKind::Phone),
    FieldSpec::new(FieldId::Email, "email", FieldRule::Email, InputKind::Email),
    FieldSpec::new(FieldId::Description, "description", FieldRule::Optional, InputKind::Multiline),
];

impl FieldId {
    /// Look up this field's row in [`FIELDS`]
    pub fn spec(&self) -> &'static FieldSpec {
        // FIELDS is declared in enum order
        &FIELDS[*self as usize]
    }

    pub fn identifier(&self) -> &'static str {
        self.spec().identifier
    }

    pub fn label(&self) -> String {
        self.spec().label()
    }
}

/// Derive a display label from a camelCase identifier.
///
/// A space goes before every internal capital and the first letter is
/// upper-cased: `"firstName"` → `"First Name"`, `"zipcode"` → `"Zipcode"`.
pub fn label_from_identifier(identifier: &str) -> String {
    let mut label = String::with_capacity(identifier.len() + 4);
    for (i, c) in identifier.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else {
            if c.is_ascii_uppercase() {
                label.push(' ');
            }
            label.push(c);
        }
    }
    label
}
