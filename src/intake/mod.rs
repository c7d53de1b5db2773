//! # Order Intake
//!
//! Collects the raw values typed into the order form and turns them into an
//! [`OrderRecord`] on submission.
//!
//! ## Validation
//!
//! The only rule is non-emptiness. A field counts as missing when it is
//! empty or whitespace-only. `name` and `holster_type` are always required;
//! `email` and `color` follow the [`FormConfig`]. A choice field holding text
//! that is not one of the offered labels is reported as missing even when
//! the field is optional.
//!
//! A rejected submission leaves both the store and the form untouched, so the
//! user can correct the values and try again. An accepted submission appends
//! exactly one record and closes the form.

pub mod error;

pub use error::*;

use crate::config::FormConfig;
use crate::lifecycle::WindowState;
use crate::model::{Color, HolsterType, OrderId, OrderRecord};
use crate::store::OrderStore;
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// The input controls on the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    HolsterType,
    Color,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::HolsterType, Field::Color];

    /// Label shown next to the input control.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::HolsterType => "Holster Type",
            Field::Color => "Color",
        }
    }

    /// Key used when fields are supplied as a name/value mapping.
    pub const fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::HolsterType => "holster_type",
            Field::Color => "color",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn is_required(self, config: &FormConfig) -> bool {
        match self {
            Field::Name | Field::HolsterType => true,
            Field::Email => config.require_email,
            Field::Color => config.require_color,
        }
    }
}

/// Raw text of every form field, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub holster_type: String,
    pub color: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::HolsterType => &self.holster_type,
            Field::Color => &self.color,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::HolsterType => &mut self.holster_type,
            Field::Color => &mut self.color,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }
}

/// Builds fields from `(key, value)` pairs such as `("holster_type", "OWB")`.
///
/// Unknown keys are skipped; absent keys stay empty.
impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = FormFields::default();
        for (key, value) in iter {
            match Field::from_key(key.as_ref()) {
                Some(field) => fields.set(field, value),
                None => debug!(key = key.as_ref(), "Ignoring unknown form field"),
            }
        }
        fields
    }
}

/// Validates raw fields and builds the record they describe.
///
/// All missing fields are collected before failing, so the caller can report
/// them together. Optional fields left blank become `None`.
pub fn validate(fields: &FormFields, config: &FormConfig) -> Result<OrderRecord, ValidationError> {
    let name = present(&fields.name);
    let email = present(&fields.email);
    let holster_type = choice::<HolsterType>(&fields.holster_type);
    let color = choice::<Color>(&fields.color);

    // Text that is not an offered label is never accepted, optional or not
    let missing: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|field| {
            let (blank, unrecognised) = match field {
                Field::Name => (name.is_none(), false),
                Field::Email => (email.is_none(), false),
                Field::HolsterType => (holster_type.is_none(), matches!(holster_type, Some(Err(_)))),
                Field::Color => (color.is_none(), matches!(color, Some(Err(_)))),
            };
            unrecognised || (blank && field.is_required(config))
        })
        .collect();

    match (name, holster_type) {
        (Some(name), Some(Ok(holster_type))) if missing.is_empty() => Ok(OrderRecord::new(
            name,
            email.map(str::to_string),
            holster_type,
            color.and_then(Result::ok),
        )),
        _ => Err(ValidationError::MissingField { fields: missing }),
    }
}

/// `None` when blank, otherwise the parsed choice.
fn choice<T: FromStr>(value: &str) -> Option<Result<T, T::Err>> {
    present(value).map(str::parse)
}

fn present(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// An open order form and the values typed into it so far.
#[derive(Debug, Clone)]
pub struct IntakeForm {
    config: FormConfig,
    fields: FormFields,
    state: WindowState,
}

impl IntakeForm {
    /// Opens an empty form.
    pub fn new(config: FormConfig) -> Self {
        Self::with_fields(config, FormFields::default())
    }

    /// Opens a form pre-filled with `fields`.
    pub fn with_fields(config: FormConfig, fields: FormFields) -> Self {
        Self {
            config,
            fields,
            state: WindowState::Open,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Discards the form without submitting it.
    pub fn close(&mut self) {
        self.state = WindowState::Closed;
    }

    /// Validates the current fields and appends the resulting order.
    ///
    /// # Errors
    /// - [`IntakeError::Validation`] if a required field is missing. Nothing
    ///   is appended and the form stays open.
    /// - [`IntakeError::Closed`] if the form was already submitted or closed.
    #[instrument(skip(self, store))]
    pub fn submit(&mut self, store: &mut OrderStore) -> Result<OrderId, IntakeError> {
        if !self.is_open() {
            warn!("Submit on closed form");
            return Err(IntakeError::Closed);
        }
        debug!(fields = ?self.fields, "submit called");

        let record = validate(&self.fields, &self.config).map_err(|e| {
            warn!(error = %e, "Validation failed");
            e
        })?;

        let id = store.append(record);
        self.state = WindowState::Closed;
        info!(order_id = %id, "Order placed");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderStatus;

    fn all_required() -> FormConfig {
        FormConfig::default()
    }

    fn complete() -> FormFields {
        [
            ("name", "Alice"),
            ("email", "a@x.com"),
            ("holster_type", "OWB"),
            ("color", "Black"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_fields_from_pairs_skip_unknown_keys() {
        let fields: FormFields = [("name", "Alice"), ("caliber", "9mm")].into_iter().collect();
        assert_eq!(fields.name, "Alice");
        assert_eq!(fields.email, "");
        assert_eq!(fields.get(Field::HolsterType), "");
    }

    #[test]
    fn test_validate_complete_form() {
        let record = validate(&complete(), &all_required()).unwrap();
        assert_eq!(record.name, "Alice");
        assert_eq!(record.email.as_deref(), Some("a@x.com"));
        assert_eq!(record.holster_type, HolsterType::Owb);
        assert_eq!(record.color, Some(Color::Black));
        assert_eq!(record.status, OrderStatus::Pending);
    }

    #[test]
    fn test_validate_reports_every_missing_field_in_form_order() {
        let fields = FormFields {
            holster_type: "OWB".into(),
            ..Default::default()
        };
        let err = validate(&fields, &all_required()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                fields: vec![Field::Name, Field::Email, Field::Color]
            }
        );
        assert_eq!(err.to_string(), "Missing required field(s): Name, Email, Color");
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut fields = complete();
        fields.set(Field::Name, "   ");
        let err = validate(&fields, &all_required()).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { fields: vec![Field::Name] });
    }

    #[test]
    fn test_unknown_choice_counts_as_unselected() {
        let mut fields = complete();
        fields.set(Field::HolsterType, "Shoulder");
        let err = validate(&fields, &all_required()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField { fields: vec![Field::HolsterType] }
        );
    }

    #[test]
    fn test_optional_fields_may_be_blank() {
        let config = FormConfig {
            require_email: false,
            require_color: false,
        };
        let fields: FormFields = [("name", "Bob"), ("holster_type", "Duty")].into_iter().collect();

        let record = validate(&fields, &config).unwrap();
        assert_eq!(record.email, None);
        assert_eq!(record.color, None);
        assert_eq!(record.holster_type, HolsterType::Duty);
    }

    #[test]
    fn test_unknown_choice_on_optional_field_is_rejected() {
        let config = FormConfig {
            require_email: false,
            require_color: false,
        };
        let fields: FormFields = [("name", "Bob"), ("holster_type", "IWB"), ("color", "Purple")]
            .into_iter()
            .collect();

        let err = validate(&fields, &config).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { fields: vec![Field::Color] });
    }

    #[test]
    fn test_holster_type_is_always_required() {
        let config = FormConfig {
            require_email: false,
            require_color: false,
        };
        let fields: FormFields = [("name", "Bob")].into_iter().collect();
        let err = validate(&fields, &config).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField { fields: vec![Field::HolsterType] }
        );
    }

    #[test]
    fn test_failed_submit_keeps_form_open_and_store_untouched() {
        let mut store = OrderStore::new();
        let mut form = IntakeForm::new(all_required());
        form.fields_mut().set(Field::Name, "Alice");

        let result = form.submit(&mut store);

        assert!(matches!(result, Err(IntakeError::Validation(_))));
        assert!(store.is_empty());
        assert!(form.is_open());
        assert_eq!(form.fields().name, "Alice");
    }

    #[test]
    fn test_successful_submit_closes_form() {
        let mut store = OrderStore::new();
        let mut form = IntakeForm::with_fields(all_required(), complete());

        let id = form.submit(&mut store).unwrap();

        assert_eq!(id, OrderId(0));
        assert_eq!(store.len(), 1);
        assert_eq!(form.state(), WindowState::Closed);

        // A closed form cannot append a second time
        assert_eq!(form.submit(&mut store), Err(IntakeError::Closed));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_closed_form_rejects_submit() {
        let mut store = OrderStore::new();
        let mut form = IntakeForm::with_fields(all_required(), complete());
        form.close();

        assert_eq!(form.submit(&mut store), Err(IntakeError::Closed));
        assert!(store.is_empty());
    }
}
