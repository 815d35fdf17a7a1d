use std::collections::BTreeMap;

use thiserror::Error;

use super::delivery::DeliveryError;

/// Option shown first in the service select; submits as an empty value.
pub const SERVICE_PLACEHOLDER: &str = "Seleccione un servicio";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Nombre,
    Email,
    Telefono,
    Servicio,
    Mensaje,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Nombre,
        Field::Email,
        Field::Telefono,
        Field::Servicio,
        Field::Mensaje,
    ];

    /// Form control name, also the key in the submitted mapping.
    pub fn name(self) -> &'static str {
        match self {
            Field::Nombre => "nombre",
            Field::Email => "email",
            Field::Telefono => "telefono",
            Field::Servicio => "servicio",
            Field::Mensaje => "mensaje",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Field::Nombre | Field::Email)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("el campo `{0}` es obligatorio")]
    MissingField(&'static str),
    #[error("`{0}` no es un email válido")]
    InvalidEmail(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("ya hay un envío en curso")]
    AlreadySending,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub servicio: String,
    pub mensaje: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Nombre => &self.nombre,
            Field::Email => &self.email,
            Field::Telefono => &self.telefono,
            Field::Servicio => &self.servicio,
            Field::Mensaje => &self.mensaje,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Nombre => &mut self.nombre,
            Field::Email => &mut self.email,
            Field::Telefono => &mut self.telefono,
            Field::Servicio => &mut self.servicio,
            Field::Mensaje => &mut self.mensaje,
        };
        *slot = value;
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in Field::ALL {
            if field.is_required() && self.get(field).trim().is_empty() {
                return Err(ValidationError::MissingField(field.name()));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// Flat name -> value mapping handed to the delivery service.
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        Field::ALL
            .iter()
            .map(|&field| {
                let value = self.get(field).trim();
                let value = if field == Field::Servicio && value == SERVICE_PLACEHOLDER {
                    ""
                } else {
                    value
                };
                (field.name(), value.to_string())
            })
            .collect()
    }
}

/// Same shape check an `<input type="email">` applies.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Editing,
    Sending,
    Failed(String),
}

/// Field values plus where the current submission stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    pub fields: ContactFields,
    pub status: FormStatus,
}

impl ContactFormState {
    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Stores an edit. A reported error is dropped since it may no longer hold.
    pub fn update(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        if matches!(self.status, FormStatus::Failed(_)) {
            self.status = FormStatus::Editing;
        }
    }

    /// Validates and moves to `Sending`. The returned mapping is what gets
    /// delivered.
    pub fn begin_submit(&mut self) -> Result<BTreeMap<&'static str, String>, SubmitError> {
        if self.is_sending() {
            return Err(SubmitError::AlreadySending);
        }
        if let Err(e) = self.fields.validate() {
            self.status = FormStatus::Failed(e.to_string());
            return Err(e.into());
        }
        self.status = FormStatus::Sending;
        Ok(self.fields.to_map())
    }

    /// Applies the delivery outcome. On success the fields are cleared and
    /// `true` is returned so the caller can raise the acknowledgement. On
    /// failure the fields are kept for a retry.
    pub fn complete(&mut self, result: Result<(), DeliveryError>) -> bool {
        match result {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = FormStatus::Editing;
                true
            }
            Err(e) => {
                self.status = FormStatus::Failed(e.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormState {
        let mut form = ContactFormState::default();
        form.update(Field::Nombre, "Juan Pérez".into());
        form.update(Field::Email, "juan@ejemplo.com".into());
        form.update(Field::Telefono, "+56 9 1234 5678".into());
        form.update(Field::Servicio, SERVICE_PLACEHOLDER.into());
        form.update(Field::Mensaje, "Quisiera una reunión".into());
        form
    }

    #[test]
    fn test_mapping_uses_control_names() {
        let map = filled().fields.to_map();
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["email", "mensaje", "nombre", "servicio", "telefono"]);
        assert_eq!(map["nombre"], "Juan Pérez");
        assert_eq!(map["servicio"], "");
    }

    #[test]
    fn test_payload_json() {
        let json = serde_json::to_value(filled().fields.to_map()).unwrap();
        assert_eq!(json["email"], "juan@ejemplo.com");
        assert_eq!(json["servicio"], "");
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        form.update(Field::Nombre, "   ".into());
        assert_eq!(
            form.begin_submit(),
            Err(SubmitError::Invalid(ValidationError::MissingField("nombre")))
        );
        assert!(form.error().is_some());

        let mut form = filled();
        form.update(Field::Email, "juan.ejemplo.com".into());
        assert!(matches!(
            form.begin_submit(),
            Err(SubmitError::Invalid(ValidationError::InvalidEmail(_)))
        ));
    }

    #[test]
    fn test_editing_clears_reported_error() {
        let mut form = filled();
        form.update(Field::Email, "juan.ejemplo.com".into());
        assert!(form.begin_submit().is_err());
        assert!(form.error().is_some());

        form.update(Field::Email, "juan@ejemplo.com".into());
        assert_eq!(form.error(), None);
        assert_eq!(form.status, FormStatus::Editing);
    }

    #[test]
    fn test_edits_while_sending_keep_sending() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.update(Field::Mensaje, "otra cosa".into());
        assert!(form.is_sending());
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let mut form = filled();
        form.update(Field::Telefono, String::new());
        form.update(Field::Mensaje, String::new());
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert!(form.is_sending());
        assert_eq!(form.begin_submit(), Err(SubmitError::AlreadySending));

        assert!(form.complete(Ok(())));
        assert_eq!(form.fields, ContactFields::default());
        assert_eq!(form.status, FormStatus::Editing);
    }

    #[test]
    fn test_failure_keeps_fields_and_does_not_acknowledge() {
        let mut form = filled();
        let before = form.fields.clone();
        form.begin_submit().unwrap();

        assert!(!form.complete(Err(DeliveryError::Rejected(503))));
        assert_eq!(form.fields, before);
        assert!(form.error().unwrap().contains("503"));

        // user can retry straight away
        assert!(form.begin_submit().is_ok());
    }
}
