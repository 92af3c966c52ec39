// SPDX-License-Identifier: MPL-2.0
//! Contact form validation.
//!
//! Only fields present in the page take part. Leaving a field validates it;
//! typing only ever clears an error. Submitting never sends anything: the
//! form is validated, then reset with a success toast or left as is with an
//! error toast.

use crate::app::context::Context;
use crate::domain::page::ContactFormAnchor;
use crate::domain::validation::Field;
use crate::ui::notifications::ToastKind;
use crate::ui::view::{Validity, ViewCommand};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A field lost focus.
    Blurred { field: Field, value: String },
    /// A field's value changed.
    Input { field: Field, value: String },
    /// The form was submitted with these field values.
    Submitted(HashMap<Field, String>),
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    /// Present fields in validation order.
    fields: Vec<Field>,
    validity: HashMap<Field, Validity>,
}

impl ContactForm {
    /// Produces one error slot per present field. Returns `None` when the
    /// page has no contact form.
    pub fn init(form: Option<&ContactFormAnchor>, ctx: &mut Context<'_>) -> Option<Self> {
        let form = form?;
        let fields: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| form.fields.contains(field))
            .collect();

        for &field in &fields {
            ctx.emit(ViewCommand::InsertFieldError { field });
        }

        Some(Self {
            fields,
            validity: HashMap::new(),
        })
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[must_use]
    pub fn validity(&self, field: Field) -> Validity {
        self.validity.get(&field).copied().unwrap_or_default()
    }

    pub fn handle(&mut self, message: Message, ctx: &mut Context<'_>) {
        match message {
            Message::Blurred { field, value } => {
                if self.fields.contains(&field) {
                    self.validate(field, &value, ctx);
                }
            }
            Message::Input { field, value } => {
                if self.fields.contains(&field) && field.is_valid(&value) {
                    self.mark(field, Validity::Valid, String::new(), ctx);
                }
            }
            Message::Submitted(values) => self.submit(&values, ctx),
        }
    }

    fn submit(&mut self, values: &HashMap<Field, String>, ctx: &mut Context<'_>) {
        ctx.emit(ViewCommand::PreventDefault);

        let mut all_valid = true;
        for field in self.fields.clone() {
            let value = values.get(&field).map(String::as_str).unwrap_or_default();
            all_valid &= self.validate(field, value, ctx);
        }

        if all_valid {
            ctx.toast_key(ToastKind::Success, "toast-form-success");
            ctx.emit(ViewCommand::ResetForm);
            for field in self.fields.clone() {
                self.mark(field, Validity::Unmarked, String::new(), ctx);
            }
        } else {
            ctx.toast_key(ToastKind::Error, "toast-form-failure");
        }
    }

    /// Validates one field and updates its marker and error text.
    fn validate(&mut self, field: Field, value: &str, ctx: &mut Context<'_>) -> bool {
        let valid = field.is_valid(value);
        if valid {
            self.mark(field, Validity::Valid, String::new(), ctx);
        } else {
            let error = ctx.i18n.tr(field.error_key());
            self.mark(field, Validity::Invalid, error, ctx);
        }
        valid
    }

    fn mark(&mut self, field: Field, validity: Validity, error: String, ctx: &mut Context<'_>) {
        self.validity.insert(field, validity);
        ctx.emit(ViewCommand::Field {
            field,
            validity,
            error,
        });
    }
}
