use darling::{
    Error as DarlingError, FromDeriveInput, FromField,
    ast::{Data, Fields, Style},
    util::Ignored,
};
use syn::{Generics, Ident, Type};

///
/// TrimInput
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(trim))]
pub struct TrimInput {
    pub ident: Ident,
    pub generics: Generics,
    pub data: Data<Ignored, TrimField>,

    #[darling(default)]
    pub text: bool,

    #[darling(default)]
    pub opaque: bool,
}

///
/// TrimField
///

#[derive(Debug, FromField)]
#[darling(attributes(trim))]
pub struct TrimField {
    pub ident: Option<Ident>,
    pub ty: Type,

    #[darling(default)]
    pub skip: bool,

    /// Report the field as a plain value; its type need not implement `Trim`.
    #[darling(default)]
    pub opaque: bool,
}

///
/// Shape
/// What the derived impl treats the type as.
///

pub enum Shape<'a> {
    Record(&'a Fields<TrimField>),
    Text(&'a Type),
    Opaque,
}

impl TrimInput {
    pub fn shape(&self) -> Result<Shape<'_>, DarlingError> {
        let Data::Struct(fields) = &self.data else {
            return Err(
                DarlingError::custom("Trim can only be derived for structs").with_span(&self.ident)
            );
        };

        if self.text && self.opaque {
            return Err(
                DarlingError::custom("`text` and `opaque` cannot be combined")
                    .with_span(&self.ident),
            );
        }

        if self.text || self.opaque {
            let label = if self.text { "text" } else { "opaque" };

            if let Some(field) = fields.iter().find(|f| f.skip) {
                return Err(DarlingError::custom(format!(
                    "`skip` has no effect inside `#[trim({label})]` types"
                ))
                .with_span(&field.ty));
            }

            if let Some(field) = fields.iter().find(|f| f.opaque) {
                return Err(DarlingError::custom(format!(
                    "field `opaque` has no effect inside `#[trim({label})]` types"
                ))
                .with_span(&field.ty));
            }
        }

        if self.opaque {
            return Ok(Shape::Opaque);
        }

        if self.text {
            return match (fields.style, fields.fields.as_slice()) {
                (Style::Tuple, [inner]) => Ok(Shape::Text(&inner.ty)),
                _ => Err(DarlingError::custom(
                    "`text` requires a tuple struct with a single field",
                )
                .with_span(&self.ident)),
            };
        }

        Ok(Shape::Record(fields))
    }
}
