use serde::{ser::Error as _, Serialize, Serializer};
use serde_json::Value;

/// A derived output field.
///
/// `resolve` is a pure function of the domain model and whatever relations it carries.
/// It has no store handle, so a model must arrive with every relation a resolver reads
/// already loaded.
pub struct Resolver<S> {
    pub field: &'static str,
    pub resolve: fn(&S) -> Value,
}

/// Output shape of a domain model: pass-through fields plus named resolvers.
pub trait OutputSchema: Sized + 'static {
    /// Fields copied from the stored entity.
    type Direct: Serialize;

    /// Resolver registry, evaluated once per rendered model.
    const RESOLVERS: &'static [Resolver<Self>];

    fn direct(&self) -> Self::Direct;
}

/// Serializes a domain model through its `OutputSchema`.
///
/// Resolver output is merged into the object built from the direct fields; a resolver
/// wins over a direct field of the same name.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered<S>(pub S);

impl<S: OutputSchema> Serialize for Rendered<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let direct = serde_json::to_value(self.0.direct()).map_err(Ser::Error::custom)?;

        let Value::Object(mut fields) = direct else {
            return Err(Ser::Error::custom("direct fields must serialize to an object"));
        };

        for resolver in S::RESOLVERS {
            fields.insert(resolver.field.to_string(), (resolver.resolve)(&self.0));
        }

        fields.serialize(serializer)
    }
}
