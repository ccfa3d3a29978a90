use crate::{
    Value,
    embed::{Color, Embed, Envelope, Field},
};

const DESCRIPTION_KEY: &str = "DESCRIPTION";
const COLOR_KEY: &str = "COLOR";

/// Turns a flat key/value argument list into a webhook envelope.
///
/// Arguments are read in `(key, value)` pairs:
/// * A `description` key (any case) sets the embed description.
/// * A `color` key (any case) overrides `default_color` with its base-10
///   integer value. Values that do not parse are ignored and the previous
///   color stays in effect.
/// * Every other pair becomes a [`Field`], in order. Empty values are shown
///   as [`PLACEHOLDER`](crate::embed::PLACEHOLDER).
///
/// A trailing key without a value is always emitted as a field, even if it
/// spells a reserved key.
#[must_use]
pub fn format(args: &[Value], title: &str, default_color: Color) -> Envelope {
    let mut description = String::new();
    let mut color = default_color;
    let mut fields = Vec::with_capacity(args.len() / 2);

    let mut rest = args;
    while let [key, value, tail @ ..] = rest {
        rest = tail;
        let key = key.to_string();
        let value = value.to_string();

        match key.to_ascii_uppercase().as_str() {
            DESCRIPTION_KEY => description = value,
            COLOR_KEY => {
                if let Ok(parsed) = value.parse() {
                    color = parsed;
                }
            }
            _ => fields.push(Field::new(key, value)),
        }
    }
    if let [orphan] = rest {
        fields.push(Field::without_value(orphan.to_string()));
    }

    let embed = Embed {
        description,
        color,
        fields,
    };
    Envelope::new(title, embed)
}
