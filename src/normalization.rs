/// Brings a raw identifier into the only form the rest of the crate looks at:
/// surrounding whitespace removed and every character uppercased, so a trailing
/// `x` check character becomes `X`.
///
/// An absent input stays absent. Nothing else is ever done to the raw value.
pub fn normalize(input: Option<&str>) -> Option<String> {
    input.map(|raw| raw.trim().to_uppercase())
}
