/// Derive the exported library symbol from a package name.
///
/// Each `-` directly followed by an ASCII alphanumeric character is replaced by
/// that character uppercased, in one left-to-right pass. Total over any input.
pub fn derive_identifier(raw_name: &str) -> String {
    let mut out = String::with_capacity(raw_name.len());
    let mut chars = raw_name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-'
            && let Some(next) = chars.next_if(char::is_ascii_alphanumeric)
        {
            out.push(next.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }

    out
}
