use std::fmt;

pub fn write_with_separator(
    values: impl IntoIterator<Item = impl fmt::Display>,
    separator: &str,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let mut values = values.into_iter();
    if let Some(first) = values.next() {
        write!(f, "{}", first)?;
        for value in values {
            write!(f, "{}{}", separator, value)?;
        }
    }
    Ok(())
}
