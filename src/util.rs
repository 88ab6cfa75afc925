use std::fmt;

/// Writes `prefix <- a <- b <- ... [<- suffix]`, the rendering shared by the linear structures.
pub(crate) fn write_chain<I>(
    f: &mut fmt::Formatter<'_>,
    prefix: &str,
    items: I,
    suffix: Option<&str>,
) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    f.write_str(prefix)?;
    for item in items {
        write!(f, " <- {}", item)?;
    }
    if let Some(suffix) = suffix {
        write!(f, " <- {}", suffix)?;
    }
    Ok(())
}
