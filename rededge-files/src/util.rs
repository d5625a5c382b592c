/// Render one entry per line followed by an empty line, the way listings are printed.
pub fn format_list<S>(items: &[S]) -> String
where
    S: AsRef<str>,
{
    let mut out = String::new();
    for item in items {
        out.push_str(item.as_ref());
        out.push('\n');
    }
    out.push('\n');
    out
}
