/* Escape a value for a double-quoted literal in either target.
   Single pass, so an inserted backslash is never escaped again. Line breaks, tabs and
   other control chars are escaped too; `\u{..}` is valid in both Zig and TypeScript. */
pub fn escape_string(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());
  for c in value.chars() {
    match c {
      '\\' => escaped.push_str("\\\\"),
      '"' => escaped.push_str("\\\""),
      '\n' => escaped.push_str("\\n"),
      '\r' => escaped.push_str("\\r"),
      '\t' => escaped.push_str("\\t"),
      c if c.is_control() || c == '\u{2028}' || c == '\u{2029}' => {
        escaped.push_str(&format!("\\u{{{:x}}}", c as u32));
      }
      c => escaped.push(c),
    }
  }
  escaped
}

pub fn quote(value: &str) -> String {
  format!("\"{}\"", escape_string(value))
}
