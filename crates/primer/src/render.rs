//! Bracketed, space-separated rendering of fixed-size arrays.
//!
//! `[10 20 30 0 0]` for plain values, `["Hello" "World" ""]` for the quoted
//! form. Nested arrays render recursively: `[[1 2 3] [4 5 6]]`.

/// Plain rendering of a value as the array lessons print it. Text arrays go
/// through [`quoted`] instead.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for i64 {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn render(&self) -> String {
        let items: Vec<String> = self.iter().map(Render::render).collect();
        format!("[{}]", items.join(" "))
    }
}

/// Renders each element as an escaped, double-quoted string literal so that
/// empty strings stay visible.
pub fn quoted<S: AsRef<str>>(items: &[S]) -> String {
    let items: Vec<String> = items.iter().map(|s| format!("{:?}", s.as_ref())).collect();
    format!("[{}]", items.join(" "))
}
