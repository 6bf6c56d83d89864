use leptos::prelude::*;

/// Class list of a Bootstrap icon.
pub fn bi_class(name: &str) -> String {
    format!("bi bi-{name}")
}

/// Bootstrap icon, e.g. `bi("people")`.
pub fn bi(name: &str) -> AnyView {
    view! { <i class=bi_class(name) aria-hidden="true"></i> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bi_class() {
        assert_eq!(bi_class("moon-fill"), "bi bi-moon-fill");
    }
}
